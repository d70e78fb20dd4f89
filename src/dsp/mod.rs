//! Low-level signal-processing kernels used by the effect pipeline.
//!
//! Each kernel is a pure function from an input buffer (plus a sample rate
//! and a validated parameter set) to a freshly allocated output buffer of
//! the same length. Kernels never mutate their input and hold no state
//! across invocations, so identical inputs always produce identical output.

/// Modulated short delay mixed with the dry signal.
pub mod chorus;
/// Discrete echo with a single feedback tap.
pub mod delay;
/// Symmetric hard-clip nonlinearity.
pub mod distortion;
/// Peak-amplitude normalization.
pub mod normalize;

use crate::error::FilterError;

pub(crate) fn check_unit_range(name: &'static str, value: f32) -> Result<(), FilterError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(FilterError::InvalidParameter {
            name: name.into(),
            value,
            expected: "a value in [0, 1]",
        });
    }
    Ok(())
}

pub(crate) fn check_sample_rate(sample_rate: u32) -> Result<(), FilterError> {
    if sample_rate == 0 {
        return Err(FilterError::InvalidParameter {
            name: "sample_rate".into(),
            value: 0.0,
            expected: "a positive sample rate",
        });
    }
    Ok(())
}
