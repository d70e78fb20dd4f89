//! Echo with a single feedback tap.
//!
//! The output mixes the dry signal with a delayed copy of the input and a
//! feedback term read from the output itself:
//!
//!   Y[n] = X[n] + alpha * X[n - D] + beta * Y[n - 2D]
//!
//! The feedback makes this a recursive (IIR) filter, so Y must be computed
//! in strictly increasing index order. It is written as one forward pass
//! over a pre-sized output array rather than recursion: final length is
//! known up front and the pass stays O(N) with no stack growth. Until the
//! feedback path has 2D samples of history the input passes through dry.

use crate::dsp::{check_sample_rate, check_unit_range};
use crate::error::FilterError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_ALPHA: f32 = 0.4;
pub const DEFAULT_BETA: f32 = 0.15;
pub const DEFAULT_DELAY_MS: f32 = 430.0;

/// Delay configuration: `alpha` is the delayed-signal gain, `beta` the
/// feedback gain, `delay_ms` the base delay (canonical key `t`). The
/// feedback tap sits at twice the base delay.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayParams {
    pub alpha: f32,
    pub beta: f32,
    pub delay_ms: f32,
}

impl Default for DelayParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl DelayParams {
    pub fn validate(&self) -> Result<(), FilterError> {
        check_unit_range("alpha", self.alpha)?;
        check_unit_range("beta", self.beta)?;
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(FilterError::InvalidParameter {
                name: "t".into(),
                value: self.delay_ms,
                expected: "a finite delay time >= 0 ms",
            });
        }
        Ok(())
    }

    /// Override a single field by its canonical key name.
    pub fn set(&mut self, key: &str, value: f32) -> Result<(), FilterError> {
        match key {
            "alpha" => self.alpha = value,
            "beta" => self.beta = value,
            "t" => self.delay_ms = value,
            _ => {
                return Err(FilterError::InvalidParameter {
                    name: key.to_owned(),
                    value,
                    expected: "one of alpha, beta, t",
                })
            }
        }
        Ok(())
    }

    /// Ordered (key, value) pairs, for descriptors and labeling.
    pub fn entries(&self) -> Vec<(&'static str, f32)> {
        vec![
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("t", self.delay_ms),
        ]
    }
}

/// Apply the delay to a normalized input buffer.
///
/// Parameters are validated before any sample is processed. Output length
/// equals input length; the input is never mutated.
pub fn delay_buffer(
    input: &[f32],
    sample_rate: u32,
    params: &DelayParams,
) -> Result<Vec<f32>, FilterError> {
    params.validate()?;
    check_sample_rate(sample_rate)?;

    // The cast saturates for absurd delay times; saturate the doubling too.
    // Any d >= input.len() is full dry passthrough either way.
    let d = (f64::from(params.delay_ms) / 1000.0 * f64::from(sample_rate)) as usize;
    let d2 = d.saturating_mul(2);

    let mut out = vec![0.0f32; input.len()];
    for n in 0..input.len() {
        if n < d2 {
            // Dry passthrough until the feedback path has enough history.
            out[n] = input[n];
        } else {
            out[n] = input[n] + params.alpha * input[n - d] + params.beta * out[n - d2];
        }
    }
    Ok(out)
}
