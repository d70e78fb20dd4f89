//! Peak normalization.
//!
//! Scales a buffer so its loudest sample sits exactly at +/-1.0. The filter
//! kernels assume normalized input so their fixed default gains behave the
//! same regardless of how hot the source material is, and the pipeline runs
//! one more pass over the finished output before it is handed to whatever
//! persists it.

use crate::error::FilterError;

/// Largest absolute sample value in the buffer. Zero for an empty buffer.
#[inline]
pub fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
}

/// Scale `buffer` so that `max(|sample|) == 1.0`, returning a new buffer.
///
/// Empty and all-zero buffers have no defined peak; dividing through would
/// produce NaN, so they are rejected with [`FilterError::DegenerateInput`]
/// instead.
pub fn normalize(buffer: &[f32]) -> Result<Vec<f32>, FilterError> {
    let peak = peak(buffer);
    if peak == 0.0 {
        return Err(FilterError::DegenerateInput);
    }
    Ok(buffer.iter().map(|s| s / peak).collect())
}
