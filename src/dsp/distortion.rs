//! Hard-clip distortion.
//!
//! Clamps every sample into [-dist_coef, +dist_coef]:
//!
//!   Y[n] = clamp(X[n], -dist_coef, +dist_coef)
//!
//! On normalized input a threshold well below 1.0 flattens the wave tops,
//! which adds the odd harmonics heard as fuzz. Values closer to 0 clip more
//! of the waveform and distort harder.
//!
//! The transfer is purely elementwise with no cross-sample state, so unlike
//! the delay it has no required evaluation order and could be split across
//! index ranges freely.

use crate::dsp::check_sample_rate;
use crate::error::FilterError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIST_COEF: f32 = 0.2;

/// Distortion configuration: `dist_coef` is the symmetric clip threshold,
/// valid range (0, 1].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionParams {
    pub dist_coef: f32,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            dist_coef: DEFAULT_DIST_COEF,
        }
    }
}

impl DistortionParams {
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.dist_coef.is_finite() || self.dist_coef <= 0.0 || self.dist_coef > 1.0 {
            return Err(FilterError::InvalidParameter {
                name: "dist_coef".into(),
                value: self.dist_coef,
                expected: "a clip threshold in (0, 1]",
            });
        }
        Ok(())
    }

    /// Override a single field by its canonical key name.
    pub fn set(&mut self, key: &str, value: f32) -> Result<(), FilterError> {
        match key {
            "dist_coef" => self.dist_coef = value,
            _ => {
                return Err(FilterError::InvalidParameter {
                    name: key.to_owned(),
                    value,
                    expected: "dist_coef",
                })
            }
        }
        Ok(())
    }

    /// Ordered (key, value) pairs, for descriptors and labeling.
    pub fn entries(&self) -> Vec<(&'static str, f32)> {
        vec![("dist_coef", self.dist_coef)]
    }
}

/// Clamp a single sample to the symmetric threshold.
#[inline]
pub fn hard_clip(sample: f32, threshold: f32) -> f32 {
    sample.clamp(-threshold, threshold)
}

/// Apply the hard clip to a normalized input buffer.
///
/// Parameters are validated before any sample is processed. Output length
/// equals input length; the input is never mutated.
pub fn distortion_buffer(
    input: &[f32],
    sample_rate: u32,
    params: &DistortionParams,
) -> Result<Vec<f32>, FilterError> {
    params.validate()?;
    check_sample_rate(sample_rate)?;

    Ok(input
        .iter()
        .map(|&s| hard_clip(s, params.dist_coef))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_bounded_by_threshold() {
        let input: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.13).sin()).collect();
        let params = DistortionParams::default();
        let out = distortion_buffer(&input, 44_100, &params).unwrap();
        for sample in &out {
            assert!(sample.abs() <= params.dist_coef);
        }
    }

    #[test]
    fn test_below_threshold_passes_through() {
        let input = vec![0.1, -0.15, 0.05, 0.2, -0.2];
        let out = distortion_buffer(&input, 44_100, &DistortionParams::default()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_clips_both_polarities() {
        let input = vec![1.0, -1.0, 0.5, -0.5];
        let out = distortion_buffer(&input, 44_100, &DistortionParams::default()).unwrap();
        assert_eq!(out, vec![0.2, -0.2, 0.2, -0.2]);
    }

    #[test]
    fn test_length_preserved() {
        let input = vec![0.3; 777];
        let out = distortion_buffer(&input, 44_100, &DistortionParams::default()).unwrap();
        assert_eq!(out.len(), input.len());
    }

    #[test]
    fn test_rejects_zero_threshold() {
        let params = DistortionParams { dist_coef: 0.0 };
        let err = distortion_buffer(&[0.1; 4], 44_100, &params).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter { name, .. } if name == "dist_coef"));
    }

    #[test]
    fn test_rejects_threshold_above_one() {
        let params = DistortionParams { dist_coef: 1.5 };
        assert!(distortion_buffer(&[0.1; 4], 44_100, &params).is_err());
    }
}
