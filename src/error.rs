//! Error taxonomy for the filter pipeline.
//!
//! All variants are recoverable by the caller: they are raised before any
//! partial output is produced, and carry enough context (parameter name and
//! offending value, or the reason the buffer is unusable) to retry with
//! corrected input.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum FilterError {
    /// The buffer is empty or all-zero, so peak normalization is undefined.
    #[error("degenerate input: buffer is empty or silent (peak amplitude is zero)")]
    DegenerateInput,

    /// A parameter is outside its documented range (or non-finite), or an
    /// override names a key the effect does not have. Checked at algorithm
    /// entry, before any sample is processed.
    #[error("invalid parameter `{name}`: {value} (expected {expected})")]
    InvalidParameter {
        name: String,
        value: f32,
        expected: &'static str,
    },

    /// The effect identifier is not one of chorus, delay or distortion.
    #[error("invalid effect selection: {0}")]
    InvalidSelection(String),
}
