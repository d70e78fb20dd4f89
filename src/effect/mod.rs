//! Effect selection, descriptors and the processing pipeline.
//!
//! This layer wraps the `dsp` kernels with the plumbing a caller interacts
//! with: choosing an effect, overriding its default parameters, running the
//! normalize -> filter pass, and keeping a record of exactly which settings
//! produced a given buffer.

/// The effect/parameter record attached to every processed buffer.
pub mod descriptor;
/// Typed settings, dispatch and the `ProcessedSound` value.
pub mod pipeline;

use crate::error::FilterError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which filter produced a buffer. `None` marks audio that has not been
/// filtered yet (e.g. freshly ingested material); it is not a selectable
/// effect and cannot be parsed from user input.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    None,
    Chorus,
    Delay,
    Distortion,
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::None => "none",
            EffectKind::Chorus => "chorus",
            EffectKind::Delay => "delay",
            EffectKind::Distortion => "distortion",
        }
    }

    /// Map the 1-based menu index (1 chorus, 2 delay, 3 distortion) used by
    /// interactive front ends. Anything else is an invalid selection.
    pub fn from_index(index: u32) -> Result<Self, FilterError> {
        match index {
            1 => Ok(EffectKind::Chorus),
            2 => Ok(EffectKind::Delay),
            3 => Ok(EffectKind::Distortion),
            other => Err(FilterError::InvalidSelection(other.to_string())),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chorus" => Ok(EffectKind::Chorus),
            "delay" => Ok(EffectKind::Delay),
            "distortion" => Ok(EffectKind::Distortion),
            other => Err(FilterError::InvalidSelection(other.to_string())),
        }
    }
}
