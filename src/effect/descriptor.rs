use crate::effect::EffectKind;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One parameter as it was actually applied, under its canonical key name.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParamValue {
    pub name: String,
    pub value: f32,
}

/// Record of which effect produced a buffer and with which exact parameter
/// values. Created when a filter run completes and never mutated afterward,
/// so a render can always be reproduced or labeled from it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EffectDescriptor {
    kind: EffectKind,
    params: Vec<ParamValue>,
}

impl EffectDescriptor {
    pub fn new(kind: EffectKind, entries: Vec<(&'static str, f32)>) -> Self {
        Self {
            kind,
            params: entries
                .into_iter()
                .map(|(name, value)| ParamValue {
                    name: name.to_owned(),
                    value,
                })
                .collect(),
        }
    }

    /// Descriptor for audio no filter has touched yet.
    pub fn none() -> Self {
        Self {
            kind: EffectKind::None,
            params: Vec::new(),
        }
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn params(&self) -> &[ParamValue] {
        &self.params
    }
}

/// Renders a label suitable for naming output files, e.g.
/// `chorus(alpha=0.25, beta=0.25, fi=0.1, f=0.25, t=50)`.
impl fmt::Display for EffectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            return f.write_str(self.kind.name());
        }
        write!(f, "{}(", self.kind.name())?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", param.name, param.value)?;
        }
        f.write_str(")")
    }
}
