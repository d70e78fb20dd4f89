pub mod dsp;
pub mod effect; // Effect selection, descriptors and the normalize -> filter pipeline
pub mod error;

pub use effect::pipeline::{apply_effect, EffectSettings, ProcessedSound};
pub use effect::EffectKind;
pub use error::FilterError;
