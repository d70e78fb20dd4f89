use crate::dsp::check_sample_rate;
use crate::dsp::chorus::{chorus_buffer, ChorusParams};
use crate::dsp::delay::{delay_buffer, DelayParams};
use crate::dsp::distortion::{distortion_buffer, DistortionParams};
use crate::dsp::normalize::{normalize, peak};
use crate::effect::descriptor::EffectDescriptor;
use crate::effect::EffectKind;
use crate::error::FilterError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Processing Pipeline
===================

One filter run is:

  raw buffer -> normalize -> filter kernel -> ProcessedSound

The input is normalized first so the kernels' default gains behave the same
no matter how loud the source is. The filter output is deliberately NOT
normalized here: the raw kernel output (a clipped impulse with peak 0.2,
say) stays observable. `ProcessedSound::finalize` runs the second, defensive
normalization pass, and belongs immediately before whatever persists the
samples.

Channel layout is not interpreted anywhere: multi-channel material is
processed as the flat sample sequence its container presents, exactly like
mono.

Settings are validated before the first sample is touched, so an invalid
configuration never yields partial output. Dispatch over `EffectSettings`
is an exhaustive match on a closed enum: an out-of-vocabulary selection can
only exist as a string or menu index, and is rejected when it fails to parse
into an `EffectKind`, before any settings value can be constructed.
*/

/// A selected effect together with the full parameter set it will run with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum EffectSettings {
    Chorus(ChorusParams),
    Delay(DelayParams),
    Distortion(DistortionParams),
}

impl EffectSettings {
    /// Settings for `kind` with every parameter at its documented default.
    /// `EffectKind::None` is not a runnable effect.
    pub fn defaults(kind: EffectKind) -> Result<Self, FilterError> {
        match kind {
            EffectKind::Chorus => Ok(EffectSettings::Chorus(ChorusParams::default())),
            EffectKind::Delay => Ok(EffectSettings::Delay(DelayParams::default())),
            EffectKind::Distortion => Ok(EffectSettings::Distortion(DistortionParams::default())),
            EffectKind::None => Err(FilterError::InvalidSelection("none".into())),
        }
    }

    /// Defaults for `kind` with a partial override applied on top: each
    /// (key, value) pair replaces one default; keys the effect does not
    /// have are rejected. Values are range-checked as a whole afterwards.
    pub fn with_overrides<'a, I>(kind: EffectKind, overrides: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        let mut settings = Self::defaults(kind)?;
        for (key, value) in overrides {
            match &mut settings {
                EffectSettings::Chorus(p) => p.set(key, value)?,
                EffectSettings::Delay(p) => p.set(key, value)?,
                EffectSettings::Distortion(p) => p.set(key, value)?,
            }
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            EffectSettings::Chorus(_) => EffectKind::Chorus,
            EffectSettings::Delay(_) => EffectKind::Delay,
            EffectSettings::Distortion(_) => EffectKind::Distortion,
        }
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        match self {
            EffectSettings::Chorus(p) => p.validate(),
            EffectSettings::Delay(p) => p.validate(),
            EffectSettings::Distortion(p) => p.validate(),
        }
    }

    /// The descriptor a run with these settings will carry.
    pub fn descriptor(&self) -> EffectDescriptor {
        match self {
            EffectSettings::Chorus(p) => EffectDescriptor::new(EffectKind::Chorus, p.entries()),
            EffectSettings::Delay(p) => EffectDescriptor::new(EffectKind::Delay, p.entries()),
            EffectSettings::Distortion(p) => {
                EffectDescriptor::new(EffectKind::Distortion, p.entries())
            }
        }
    }
}

/// An immutable processed-sound value: samples, the sample rate they were
/// rendered at, and the descriptor of the effect that produced them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSound {
    samples: Vec<f32>,
    sample_rate: u32,
    descriptor: EffectDescriptor,
}

impl ProcessedSound {
    /// Wrap freshly ingested, not-yet-filtered audio.
    pub fn unfiltered(samples: Vec<f32>, sample_rate: u32) -> Result<Self, FilterError> {
        check_sample_rate(sample_rate)?;
        Ok(Self {
            samples,
            sample_rate,
            descriptor: EffectDescriptor::none(),
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn descriptor(&self) -> &EffectDescriptor {
        &self.descriptor
    }

    pub fn peak(&self) -> f32 {
        peak(&self.samples)
    }

    /// Run one effect over this sound, yielding a new value.
    pub fn apply(&self, settings: &EffectSettings) -> Result<ProcessedSound, FilterError> {
        apply_effect(&self.samples, self.sample_rate, settings)
    }

    /// The defensive normalization pass that precedes persistence: scales
    /// the samples back to peak 1.0 so no representable-amplitude bound is
    /// exceeded by whatever encodes them. Fails on silent output rather
    /// than emitting NaN.
    pub fn finalize(self) -> Result<ProcessedSound, FilterError> {
        let samples = normalize(&self.samples)?;
        Ok(ProcessedSound { samples, ..self })
    }
}

/// Apply one effect to a raw buffer: validate settings, normalize the
/// input, run the kernel, and pair the output with its descriptor.
pub fn apply_effect(
    input: &[f32],
    sample_rate: u32,
    settings: &EffectSettings,
) -> Result<ProcessedSound, FilterError> {
    settings.validate()?;
    check_sample_rate(sample_rate)?;

    let normalized = normalize(input)?;
    let samples = match settings {
        EffectSettings::Chorus(p) => chorus_buffer(&normalized, sample_rate, p)?,
        EffectSettings::Delay(p) => delay_buffer(&normalized, sample_rate, p)?,
        EffectSettings::Distortion(p) => distortion_buffer(&normalized, sample_rate, p)?,
    };

    Ok(ProcessedSound {
        samples,
        sample_rate,
        descriptor: settings.descriptor(),
    })
}
