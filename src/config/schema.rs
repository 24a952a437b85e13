//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Largest frame count whose 16-bit mono payload still fits a WAV data chunk
pub const MAX_FRAMES: u64 = u32::MAX as u64 / 2;

/// Errors reported by [`GeneratorConfig::validate`]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sample rate must be between 8000 and 192000 Hz, got {0}")]
    SampleRate(u32),

    #[error("duration must be a positive number of seconds, got {0}")]
    Duration(f64),

    #[error("{frames} frames do not fit in a WAV file")]
    TooLong { frames: u64 },

    #[error("at least one harmonic frequency is required")]
    NoHarmonics,

    #[error("harmonic {index} has invalid frequency {frequency} Hz")]
    Frequency { index: usize, frequency: f64 },

    #[error("amplitude must be between 0.0 and 1.0, got {0}")]
    Amplitude(f64),

    #[error("fade length must be zero or more seconds, got {0}")]
    Fade(f64),
}

/// Main configuration for a render
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sample rate and length
    pub audio: AudioConfig,

    /// Additive harmonic settings
    pub harmonics: HarmonicConfig,

    /// Fade-in/fade-out settings
    pub envelope: EnvelopeConfig,

    /// How real amplitudes become 16-bit samples
    pub quantize: QuantizeMode,

    /// Output WAV path
    pub output: OutputPath,
}

impl GeneratorConfig {
    /// Number of frames a render produces, `floor(sample_rate * duration)`
    pub fn frame_count(&self) -> u64 {
        let frames = self.audio.sample_rate as f64 * self.audio.duration;
        if frames.is_finite() && frames > 0.0 {
            frames as u64
        } else {
            0
        }
    }

    /// Length of each fade ramp in samples, `floor(sample_rate * fade_secs)`
    pub fn fade_len(&self) -> u64 {
        let len = self.audio.sample_rate as f64 * self.envelope.fade_secs;
        if len.is_finite() && len > 0.0 {
            len as u64
        } else {
            0
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sample_rate = self.audio.sample_rate;
        if !(8000..=192_000).contains(&sample_rate) {
            return Err(ConfigError::SampleRate(sample_rate));
        }

        let duration = self.audio.duration;
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ConfigError::Duration(duration));
        }
        let frames = self.frame_count();
        if frames > MAX_FRAMES {
            return Err(ConfigError::TooLong { frames });
        }

        if self.harmonics.frequencies.is_empty() {
            return Err(ConfigError::NoHarmonics);
        }
        for (index, &frequency) in self.harmonics.frequencies.iter().enumerate() {
            if !frequency.is_finite() || frequency <= 0.0 {
                return Err(ConfigError::Frequency { index, frequency });
            }
            if frequency >= sample_rate as f64 / 2.0 {
                log::warn!(
                    "harmonic {} at {} Hz is at or above Nyquist for {} Hz and will alias",
                    index,
                    frequency,
                    sample_rate
                );
            }
        }

        let amplitude = self.harmonics.amplitude;
        if !(0.0..=1.0).contains(&amplitude) {
            return Err(ConfigError::Amplitude(amplitude));
        }

        let fade = self.envelope.fade_secs;
        if !fade.is_finite() || fade < 0.0 {
            return Err(ConfigError::Fade(fade));
        }

        Ok(())
    }
}

/// Audio format settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Sample rate in Hz (default: 44100)
    pub sample_rate: u32,

    /// Length in seconds (default: 8.0)
    pub duration: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration: 8.0,
        }
    }
}

/// Additive synthesis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonicConfig {
    /// Frequencies in Hz, weighted by position in the list
    pub frequencies: Vec<f64>,

    /// Global amplitude 0.0-1.0 (default: 0.6)
    pub amplitude: f64,
}

impl Default for HarmonicConfig {
    fn default() -> Self {
        Self {
            frequencies: vec![220.0, 440.0, 660.0],
            amplitude: 0.6,
        }
    }
}

/// Fade envelope settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    /// Ramp length in seconds (default: 0.01)
    pub fade_secs: f64,

    /// Ramp shape at the tail
    pub mode: FadeMode,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            fade_secs: 0.01,
            mode: FadeMode::default(),
        }
    }
}

/// How the fade-out ramp is aligned with the end of the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeMode {
    /// Fade-out starts after `total - fade_len`, one sample shorter than
    /// the fade-in, and never reaches zero
    #[default]
    Legacy,
    /// Fade-out mirrors the fade-in and ends on silence
    Symmetric,
}

/// Conversion of scaled amplitudes to integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantizeMode {
    /// Truncate toward zero
    #[default]
    Truncate,
    /// Round to nearest, halves away from zero
    Round,
}

/// Output path with the background loop location as default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputPath(pub PathBuf);

impl Default for OutputPath {
    fn default() -> Self {
        Self(PathBuf::from(super::DEFAULT_OUTPUT))
    }
}

impl std::ops::Deref for OutputPath {
    type Target = std::path::Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_background_loop() {
        let config = GeneratorConfig::default();
        assert_eq!(config.audio.sample_rate, 44100);
        assert_eq!(config.audio.duration, 8.0);
        assert_eq!(config.harmonics.frequencies, vec![220.0, 440.0, 660.0]);
        assert_eq!(config.harmonics.amplitude, 0.6);
        assert_eq!(config.envelope.mode, FadeMode::Legacy);
        assert_eq!(config.quantize, QuantizeMode::Truncate);
        assert_eq!(
            config.output.0,
            PathBuf::from("assets/audio/music/background.wav")
        );
    }

    #[test]
    fn test_default_counts() {
        let config = GeneratorConfig::default();
        assert_eq!(config.frame_count(), 352_800);
        assert_eq!(config.fade_len(), 441);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
audio:
  duration: 2.5
envelope:
  mode: symmetric
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.audio.sample_rate, 44100);
        assert_eq!(config.audio.duration, 2.5);
        assert_eq!(config.envelope.fade_secs, 0.01);
        assert_eq!(config.envelope.mode, FadeMode::Symmetric);
        assert_eq!(config.harmonics, HarmonicConfig::default());
    }

    #[test]
    fn test_quantize_and_output_yaml() {
        let yaml = "quantize: round\noutput: out/loop.wav\n";
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.quantize, QuantizeMode::Round);
        assert_eq!(config.output.0, PathBuf::from("out/loop.wav"));
    }

    #[test]
    fn test_invalid_sample_rate() {
        let mut config = GeneratorConfig::default();
        config.audio.sample_rate = 100;
        assert_eq!(config.validate(), Err(ConfigError::SampleRate(100)));
    }

    #[test]
    fn test_invalid_duration() {
        let mut config = GeneratorConfig::default();
        config.audio.duration = -1.0;
        assert_eq!(config.frame_count(), 0);
        assert_eq!(config.validate(), Err(ConfigError::Duration(-1.0)));

        config.audio.duration = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Duration(_))));
    }

    #[test]
    fn test_too_long() {
        let mut config = GeneratorConfig::default();
        config.audio.duration = 1.0e6;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLong { frames: 44_100_000_000 })
        ));
    }

    #[test]
    fn test_invalid_harmonics() {
        let mut config = GeneratorConfig::default();
        config.harmonics.frequencies.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoHarmonics));

        config.harmonics.frequencies = vec![220.0, -5.0];
        assert_eq!(
            config.validate(),
            Err(ConfigError::Frequency {
                index: 1,
                frequency: -5.0
            })
        );
    }

    #[test]
    fn test_aliasing_harmonic_is_allowed() {
        let mut config = GeneratorConfig::default();
        config.harmonics.frequencies = vec![30_000.0];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_amplitude() {
        let mut config = GeneratorConfig::default();
        config.harmonics.amplitude = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::Amplitude(1.5)));
    }

    #[test]
    fn test_invalid_fade() {
        let mut config = GeneratorConfig::default();
        config.envelope.fade_secs = -0.01;
        assert_eq!(config.validate(), Err(ConfigError::Fade(-0.01)));

        config.envelope.fade_secs = 0.0;
        assert!(config.validate().is_ok());
        assert_eq!(config.fade_len(), 0);
    }
}
