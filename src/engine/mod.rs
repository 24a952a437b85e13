//! Render engine for ambience
//!
//! Streams synthesized samples into a WAV file.

mod recorder;

pub use recorder::Recorder;

use crate::config::GeneratorConfig;
use crate::synth::{FadeEnvelope, HarmonicStack, Quantizer};
use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Produces the 16-bit sample stream for a configuration
///
/// Every sample is a pure function of its index, so the stream can be
/// iterated in order or sampled at random positions.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    harmonics: HarmonicStack,
    envelope: FadeEnvelope,
    quantizer: Quantizer,
    sample_rate: u32,
    amplitude: f64,
    position: u64,
}

impl Synthesizer {
    /// Create a synthesizer positioned at the first frame
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            harmonics: HarmonicStack::new(&config.harmonics.frequencies),
            envelope: FadeEnvelope::new(
                config.frame_count(),
                config.fade_len(),
                config.envelope.mode,
            ),
            quantizer: Quantizer::new(config.quantize),
            sample_rate: config.audio.sample_rate,
            amplitude: config.harmonics.amplitude,
            position: 0,
        }
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total number of frames in the stream
    pub fn frame_count(&self) -> u64 {
        self.envelope.total()
    }

    /// Length of each fade ramp in samples
    pub fn fade_len(&self) -> u64 {
        self.envelope.fade_len()
    }

    /// Index of the next frame the iterator yields
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Rewind the iterator to the first frame
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Shaped amplitude of frame `index` before quantization
    pub fn amplitude_at(&self, index: u64) -> f64 {
        let t = index as f64 / self.sample_rate as f64;
        let raw = self.harmonics.value_at(t);
        let env = self.envelope.gain(index);
        raw * (env * self.amplitude)
    }

    /// Quantized value of frame `index`
    pub fn sample_at(&self, index: u64) -> i16 {
        self.quantizer.quantize(self.amplitude_at(index))
    }
}

impl Iterator for Synthesizer {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.position >= self.frame_count() {
            return None;
        }
        let sample = self.sample_at(self.position);
        self.position += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.frame_count() - self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Synthesizer {}

/// Summary of a finished render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    /// File that was written
    pub path: PathBuf,
    /// Frames written
    pub frames: u64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Configured duration in seconds
    pub duration: f64,
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the decimal point on whole seconds
        write!(
            f,
            "Generated {} ({:?}s, {}Hz)",
            self.path.display(),
            self.duration,
            self.sample_rate
        )
    }
}

/// Validate `config` and write its full sample stream to `config.output`
///
/// Parent directories are created and an existing file is replaced. The
/// file is only complete once this returns `Ok`.
pub fn render(config: &GeneratorConfig) -> Result<RenderReport> {
    config.validate()?;

    let synth = Synthesizer::new(config);
    log::info!(
        "rendering {} frames at {} Hz ({} harmonics, amplitude {}, fade {} samples)",
        synth.frame_count(),
        synth.sample_rate(),
        config.harmonics.frequencies.len(),
        config.harmonics.amplitude,
        synth.fade_len()
    );
    log::debug!(
        "fade mode {:?}, quantize mode {:?}",
        config.envelope.mode,
        config.quantize
    );

    let mut recorder = Recorder::create(&config.output, config.audio.sample_rate)?;
    recorder.write_all(synth)?;
    let frames = recorder.finalize()?;

    log::info!("wrote {} frames to {:?}", frames, config.output.0);

    Ok(RenderReport {
        path: config.output.0.clone(),
        frames,
        sample_rate: config.audio.sample_rate,
        duration: config.audio.duration,
    })
}
