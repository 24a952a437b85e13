//! WAV file recorder
//!
//! Writes 16-bit mono PCM to a WAV file, creating parent directories and
//! replacing any existing file.

use anyhow::{Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// WAV file recorder
pub struct Recorder {
    writer: WavWriter<BufWriter<File>>,
    sample_rate: u32,
    samples_written: u64,
}

impl Recorder {
    /// Format written by every recorder at `sample_rate`
    pub fn spec(sample_rate: u32) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    /// Create a new recorder
    ///
    /// # Arguments
    /// * `path` - Output file path, truncated if it exists
    /// * `sample_rate` - Sample rate in Hz
    pub fn create(path: &Path, sample_rate: u32) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {:?}", parent))?;
        }

        let writer = WavWriter::create(path, Self::spec(sample_rate))
            .with_context(|| format!("failed to create WAV file: {:?}", path))?;

        log::debug!("opened {:?} for writing at {} Hz", path, sample_rate);

        Ok(Self {
            writer,
            sample_rate,
            samples_written: 0,
        })
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of samples written
    pub fn samples_written(&self) -> u64 {
        self.samples_written
    }

    /// Get the duration recorded in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples_written as f64 / self.sample_rate as f64
    }

    /// Write a single sample
    pub fn write_sample(&mut self, sample: i16) -> Result<()> {
        self.writer
            .write_sample(sample)
            .context("failed to write sample")?;
        self.samples_written += 1;
        Ok(())
    }

    /// Write every sample from an iterator, in order
    pub fn write_all<I>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = i16>,
    {
        for sample in samples {
            self.write_sample(sample)?;
        }
        Ok(())
    }

    /// Finalize the WAV file, returning the number of samples written
    ///
    /// This must be called to flush the buffer and patch the header sizes.
    pub fn finalize(self) -> Result<u64> {
        let samples_written = self.samples_written;
        self.writer
            .finalize()
            .context("failed to finalize WAV file")?;
        Ok(samples_written)
    }
}
