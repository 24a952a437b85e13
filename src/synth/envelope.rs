//! Linear fade envelope
//!
//! Ramps the gain up from zero over the first `fade_len` samples and back
//! down over the last ones, so the loop starts and ends without a click.

use crate::config::FadeMode;

/// Fade-in/fade-out gain over a fixed number of samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeEnvelope {
    total: u64,
    fade_len: u64,
    mode: FadeMode,
}

impl FadeEnvelope {
    /// Create an envelope for `total` samples with ramps of `fade_len`
    pub fn new(total: u64, fade_len: u64, mode: FadeMode) -> Self {
        Self {
            total,
            fade_len,
            mode,
        }
    }

    /// Total number of samples covered
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Ramp length in samples
    pub fn fade_len(&self) -> u64 {
        self.fade_len
    }

    /// Tail alignment
    pub fn mode(&self) -> FadeMode {
        self.mode
    }

    /// Gain for sample `index`, in 0.0..=1.0
    ///
    /// The fade-in wins where the two ramps overlap. A zero-length fade
    /// never enters either ramp.
    pub fn gain(&self, index: u64) -> f64 {
        let i = index as i64;
        let total = self.total as i64;
        let fade_len = self.fade_len as i64;

        if i < fade_len {
            return i as f64 / fade_len as f64;
        }

        match self.mode {
            FadeMode::Legacy if i > total - fade_len => {
                (total - i) as f64 / fade_len as f64
            }
            FadeMode::Symmetric if i >= total - fade_len => {
                (total - 1 - i) as f64 / fade_len as f64
            }
            _ => 1.0,
        }
    }
}
