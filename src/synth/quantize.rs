//! Conversion of real amplitudes to 16-bit samples

use crate::config::QuantizeMode;

/// Largest sample value written
pub const MAX_SAMPLE: i16 = 32767;

/// Smallest sample value written; the range is kept symmetric so -32768
/// never appears
pub const MIN_SAMPLE: i16 = -32767;

/// Scales `[-1.0, 1.0]` to signed 16-bit and clamps the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quantizer {
    mode: QuantizeMode,
}

impl Quantizer {
    pub fn new(mode: QuantizeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> QuantizeMode {
        self.mode
    }

    /// Quantize one amplitude
    pub fn quantize(&self, value: f64) -> i16 {
        let scaled = value * MAX_SAMPLE as f64;
        let whole = match self.mode {
            QuantizeMode::Truncate => scaled.trunc(),
            QuantizeMode::Round => scaled.round(),
        };
        // `as` saturates, NaN becomes 0
        (whole as i64).clamp(MIN_SAMPLE as i64, MAX_SAMPLE as i64) as i16
    }
}
