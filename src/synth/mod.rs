//! Sample synthesis
//!
//! Additive harmonics, the fade envelope, and 16-bit quantization.

mod envelope;
mod harmonic;
mod quantize;

pub use envelope::FadeEnvelope;
pub use harmonic::{Harmonic, HarmonicStack};
pub use quantize::{Quantizer, MAX_SAMPLE, MIN_SAMPLE};
