//! Ambience - procedural background loop generator
//!
//! Sums weighted sine harmonics, fades the ends to avoid clicks, and writes
//! the result as a 16-bit mono WAV file.

pub mod config;
pub mod synth;
pub mod engine;

pub use config::GeneratorConfig;
pub use engine::{render, RenderReport, Synthesizer};
