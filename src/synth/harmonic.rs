//! Additive sine harmonics
//!
//! Each listed frequency is a sine partial whose weight falls off with its
//! position in the list: `0.5 / (k + 1)` for the k-th entry.

use std::f64::consts::PI;

/// A single sine partial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Frequency in Hz
    pub frequency: f64,
    /// Linear weight in the sum
    pub weight: f64,
}

impl Harmonic {
    /// Value of this partial at time `t` seconds
    pub fn value_at(&self, t: f64) -> f64 {
        (2.0 * PI * self.frequency * t).sin() * self.weight
    }
}

/// An ordered sum of sine partials
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicStack {
    harmonics: Vec<Harmonic>,
}

impl HarmonicStack {
    /// Build a stack from frequencies in Hz, weighting each by list position
    pub fn new(frequencies: &[f64]) -> Self {
        let harmonics = frequencies
            .iter()
            .enumerate()
            .map(|(k, &frequency)| Harmonic {
                frequency,
                weight: Self::weight(k),
            })
            .collect();

        Self { harmonics }
    }

    /// Weight of the partial at position `k` (0-indexed)
    pub fn weight(k: usize) -> f64 {
        0.5 / (k + 1) as f64
    }

    /// The partials in summation order
    pub fn harmonics(&self) -> &[Harmonic] {
        &self.harmonics
    }

    /// Number of partials
    pub fn len(&self) -> usize {
        self.harmonics.len()
    }

    /// True if the stack has no partials
    pub fn is_empty(&self) -> bool {
        self.harmonics.is_empty()
    }

    /// Sum of all partials at time `t` seconds, accumulated in list order
    pub fn value_at(&self, t: f64) -> f64 {
        let mut sample = 0.0;
        for harmonic in &self.harmonics {
            sample += harmonic.value_at(t);
        }
        sample
    }

    /// Upper bound on `|value_at(t)|`
    pub fn peak(&self) -> f64 {
        self.harmonics.iter().map(|h| h.weight.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_fall_off_with_position() {
        assert_eq!(HarmonicStack::weight(0), 0.5);
        assert_eq!(HarmonicStack::weight(1), 0.25);
        assert!((HarmonicStack::weight(2) - 1.0 / 6.0).abs() < 1e-15);

        let stack = HarmonicStack::new(&[220.0, 440.0, 660.0]);
        let weights: Vec<f64> = stack.harmonics().iter().map(|h| h.weight).collect();
        assert_eq!(weights, vec![0.5, 0.25, 0.5 / 3.0]);
    }

    #[test]
    fn test_starts_at_zero() {
        let stack = HarmonicStack::new(&[220.0, 440.0, 660.0]);
        assert_eq!(stack.value_at(0.0), 0.0);
    }

    #[test]
    fn test_single_harmonic() {
        let stack = HarmonicStack::new(&[220.0]);

        // Quarter period of 220 Hz is the positive peak
        let t = 1.0 / (4.0 * 220.0);
        assert!((stack.value_at(t) - 0.5).abs() < 1e-12);

        let t = 3.0 / (4.0 * 220.0);
        assert!((stack.value_at(t) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_order_matters() {
        let a = HarmonicStack::new(&[220.0, 440.0]);
        let b = HarmonicStack::new(&[440.0, 220.0]);
        let t = 0.001;
        assert!((a.value_at(t) - b.value_at(t)).abs() > 1e-3);
    }

    #[test]
    fn test_value_within_peak() {
        let stack = HarmonicStack::new(&[220.0, 440.0, 660.0]);
        let peak = stack.peak();
        assert!((peak - (0.5 + 0.25 + 0.5 / 3.0)).abs() < 1e-12);

        for i in 0..4410 {
            let t = i as f64 / 44100.0;
            assert!(stack.value_at(t).abs() <= peak + 1e-12);
        }
    }

    #[test]
    fn test_empty_stack_is_silent() {
        let stack = HarmonicStack::new(&[]);
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.value_at(0.123), 0.0);
    }
}
