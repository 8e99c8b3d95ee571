//! Dominant frequency extraction.

use std::f64::consts::PI;
use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::config::WindowFunction;

/// Finds the strongest frequency of a window of samples.
///
/// Plans are cached per window length, so a classifier can feed it windows
/// of a fixed length plus one shorter tail without re-planning.
pub struct DominantFrequency {
    planner: FftPlanner<f64>,
    window_fn: WindowFunction,
    buffer: Vec<Complex<f64>>,
}

impl DominantFrequency {
    pub fn new(window_fn: WindowFunction) -> Self {
        Self {
            planner: FftPlanner::new(),
            window_fn,
            buffer: Vec::new(),
        }
    }

    /// Frequency (Hz) of the largest-magnitude bin in the lower half of the
    /// spectrum. Ties go to the lowest bin; fewer than two samples give 0 Hz.
    pub fn measure(&mut self, chunk: &[f32], sample_rate: u32) -> f64 {
        let size = chunk.len();
        if size < 2 {
            return 0.0;
        }

        let fft: Arc<dyn Fft<f64>> = self.planner.plan_fft_forward(size);

        let window_fn = self.window_fn;
        self.buffer.clear();
        self.buffer.extend(chunk.iter().enumerate().map(|(i, &sample)| {
            let weight = match window_fn {
                WindowFunction::Rectangular => 1.0,
                WindowFunction::Hann => hann_window(i, size),
            };
            Complex::new(f64::from(sample) * weight, 0.0)
        }));
        fft.process(&mut self.buffer);

        let mut peak_bin = 0;
        let mut peak_magnitude = f64::NEG_INFINITY;
        for (bin, value) in self.buffer[..size / 2].iter().enumerate() {
            let magnitude = value.norm();
            if magnitude > peak_magnitude {
                peak_bin = bin;
                peak_magnitude = magnitude;
            }
        }

        peak_bin as f64 * f64::from(sample_rate) / size as f64
    }
}

/// Hann window function for FFT analysis
pub fn hann_window(index: usize, size: usize) -> f64 {
    0.5 * (1.0 - ((2.0 * PI * index as f64) / (size as f64 - 1.0)).cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f64 / f64::from(sample_rate)).sin() as f32)
            .collect()
    }

    #[test]
    fn test_hann_window() {
        let size = 1024;

        // Hann window should be 0 at edges, 1 at center
        assert!((hann_window(0, size) - 0.0).abs() < 0.01);
        assert!((hann_window(size - 1, size) - 0.0).abs() < 0.01);
        assert!((hann_window(size / 2, size) - 1.0).abs() < 0.01);
    }

    #[test]
    fn whole_bin_tone_is_exact() {
        let mut analyzer = DominantFrequency::new(WindowFunction::Rectangular);
        let chunk = sine(440.0, 8000, 8000);
        assert_eq!(analyzer.measure(&chunk, 8000), 440.0);
    }

    #[test]
    fn hann_keeps_peak_bin() {
        let mut analyzer = DominantFrequency::new(WindowFunction::Hann);
        let chunk = sine(110.0, 8000, 8000);
        assert_eq!(analyzer.measure(&chunk, 8000), 110.0);
    }

    #[test]
    fn silence_and_tiny_chunks_are_zero() {
        let mut analyzer = DominantFrequency::new(WindowFunction::Rectangular);
        assert_eq!(analyzer.measure(&[0.0f32; 256], 8000), 0.0);
        assert_eq!(analyzer.measure(&[0.3f32], 8000), 0.0);
        assert_eq!(analyzer.measure(&[], 8000), 0.0);
    }
}
