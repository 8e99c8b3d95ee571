//! Analysis and synthesis configuration.

use muso_core::InterpreterConfig;

use crate::error::{AudioError, AudioResult};

/// Taper applied to each window before the FFT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowFunction {
    /// No taper; raw samples
    #[default]
    Rectangular,
    /// Hann taper, lower leakage for tones that do not fill whole bins
    Hann,
}

/// Frequency classification configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Length of one instruction window (seconds)
    pub window_secs: f64,

    /// Quantization step applied to measured frequencies (Hz)
    pub quantize_hz: Option<f64>,

    /// Taper applied before the FFT
    pub window_fn: WindowFunction,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::from(&InterpreterConfig::default())
    }
}

impl From<&InterpreterConfig> for AnalysisConfig {
    fn from(config: &InterpreterConfig) -> Self {
        Self {
            window_secs: config.window_secs,
            quantize_hz: config.quantize_hz,
            window_fn: WindowFunction::Rectangular,
        }
    }
}

impl AnalysisConfig {
    /// Samples per window at `sample_rate` (truncated)
    pub fn chunk_samples(&self, sample_rate: u32) -> AudioResult<usize> {
        self.validate()?;
        let samples = (self.window_secs * f64::from(sample_rate)) as usize;
        if samples == 0 {
            return Err(AudioError::Config(format!(
                "window of {}s holds no samples at {} Hz",
                self.window_secs, sample_rate
            )));
        }
        Ok(samples)
    }

    /// Validate configuration (positive window, positive quantization step)
    pub fn validate(&self) -> AudioResult<()> {
        let core = InterpreterConfig {
            window_secs: self.window_secs,
            quantize_hz: self.quantize_hz,
        };
        core.validate().map_err(|e| AudioError::Config(e.to_string()))
    }
}

/// Tone synthesis configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    /// Output sample rate (Hz)
    pub sample_rate: u32,

    /// Peak amplitude of each tone before normalization
    pub amplitude: f64,

    /// Total track length (seconds); defaults to the end of the last tone
    pub duration_secs: Option<f64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            amplitude: 0.5,
            duration_secs: None,
        }
    }
}

impl SynthConfig {
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 {
            return Err(AudioError::Config("sample rate must be > 0".to_string()));
        }
        if let Some(duration) = self.duration_secs {
            if !(duration.is_finite() && duration >= 0.0) {
                return Err(AudioError::Config(format!(
                    "track duration must be a non-negative number of seconds, got {}",
                    duration
                )));
            }
        }
        Ok(())
    }
}
