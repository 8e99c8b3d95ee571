//! Musolang Configuration
//!
//! Describes how an audio signal is sliced into instruction windows and how
//! measured frequencies are turned into identities.
//! Configuration specifies values only; the classifier applies them.

use crate::error::{MusoError, MusoResult};

/// Interpreter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct InterpreterConfig {
    /// Length of one classification window, in seconds
    pub window_secs: f64,

    /// Snap measured frequencies to multiples of this step (Hz).
    /// `None` keeps exact floating-point identity.
    pub quantize_hz: Option<f64>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            window_secs: 1.0,
            quantize_hz: None,
        }
    }
}

impl InterpreterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject windows and quantization steps that cannot be applied
    pub fn validate(&self) -> MusoResult<()> {
        if !(self.window_secs.is_finite() && self.window_secs > 0.0) {
            return Err(MusoError::InvalidConfig(format!(
                "window length must be a positive number of seconds, got {}",
                self.window_secs
            )));
        }
        if let Some(step) = self.quantize_hz {
            if !(step.is_finite() && step > 0.0) {
                return Err(MusoError::InvalidConfig(format!(
                    "quantization step must be a positive frequency, got {}",
                    step
                )));
            }
        }
        Ok(())
    }
}
