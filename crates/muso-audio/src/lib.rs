//! Musolang audio boundary
//!
//! Turns recordings into the frequency tokens the interpreter consumes, and
//! renders frequency sequences back into recordings for authoring programs.

pub mod classifier;
pub mod config;
pub mod error;
pub mod fft;
pub mod synthesis;
pub mod wav;

pub use classifier::{classify, classify_file};
pub use config::{AnalysisConfig, SynthConfig, WindowFunction};
pub use error::{AudioError, AudioResult};
pub use synthesis::{parse_tone_csv, render, tones_from_sequence, Tone};
pub use wav::{read_wav, write_wav, Signal};
