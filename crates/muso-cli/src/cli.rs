//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use muso_audio::{AnalysisConfig, SynthConfig, WindowFunction};
use muso_core::InterpreterConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "muso")]
#[command(about = "An interpreter that executes music", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a recording and execute it
    Run(SourceArgs),

    /// Print the classified tokens and decoded instructions without executing
    Decode(SourceArgs),

    /// Render tones into a WAV file
    Encode(EncodeArgs),
}

/// Where a program comes from and how it is windowed
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Audio file to be executed (or a frequency list with --tokens)
    pub file: PathBuf,

    /// Size of time intervals where commands are read (in seconds)
    #[arg(short, long, value_name = "SECONDS", default_value_t = 1.0)]
    pub interval: f64,

    /// Snap measured frequencies to multiples of this step
    #[arg(long, value_name = "HZ")]
    pub quantize: Option<f64>,

    /// Apply a Hann window before each FFT
    #[arg(long)]
    pub hann: bool,

    /// Treat FILE as a text list of frequencies instead of audio
    #[arg(long)]
    pub tokens: bool,
}

impl SourceArgs {
    pub fn interpreter_config(&self) -> InterpreterConfig {
        InterpreterConfig {
            window_secs: self.interval,
            quantize_hz: self.quantize,
        }
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::from(&self.interpreter_config());
        if self.hann {
            config.window_fn = WindowFunction::Hann;
        }
        config
    }
}

/// Tone rendering options
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// CSV file with rows <start_time(s)>,<frequency(Hz)>,<duration(s)>,
    /// or a frequency list with --token-secs
    pub input: PathBuf,

    /// Name of output file
    #[arg(short, long, default_value = "tones.wav")]
    pub output: PathBuf,

    /// Time duration of file, in seconds (defaults to the end of the last tone)
    #[arg(short, long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Output sample rate in Hz
    #[arg(short, long, value_name = "HZ", default_value_t = 44100)]
    pub sample_rate: u32,

    /// Ignore the first CSV row
    #[arg(short = 'i', long = "ignore")]
    pub skip_header: bool,

    /// Read INPUT as a frequency list and give every token this duration
    #[arg(long, value_name = "SECONDS")]
    pub token_secs: Option<f64>,
}

impl EncodeArgs {
    pub fn synth_config(&self) -> SynthConfig {
        SynthConfig {
            sample_rate: self.sample_rate,
            duration_secs: self.duration,
            ..SynthConfig::default()
        }
    }
}
