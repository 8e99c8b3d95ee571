//! Musolang - CLI
//!
//! Runs programs encoded as audio: every window of the recording is reduced
//! to its dominant frequency, decoded into instructions and executed.

mod cli;

use std::error::Error;
use std::fs;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use muso_audio::{classify_file, parse_tone_csv, render, tones_from_sequence, write_wav};
use muso_core::program::source::parse_tokens;
use muso_core::{Decoder, Engine, FrequencyToken, StdHost};

use cli::{Cli, Command, EncodeArgs, SourceArgs};

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() {
    // Logs go to stderr; stdout belongs to the program's PRINT output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Run(args) => run(args),
        Command::Decode(args) => decode(args),
        Command::Encode(args) => encode(args),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Classify, decode and execute against process stdio
fn run(args: &SourceArgs) -> CliResult<()> {
    let tokens = load_tokens(args)?;
    let program = Decoder::decode(&tokens);
    info!(tokens = tokens.len(), instructions = program.len(), "decoded program");

    let mut engine = Engine::new(StdHost::new());
    engine.run(&program)?;
    Ok(())
}

/// Print the token stream and the instruction listing
fn decode(args: &SourceArgs) -> CliResult<()> {
    let tokens = load_tokens(args)?;

    println!("Tokens:");
    for token in &tokens {
        match token.opcode() {
            Some(opcode) => println!("  {}  {}", token, opcode.name()),
            None => println!("  {}", token),
        }
    }

    println!("Instructions:");
    for instruction in Decoder::decode(&tokens) {
        println!("  {}", instruction);
    }
    Ok(())
}

/// Render a CSV tone list, or a frequency sequence, to a WAV file
fn encode(args: &EncodeArgs) -> CliResult<()> {
    let text = fs::read_to_string(&args.input)?;

    let tones = match args.token_secs {
        Some(token_secs) => {
            let values: Vec<f64> = parse_tokens(&text, token_secs)?
                .iter()
                .map(|t| t.value)
                .collect();
            tones_from_sequence(&values, token_secs)
        }
        None => parse_tone_csv(&text, args.skip_header)?,
    };

    let config = args.synth_config();
    let track = render(&tones, &config)?;
    write_wav(&args.output, &track, config.sample_rate)?;

    info!(
        tones = tones.len(),
        output = %args.output.display(),
        "wrote tones"
    );
    Ok(())
}

fn load_tokens(args: &SourceArgs) -> CliResult<Vec<FrequencyToken>> {
    let config = args.interpreter_config();
    config.validate()?;

    if args.tokens {
        let text = fs::read_to_string(&args.file)?;
        let tokens = parse_tokens(&text, config.window_secs)?;
        return Ok(match config.quantize_hz {
            Some(step) => tokens.into_iter().map(|t| t.quantized(step)).collect(),
            None => tokens,
        });
    }

    Ok(classify_file(&args.file, &args.analysis_config())?)
}
