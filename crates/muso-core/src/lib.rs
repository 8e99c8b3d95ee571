//! Musolang - Core Library
//!
//! Decoder, argument resolver and execution engine for programs written as
//! a sequence of classified audio frequencies.

pub mod error;
pub mod config;
pub mod program;
pub mod decoder;
pub mod vm;

// Re-export commonly used types
pub use error::{MusoError, MusoResult};
pub use config::InterpreterConfig;
pub use program::{FrequencyToken, Identity, Instruction, Opcode};
pub use decoder::Decoder;
pub use vm::{BufferHost, Engine, Host, StdHost, Value, ValueType};

/// Decode `tokens` and run the program against `host`.
///
/// On failure the error is returned and the engine is dropped; output already
/// written through the host stays written.
pub fn run_tokens<H: Host>(tokens: &[FrequencyToken], host: H) -> MusoResult<Engine<H>> {
    let program = Decoder::decode(tokens);
    let mut engine = Engine::new(host);
    engine.run(&program)?;
    Ok(engine)
}
