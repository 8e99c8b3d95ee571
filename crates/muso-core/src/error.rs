//! Musolang Error Types
//!
//! Defines every fatal condition the decoder, resolver and engine can raise.
//! None of these are recoverable: the driver reports the first one and stops.

use std::fmt;
use std::io;

use crate::program::opcode::Opcode;
use crate::vm::value::ValueType;

#[derive(Debug)]
pub enum MusoError {
    // Resolution errors
    ArityError {
        opcode: Opcode,
        found: usize,
        required: usize,
    },

    // Symbol table errors
    UndefinedVariable(f64),
    DuplicateDeclaration(f64),

    // Execution errors
    TypeMismatch {
        opcode: Opcode,
        found: Vec<ValueType>,
    },
    DivideByZero,
    UnparsableConversion(String),

    // Program source errors
    InvalidSource {
        position: usize,
        entry: String,
    },

    // Configuration errors
    InvalidConfig(String),

    // IO boundary
    IoError(String),
}

impl fmt::Display for MusoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MusoError::ArityError { opcode, found, required } =>
                write!(
                    f,
                    "{} Hz action has {} arguments, when {} are required.",
                    opcode.hz(), found, required
                ),

            MusoError::UndefinedVariable(name) =>
                write!(f, "Variable {} is not defined!", name),
            MusoError::DuplicateDeclaration(name) =>
                write!(f, "Variable {} was defined twice!", name),

            MusoError::TypeMismatch { opcode, found } => {
                let types: Vec<String> = found.iter().map(|t| t.to_string()).collect();
                write!(
                    f,
                    "{} action cannot operate on types [{}].",
                    opcode.name(),
                    types.join(", ")
                )
            }
            MusoError::DivideByZero =>
                write!(f, "Cannot divide by 0."),
            MusoError::UnparsableConversion(text) =>
                write!(f, "Cannot convert \"{}\" to {}.", text, ValueType::Number),

            MusoError::InvalidSource { position, entry } =>
                write!(f, "invalid frequency \"{}\" at entry {}", entry, position),

            MusoError::InvalidConfig(msg) =>
                write!(f, "invalid configuration: {}", msg),

            MusoError::IoError(msg) =>
                write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for MusoError {}

impl From<io::Error> for MusoError {
    fn from(err: io::Error) -> Self {
        MusoError::IoError(err.to_string())
    }
}

pub type MusoResult<T> = Result<T, MusoError>;
