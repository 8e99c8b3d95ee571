//! Audio boundary errors

use thiserror::Error;

/// Audio result type
pub type AudioResult<T> = std::result::Result<T, AudioError>;

/// Errors raised while reading, classifying or rendering audio
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Wrong row formatting in row {row}: {message}")]
    Csv { row: usize, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),

    #[error("no tones to render and no track duration given")]
    EmptySequence,
}
