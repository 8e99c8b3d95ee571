//! Textual Program Source
//!
//! Reads a program written as a plain list of frequencies instead of audio.
//! Entries are separated by whitespace, commas or newlines; `#` starts a
//! comment that runs to the end of the line. Each entry occupies one window.

use crate::error::{MusoError, MusoResult};

use super::token::FrequencyToken;

/// Parse a frequency list into tokens spaced `window_secs` apart
pub fn parse_tokens(text: &str, window_secs: f64) -> MusoResult<Vec<FrequencyToken>> {
    let mut tokens = Vec::new();

    let entries = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    for (index, entry) in entries.enumerate() {
        let value: f64 = entry.parse().map_err(|_| MusoError::InvalidSource {
            position: index + 1,
            entry: entry.to_string(),
        })?;
        let start = index as f64 * window_secs;
        tokens.push(FrequencyToken::new(value, start, start + window_secs));
    }

    Ok(tokens)
}

/// Tokens from raw values with unit windows, mostly for tests and embedders
pub fn tokens_from_values(values: &[f64]) -> Vec<FrequencyToken> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| FrequencyToken::new(value, i as f64, i as f64 + 1.0))
        .collect()
}
