//! Host I/O Boundary
//!
//! The engine's only observable effects are line writes (PRINT) and line
//! reads (INPUT). They go through `Host` so a run can target process stdio
//! or an in-memory buffer.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{MusoError, MusoResult};

/// Line-oriented output and input used by the engine
pub trait Host {
    /// Write one line; the implementation appends the terminator
    fn write_line(&mut self, line: &str) -> MusoResult<()>;

    /// Read one line without its terminator. Blocks until available.
    fn read_line(&mut self) -> MusoResult<String>;
}

/// Process standard output and standard input
#[derive(Debug, Default)]
pub struct StdHost;

impl StdHost {
    pub fn new() -> Self {
        StdHost
    }
}

impl Host for StdHost {
    fn write_line(&mut self, line: &str) -> MusoResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self) -> MusoResult<String> {
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(MusoError::IoError("unexpected end of standard input".to_string()));
        }
        Ok(strip_terminator(line))
    }
}

/// In-memory host: scripted input lines, captured output lines
#[derive(Debug, Default)]
pub struct BufferHost {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl BufferHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose INPUT reads return `lines` in order
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferHost {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Lines written so far
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Host for BufferHost {
    fn write_line(&mut self, line: &str) -> MusoResult<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> MusoResult<String> {
        self.input
            .pop_front()
            .map(strip_terminator)
            .ok_or_else(|| MusoError::IoError("unexpected end of standard input".to_string()))
    }
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
