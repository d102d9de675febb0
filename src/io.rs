//! Text input/output boundary.
//!
//! The game never touches a terminal directly. It pulls one line at a time
//! from an [`InputSource`] and pushes lines to an [`OutputSink`]. Closures
//! implement both traits, which is how tests script whole games.

use std::io::{BufRead, Write};
use tracing::{instrument, warn};

/// Supplies one trimmed line of player input per call.
pub trait InputSource {
    /// Blocks until a line is available. Returns `None` once the stream is closed.
    fn read_line(&mut self) -> Option<String>;
}

/// Receives one line of game output per call.
pub trait OutputSink {
    /// Writes a single line.
    fn write_line(&mut self, line: &str);
}

impl<F> InputSource for F
where
    F: FnMut() -> Option<String>,
{
    fn read_line(&mut self) -> Option<String> {
        self()
    }
}

impl<F> OutputSink for F
where
    F: FnMut(&str),
{
    fn write_line(&mut self, line: &str) {
        self(line)
    }
}

/// The input stream ended while a line was still needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Input closed before the game finished")]
pub struct InputClosed;

/// Reads lines from standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    /// Creates a new stdin reader.
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinSource {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to read from stdin");
                None
            }
        }
    }
}

/// Writes lines to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Creates a new stdout writer.
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            warn!(error = %e, "Failed to write to stdout");
        }
    }
}
