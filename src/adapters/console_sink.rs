use std::io::{self, Write};

use crate::ports::OutputSink;

/// Writes the build log to standard output.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleSink {
    fn line(&mut self, line: &str) {
        // A closed stdout must not abort the run; the exit status still matters.
        let _ = writeln!(io::stdout().lock(), "{}", line);
    }
}
