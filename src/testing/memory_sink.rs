use crate::ports::OutputSink;

/// [`OutputSink`] that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl OutputSink for MemorySink {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
