/// Port receiving the build log: the generated command, then tool output.
pub trait OutputSink {
    /// Write one log line.
    fn line(&mut self, line: &str);

    /// Announce the exact command about to run.
    fn command(&mut self, script: &str) {
        self.line(&format!("Generated command: {}", script));
    }

    /// Mark the start of the tool's own output.
    fn output_header(&mut self) {
        self.line("Output: ");
    }
}
