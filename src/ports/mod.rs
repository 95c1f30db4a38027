mod output_sink;
mod process_runner;

pub use output_sink::OutputSink;
pub use process_runner::{ProcessExit, ProcessRunner};
