pub mod console_sink;
pub mod process_runner;

pub use console_sink::ConsoleSink;
pub use process_runner::StdProcessRunner;
