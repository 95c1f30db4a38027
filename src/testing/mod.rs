mod fake_process_runner;
mod memory_sink;

pub use fake_process_runner::FakeProcessRunner;
pub use memory_sink::MemorySink;
