//! twrun: compile TestWeaver build-step options into a shell command and run it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{RunResult, StepRequest};
pub use domain::{AppError, Platform, Profile, RawStepConfig, RunOptions, ShellCommand};
