//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{ConsoleSink, StdProcessRunner};
use crate::app::{
    AppContext,
    commands::{check, compile, run},
};
use crate::domain::{ShellCommand, StepFile, ToolLocator, ValidationErrors};

pub use crate::app::commands::StepRequest;
pub use crate::app::commands::run::RunResult;
pub use crate::domain::AppError;

/// Create an `AppContext` backed by real processes.
///
/// `weaver_home` overrides the `WEAVER_HOME` environment variable when given.
fn create_context(weaver_home: Option<String>) -> AppContext<StdProcessRunner> {
    let locator = ToolLocator::from_env().with_override(weaver_home);
    AppContext::new(StdProcessRunner::new(), locator)
}

/// Load a TOML step file.
pub fn load_step_file(path: &Path) -> Result<StepFile, AppError> {
    crate::app::config::load_step_file(path)
}

/// Validate a step without compiling it.
pub fn check(request: &StepRequest) -> ValidationErrors {
    check::execute(request)
}

/// Compile a step into the shell command that would run it.
pub fn compile(request: &StepRequest, weaver_home: Option<String>) -> Result<ShellCommand, AppError> {
    let ctx = create_context(weaver_home);
    compile::execute(&ctx, request)
}

/// Run a step, streaming the build log to stdout.
pub fn run(request: &StepRequest, weaver_home: Option<String>) -> Result<RunResult, AppError> {
    let ctx = create_context(weaver_home);
    let mut sink = ConsoleSink::new();
    run::execute(&ctx, request, &mut sink)
}
