//! Compile a step into the shell command that would run it.

use crate::app::AppContext;
use crate::app::commands::StepRequest;
use crate::domain::command_line::shell;
use crate::domain::{AppError, ArgumentAssembler, ShellCommand};
use crate::ports::ProcessRunner;

/// Validate, assemble and wrap for the target shell. Nothing is launched.
pub fn execute<R: ProcessRunner>(
    ctx: &AppContext<R>,
    request: &StepRequest,
) -> Result<ShellCommand, AppError> {
    let options = request.config.validate(request.platform)?;
    let working_dir = request.working_dir.to_string_lossy();

    let arguments = ArgumentAssembler::new(request.profile.features(), request.platform)
        .assemble(&options, &working_dir);
    let invocation = ctx.locator().invocation(request.platform);
    let command = shell::build(&invocation, &arguments, request.platform);

    tracing::debug!(
        platform = %request.platform,
        profile = ?request.profile,
        token_count = arguments.tokens().len(),
        "compiled command line"
    );
    Ok(command)
}
