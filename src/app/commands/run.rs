//! Run command execution logic.

use crate::app::AppContext;
use crate::app::commands::{StepRequest, compile};
use crate::domain::{AppError, ShellCommand};
use crate::ports::{OutputSink, ProcessRunner};

/// Result of a completed run.
#[derive(Debug)]
pub struct RunResult {
    /// The command that was executed.
    pub command: ShellCommand,
    /// Number of output lines forwarded to the sink.
    pub lines: usize,
}

/// Compile the step, log the command, launch the tool and stream its output.
///
/// A non-zero exit becomes [`AppError::ToolExit`] after all output has been
/// forwarded.
pub fn execute<R: ProcessRunner>(
    ctx: &AppContext<R>,
    request: &StepRequest,
    sink: &mut dyn OutputSink,
) -> Result<RunResult, AppError> {
    let command = compile::execute(ctx, request)?;

    sink.command(command.script());
    tracing::info!(working_dir = %request.working_dir.display(), "launching TestWeaver");
    sink.output_header();

    let mut lines = 0usize;
    let exit = ctx.runner().run(&command, &request.working_dir, &mut |line| {
        lines += 1;
        sink.line(line);
    })?;

    if !exit.success() {
        tracing::warn!(code = ?exit.code, "TestWeaver exited unsuccessfully");
        return Err(AppError::ToolExit { code: exit.code, command: command.script().to_string() });
    }

    tracing::info!(lines, "TestWeaver finished");
    Ok(RunResult { command, lines })
}
