//! Path arguments: absolutize against the working directory, then quote.

use crate::domain::Platform;
use crate::domain::command_line::shell::{ShellStrategy, quote};

/// Resolve `path` against `working_dir` and quote it for the target shell.
///
/// Absolute paths are used as-is. Nothing is checked on disk; a missing path
/// is left for the tool to report. An empty `path` resolves to `working_dir`.
pub fn resolve(path: &str, working_dir: &str, platform: Platform) -> String {
    let shell = platform.shell();
    let absolute =
        if shell.is_absolute(path) { path.to_string() } else { join(working_dir, path, shell) };
    shell.escape_whitespace(&quote(&absolute))
}

fn join(base: &str, child: &str, shell: &dyn ShellStrategy) -> String {
    if child.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return child.to_string();
    }
    let separators = shell.separators();
    format!(
        "{}{}{}",
        base.trim_end_matches(separators),
        shell.separator(),
        child.trim_start_matches(separators)
    )
}
