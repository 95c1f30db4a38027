//! `std::process` implementation of [`ProcessRunner`].

use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::domain::{AppError, ShellCommand};
use crate::ports::{ProcessExit, ProcessRunner};

/// Spawns the shell command as a child process and streams its stdout.
///
/// The child's stderr is inherited, so diagnostics reach the same console
/// without being interleaved into the forwarded line stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdProcessRunner;

impl StdProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for StdProcessRunner {
    fn run(
        &self,
        command: &ShellCommand,
        working_dir: &Path,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<ProcessExit, AppError> {
        let launch_error = |source: io::Error| AppError::Launch { command: command.to_string(), source };

        let mut cmd = Command::new(command.shell());
        cmd.arg(command.flag());
        push_script(&mut cmd, command.script());
        let mut child = cmd
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(launch_error)?;
        tracing::debug!(pid = child.id(), shell = command.shell(), "spawned tool process");

        let stdout = child.stdout.take();
        let mut guard = ChildGuard::new(child);
        let stdout = stdout
            .ok_or_else(|| launch_error(io::Error::other("child stdout was not captured")))?;

        let mut reader = BufReader::new(stdout);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buf);
            on_line(text.trim_end_matches(['\n', '\r']));
        }
        drop(reader);

        let status = guard.wait()?;
        tracing::debug!(code = ?status.code(), "tool process exited");
        Ok(ProcessExit { code: status.code() })
    }
}

/// Hand the script to the shell exactly as logged.
///
/// `cmd.exe` does its own quote handling; the MSVC argument escaping std
/// applies to ordinary args would turn every `"` into `\"`.
#[cfg(windows)]
fn push_script(cmd: &mut Command, script: &str) {
    use std::os::windows::process::CommandExt;
    cmd.raw_arg(script);
}

#[cfg(not(windows))]
fn push_script(cmd: &mut Command, script: &str) {
    cmd.arg(script);
}

/// Owns a running child until it has been waited on.
///
/// Dropping the guard early (read error, panic in the line handler) kills
/// and reaps the child instead of leaking it.
struct ChildGuard {
    child: Option<Child>,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    fn wait(&mut self) -> io::Result<ExitStatus> {
        match self.child.take() {
            Some(mut child) => child.wait(),
            None => Err(io::Error::other("child process already reaped")),
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            tracing::warn!(pid = child.id(), "terminating tool process after interrupted read");
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
