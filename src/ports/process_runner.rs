use std::path::Path;

use crate::domain::{AppError, ShellCommand};

/// How a launched tool finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit status; `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for launching the tool and streaming its standard output.
pub trait ProcessRunner {
    /// Run `command` in `working_dir`, handing each stdout line to `on_line`
    /// as it arrives. Blocks until the stream ends and the process exits.
    fn run(
        &self,
        command: &ShellCommand,
        working_dir: &Path,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<ProcessExit, AppError>;
}
