use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, ShellCommand};
use crate::ports::{ProcessExit, ProcessRunner};

/// Scripted [`ProcessRunner`] that records every command it is asked to run.
#[derive(Default)]
pub struct FakeProcessRunner {
    output: Vec<String>,
    exit_code: Option<i32>,
    launch_fails: bool,
    calls: Mutex<Vec<(ShellCommand, PathBuf)>>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self { exit_code: Some(0), ..Default::default() }
    }

    pub fn with_output<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    pub fn failing_to_launch(mut self) -> Self {
        self.launch_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<(ShellCommand, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(
        &self,
        command: &ShellCommand,
        working_dir: &Path,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<ProcessExit, AppError> {
        self.calls.lock().unwrap().push((command.clone(), working_dir.to_path_buf()));
        if self.launch_fails {
            return Err(AppError::Launch {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "fake launch failure"),
            });
        }
        for line in &self.output {
            on_line(line);
        }
        Ok(ProcessExit { code: self.exit_code })
    }
}
