use std::fmt;
use std::io;

use thiserror::Error;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as it appears in the step file.
    pub field: String,
    /// User-facing message.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found while validating one step configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Record the outcome of a single field check.
    pub fn collect(&mut self, result: Result<(), FieldError>) {
        if let Err(e) = result {
            self.push(e);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Return the first error reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        write!(f, "{}", joined)
    }
}

/// Library-wide error type for twrun operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Step file passed via `--config` does not exist.
    #[error("Step config not found: {0}")]
    ConfigFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// One or more raw fields were rejected before assembly.
    #[error("Invalid step configuration: {0}")]
    Validation(ValidationErrors),

    /// The shell hosting the tool could not be started.
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The tool exited unsuccessfully.
    #[error("{}", tool_exit_message(*code, command))]
    ToolExit { code: Option<i32>, command: String },
}

fn tool_exit_message(code: Option<i32>, command: &str) -> String {
    match code {
        Some(code) => format!("TestWeaver exited with status {} (command: {})", code, command),
        None => format!("TestWeaver was terminated by a signal (command: {})", command),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Exit code the CLI should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ToolExit { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
