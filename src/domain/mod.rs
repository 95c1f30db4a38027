pub mod command_line;
pub mod error;
pub mod platform;
pub mod run_options;
pub mod step_config;
pub mod validation;
pub mod wildcard;

pub use command_line::{
    ArgumentAssembler, ArgumentList, Features, Profile, ShellCommand, ShellStrategy, ToolLocator,
};
pub use error::{AppError, FieldError, ValidationErrors};
pub use platform::Platform;
pub use run_options::{CsvExportOptions, RunOptions, RunOptionsBuilder};
pub use step_config::{RawCsvExport, RawNumber, RawStepConfig, StepFile, ToolSection};
pub use wildcard::{WildcardPattern, wildcard_to_regex};
