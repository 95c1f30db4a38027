//! Command-line compiler: options in, shell command out.

pub mod assembler;
pub mod path_resolver;
pub mod shell;
pub mod tool;

pub use assembler::{ArgumentAssembler, Features, Profile, assemble};
pub use path_resolver::resolve;
pub use shell::{PosixBash, ShellCommand, ShellStrategy, WindowsCmd, build};
pub use tool::{ToolLocator, WEAVER_HOME_ENV};

/// Ordered tool arguments.
///
/// A token may contain spaces (a quoted path); callers that need argv must
/// use [`ArgumentList::tokens`] instead of re-splitting the joined line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    pub fn push(&mut self, token: impl Into<String>) {
        self.0.push(token.into());
    }

    /// Append `flag value`.
    pub fn push_option(&mut self, flag: &str, value: impl Into<String>) {
        self.0.push(flag.to_string());
        self.0.push(value.into());
    }

    /// Append `flag value` once per non-empty value, keeping order.
    pub fn push_repeated<'a>(&mut self, flag: &str, values: impl IntoIterator<Item = &'a str>) {
        for value in values.into_iter().filter(|v| !v.is_empty()) {
            self.push_option(flag, value);
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens joined by single spaces.
    pub fn to_command_line(&self) -> String {
        self.0.join(" ")
    }
}

impl FromIterator<String> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
