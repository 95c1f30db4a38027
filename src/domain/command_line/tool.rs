//! Location of the TestWeaver executable.

use std::env;

use crate::domain::Platform;
use crate::domain::command_line::shell::quote;

/// Environment variable naming the TestWeaver installation root.
pub const WEAVER_HOME_ENV: &str = "WEAVER_HOME";

/// Resolves the quoted tool invocation from an installation root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolLocator {
    home: Option<String>,
}

impl ToolLocator {
    pub fn new(home: Option<String>) -> Self {
        Self { home: home.filter(|h| !h.is_empty()) }
    }

    /// Read the installation root from `WEAVER_HOME`.
    pub fn from_env() -> Self {
        Self::new(env::var(WEAVER_HOME_ENV).ok())
    }

    /// Replace the installation root when `home` is given.
    pub fn with_override(self, home: Option<String>) -> Self {
        match home.filter(|h| !h.is_empty()) {
            Some(home) => Self { home: Some(home) },
            None => self,
        }
    }

    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// Quoted path of the tool binary for `platform`.
    ///
    /// An unknown root is replaced by the shell's own unset marker, so the
    /// failure surfaces when the shell tries to start the tool.
    pub fn invocation(&self, platform: Platform) -> String {
        let shell = platform.shell();
        let home = self.home.as_deref().unwrap_or_else(|| shell.unset_home_marker());
        let binary = format!("{}/{}", home.trim_end_matches(['/', '\\']), shell.tool_binary());
        shell.escape_whitespace(&quote(&binary))
    }
}
