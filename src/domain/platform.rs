//! Target platform selection.

use serde::{Deserialize, Serialize};

use crate::domain::command_line::shell::{PosixBash, ShellStrategy, WindowsCmd};

/// Operating-system family the generated command line targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Platform of the running process.
    pub fn host() -> Self {
        if cfg!(windows) { Platform::Windows } else { Platform::Posix }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }

    /// Quoting and shell-indirection rules for this platform.
    pub fn shell(self) -> &'static dyn ShellStrategy {
        match self {
            Platform::Windows => &WindowsCmd,
            Platform::Posix => &PosixBash,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Posix => "posix",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
