//! Shell indirection for the generated command line.
//!
//! The tool is never spawned directly: the whole command line is handed to a
//! shell as a single script string (`cmd.exe /c` on Windows, `/bin/bash -c`
//! elsewhere). Each [`ShellStrategy`] owns the quoting, path and escaping
//! rules of its shell so callers only carry a [`Platform`] around.

use std::fmt;

use serde::Serialize;

use crate::domain::Platform;
use crate::domain::command_line::ArgumentList;

/// OS-specific rules used while compiling a command line.
pub trait ShellStrategy: Sync {
    /// Shell executable that hosts the script.
    fn executable(&self) -> &'static str;

    /// Flag telling the shell to run the next argument as a script.
    fn script_flag(&self) -> &'static str;

    /// Whether `path` is absolute for this platform.
    fn is_absolute(&self, path: &str) -> bool;

    /// Separator used when joining a relative path under a working directory.
    fn separator(&self) -> char;

    /// Characters accepted as separators when trimming joined components.
    fn separators(&self) -> &'static [char];

    /// Escape whitespace inside an already double-quoted string.
    fn escape_whitespace(&self, quoted: &str) -> String;

    /// Tool binary relative to the installation root.
    fn tool_binary(&self) -> &'static str;

    /// Text substituted for the installation root when it is not known.
    fn unset_home_marker(&self) -> &'static str;

    /// Wrap the invocation plus arguments into the final shell command.
    fn wrap(&self, body: String) -> ShellCommand;
}

/// `cmd.exe /c "<tool> <args>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsCmd;

impl ShellStrategy for WindowsCmd {
    fn executable(&self) -> &'static str {
        "cmd.exe"
    }

    fn script_flag(&self) -> &'static str {
        "/c"
    }

    fn is_absolute(&self, path: &str) -> bool {
        let bytes = path.as_bytes();
        if path.starts_with("\\\\") || path.starts_with("//") {
            return true;
        }
        bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && (bytes[2] == b'\\' || bytes[2] == b'/')
    }

    fn separator(&self) -> char {
        '\\'
    }

    fn separators(&self) -> &'static [char] {
        &['\\', '/']
    }

    fn escape_whitespace(&self, quoted: &str) -> String {
        quoted.to_string()
    }

    fn tool_binary(&self) -> &'static str {
        "bin/testweaver.com"
    }

    fn unset_home_marker(&self) -> &'static str {
        // cmd.exe expands this itself, or leaves it verbatim when undefined.
        "%WEAVER_HOME%"
    }

    fn wrap(&self, body: String) -> ShellCommand {
        ShellCommand::new(self.executable(), self.script_flag(), quote(&body))
    }
}

/// `/bin/bash -c '<tool> <args>'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixBash;

impl ShellStrategy for PosixBash {
    fn executable(&self) -> &'static str {
        "/bin/bash"
    }

    fn script_flag(&self) -> &'static str {
        "-c"
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('/')
    }

    fn separator(&self) -> char {
        '/'
    }

    fn separators(&self) -> &'static [char] {
        &['/']
    }

    fn escape_whitespace(&self, quoted: &str) -> String {
        quoted.replace(' ', "\\ ")
    }

    fn tool_binary(&self) -> &'static str {
        "bin/testweaver"
    }

    fn unset_home_marker(&self) -> &'static str {
        // bash aborts the script with "WEAVER_HOME: unset" if still undefined.
        "${WEAVER_HOME:?unset}"
    }

    fn wrap(&self, body: String) -> ShellCommand {
        ShellCommand::new(self.executable(), self.script_flag(), body)
    }
}

/// Wrap `value` in double quotes.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

/// A fully built shell command: `<shell> <flag> <script>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellCommand {
    shell: String,
    flag: String,
    script: String,
}

impl ShellCommand {
    pub fn new(shell: impl Into<String>, flag: impl Into<String>, script: impl Into<String>) -> Self {
        Self { shell: shell.into(), flag: flag.into(), script: script.into() }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// The exact string handed to the shell; this is what gets logged.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Arguments passed to the shell executable.
    pub fn args(&self) -> [&str; 2] {
        [self.flag.as_str(), self.script.as_str()]
    }

    /// Full argv, shell executable first.
    pub fn argv(&self) -> [&str; 3] {
        [self.shell.as_str(), self.flag.as_str(), self.script.as_str()]
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.shell, self.flag, self.script)
    }
}

/// Prefix the assembled arguments with the tool invocation and wrap them for
/// the platform shell.
pub fn build(tool_invocation: &str, arguments: &ArgumentList, platform: Platform) -> ShellCommand {
    let body = if arguments.is_empty() {
        tool_invocation.to_string()
    } else {
        format!("{} {}", tool_invocation, arguments.to_command_line())
    };
    platform.shell().wrap(body)
}
