//! Shared testing utilities for twrun CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated workspace for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let work_dir = fs::canonicalize(&work_dir).expect("Failed to resolve test work directory");
        Self { root, work_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `twrun` binary within the workspace.
    ///
    /// `WEAVER_HOME` is cleared so tests never pick up a real installation.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("twrun").expect("Failed to locate twrun binary");
        cmd.current_dir(self.work_dir()).env_remove("WEAVER_HOME").env("RUST_LOG", "off");
        cmd
    }

    /// Write a step file into the workspace and return its path.
    pub fn write_step_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write step file");
        path
    }

    /// Install a fake `bin/testweaver` that echoes its arguments, one per line,
    /// and exits with `$TW_EXIT` (default 0). Returns the installation root.
    #[cfg(unix)]
    pub fn install_fake_tool(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let home = self.root.path().join("testweaver");
        let bin = home.join("bin");
        fs::create_dir_all(&bin).expect("Failed to create fake tool directory");

        let script = bin.join("testweaver");
        fs::write(
            &script,
            "#!/bin/sh\necho \"testweaver started in $(pwd)\"\nfor arg in \"$@\"; do echo \"arg: $arg\"; done\nexit \"${TW_EXIT:-0}\"\n",
        )
        .expect("Failed to write fake tool");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
        home
    }
}
