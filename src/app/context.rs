use crate::domain::ToolLocator;
use crate::ports::ProcessRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ProcessRunner> {
    runner: R,
    locator: ToolLocator,
}

impl<R: ProcessRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(runner: R, locator: ToolLocator) -> Self {
        Self { runner, locator }
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the tool locator.
    pub fn locator(&self) -> &ToolLocator {
        &self.locator
    }
}
