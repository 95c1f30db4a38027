pub mod check;
pub mod compile;
pub mod run;

use std::path::PathBuf;

use crate::domain::{Platform, Profile, RawStepConfig};

/// Everything needed to compile or run one build step.
#[derive(Debug, Clone)]
pub struct StepRequest {
    /// Unvalidated step options.
    pub config: RawStepConfig,
    /// Directory relative paths are resolved against; also the tool's cwd.
    pub working_dir: PathBuf,
    /// Platform the command line is generated for.
    pub platform: Platform,
    /// Flag set of the target tool version.
    pub profile: Profile,
}

impl StepRequest {
    pub fn new(config: RawStepConfig, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            working_dir: working_dir.into(),
            platform: Platform::host(),
            profile: Profile::default(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }
}
