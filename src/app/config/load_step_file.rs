//! Step file loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::step_config::parse_step_content;
use crate::domain::{AppError, StepFile};

/// Load and parse a TOML step file.
pub fn load_step_file(path: &Path) -> Result<StepFile, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigFileMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let file = parse_step_content(&content)?;
    tracing::debug!(path = %path.display(), "loaded step file");
    Ok(file)
}
