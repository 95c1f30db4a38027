//! Validate a step without compiling it.

use crate::app::commands::StepRequest;
use crate::domain::ValidationErrors;

/// Run every field check. An empty result means the step is valid.
pub fn execute(request: &StepRequest) -> ValidationErrors {
    let errors = request.config.check(request.platform);
    tracing::debug!(error_count = errors.len(), "validated step configuration");
    errors
}
