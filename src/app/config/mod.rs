//! Filesystem-backed configuration loaders.
//!
//! Pure schema parsing lives in `domain::step_config`.

mod load_step_file;

pub use load_step_file::load_step_file;
