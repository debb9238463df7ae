//! Batch normalization of existing PNG assets.
//!
//! Both tools work one file at a time and never abort a batch because of
//! a single bad file: each file gets an outcome in the returned report.

mod opaque;
mod resize;

pub use opaque::{force_opaque, normalize_file, normalize_opacity, OpacityOutcome, OpacityReport};
pub use resize::{resize_file, resize_files, ResizeOutcome, ResizeReport, DEFAULT_RESIZE_SIZE, RESIZE_FILES};
