//! File system utilities: naming and directory management.

pub mod naming;
pub mod paths;

pub use naming::{build_filename, infer_extension, sanitize_filename};
pub use paths::{prepare_image_dir, write_atomic};
