//! Image download pipeline.

pub mod pipeline;
pub mod state;
pub mod validate;

pub use pipeline::{DownloadPipeline, ProgressObserver};
pub use state::RunState;
pub use validate::validate_image;
