//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar tracking downloaded image count.
pub fn create_download_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} downloading [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}
