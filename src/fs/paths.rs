//! Destination directory management and atomic writes.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};

/// Prepare the per-query image directory.
///
/// With `force_replace` set, an existing directory is deleted first.
/// Returns the directory path; failure here is fatal for the run.
pub fn prepare_image_dir(config: &Config) -> Result<PathBuf> {
    let dir = config.image_dir();

    if config.download.force_replace && dir.is_dir() {
        std::fs::remove_dir_all(&dir)?;
    }

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write bytes to `path` via a temp file renamed on completion, so a
/// failed write never leaves a partial file at the destination.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidFilename(path.display().to_string()))?;

    let tmp = path.with_file_name(format!("{}.part", filename));

    tokio::fs::write(&tmp, bytes).await?;

    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_image_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.search.query = "cats".to_string();
        config.download.output_dir = tmp.path().join("dataset");

        let dir = prepare_image_dir(&config).unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir, tmp.path().join("dataset/cats"));
    }

    #[test]
    fn test_force_replace_clears_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.search.query = "cats".to_string();
        config.download.output_dir = tmp.path().to_path_buf();
        config.download.force_replace = true;

        let dir = prepare_image_dir(&config).unwrap();
        std::fs::write(dir.join("stale.jpg"), b"old").unwrap();

        let dir = prepare_image_dir(&config).unwrap();
        assert!(dir.is_dir());
        assert!(!dir.join("stale.jpg").exists());
    }

    #[tokio::test]
    async fn test_write_atomic_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Image_1.png");
        let payload = vec![0x89u8, b'P', b'N', b'G', 1, 2, 3];

        write_atomic(&path, &payload).await.unwrap();

        let read_back = std::fs::read(&path).unwrap();
        assert_eq!(read_back, payload);
        // No temp file left behind
        assert!(!tmp.path().join("Image_1.png.part").exists());
    }
}
