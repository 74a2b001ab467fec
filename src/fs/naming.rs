//! Filename generation and extension inference.

use crate::error::{Error, Result};

/// Extensions accepted as-is from a URL path; anything else falls back
/// to [`FALLBACK_EXTENSION`].
const RECOGNIZED_EXTENSIONS: &[&str] = &[
    "jpe", "jpeg", "jfif", "exif", "tiff", "gif", "bmp", "png", "webp", "jpg",
];

/// Extension used when the URL gives no recognizable hint.
const FALLBACK_EXTENSION: &str = "jpg";

/// Infer a file extension from a URL's path component.
///
/// The query string is stripped and the final dot-segment of the last path
/// segment is taken, lowercased. The response content type is never
/// consulted; the URL heuristic wins.
pub fn infer_extension(url: &str) -> String {
    let path = url.split('?').next().unwrap_or(url);
    let filename = path.rsplit('/').next().unwrap_or(path);

    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            if RECOGNIZED_EXTENSIONS.contains(&ext.as_str()) {
                ext
            } else {
                FALLBACK_EXTENSION.to_string()
            }
        }
        None => FALLBACK_EXTENSION.to_string(),
    }
}

/// Build the destination filename for a downloaded image.
pub fn build_filename(image_name: &str, sequence: usize, extension: &str) -> String {
    format!("{}_{}.{}", image_name, sequence, extension)
}

/// Validate a user-supplied image base name.
///
/// Returns an error on path traversal, path separators, or null bytes;
/// other problematic characters are replaced with underscores.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_extension_from_path() {
        assert_eq!(infer_extension("https://example.com/photo.png"), "png");
        assert_eq!(infer_extension("https://example.com/a/b/photo.webp"), "webp");
        assert_eq!(infer_extension("https://example.com/photo.JPEG"), "jpeg");
    }

    #[test]
    fn test_infer_extension_strips_query_string() {
        assert_eq!(
            infer_extension("https://example.com/photo.gif?w=640&fmt=png"),
            "gif"
        );
    }

    #[test]
    fn test_infer_extension_fallback() {
        assert_eq!(infer_extension("https://example.com/photo.svg"), "jpg");
        assert_eq!(infer_extension("https://example.com/photo"), "jpg");
        assert_eq!(infer_extension("https://example.com/"), "jpg");
    }

    #[test]
    fn test_build_filename() {
        assert_eq!(build_filename("Image", 1, "jpg"), "Image_1.jpg");
        assert_eq!(build_filename("cat", 42, "png"), "cat_42.png");
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("Image").unwrap(), "Image");
        assert_eq!(sanitize_filename("my:cat?").unwrap(), "my_cat_");
    }

    #[test]
    fn test_sanitize_filename_rejections() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("a/b").is_err());
        assert!(sanitize_filename("a\\b").is_err());
        assert!(sanitize_filename("a\0b").is_err());
        assert!(sanitize_filename("   ").is_err());
    }
}
