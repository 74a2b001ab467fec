//! Payload validation by file signature.

use image::ImageFormat;

use crate::error::{Error, Result};

/// Check that fetched bytes carry a known image signature.
///
/// The HTTP status and the URL extension are never trusted over the magic
/// bytes: a 200 response serving an HTML error page fails here.
pub fn validate_image(url: &str, bytes: &[u8]) -> Result<ImageFormat> {
    image::guess_format(bytes).map_err(|_| Error::InvalidImage(url.to_string()))
}
