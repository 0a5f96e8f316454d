//! Profile photo intake: type and size checks, then a data URI for the preview.

use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use thiserror::Error;

/// Default upload ceiling: 5 MiB.
pub const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum PhotoError {
    #[error("Please upload an image file.")]
    UnsupportedType { content_type: String },

    #[error("Image must be less than 5MB.")]
    TooLarge { size: usize, limit: usize },
}

/// An accepted photo, ready to embed as an `<img src>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub content_type: String,
    pub data_uri: String,
}

/// Normalizes a declared content type and accepts it only if it names an image.
pub fn image_content_type(declared: &str) -> Result<String, PhotoError> {
    let content_type = declared.trim().to_ascii_lowercase();
    if content_type.starts_with("image/") {
        Ok(content_type)
    } else {
        Err(PhotoError::UnsupportedType { content_type })
    }
}

impl Photo {
    /// Checks the declared content type and the payload size, then encodes.
    /// Nothing is produced for a rejected upload.
    pub fn from_upload(content_type: &str, bytes: &[u8], max_bytes: usize) -> Result<Self, PhotoError> {
        let content_type = image_content_type(content_type)?;
        if bytes.len() > max_bytes {
            return Err(PhotoError::TooLarge {
                size: bytes.len(),
                limit: max_bytes,
            });
        }
        let data_uri = format!(
            "data:{content_type};base64,{}",
            general_purpose::STANDARD.encode(bytes)
        );
        Ok(Photo {
            content_type,
            data_uri,
        })
    }
}
