use crate::entities::file::BinaryFile;

use std::fmt::Display;

/// Outcome of converting a PDF into an image.
///
/// On success `image_url` is non-empty, `file` holds the PNG and `error` is `None`. On failure
/// `image_url` is empty, `file` is `None` and `error` describes what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub image_url: String,
    pub file: Option<BinaryFile>,
    pub error: Option<String>,
}

impl ConversionResult {
    pub fn converted<S: Into<String>>(image_url: S, file: BinaryFile) -> Self {
        Self {
            image_url: image_url.into(),
            file: Some(file),
            error: None,
        }
    }

    pub fn failed<E: Display>(err: E) -> Self {
        Self {
            image_url: String::new(),
            file: None,
            error: Some(err.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
