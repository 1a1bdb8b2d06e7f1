//! Represents extension of the files going through the converter.
//!
//! Input documents are PDFs and the output is always a PNG image. The extension decides the
//! content type attached to a [`BinaryFile`](crate::entities::file::BinaryFile).
use std::path::Path;

/// File extension.
///
/// Contains all currently supported filetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ext {
    Pdf,
    Png,
}

impl Ext {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::parse(ext)
    }

    pub fn parse<S: AsRef<str>>(ext: S) -> Option<Self> {
        match ext.as_ref().to_ascii_lowercase().as_ref() {
            "pdf" => Some(Self::Pdf),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
        }
    }

    /// Extension with the leading dot, as it appears in filenames.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Png => ".png",
        }
    }
}
