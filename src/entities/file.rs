//! Named binary payload passed into and returned from the converter.
use crate::entities::extension::Ext;
use crate::helpers::PathRefExt;

use std::io;
use std::path::{Path, PathBuf};

const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Memory(Vec<u8>),
    Disk(PathBuf),
}

/// File-like object with a name and a content type.
///
/// The content is either held in memory (every file produced by the converter) or lives on
/// disk and is read only when [`BinaryFile::bytes`] is awaited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFile {
    name: String,
    content_type: String,
    content: Content,
}

impl BinaryFile {
    pub fn in_memory<S, T>(name: S, content_type: T, bytes: Vec<u8>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            content: Content::Memory(bytes),
        }
    }

    /// Creates a file backed by `path`. Nothing is read until the content is requested.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let content_type = Ext::from_path(path).map_or(OCTET_STREAM, Ext::mime);
        Self {
            name: path.filename(),
            content_type: content_type.into(),
            content: Content::Disk(path.to_path_buf()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Content of the file, if it's held in memory.
    pub fn memory(&self) -> Option<&[u8]> {
        match &self.content {
            Content::Memory(bytes) => Some(bytes),
            Content::Disk(_) => None,
        }
    }

    pub async fn bytes(&self) -> io::Result<Vec<u8>> {
        match &self.content {
            Content::Memory(bytes) => Ok(bytes.clone()),
            Content::Disk(path) => tokio::fs::read(path).await,
        }
    }
}

/// Name of the image produced from the document called `pdf_name`.
///
/// A trailing `.pdf` is dropped regardless of its case, then `.png` is appended.
pub fn png_name<S: AsRef<str>>(pdf_name: S) -> String {
    let pdf_name = pdf_name.as_ref();
    let suffix = Ext::Pdf.suffix();
    let stem = pdf_name
        .len()
        .checked_sub(suffix.len())
        .and_then(|split| pdf_name.get(split..).map(|tail| (split, tail)))
        .filter(|(_, tail)| tail.eq_ignore_ascii_case(suffix))
        .map_or(pdf_name, |(split, _)| &pdf_name[..split]);
    format!("{}{}", stem, Ext::Png.suffix())
}
