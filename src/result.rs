use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single conversion.
///
/// The `Display` output of each variant is the message reported to the caller in
/// [`ConversionResult::error`](crate::entities::conversion::ConversionResult).
#[derive(Debug, Error)]
pub enum ConversionErr {
    #[error("Failed to get canvas context")]
    NoCanvasContext,

    #[error("Canvas conversion timeout")]
    EncodeTimeout,

    #[error("Failed to create image blob")]
    EmptyBlob,

    #[error("Failed to process blob: {0}")]
    Packaging(#[from] PackagingErr),

    #[error("Failed to convert PDF: {0}")]
    Loader(#[from] LoaderErr),

    #[error("Failed to convert PDF: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to convert PDF: {0}")]
    Render(#[from] RenderErr),

    #[error("Failed to convert PDF: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Failure of binding the PDF library.
///
/// It's cloned to every caller waiting for the same acquisition, so it carries messages only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoaderErr {
    #[error("can't bind library at '{location}': {reason}")]
    Bind { location: PathBuf, reason: String },

    #[error("Failed to load PDF library: {primary} / {fallback}")]
    Unavailable { primary: String, fallback: String },

    #[error("library binding thread failed: {0}")]
    Worker(String),
}

#[derive(Debug, Error)]
pub enum RenderErr {
    #[error("Invalid PDF: {0}")]
    Parse(String),

    #[error("document has no page {0}")]
    MissingPage(u16),

    #[error("page rendering failed: {0}")]
    Engine(String),

    #[error("drawing failed: {0}")]
    Drawing(#[from] cairo::Error),

    #[error("surface still in use: {0}")]
    Surface(#[from] cairo::BorrowError),
}

#[derive(Debug, Error)]
pub enum PackagingErr {
    #[error("content of '{0}' is not held in memory")]
    NotInMemory(String),

    #[error("{0}")]
    Generic(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ConfigurationErr {
    #[error("failed to read or write config: '{0}'")]
    Io(#[from] std::io::Error),

    #[error("error when deserializing from toml: '{0}'")]
    Deserialize(#[from] toml::de::Error),

    #[error("error when serializing to toml: '{0}'")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config path: '{0}'")]
    InvalidConfigPath(String),

    #[error("render scale must be a positive number, got '{0}'")]
    InvalidRenderScale(f64),
}
