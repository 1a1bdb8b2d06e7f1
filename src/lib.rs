//! Renders the first page of a PDF document into a PNG image.
//!
//! ```no_run
//! # async fn run() {
//! use pdf2img::{convert_pdf_to_image, BinaryFile};
//!
//! let pdf = BinaryFile::from_path("report.pdf");
//! let res = convert_pdf_to_image(&pdf).await;
//! match res.error {
//!     None => println!("rendered into {}", res.image_url.len()),
//!     Some(e) => eprintln!("{e}"),
//! }
//! # }
//! ```
#![allow(clippy::module_name_repetitions)]

use crate::configuration::factories::converter;
use crate::use_cases::config::Config;

use once_cell::sync::Lazy;
use tracing::instrument;

pub mod configuration;
pub mod data_providers;
pub mod entities;
pub mod result;
pub mod use_cases;

mod helpers;
#[cfg(test)]
mod testingtools;

pub use entities::conversion::ConversionResult;
pub use entities::file::BinaryFile;
pub use use_cases::converter::Converter;

static CONVERTER: Lazy<Converter> = Lazy::new(|| converter(&Config::default()));

/// Converts the first page of `file` into a PNG using the default configuration.
///
/// The PDF library is bound on the first call and shared by every call made in this process.
#[instrument(skip(file))]
pub async fn convert_pdf_to_image(file: &BinaryFile) -> ConversionResult {
    CONVERTER.convert(file).await
}
