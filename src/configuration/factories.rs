use crate::data_providers::config::{FsConfigLoader, FsConfigResolver};
use crate::data_providers::data_url::DataUrlMinter;
use crate::data_providers::pdfium::PdfiumSource;
use crate::data_providers::raster::{CairoCanvas, CairoPngEncoder};
use crate::use_cases::canvas::CanvasHandle;
use crate::use_cases::config::{CfgLoader, CfgResolver, Config};
use crate::use_cases::converter::Converter;
use crate::use_cases::encoder::Encoder;
use crate::use_cases::engine::LibSource;
use crate::use_cases::loader::LibraryLoader;
use crate::use_cases::url::Urls;

use std::sync::Arc;

pub fn config_resolver(config_loader: CfgLoader) -> CfgResolver {
    Box::new(FsConfigResolver::new(config_loader))
}

pub fn config_loader() -> CfgLoader {
    Box::new(FsConfigLoader)
}

pub fn library_source() -> LibSource {
    Arc::new(PdfiumSource)
}

pub fn canvas() -> CanvasHandle {
    Arc::new(CairoCanvas)
}

pub fn encoder() -> Encoder {
    Arc::new(CairoPngEncoder)
}

pub fn urls() -> Urls {
    Arc::new(DataUrlMinter)
}

/// Builds a [`Converter`] using PDFium for rendering and cairo for drawing and encoding.
pub fn converter(cfg: &Config) -> Converter {
    Converter::new(
        LibraryLoader::new(library_source(), cfg.locations()),
        canvas(),
        encoder(),
        urls(),
        cfg.settings(),
    )
}
