pub mod config;
pub mod data_url;
pub mod pdfium;
pub mod raster;
