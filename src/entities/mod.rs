pub mod conversion;
pub mod extension;
pub mod file;
pub mod surface;
pub mod viewport;
