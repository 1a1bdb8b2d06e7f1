pub mod canvas;
pub mod config;
pub mod converter;
pub mod encoder;
pub mod engine;
pub mod loader;
pub mod url;
