pub mod canvas;
pub mod encoder;
pub mod engine;
pub mod url;
