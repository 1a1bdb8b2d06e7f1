//! Narrow interface of the PDF library.
//!
//! Only the operations needed to paint the first page are exposed. The concrete library is an
//! implementation detail of [`data_providers`](crate::data_providers).
use crate::entities::viewport::Viewport;
use crate::result::{LoaderErr, RenderErr};

use cairo::Context;
use std::path::Path;
use std::sync::Arc;

pub type EngineHandle = Arc<dyn Engine>;

pub type LibSource = Arc<dyn LibrarySource>;

/// Binds the PDF library found at a location.
pub trait LibrarySource: Send + Sync {
    /// Blocking. `location` is a directory expected to contain the library.
    fn bind(&self, location: &Path) -> Result<EngineHandle, LoaderErr>;
}

/// Loaded PDF library.
pub trait Engine: Send + Sync {
    fn parse(&self, bytes: Vec<u8>) -> Result<Box<dyn Document + '_>, RenderErr>;
}

pub trait Document {
    /// Page numbers start at `1`.
    fn page(&self, number: u16) -> Result<Box<dyn Page + '_>, RenderErr>;
}

pub trait Page {
    fn viewport(&self, scale: f64) -> Viewport;

    fn render(&self, ctx: &Context, viewport: &Viewport) -> Result<(), RenderErr>;
}
