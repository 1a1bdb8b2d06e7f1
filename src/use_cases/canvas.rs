//! Source of off-screen drawing surfaces.
use crate::entities::surface::Surface;

use std::sync::Arc;

pub type CanvasHandle = Arc<dyn Canvas>;

pub trait Canvas: Send + Sync {
    /// Allocates a surface with a 2D drawing context.
    ///
    /// Returns `None` when the environment can't provide one (for example, when the requested
    /// size exceeds what the backend supports).
    fn surface(&self, width: i32, height: i32) -> Option<Surface>;
}
