use crate::entities::surface::Surface;
use crate::use_cases::canvas::{Canvas, CanvasHandle};

use std::sync::Arc;

/// Canvas which never provides a drawing context.
pub fn no_context() -> CanvasHandle {
    Arc::new(NoContextCanvas)
}

struct NoContextCanvas;

impl Canvas for NoContextCanvas {
    fn surface(&self, _width: i32, _height: i32) -> Option<Surface> {
        None
    }
}
