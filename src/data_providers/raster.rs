//! Drawing surfaces and PNG encoding backed by cairo.
use crate::entities::surface::{Raster, Surface};
use crate::use_cases::canvas::Canvas;
use crate::use_cases::encoder::PngEncoder;

use async_trait::async_trait;
use cairo::{Context, Format, ImageSurface};
use tokio::task;
use tracing::{debug, error, instrument, warn};

/// Allocates ARGB32 image surfaces.
#[derive(Debug)]
pub struct CairoCanvas;

impl Canvas for CairoCanvas {
    #[instrument(skip(self))]
    fn surface(&self, width: i32, height: i32) -> Option<Surface> {
        let surface = match ImageSurface::create(Format::ARgb32, width, height) {
            Ok(surface) => surface,
            Err(e) => {
                warn!("can't allocate surface: '{}'", e);
                return None;
            }
        };
        match Context::new(&surface) {
            Ok(ctx) => Some(Surface::new(surface, ctx)),
            Err(e) => {
                warn!("can't create drawing context: '{}'", e);
                None
            }
        }
    }
}

/// Writes rasters as PNG on the blocking thread pool.
///
/// The blocking job is detached: when the caller stops waiting, encoding still runs to the end
/// and its output is dropped.
#[derive(Debug)]
pub struct CairoPngEncoder;

#[async_trait]
impl PngEncoder for CairoPngEncoder {
    async fn encode(&self, raster: Raster) -> Option<Vec<u8>> {
        match task::spawn_blocking(move || raster.to_png()).await {
            Ok(Ok(png)) => {
                debug!("encoded {} bytes of PNG", png.len());
                Some(png)
            }
            Ok(Err(e)) => {
                error!("PNG encoding failed: '{}'", e);
                None
            }
            Err(e) => {
                error!("PNG encoding thread failed: '{}'", e);
                None
            }
        }
    }
}
