//! Off-screen drawing surface and the pixels detached from it.
use crate::result::RenderErr;

use cairo::{Antialias, Context, ImageSurface, ImageSurfaceDataOwned};
use tracing::debug;

/// Raster surface together with its 2D drawing context.
///
/// Created by a [`Canvas`](crate::use_cases::canvas::Canvas). Neither cairo type is `Send`, so a
/// surface never leaves the thread it was created on. Use [`Surface::into_raster`] to move the
/// pixels elsewhere.
#[derive(Debug)]
pub struct Surface {
    surface: ImageSurface,
    ctx: Context,
}

impl Surface {
    pub fn new(surface: ImageSurface, ctx: Context) -> Self {
        Self { surface, ctx }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    #[cfg(test)]
    pub fn size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    // Transparent regions of the page would otherwise stay transparent in the PNG.
    pub fn fill_white(&self) -> Result<(), RenderErr> {
        debug!("painting white background");
        self.ctx.save()?;
        self.ctx.set_source_rgb(1.0, 1.0, 1.0);
        self.ctx.paint()?;
        self.ctx.restore()?;
        Ok(())
    }

    pub fn enable_smoothing(&self) {
        self.ctx.set_antialias(Antialias::Best);
    }

    /// Detaches painted pixels from the drawing context.
    pub fn into_raster(self) -> Result<Raster, RenderErr> {
        let Self { surface, ctx } = self;
        drop(ctx); // context holds a reference to the surface
        surface.flush();
        let (width, height) = (surface.width(), surface.height());
        let data = surface.take_data()?;
        Ok(Raster {
            data,
            width,
            height,
        })
    }
}

/// Painted pixels owned by a single conversion, safe to hand over to another thread.
pub struct Raster {
    data: ImageSurfaceDataOwned,
    width: i32,
    height: i32,
}

impl Raster {
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn to_png(self) -> Result<Vec<u8>, cairo::IoError> {
        let surface = self.data.into_inner();
        let mut png = Vec::new();
        surface.write_to_png(&mut png)?;
        Ok(png)
    }
}
