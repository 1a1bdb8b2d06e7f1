//! PDF engine backed by PDFium.
//!
//! PDFium is a shared library bound at runtime, so the application keeps working (and reports a
//! meaningful error) when the library is missing. PDFium renders into its own bitmap; the bitmap
//! is composited onto the cairo drawing context passed by the converter.
use crate::entities::viewport::Viewport;
use crate::result::{LoaderErr, RenderErr};
use crate::use_cases::engine::{Document, Engine, EngineHandle, LibrarySource, Page};

use cairo::{Context, Filter, Format, ImageSurface, SurfacePattern};
use pdfium_render::prelude::{PdfDocument, PdfPage, PdfRenderConfig, Pdfium};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Binds the platform-specific PDFium library (`libpdfium.so`, `libpdfium.dylib`, `pdfium.dll`)
/// found in a directory.
#[derive(Debug)]
pub struct PdfiumSource;

impl LibrarySource for PdfiumSource {
    #[instrument(skip(self))]
    fn bind(&self, location: &Path) -> Result<EngineHandle, LoaderErr> {
        let library = Pdfium::pdfium_platform_library_name_at_path(location);
        debug!("binding '{}'", library.display());
        let bindings = Pdfium::bind_to_library(&library).map_err(|e| LoaderErr::Bind {
            location: library.clone(),
            reason: e.to_string(),
        })?;
        Ok(Arc::new(PdfiumEngine {
            pdfium: Pdfium::new(bindings),
        }))
    }
}

struct PdfiumEngine {
    pdfium: Pdfium,
}

impl Engine for PdfiumEngine {
    fn parse(&self, bytes: Vec<u8>) -> Result<Box<dyn Document + '_>, RenderErr> {
        let document = self
            .pdfium
            .load_pdf_from_byte_vec(bytes, None)
            .map_err(|e| RenderErr::Parse(e.to_string()))?;
        Ok(Box::new(PdfiumDocument { document }))
    }
}

struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl Document for PdfiumDocument<'_> {
    fn page(&self, number: u16) -> Result<Box<dyn Page + '_>, RenderErr> {
        let index = number
            .checked_sub(1)
            .ok_or(RenderErr::MissingPage(number))?;
        let page = self
            .document
            .pages()
            .get(index)
            .map_err(|_| RenderErr::MissingPage(number))?;
        Ok(Box::new(PdfiumPage { page }))
    }
}

struct PdfiumPage<'a> {
    page: PdfPage<'a>,
}

impl Page for PdfiumPage<'_> {
    fn viewport(&self, scale: f64) -> Viewport {
        Viewport::new(
            f64::from(self.page.width().value),
            f64::from(self.page.height().value),
            scale,
        )
    }

    fn render(&self, ctx: &Context, viewport: &Viewport) -> Result<(), RenderErr> {
        let (width, height) = viewport.pixel_size();
        let config = PdfRenderConfig::new()
            .set_target_width(width)
            .set_target_height(height);
        let bitmap = self
            .page
            .render_with_config(&config)
            .map_err(|e| RenderErr::Engine(e.to_string()))?;
        let image = premultiplied(&bitmap.as_rgba_bytes(), bitmap.width(), bitmap.height())?;
        let pattern = SurfacePattern::create(&image);
        pattern.set_filter(Filter::Best);
        ctx.set_source(&pattern)?;
        ctx.paint()?;
        Ok(())
    }
}

/// Copies RGBA pixels into a new ARGB32 surface.
#[allow(clippy::cast_sign_loss)]
fn premultiplied(rgba: &[u8], width: i32, height: i32) -> Result<ImageSurface, RenderErr> {
    if width <= 0 || height <= 0 {
        return Err(RenderErr::Engine(format!(
            "empty bitmap of size {}x{}",
            width, height
        )));
    }
    let mut surface = ImageSurface::create(Format::ARgb32, width, height)?;
    let stride = surface.stride() as usize;
    let row_len = width as usize * 4;
    {
        let mut data = surface.data()?;
        for (dst, src) in data.chunks_mut(stride).zip(rgba.chunks(row_len)) {
            for (dst_px, src_px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
                dst_px.copy_from_slice(&argb32(src_px).to_ne_bytes());
            }
        }
    }
    Ok(surface)
}

// cairo keeps colour channels premultiplied by alpha, packed into a native-endian u32.
fn argb32(rgba: &[u8]) -> u32 {
    let alpha = u32::from(rgba[3]);
    let premultiply = |channel: u8| (u32::from(channel) * alpha + 127) / 255;
    alpha << 24 | premultiply(rgba[0]) << 16 | premultiply(rgba[1]) << 8 | premultiply(rgba[2])
}
