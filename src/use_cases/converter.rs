//! Conversion of the first page of a PDF into a PNG attachment.
use crate::entities::conversion::ConversionResult;
use crate::entities::extension::Ext;
use crate::entities::file::{png_name, BinaryFile};
use crate::entities::surface::Raster;
use crate::result::{ConversionErr, PackagingErr};
use crate::use_cases::canvas::{Canvas, CanvasHandle};
use crate::use_cases::encoder::Encoder;
use crate::use_cases::engine::Engine;
use crate::use_cases::loader::LibraryLoader;
use crate::use_cases::url::Urls;

use std::time::Duration;
use tokio::{task, time};
use tracing::{debug, error, instrument};

const FIRST_PAGE: u16 = 1;

/// Tunables of a [`Converter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub scale: f64,
    pub encode_timeout: Duration,
}

/// Renders the first page of PDF documents into PNG files.
///
/// The PDF library is bound on the first conversion and reused by every following one.
pub struct Converter {
    loader: LibraryLoader,
    canvas: CanvasHandle,
    encoder: Encoder,
    urls: Urls,
    settings: Settings,
}

impl Converter {
    pub fn new(
        loader: LibraryLoader,
        canvas: CanvasHandle,
        encoder: Encoder,
        urls: Urls,
        settings: Settings,
    ) -> Self {
        Self {
            loader,
            canvas,
            encoder,
            urls,
            settings,
        }
    }

    /// Converts the first page of `file`.
    ///
    /// Never fails: every problem is reported through [`ConversionResult::error`].
    #[instrument(skip(self, file), fields(file = %file.name()))]
    pub async fn convert(&self, file: &BinaryFile) -> ConversionResult {
        match self.try_convert(file).await {
            Ok((image_url, image)) => {
                debug!("converted into '{}'", image.name());
                ConversionResult::converted(image_url, image)
            }
            Err(e) => {
                error!("PDF conversion error: {}", e);
                ConversionResult::failed(e)
            }
        }
    }

    async fn try_convert(&self, file: &BinaryFile) -> Result<(String, BinaryFile), ConversionErr> {
        let engine = self.loader.ensure_loaded().await?;
        debug!("reading file content");
        let bytes = file.bytes().await?;
        let canvas = self.canvas.clone();
        let scale = self.settings.scale;
        let raster = task::spawn_blocking(move || {
            paint_first_page(engine.as_ref(), canvas.as_ref(), bytes, scale)
        })
        .await??;
        let png = self.encode(raster).await?;
        Ok(self.package(file.name(), png)?)
    }

    async fn encode(&self, raster: Raster) -> Result<Vec<u8>, ConversionErr> {
        debug!("encoding raster of size {:?}", raster.size());
        time::timeout(self.settings.encode_timeout, self.encoder.encode(raster))
            .await
            .map_err(|_| ConversionErr::EncodeTimeout)?
            .ok_or(ConversionErr::EmptyBlob)
    }

    fn package(&self, pdf_name: &str, png: Vec<u8>) -> Result<(String, BinaryFile), PackagingErr> {
        let image = BinaryFile::in_memory(png_name(pdf_name), Ext::Png.mime(), png);
        let image_url = self.urls.mint(&image)?;
        Ok((image_url, image))
    }
}

fn paint_first_page(
    engine: &dyn Engine,
    canvas: &dyn Canvas,
    bytes: Vec<u8>,
    scale: f64,
) -> Result<Raster, ConversionErr> {
    debug!("parsing document");
    let document = engine.parse(bytes)?;
    let page = document.page(FIRST_PAGE)?;
    let viewport = page.viewport(scale);
    let (width, height) = viewport.pixel_size();
    let surface = canvas
        .surface(width, height)
        .ok_or(ConversionErr::NoCanvasContext)?;
    surface.fill_white()?;
    surface.enable_smoothing();
    debug!("rendering page {} at {}x{}", FIRST_PAGE, width, height);
    page.render(surface.context(), &viewport)?;
    Ok(surface.into_raster()?)
}
