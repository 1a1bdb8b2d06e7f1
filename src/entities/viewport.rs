/// Pixel-space rectangle used to rasterize a page at a given scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Viewport {
    /// Viewport of a page measured in PDF points, scaled by `scale`.
    pub fn new(page_width: f64, page_height: f64, scale: f64) -> Self {
        Self {
            width: page_width * scale,
            height: page_height * scale,
            scale,
        }
    }

    /// Size of the raster surface. Fractional pixels are truncated.
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn viewport_scales_page_size() {
        // given
        let (width, height) = (612.0, 792.0);

        // when
        let viewport = Viewport::new(width, height, 3.0);

        // then
        assert_eq!(viewport.pixel_size(), (1836, 2376));
    }

    #[test]
    fn pixel_size_truncates_fractions() {
        assert_eq!(Viewport::new(100.5, 33.9, 1.0).pixel_size(), (100, 33));
    }
}
