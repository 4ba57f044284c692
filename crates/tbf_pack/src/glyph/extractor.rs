use log::{debug, warn};

use super::metrics::GlyphMetrics;
use super::rasterizer::Rasterizer;
use crate::charset::Charset;
use crate::{PackError, PackingError};

/// Renders every character of a charset, in order, through a [`Rasterizer`].
pub struct GlyphExtractor<'a, R: ?Sized> {
    rasterizer: &'a R,
    charset: Charset,
    size: u32,
}

impl<'a, R: Rasterizer + ?Sized> GlyphExtractor<'a, R> {
    pub fn new(rasterizer: &'a R, charset: Charset, size: u32) -> Self {
        Self { rasterizer, charset, size }
    }

    pub fn extract(&self) -> Result<Vec<GlyphMetrics>, PackError> {
        self.extract_with(|_| {})
    }

    /// Like [`Self::extract`], calling `on_glyph` after each glyph is produced.
    pub fn extract_with<F>(&self, mut on_glyph: F) -> Result<Vec<GlyphMetrics>, PackError>
    where
        F: FnMut(&GlyphMetrics),
    {
        if self.size == 0 {
            return Err(PackingError::InvalidSize.into());
        }

        let mut glyphs = Vec::with_capacity(self.charset.len());
        for (index, &ch) in self.charset.chars().iter().enumerate() {
            let glyph = match self.rasterizer.rasterize(ch, self.size) {
                Ok(glyph) => glyph,
                Err(PackError::GlyphRender(_)) => {
                    warn!("no glyph for {ch:?} at size {}, substituting an empty cell", self.size);
                    GlyphMetrics::empty(ch)
                },
                Err(err) => return Err(err),
            };

            if glyph.ch != ch {
                let found = glyph.ch;
                return Err(PackingError::GlyphOrder { index, expected: ch, found }.into());
            }

            debug!(
                "glyph {ch:?}: {}x{} top {} left {}",
                glyph.width, glyph.height, glyph.bitmap_top, glyph.bitmap_left
            );
            on_glyph(&glyph);
            glyphs.push(glyph);
        }

        Ok(glyphs)
    }
}
