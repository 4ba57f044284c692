use std::fs;
use std::path::Path;

use fontdue::{Font, FontSettings};
use log::debug;

use super::metrics::GlyphMetrics;
use crate::PackError;

/// Source of rendered glyph bitmaps at a nominal pixel size.
pub trait Rasterizer {
    /// Render `ch` with the same pixel size on both axes.
    fn rasterize(&self, ch: char, size: u32) -> Result<GlyphMetrics, PackError>;
}

/// Outline font rasterizer backed by fontdue.
pub struct FontdueRasterizer {
    font: Font,
}

impl FontdueRasterizer {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PackError> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|source| PackError::Read { path: path.to_path_buf(), source })?;
        debug!("read {} bytes of font data from {}", data.len(), path.display());
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, PackError> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|err| PackError::FontLoad(err.to_string()))?;
        Ok(Self { font })
    }
}

impl Rasterizer for FontdueRasterizer {
    fn rasterize(&self, ch: char, size: u32) -> Result<GlyphMetrics, PackError> {
        if self.font.lookup_glyph_index(ch) == 0 {
            return Err(PackError::GlyphRender(ch));
        }

        let (metrics, bitmap) = self.font.rasterize(ch, size as f32);
        let width = u32::try_from(metrics.width).map_err(|_| PackError::GlyphRender(ch))?;
        let height = u32::try_from(metrics.height).map_err(|_| PackError::GlyphRender(ch))?;

        // fontdue measures ymin from the baseline to the bitmap's bottom edge.
        Ok(GlyphMetrics {
            ch,
            bitmap_top: metrics.ymin + height as i32,
            bitmap_left: metrics.xmin,
            width,
            height,
            bitmap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::packer::Atlas;
    use crate::charset::Charset;
    use crate::glyph::extractor::GlyphExtractor;

    fn dejavu_mono() -> FontdueRasterizer {
        FontdueRasterizer::open(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fonts/DejaVuSansMono.ttf"
        ))
        .unwrap()
    }

    #[test]
    fn space_renders_as_empty_glyph() {
        let space = dejavu_mono().rasterize(' ', 16).unwrap();
        assert_eq!((space.width, space.height), (0, 0));
        assert!(space.bitmap.is_empty());
    }

    #[test]
    fn bearings_are_measured_from_the_baseline() {
        let rasterizer = dejavu_mono();

        let a = rasterizer.rasterize('A', 16).unwrap();
        assert!(a.bitmap_top > 0);
        assert_eq!(a.bottom(), 0);
        assert!(a.bitmap_left >= 0);
        assert_eq!(a.bitmap.len(), (a.width * a.height) as usize);

        let g = rasterizer.rasterize('g', 16).unwrap();
        assert!(g.bitmap_top > 0);
        assert!(g.bottom() < 0);
        assert!(g.bitmap_top < a.bitmap_top);
    }

    #[test]
    fn unmapped_character_is_a_render_error() {
        let rasterizer = dejavu_mono();
        assert!(matches!(
            rasterizer.rasterize('\u{10FFFD}', 16),
            Err(PackError::GlyphRender('\u{10FFFD}'))
        ));

        const CHARS: [char; 2] = ['A', '\u{10FFFD}'];
        let glyphs = GlyphExtractor::new(&rasterizer, Charset::new(&CHARS), 16).extract().unwrap();
        assert!(!glyphs[0].is_blank());
        assert_eq!(glyphs[1], GlyphMetrics::empty('\u{10FFFD}'));
    }

    #[test]
    fn monospace_font_packs_printable_ascii() {
        let rasterizer = dejavu_mono();
        let charset = Charset::printable_ascii();
        let glyphs = GlyphExtractor::new(&rasterizer, charset, 16).extract().unwrap();
        let atlas = Atlas::pack(charset, &glyphs).unwrap();

        assert_eq!(atlas.glyph_count(), 95);
        assert!(atlas.cell_width() > 0 && atlas.cell_width() <= 16);
        assert!(atlas.cell_height() >= 16 && atlas.cell_height() <= 32);
        assert!(atlas.cell(0).unwrap().iter().all(|&pixel| pixel == 0));
        assert!(atlas.glyph(charset, 'M').unwrap().iter().any(|&pixel| pixel > 0));
    }

    #[test]
    fn garbage_bytes_are_a_load_error() {
        let result = FontdueRasterizer::from_bytes(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(PackError::FontLoad(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");
        match FontdueRasterizer::open(&path) {
            Err(PackError::Read { path: reported, .. }) => assert_eq!(reported, path),
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("missing font opened"),
        }
    }
}
