use crate::glyph::metrics::GlyphMetrics;
use crate::PackingError;

/// Shared cell size spanning the tallest ascent and deepest descent of a glyph set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGeometry {
    /// Highest `bitmap_top` of any glyph; row 0 of every cell sits here.
    pub max_top: i32,
    /// Lowest `bitmap_top - height` of any glyph.
    pub min_bottom: i32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl CellGeometry {
    pub fn measure(glyphs: &[GlyphMetrics]) -> Result<Self, PackingError> {
        let max_top = glyphs.iter().map(|glyph| glyph.bitmap_top).max();
        let min_bottom = glyphs.iter().map(GlyphMetrics::bottom).min();
        let cell_width = glyphs.iter().map(|glyph| glyph.width).max().unwrap_or(0);

        let (Some(max_top), Some(min_bottom)) = (max_top, min_bottom) else {
            return Err(PackingError::Degenerate { max_top: 0, min_bottom: 0, width: 0 });
        };

        let span = i64::from(max_top) - i64::from(min_bottom);
        let cell_height = match u32::try_from(span) {
            Ok(height) if height > 0 && cell_width > 0 => height,
            _ => {
                return Err(PackingError::Degenerate { max_top, min_bottom, width: cell_width });
            },
        };

        Ok(Self { max_top, min_bottom, cell_width, cell_height })
    }

    pub fn area(&self) -> usize {
        self.cell_width as usize * self.cell_height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char, top: i32, width: u32, height: u32) -> GlyphMetrics {
        GlyphMetrics {
            ch,
            bitmap_top: top,
            bitmap_left: 0,
            width,
            height,
            bitmap: vec![0; (width * height) as usize],
        }
    }

    #[test]
    fn spans_ascent_to_descent() {
        let glyphs = [
            GlyphMetrics::empty(' '),
            glyph('A', 10, 7, 10),
            glyph('g', 7, 6, 10),
            glyph('-', 4, 5, 1),
        ];
        let geometry = CellGeometry::measure(&glyphs).unwrap();
        assert_eq!(geometry.max_top, 10);
        assert_eq!(geometry.min_bottom, -3);
        assert_eq!(geometry.cell_height, 13);
        assert_eq!(geometry.cell_width, 7);
        assert_eq!(geometry.area(), 91);

        for glyph in &glyphs {
            assert!(geometry.cell_width >= glyph.width);
            assert!(geometry.cell_height >= glyph.height);
        }
    }

    #[test]
    fn blank_glyph_set_is_degenerate() {
        let glyphs = [GlyphMetrics::empty(' '), GlyphMetrics::empty('!')];
        assert_eq!(
            CellGeometry::measure(&glyphs),
            Err(PackingError::Degenerate { max_top: 0, min_bottom: 0, width: 0 })
        );
    }

    #[test]
    fn empty_input_is_degenerate() {
        assert!(matches!(CellGeometry::measure(&[]), Err(PackingError::Degenerate { .. })));
    }

    #[test]
    fn zero_width_cell_is_degenerate() {
        let glyphs = [glyph('|', 5, 0, 5)];
        assert!(matches!(CellGeometry::measure(&glyphs), Err(PackingError::Degenerate { .. })));
    }
}
