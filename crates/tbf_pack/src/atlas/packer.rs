use log::debug;

use super::geometry::CellGeometry;
use crate::charset::Charset;
use crate::glyph::metrics::GlyphMetrics;
use crate::PackingError;

/// Glyph bitmaps laid out as a flat `[glyph][row][column]` buffer of equally sized cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Atlas {
    cell_width: u32,
    cell_height: u32,
    pixels: Vec<u8>,
}

impl Atlas {
    /// Lay out `glyphs` (one per `charset` entry, same order) on a shared baseline.
    ///
    /// Every glyph is validated before any pixel is copied, so a glyph that would
    /// land outside its cell fails the whole pack instead of being clipped.
    ///
    /// Cells are as wide as the widest bitmap, so this targets monospace fonts.
    /// Proportional fonts, whose glyphs often have negative or overhanging left
    /// bearings, usually fail with [`PackingError::Placement`].
    pub fn pack(charset: Charset, glyphs: &[GlyphMetrics]) -> Result<Self, PackingError> {
        if glyphs.len() != charset.len() {
            return Err(PackingError::GlyphCount { expected: charset.len(), found: glyphs.len() });
        }

        for (index, (glyph, &expected)) in glyphs.iter().zip(charset.chars()).enumerate() {
            if glyph.ch != expected {
                return Err(PackingError::GlyphOrder { index, expected, found: glyph.ch });
            }
        }

        let geometry = CellGeometry::measure(glyphs)?;
        debug!(
            "cell {}x{} (max top {}, min bottom {})",
            geometry.cell_width, geometry.cell_height, geometry.max_top, geometry.min_bottom
        );

        let placements =
            glyphs.iter().map(|glyph| place(&geometry, glyph)).collect::<Result<Vec<_>, _>>()?;

        let cell_width = geometry.cell_width as usize;
        let area = geometry.area();
        let mut pixels = vec![0u8; area * glyphs.len()];

        for (index, (glyph, (x, y))) in glyphs.iter().zip(placements).enumerate() {
            let width = glyph.width as usize;
            if width == 0 {
                continue;
            }

            let cell = &mut pixels[index * area..(index + 1) * area];
            for (row, source) in glyph.bitmap.chunks_exact(width).enumerate() {
                let start = (y + row) * cell_width + x;
                cell[start..start + width].copy_from_slice(source);
            }
        }

        Ok(Self { cell_width: geometry.cell_width, cell_height: geometry.cell_height, pixels })
    }

    /// Rebuild an atlas from a flat pixel buffer, e.g. a decoded container payload.
    ///
    /// Returns `None` unless the buffer holds a whole, non-zero number of cells.
    pub fn from_raw(cell_width: u32, cell_height: u32, pixels: Vec<u8>) -> Option<Self> {
        let area = cell_width as usize * cell_height as usize;
        if area == 0 || pixels.is_empty() || pixels.len() % area != 0 {
            return None;
        }

        Some(Self { cell_width, cell_height, pixels })
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn cell_area(&self) -> usize {
        self.cell_width as usize * self.cell_height as usize
    }

    pub fn glyph_count(&self) -> usize {
        self.pixels.len() / self.cell_area()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Row-major pixels of the cell at `index`.
    pub fn cell(&self, index: usize) -> Option<&[u8]> {
        let area = self.cell_area();
        self.pixels.get(index * area..(index + 1) * area)
    }

    pub fn glyph(&self, charset: Charset, ch: char) -> Option<&[u8]> {
        charset.index_of(ch).and_then(|index| self.cell(index))
    }
}

/// Top-left corner of `glyph` inside its cell.
fn place(geometry: &CellGeometry, glyph: &GlyphMetrics) -> Result<(usize, usize), PackingError> {
    let expected = glyph.width as usize * glyph.height as usize;
    if glyph.bitmap.len() != expected {
        return Err(PackingError::BitmapSize { ch: glyph.ch, expected, found: glyph.bitmap.len() });
    }

    let x = i64::from(glyph.bitmap_left);
    let y = i64::from(geometry.max_top) - i64::from(glyph.bitmap_top);

    // Blank glyphs have no pixels to place.
    if glyph.is_blank() {
        return Ok((0, 0));
    }

    let fits = x >= 0
        && y >= 0
        && x + i64::from(glyph.width) <= i64::from(geometry.cell_width)
        && y + i64::from(glyph.height) <= i64::from(geometry.cell_height);
    if !fits {
        return Err(PackingError::Placement {
            ch: glyph.ch,
            x,
            y,
            width: glyph.width,
            height: glyph.height,
            cell_width: geometry.cell_width,
            cell_height: geometry.cell_height,
        });
    }

    Ok((x as usize, y as usize))
}
