/// A single rendered glyph with FreeType-style bearings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub ch: char,
    /// Rows from the baseline up to the top of the bitmap.
    pub bitmap_top: i32,
    /// Columns from the pen origin to the left edge of the bitmap.
    pub bitmap_left: i32,
    pub width: u32,
    pub height: u32,
    /// Row-major coverage values, `width * height` bytes.
    pub bitmap: Vec<u8>,
}

impl GlyphMetrics {
    /// Zero-sized glyph sitting on the baseline.
    pub fn empty(ch: char) -> Self {
        Self { ch, bitmap_top: 0, bitmap_left: 0, width: 0, height: 0, bitmap: Vec::new() }
    }

    pub fn bottom(&self) -> i32 {
        self.bitmap_top - self.height as i32
    }

    pub fn is_blank(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
