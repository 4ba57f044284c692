use image::{GrayImage, Luma};

use crate::atlas::packer::Atlas;

/// Atlas cells tiled left to right, top to bottom, in glyph order.
#[derive(Clone, Debug)]
pub struct PreviewGrid {
    image: GrayImage,
}

impl PreviewGrid {
    /// Cells per grid row.
    pub const COLUMNS: u32 = 10;

    pub fn from_atlas(atlas: &Atlas) -> Self {
        let cell_width = atlas.cell_width();
        let cell_height = atlas.cell_height();
        let rows = (atlas.glyph_count() as u32).div_ceil(Self::COLUMNS);
        let mut image = GrayImage::new(Self::COLUMNS * cell_width, rows * cell_height);

        for index in 0..atlas.glyph_count() {
            let Some(cell) = atlas.cell(index) else { break };
            let left = (index as u32 % Self::COLUMNS) * cell_width;
            let top = (index as u32 / Self::COLUMNS) * cell_height;

            for (offset, &value) in cell.iter().enumerate() {
                let x = left + offset as u32 % cell_width;
                let y = top + offset as u32 / cell_width;
                image.put_pixel(x, y, Luma([value]));
            }
        }

        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Pixel rows from the top.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u8]> + '_ {
        self.image.as_raw().chunks(self.image.width() as usize)
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ninety_five_glyphs_make_a_ten_by_ten_sheet() {
        let pixels = (0..95u32).flat_map(|i| [i as u8; 6]).collect();
        let atlas = Atlas::from_raw(2, 3, pixels).unwrap();
        let grid = PreviewGrid::from_atlas(&atlas);

        assert_eq!((grid.width(), grid.height()), (20, 30));
        // Glyph 23 lives in grid row 2, column 3.
        assert_eq!(grid.image().get_pixel(6, 6).0, [23]);
        assert_eq!(grid.image().get_pixel(7, 8).0, [23]);
        // Unused trailing cells stay blank.
        assert_eq!(grid.image().get_pixel(19, 29).0, [0]);
        assert_eq!(grid.image().get_pixel(9, 27).0, [94]);
    }

    #[test]
    fn rows_follow_cell_layout() {
        let atlas = Atlas::from_raw(1, 2, vec![1, 2, 3, 4]).unwrap();
        let grid = PreviewGrid::from_atlas(&atlas);
        let rows: Vec<&[u8]> = grid.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[1, 3, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(rows[1], &[2, 4, 0, 0, 0, 0, 0, 0, 0, 0]);
    }
}
