use std::io::{self, Write};

use super::grid::PreviewGrid;
use super::palette::Palette;
use super::PreviewEncoder;

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
/// 72 DPI.
const PIXELS_PER_METER: i32 = 2835;

/// Palettized Windows bitmap with the smallest of 1, 4 or 8 bits per pixel.
#[derive(Clone, Copy, Debug, Default)]
pub struct BmpEncoder;

impl BmpEncoder {
    pub fn bits_per_pixel(colours: usize) -> u16 {
        match colours {
            0..=2 => 1,
            3..=16 => 4,
            _ => 8,
        }
    }
}

impl PreviewEncoder for BmpEncoder {
    fn extension(&self) -> &'static str {
        "bmp"
    }

    fn encode(&self, grid: &PreviewGrid, out: &mut dyn Write) -> io::Result<()> {
        let palette = Palette::from_pixels(grid.pixels());
        let bpp = Self::bits_per_pixel(palette.len());
        let row_len = stride(grid.width(), bpp);
        let image_len = row_len * grid.height() as usize;
        let palette_len = 4 * palette.len() as u32;
        let data_offset = FILE_HEADER_LEN + INFO_HEADER_LEN + palette_len;
        let file_len = data_offset as usize + image_len;
        let too_large = || io::Error::new(io::ErrorKind::InvalidInput, "preview too large for BMP");

        let mut bytes = Vec::with_capacity(file_len);

        bytes.extend_from_slice(b"BM");
        bytes.extend_from_slice(&u32::try_from(file_len).map_err(|_| too_large())?.to_le_bytes());
        bytes.extend_from_slice(&[0; 4]);
        bytes.extend_from_slice(&data_offset.to_le_bytes());

        let width = i32::try_from(grid.width()).map_err(|_| too_large())?;
        let height = i32::try_from(grid.height()).map_err(|_| too_large())?;
        bytes.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
        bytes.extend_from_slice(&width.to_le_bytes());
        // Positive height: rows are stored bottom-up.
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&bpp.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&(image_len as u32).to_le_bytes());
        bytes.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        bytes.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        bytes.extend_from_slice(&(palette.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());

        for &value in palette.values() {
            bytes.extend_from_slice(&[value, value, value, 0]);
        }

        let bpp = usize::from(bpp);
        for row in grid.rows().rev() {
            let mut packed = vec![0u8; row_len];
            for (x, &value) in row.iter().enumerate() {
                let index = palette.index_of(value) as u8;
                let bit = x * bpp;
                packed[bit / 8] |= index << (8 - bpp - bit % 8);
            }
            bytes.extend_from_slice(&packed);
        }

        out.write_all(&bytes)
    }
}

/// Bytes per stored row, padded to a four byte boundary.
fn stride(width: u32, bpp: u16) -> usize {
    (width as usize * usize::from(bpp)).div_ceil(32) * 4
}
