use std::io::{self, Write};

use super::grid::PreviewGrid;
use super::palette::Palette;
use super::PreviewEncoder;

/// XPM image written as a C array of strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct XpmEncoder;

impl PreviewEncoder for XpmEncoder {
    fn extension(&self) -> &'static str {
        "xpm"
    }

    fn encode(&self, grid: &PreviewGrid, out: &mut dyn Write) -> io::Result<()> {
        let palette = Palette::from_pixels(grid.pixels());
        let codes = palette.symbol_codes();
        let chars_per_pixel = codes.first().map_or(1, String::len);

        writeln!(out, "/* XPM */")?;
        writeln!(out, "static char * font_demo_xpm[] = {{")?;
        writeln!(
            out,
            "\"{} {} {} {}\",",
            grid.width(),
            grid.height(),
            palette.len(),
            chars_per_pixel
        )?;

        for (value, code) in palette.values().iter().zip(&codes) {
            writeln!(out, "\"{code}\tc #{value:02x}{value:02x}{value:02x}\",")?;
        }

        let height = grid.height() as usize;
        for (index, row) in grid.rows().enumerate() {
            let line: String =
                row.iter().map(|&value| codes[palette.index_of(value)].as_str()).collect();
            let terminator = if index + 1 == height { "};" } else { "," };
            writeln!(out, "\"{line}\"{terminator}")?;
        }

        Ok(())
    }
}
