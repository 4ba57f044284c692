mod atlas;
mod charset;
mod container;
mod glyph;
mod preview;

use std::io;
use std::path::PathBuf;

pub use atlas::{geometry::CellGeometry, packer::Atlas};
pub use charset::{Charset, GLYPH_COUNT, PRINTABLE_ASCII};
pub use container::{
    bits,
    decoder::FontContainer,
    encoder::{encode, write_container},
    header::{Encoding, Header, HEADER_LEN, MAGIC},
    path::default_output_path,
};
pub use glyph::{
    extractor::GlyphExtractor,
    metrics::GlyphMetrics,
    rasterizer::{FontdueRasterizer, Rasterizer},
};
pub use preview::{
    bmp::BmpEncoder,
    grid::PreviewGrid,
    palette::Palette,
    preview_path, write_preview,
    xpm::XpmEncoder,
    PreviewEncoder, PreviewFormat,
};

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load font: {0}")]
    FontLoad(String),
    #[error("no renderable glyph for {0:?}")]
    GlyphRender(char),
    #[error("failed to pack atlas: {0}")]
    Packing(#[from] PackingError),
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid font container: {0}")]
    Container(String),
}

/// Reasons the atlas packer refuses a glyph set.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PackingError {
    #[error("nominal size must be at least one pixel")]
    InvalidSize,
    #[error("expected {expected} glyphs, got {found}")]
    GlyphCount { expected: usize, found: usize },
    #[error("glyph {index} is {found:?}, expected {expected:?}")]
    GlyphOrder { index: usize, expected: char, found: char },
    #[error("degenerate glyph set (max top {max_top}, min bottom {min_bottom}, width {width})")]
    Degenerate { max_top: i32, min_bottom: i32, width: u32 },
    #[error("bitmap for {ch:?} has {found} bytes, expected {expected}")]
    BitmapSize { ch: char, expected: usize, found: usize },
    #[error("glyph {ch:?} ({width}x{height} at {x},{y}) does not fit the {cell_width}x{cell_height} cell")]
    Placement {
        ch: char,
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        cell_width: u32,
        cell_height: u32,
    },
}
