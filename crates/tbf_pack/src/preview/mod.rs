//! Human-viewable sheets of a packed atlas. Not read back by anything.

pub mod bmp;
pub mod grid;
pub mod palette;
pub mod xpm;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::container::encoder::write_atomic;
use crate::PackError;
use bmp::BmpEncoder;
use grid::PreviewGrid;
use xpm::XpmEncoder;

/// An indexed-colour image format a [`PreviewGrid`] can be written in.
pub trait PreviewEncoder {
    /// Suffix appended to the container path, without the dot.
    fn extension(&self) -> &'static str;

    fn encode(&self, grid: &PreviewGrid, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewFormat {
    Xpm,
    Bmp,
}

impl PreviewFormat {
    pub fn encoder(self) -> &'static dyn PreviewEncoder {
        match self {
            PreviewFormat::Xpm => &XpmEncoder,
            PreviewFormat::Bmp => &BmpEncoder,
        }
    }
}

/// `<output>.<ext>`, keeping the container's own extension.
pub fn preview_path(output: &Path, format: PreviewFormat) -> PathBuf {
    let mut path = OsString::from(output.as_os_str());
    path.push(".");
    path.push(format.encoder().extension());
    PathBuf::from(path)
}

/// Write the preview for `format` beside the container at `output`.
pub fn write_preview(
    output: &Path,
    grid: &PreviewGrid,
    format: PreviewFormat,
) -> Result<PathBuf, PackError> {
    let path = preview_path(output, format);
    let mut bytes = Vec::new();
    format
        .encoder()
        .encode(grid, &mut bytes)
        .map_err(|source| PackError::Write { path: path.clone(), source })?;
    write_atomic(&path, &bytes)?;

    info!("wrote {:?} preview {} ({}x{})", format, path.display(), grid.width(), grid.height());
    Ok(path)
}
