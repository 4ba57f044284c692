use std::fs;
use std::path::Path;

use super::bits::unpack_bits;
use super::header::{Encoding, Header, HEADER_LEN};
use crate::atlas::packer::Atlas;
use crate::charset::Charset;
use crate::PackError;

/// A parsed container with its payload expanded to one byte per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontContainer {
    pub header: Header,
    pub atlas: Atlas,
}

impl FontContainer {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, PackError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|source| PackError::Read { path: path.to_path_buf(), source })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PackError> {
        let header = Header::parse(bytes)?;
        if header.cell_width == 0 || header.cell_height == 0 || header.glyph_count == 0 {
            return Err(PackError::Container(format!(
                "empty atlas ({} glyphs of {}x{})",
                header.glyph_count, header.cell_width, header.cell_height
            )));
        }

        let pixel_count = header
            .pixel_count()
            .ok_or_else(|| PackError::Container("atlas dimensions overflow".into()))?;
        let payload = &bytes[HEADER_LEN..];
        let expected = header.encoding.payload_len(pixel_count);
        if payload.len() != expected {
            return Err(PackError::Container(format!(
                "payload is {} bytes, expected {expected}",
                payload.len()
            )));
        }

        let pixels = match header.encoding {
            Encoding::Bitmap => unpack_bits(payload, pixel_count)
                .ok_or_else(|| PackError::Container("truncated bitmap payload".into()))?,
            Encoding::Grayscale => payload.to_vec(),
        };

        let atlas = Atlas::from_raw(header.cell_width, header.cell_height, pixels)
            .ok_or_else(|| PackError::Container("payload does not hold whole cells".into()))?;
        Ok(Self { header, atlas })
    }

    /// Cell for `ch`; characters outside the stored range use glyph 0.
    pub fn glyph(&self, charset: Charset, ch: char) -> &[u8] {
        let index = charset
            .index_of(ch)
            .filter(|&index| index < self.atlas.glyph_count())
            .unwrap_or(0);
        self.atlas.cell(index).unwrap_or_default()
    }
}
