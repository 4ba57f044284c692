use crate::PackError;

/// File tag at the start of every container.
pub const MAGIC: &[u8; 15] = b"TRAMPBALLFONT 1";

/// Magic, encoding flag and four big-endian `u32` fields.
pub const HEADER_LEN: usize = 32;

const BITMAP_FLAG: u8 = b'b';
const GRAYSCALE_FLAG: u8 = 0x00;

/// Pixel storage used by the container payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// One bit per pixel, MSB first; only valid when every pixel is 0 or 255.
    Bitmap,
    /// One byte per pixel.
    Grayscale,
}

impl Encoding {
    pub fn classify(pixels: &[u8]) -> Self {
        if pixels.iter().all(|&p| p == 0 || p == 255) {
            Encoding::Bitmap
        } else {
            Encoding::Grayscale
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            Encoding::Bitmap => BITMAP_FLAG,
            Encoding::Grayscale => GRAYSCALE_FLAG,
        }
    }

    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            BITMAP_FLAG => Some(Encoding::Bitmap),
            GRAYSCALE_FLAG => Some(Encoding::Grayscale),
            _ => None,
        }
    }

    /// Payload bytes needed for `pixel_count` pixels.
    pub fn payload_len(self, pixel_count: usize) -> usize {
        match self {
            Encoding::Bitmap => pixel_count.div_ceil(8),
            Encoding::Grayscale => pixel_count,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub encoding: Encoding,
    /// Nominal pixel size the glyphs were rendered at.
    pub size: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub glyph_count: u32,
}

impl Header {
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[..MAGIC.len()].copy_from_slice(MAGIC);
        bytes[15] = self.encoding.flag();
        bytes[16..20].copy_from_slice(&self.size.to_be_bytes());
        bytes[20..24].copy_from_slice(&self.cell_width.to_be_bytes());
        bytes[24..28].copy_from_slice(&self.cell_height.to_be_bytes());
        bytes[28..32].copy_from_slice(&self.glyph_count.to_be_bytes());
        bytes
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, PackError> {
        if bytes.len() < HEADER_LEN {
            return Err(PackError::Container(format!(
                "header is {} bytes, expected {HEADER_LEN}",
                bytes.len()
            )));
        }

        if &bytes[..MAGIC.len()] != MAGIC {
            return Err(PackError::Container("bad magic".into()));
        }

        let encoding = Encoding::from_flag(bytes[15]).ok_or_else(|| {
            PackError::Container(format!("unknown encoding flag {:#04x}", bytes[15]))
        })?;

        Ok(Self {
            encoding,
            size: read_u32(&bytes[16..20]),
            cell_width: read_u32(&bytes[20..24]),
            cell_height: read_u32(&bytes[24..28]),
            glyph_count: read_u32(&bytes[28..32]),
        })
    }

    /// Total pixels described by the header, `None` if that overflows `usize`.
    pub fn pixel_count(&self) -> Option<usize> {
        (self.glyph_count as usize)
            .checked_mul(self.cell_width as usize)?
            .checked_mul(self.cell_height as usize)
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(Encoding::classify(&[0, 255, 255, 0]), Encoding::Bitmap);
        assert_eq!(Encoding::classify(&[0, 0, 0]), Encoding::Bitmap);
        assert_eq!(Encoding::classify(&[0, 255, 128]), Encoding::Grayscale);
        assert_eq!(Encoding::classify(&[1]), Encoding::Grayscale);
        assert_eq!(Encoding::classify(&[254]), Encoding::Grayscale);
    }

    #[test]
    fn header_layout() {
        let header = Header {
            encoding: Encoding::Bitmap,
            size: 16,
            cell_width: 9,
            cell_height: 0x0102_0304,
            glyph_count: 95,
        };
        let bytes = header.to_bytes();
        assert_eq!(&bytes[..15], b"TRAMPBALLFONT 1");
        assert_eq!(bytes[15], b'b');
        assert_eq!(&bytes[16..20], &[0, 0, 0, 16]);
        assert_eq!(&bytes[20..24], &[0, 0, 0, 9]);
        assert_eq!(&bytes[24..28], &[1, 2, 3, 4]);
        assert_eq!(&bytes[28..32], &[0, 0, 0, 95]);
        assert_eq!(Header::parse(&bytes).unwrap(), header);

        let gray = Header { encoding: Encoding::Grayscale, ..header };
        assert_eq!(gray.to_bytes()[15], 0);
    }

    #[test]
    fn payload_lengths() {
        assert_eq!(Encoding::Bitmap.payload_len(16), 2);
        assert_eq!(Encoding::Bitmap.payload_len(17), 3);
        assert_eq!(Encoding::Grayscale.payload_len(17), 17);

        let header = Header {
            encoding: Encoding::Bitmap,
            size: 16,
            cell_width: 8,
            cell_height: 16,
            glyph_count: 95,
        };
        assert_eq!(header.pixel_count(), Some(95 * 8 * 16));

        let huge =
            Header { cell_width: u32::MAX, cell_height: u32::MAX, glyph_count: u32::MAX, ..header };
        assert_eq!(huge.pixel_count(), None);
    }

    #[test]
    fn rejects_foreign_headers() {
        let mut bytes = Header {
            encoding: Encoding::Grayscale,
            size: 12,
            cell_width: 6,
            cell_height: 12,
            glyph_count: 95,
        }
        .to_bytes();

        assert!(matches!(Header::parse(&bytes[..20]), Err(PackError::Container(_))));

        bytes[15] = b'x';
        assert!(matches!(Header::parse(&bytes), Err(PackError::Container(_))));

        bytes[15] = 0;
        bytes[0] = b'X';
        assert!(matches!(Header::parse(&bytes), Err(PackError::Container(_))));
    }
}
