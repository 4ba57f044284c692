use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::Builder;

use super::bits::pack_bits;
use super::header::{Encoding, Header, HEADER_LEN};
use crate::atlas::packer::Atlas;
use crate::PackError;

/// Serialize `atlas` into a complete container byte stream.
pub fn encode(atlas: &Atlas, size: u32) -> Result<Vec<u8>, PackError> {
    let pixels = atlas.pixels();
    let encoding = Encoding::classify(pixels);
    let glyph_count = u32::try_from(pixels.len() / atlas.cell_area()).map_err(|_| {
        PackError::Container(format!("{} glyphs do not fit the header", atlas.glyph_count()))
    })?;

    let header = Header {
        encoding,
        size,
        cell_width: atlas.cell_width(),
        cell_height: atlas.cell_height(),
        glyph_count,
    };

    let mut bytes = Vec::with_capacity(HEADER_LEN + encoding.payload_len(pixels.len()));
    bytes.extend_from_slice(&header.to_bytes());
    match encoding {
        Encoding::Bitmap => bytes.extend(pack_bits(pixels)),
        Encoding::Grayscale => bytes.extend_from_slice(pixels),
    }

    Ok(bytes)
}

/// Encode `atlas` and write it to `path`, replacing any existing file only on success.
pub fn write_container(path: &Path, atlas: &Atlas, size: u32) -> Result<Encoding, PackError> {
    let bytes = encode(atlas, size)?;
    write_atomic(path, &bytes)?;

    let encoding = Encoding::classify(atlas.pixels());
    info!(
        "wrote {} ({:?}, {} glyphs of {}x{}, {} bytes)",
        path.display(),
        encoding,
        atlas.glyph_count(),
        atlas.cell_width(),
        atlas.cell_height(),
        bytes.len()
    );
    Ok(encoding)
}

/// Write through a temporary file next to `path`, then rename it into place.
///
/// The result keeps the mode of the file it replaces, or gets the umask default
/// for a fresh file, rather than the owner-only mode of the temporary file.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PackError> {
    let write_error = |source| PackError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        // Filtered through the umask on creation, like `File::create`.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(write_error)?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file().set_permissions(existing.permissions()).map_err(write_error)?;
    }
    file.write_all(bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|err| write_error(err.error))?;
    Ok(())
}
