use std::ffi::OsString;
use std::path::{Path, PathBuf};

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Container path used when no output is given: the font path with its
/// extension swapped for `.tbf`, or `.tbf` appended for unrecognized extensions.
pub fn default_output_path(input: &Path) -> PathBuf {
    let recognized = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false);

    if recognized {
        input.with_extension("tbf")
    } else {
        let mut path = OsString::from(input.as_os_str());
        path.push(".tbf");
        PathBuf::from(path)
    }
}
