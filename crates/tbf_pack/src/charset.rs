/// Number of printable ASCII characters, `' '` through `'~'`.
pub const GLYPH_COUNT: usize = 95;

/// Printable ASCII in codepoint order. The position in this list is the glyph index.
pub const PRINTABLE_ASCII: [char; GLYPH_COUNT] = printable_ascii();

const fn printable_ascii() -> [char; GLYPH_COUNT] {
    let mut chars = [' '; GLYPH_COUNT];
    let mut i = 0;
    while i < GLYPH_COUNT {
        chars[i] = (0x20 + i as u8) as char;
        i += 1;
    }
    chars
}

/// Ordered set of characters stored in an atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Charset {
    chars: &'static [char],
}

impl Charset {
    pub const fn new(chars: &'static [char]) -> Self {
        Self { chars }
    }

    pub const fn printable_ascii() -> Self {
        Self::new(&PRINTABLE_ASCII)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &'static [char] {
        self.chars
    }

    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == ch)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::printable_ascii()
    }
}
