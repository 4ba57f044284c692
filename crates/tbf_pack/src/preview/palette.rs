/// Single-character XPM codes, expanded to pairs when a palette outgrows them.
const SYMBOLS: &str =
    " .,:~/?!#ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Distinct gray levels of an image in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    values: Vec<u8>,
    lookup: [u8; 256],
}

impl Palette {
    pub fn from_pixels(pixels: &[u8]) -> Self {
        let mut present = [false; 256];
        for &pixel in pixels {
            present[pixel as usize] = true;
        }

        let values: Vec<u8> = (0..=255u8).filter(|&value| present[value as usize]).collect();
        let mut lookup = [0u8; 256];
        for (index, &value) in values.iter().enumerate() {
            lookup[value as usize] = index as u8;
        }

        Self { values, lookup }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Palette slot of `value`, which must occur in the source pixels.
    pub fn index_of(&self, value: u8) -> usize {
        self.lookup[value as usize] as usize
    }

    /// Equal-length codes, one per palette entry, in palette order.
    pub fn symbol_codes(&self) -> Vec<String> {
        let base: Vec<String> = SYMBOLS.chars().map(String::from).collect();
        let mut codes = base.clone();
        while codes.len() < self.values.len() {
            codes = codes
                .iter()
                .flat_map(|prefix| base.iter().map(move |suffix| format!("{prefix}{suffix}")))
                .collect();
        }

        codes.truncate(self.values.len());
        codes
    }
}
