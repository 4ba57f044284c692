//! One-bit pixel packing for bitmap containers.

/// Pack 0/255 pixels eight to a byte, first pixel in the most significant bit.
///
/// A trailing partial byte is padded with zero bits.
pub fn pack_bits(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &pixel)| byte | (u8::from(pixel != 0) << (7 - i)))
        })
        .collect()
}

/// Expand `pixel_count` pixels from packed bits back to 0/255 values.
///
/// Returns `None` when `bytes` is too short to hold that many pixels.
pub fn unpack_bits(bytes: &[u8], pixel_count: usize) -> Option<Vec<u8>> {
    if bytes.len() < pixel_count.div_ceil(8) {
        return None;
    }

    let pixels = (0..pixel_count)
        .map(|i| if bytes[i / 8] & (0x80 >> (i % 8)) != 0 { 255 } else { 0 })
        .collect();
    Some(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_msb_first() {
        let pixels = [255, 0, 0, 0, 0, 0, 0, 255, 0, 255, 0, 255, 0, 255, 0, 255];
        assert_eq!(pack_bits(&pixels), vec![0b1000_0001, 0b0101_0101]);
    }

    #[test]
    fn pads_partial_byte_with_zeros() {
        assert_eq!(pack_bits(&[255, 255, 255]), vec![0b1110_0000]);
        assert_eq!(pack_bits(&[0; 9]), vec![0, 0]);
        assert!(pack_bits(&[]).is_empty());
    }

    #[test]
    fn unpack_then_pack_is_identity() {
        let packed = vec![0b1011_0010, 0xff, 0x00, 0b1100_0000];
        let pixels = unpack_bits(&packed, 26).unwrap();
        assert_eq!(pixels.len(), 26);
        assert!(pixels.iter().all(|&p| p == 0 || p == 255));
        assert_eq!(&pixels[..8], &[255, 0, 255, 255, 0, 0, 255, 0]);
        assert_eq!(pack_bits(&pixels), packed);
    }

    #[test]
    fn unpack_needs_enough_bytes() {
        assert!(unpack_bits(&[0xff], 9).is_none());
        assert_eq!(unpack_bits(&[0xff], 3), Some(vec![255, 255, 255]));
    }
}
