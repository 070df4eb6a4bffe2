//! Endianness utility functions

/// Convert a u16 from little-endian byte order to native byte order
pub fn u16_from_le_bytes(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Convert a u16 from native byte order to little-endian bytes
pub fn u16_to_le_bytes(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Pad a minimal little-endian encoding with zero bytes up to `width`.
///
/// Trailing zero bytes of `le` are ignored, so `[5, 0, 0]` fits a width
/// of 1. Returns `None` when the significant bytes do not fit.
pub fn le_bytes_padded(le: &[u8], width: usize) -> Option<Vec<u8>> {
    let significant = le.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    if significant > width {
        return None;
    }
    let mut out = vec![0u8; width];
    out[..significant].copy_from_slice(&le[..significant]);
    Some(out)
}
