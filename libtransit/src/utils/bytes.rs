//! Fixed-width integer extraction and decimal formatting.
//!
//! The extractors read the leading bytes of `buf` and do no length
//! validation of their own: callers check response lengths first, so a
//! short slice here is a programming error and panics on indexing.

/// Interpret the first three bytes as a big-endian unsigned integer.
pub fn be24(buf: &[u8]) -> u32 {
    u32::from_be_bytes([0, buf[0], buf[1], buf[2]])
}

/// Interpret the first four bytes as a big-endian unsigned integer.
pub fn be32(buf: &[u8]) -> u32 {
    u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]])
}

/// Interpret the first four bytes as a little-endian unsigned integer.
pub fn le32(buf: &[u8]) -> u32 {
    u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]])
}

/// Render `value` in base 10, left-padded with `'0'` to at least `width`
/// digits. Wider values are never truncated.
///
/// Example: `zero_padded_decimal(42, 5)` -> `"00042"`
pub fn zero_padded_decimal(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}
