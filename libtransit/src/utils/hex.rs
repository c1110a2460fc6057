//! Hexadecimal helpers.
//!
//! Everything the reader puts on the wire uses the same compact form: two
//! uppercase digits per byte, no separators, no leading-zero suppression.
//! The spaced variant is only used for log output.

use std::fmt::Write;

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0xde, 0x0a]` -> `"DE0A"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Uppercase hex with a single space between bytes, for log lines.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Single uppercase hex digit for the low nibble of `v`.
pub fn nibble_to_hex(v: u8) -> char {
    char::from_digit((v & 0x0f) as u32, 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('0')
}
