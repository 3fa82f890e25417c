//! Base38 encoding of short package identifiers.
//!
//! A package id is up to four characters drawn from ` 0-9?a-z`, packed as a
//! base 38 number and right-padded, so `"a"` and `"a   "` encode the same.
//! The encoding fits in 21 bits.

/// Largest encoded value: `38^4 - 1`.
pub const MAX: u32 = 38 * 38 * 38 * 38 - 1;

/// Digit value of a byte, or `None` if the byte is not in the alphabet.
fn digit(b: u8) -> Option<u32> {
    match b {
        b' ' => Some(0),
        b'0'..=b'9' => Some(u32::from(b - b'0') + 1),
        b'?' => Some(11),
        b'a'..=b'z' => Some(u32::from(b - b'a') + 12),
        _ => None,
    }
}

/// Encode up to four characters as a base38 number.
///
/// Returns `None` if `s` is longer than four bytes or contains a byte
/// outside the alphabet.
pub fn encode(s: &str) -> Option<u32> {
    if s.len() > 4 {
        return None;
    }
    let mut u = 0u32;
    for b in s.bytes() {
        u = u * 38 + digit(b)?;
    }
    for _ in s.len()..4 {
        u *= 38;
    }
    Some(u)
}

/// True if `s` is a legal package id: encodable and nonzero.
pub fn is_valid_package_id(s: &str) -> bool {
    matches!(encode(s), Some(u) if u != 0)
}
