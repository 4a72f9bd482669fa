//! Base-62 encoding of unsigned integers.

/// Digits in ascending value order: `0-9`, then `a-z`, then `A-Z`.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// Encodes `value` as a base-62 string without leading zeros.
///
/// Zero encodes as `"0"`.
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return String::from("0");
    }

    // u64::MAX needs 11 base-62 digits
    let mut digits = Vec::with_capacity(11);
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}
