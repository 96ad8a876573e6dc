//! Arithmetic in GF(2^8) with the AES reduction polynomial.

/// Reduction constant for x^8 + x^4 + x^3 + x + 1, truncated to a byte.
pub const REDUCE: u8 = 0x1b;

/// Doubles a field element (multiplication by x).
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCE
    } else {
        shifted
    }
}

/// Multiplies two field elements by repeated doubling.
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}
