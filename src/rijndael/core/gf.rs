//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// The AES reduction polynomial, bit 8 included.
pub const REDUCTION_POLY: u16 = 0x11b;

/// Multiplies `b` by x (i.e. {02}).
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub fn xtime(b: u8) -> u8 {
    (b << 1) ^ (0x1b & (0u8).wrapping_sub((b >> 7) & 1))
}

/// Multiplication by the MixColumns coefficients {01}, {02} and {03}.
///
/// `a` is the coefficient. Anything other than 1 or 2 is taken as {03}, so
/// only call this with entries of the forward MixColumns matrix.
#[inline(always)]
pub fn gf_mul_simple(a: u8, b: u8) -> u8 {
    match a {
        0x01 => b,
        0x02 => xtime(b),
        _ => xtime(b) ^ b,
    }
}

/// Multiplication by the InvMixColumns coefficients {09}, {0b}, {0d}, {0e}.
///
/// Interleaved shift-and-reduce over the low four bits of `a`, most
/// significant first: the accumulator is shifted, `b` is added when the bit
/// is set, and the result is reduced as soon as bit 8 appears. Exact for any
/// `a < 0x10`; higher bits of `a` are ignored.
#[inline(always)]
pub fn gf_mul_general(a: u8, b: u8) -> u8 {
    let b = u16::from(b);
    let mut acc: u16 = 0;

    for bit in (0..4).rev() {
        acc <<= 1;
        if a & (1 << bit) != 0 {
            acc ^= b;
        }
        if acc & 0x100 != 0 {
            acc ^= REDUCTION_POLY;
        }
    }

    acc as u8
}

/// Full GF(2^8) product of two arbitrary bytes.
pub fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}
