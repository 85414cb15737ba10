use super::constants::{INV_SBOX, SBOX};
use super::state::{RoundKey, State};
use crate::rijndael::trace::{RoundObserver, Step};

/// S-box lookup: the high nibble picks the row, the low nibble the column.
///
/// ```
/// use rijndael::primitives::{inv_sub_byte, sub_byte};
///
/// // FIPS-197 section 5.1.1
/// assert_eq!(sub_byte(0x53), 0xed);
/// assert_eq!(inv_sub_byte(0xed), 0x53);
/// ```
#[inline(always)]
pub fn sub_byte(x: u8) -> u8 {
    SBOX[(x >> 4) as usize][(x & 0x0f) as usize]
}

/// Inverse S-box lookup, so `inv_sub_byte(sub_byte(x)) == x`.
#[inline(always)]
pub fn inv_sub_byte(x: u8) -> u8 {
    INV_SBOX[(x >> 4) as usize][(x & 0x0f) as usize]
}

/// Applies the S-box to each byte of `w`, keeping byte positions.
#[inline(always)]
pub fn sub_word(w: u32) -> u32 {
    u32::from_be_bytes(w.to_be_bytes().map(sub_byte))
}

/// One-byte cyclic left rotation: `[a0, a1, a2, a3]` becomes `[a1, a2, a3, a0]`.
#[inline(always)]
pub fn rot_word(w: u32) -> u32 {
    w.rotate_left(8)
}

// used for both encryption and decryption
/// XORs word `c` of the round key into column `c`, most significant byte into row 0.
#[inline(always)]
pub fn add_round_key(state: &mut State, round_key: &RoundKey) {
    for (col, word) in round_key.iter().enumerate() {
        let mut column = state.column(col);
        for (byte, key_byte) in column.iter_mut().zip(word.to_be_bytes()) {
            *byte ^= key_byte;
        }
        state.set_column(col, column);
    }
}

/// Runs one transform and reports the resulting state.
#[inline(always)]
pub(crate) fn apply<O, F>(state: &mut State, round: usize, step: Step, observer: &mut O, transform: F)
where
    O: RoundObserver + ?Sized,
    F: FnOnce(&mut State),
{
    transform(state);
    observer.step(round, step, state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_byte_uses_nibbles_as_coordinates() {
        // FIPS-197 section 5.1.1: S-box({53}) = {ed}
        assert_eq!(sub_byte(0x53), 0xed);
        assert_eq!(sub_byte(0x00), 0x63);
        assert_eq!(inv_sub_byte(0xed), 0x53);
        assert_eq!(inv_sub_byte(0x63), 0x00);
    }

    #[test]
    fn sboxes_are_mutual_inverses() {
        for x in 0..=255u8 {
            assert_eq!(inv_sub_byte(sub_byte(x)), x);
            assert_eq!(sub_byte(inv_sub_byte(x)), x);
        }
    }

    #[test]
    fn sub_word_keeps_positions() {
        // FIPS-197 A.1, i = 4: SubWord(RotWord(09cf4f3c)) = 8a84eb01
        assert_eq!(rot_word(0x09cf4f3c), 0xcf4f3c09);
        assert_eq!(sub_word(0xcf4f3c09), 0x8a84eb01);
    }

    #[test]
    fn add_round_key_is_big_endian_per_column() {
        let mut state = State::default();
        add_round_key(&mut state, &[0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f]);
        assert_eq!(
            state.to_block(),
            [
                0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
                0x0d, 0x0e, 0x0f,
            ]
        );

        // xor is its own inverse
        add_round_key(&mut state, &[0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f]);
        assert_eq!(state, State::default());
    }
}
