use super::gf::gf_mul_simple;
use super::state::{Block, State};
use super::util::{add_round_key, apply, sub_byte};
use crate::rijndael::schedule::KeySchedule;
use crate::rijndael::trace::{RoundObserver, Step};

/// MixColumns coefficient matrix.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Forward cipher over one block.
///
/// `round_keys` holds `Nr + 1` keys in ascending order, as produced by
/// [forward_key_schedule](crate::forward_key_schedule). The observer sees the
/// input state and then the state after every transform.
///
/// A bare slice of round keys is not a schedule:
/// ```compile_fail
/// use rijndael::{NoTrace, RoundKey};
/// use rijndael::primitives::encrypt_block;
///
/// let round_keys: [RoundKey; 1] = [[1, 2, 3, 4]];
/// encrypt_block(&[0u8; 16], &round_keys[..], &mut NoTrace);
/// ```
#[inline(always)]
pub fn encrypt_block<O>(plaintext: &Block, round_keys: &KeySchedule, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    let nr = round_keys.rounds();

    let mut state = State::from_block(plaintext);
    observer.input(&state);

    apply(&mut state, 0, Step::AddRoundKey, observer, |s| {
        add_round_key(s, &round_keys[0])
    });

    for (round, round_key) in round_keys.iter().enumerate().take(nr).skip(1) {
        apply(&mut state, round, Step::SubBytes, observer, sub_bytes);
        apply(&mut state, round, Step::ShiftRows, observer, shift_rows);
        apply(&mut state, round, Step::MixColumns, observer, mix_columns);
        apply(&mut state, round, Step::AddRoundKey, observer, |s| {
            add_round_key(s, round_key)
        });
    }

    apply(&mut state, nr, Step::SubBytes, observer, sub_bytes);
    apply(&mut state, nr, Step::ShiftRows, observer, shift_rows);
    apply(&mut state, nr, Step::AddRoundKey, observer, |s| {
        add_round_key(s, &round_keys[nr])
    });

    state.to_block()
}

/// Replaces every byte of the state with its S-box entry.
#[inline(always)]
pub fn sub_bytes(state: &mut State) {
    for row in state.rows_mut() {
        for byte in row {
            *byte = sub_byte(*byte);
        }
    }
}

/// Rotates row `r` left by `r` positions.
#[inline(always)]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

/// Multiplies each column by the MixColumns matrix:
/// ```text
/// 02 03 01 01
/// 01 02 03 01
/// 01 01 02 03
/// 03 01 01 02
/// ```
#[inline(always)]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let column = state.column(col);
        let mixed = MIX.map(|coeffs| {
            coeffs
                .iter()
                .zip(column)
                .fold(0u8, |acc, (&a, b)| acc ^ gf_mul_simple(a, b))
        });
        state.set_column(col, mixed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rijndael::core::state::RoundKey;
    use crate::rijndael::error::Result;
    use crate::rijndael::key::{Key, KeySize};
    use crate::rijndael::schedule::{backward_key_schedule, expand_key, forward_key_schedule};
    use crate::rijndael::trace::NoTrace;

    #[test]
    fn test_mix_columns() {
        // test cases from https://en.wikipedia.org/wiki/Rijndael_MixColumns
        // Note: these are expressed as 4 columns of 4 bytes, the same order as a block.

        let mut test1 = State::from_block(&[
            // col 0
            0x63, 0x47, 0xa2, 0xf0,
            // col 1
            0xf2, 0x0a, 0x22, 0x5c,
            // col 2
            0x01, 0x01, 0x01, 0x01,
            // col 3
            0xc6, 0xc6, 0xc6, 0xc6,
        ]);

        let mut test2 = State::from_block(&[
            // col 0
            0x01, 0x01, 0x01, 0x01,
            // col 1
            0xc6, 0xc6, 0xc6, 0xc6,
            // col 2
            0xd4, 0xd4, 0xd4, 0xd5,
            // col 3
            0x2d, 0x26, 0x31, 0x4c,
        ]);

        mix_columns(&mut test1);
        mix_columns(&mut test2);

        assert_eq!(
            test1.to_block(),
            [
                // col 0
                0x5d, 0xe0, 0x70, 0xbb,
                // col 1
                0x9f, 0xdc, 0x58, 0x9d,
                // col 2
                0x01, 0x01, 0x01, 0x01,
                // col 3
                0xc6, 0xc6, 0xc6, 0xc6,
            ],
            "mix columns test case 1 does not match"
        );

        assert_eq!(
            test2.to_block(),
            [
                // col 0
                0x01, 0x01, 0x01, 0x01,
                // col 1
                0xc6, 0xc6, 0xc6, 0xc6,
                // col 2
                0xd5, 0xd5, 0xd7, 0xd6,
                // col 3
                0x4d, 0x7e, 0xbd, 0xf8,
            ],
            "mix columns test case 2 does not match"
        );
    }

    #[test]
    fn test_shift_rows() {
        let mut state = State::from_block(&[
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ]);

        shift_rows(&mut state);

        assert_eq!(
            state.to_block(),
            [
                // col 0
                0x00, 0x05, 0x0a, 0x0f,
                // col 1
                0x04, 0x09, 0x0e, 0x03,
                // col 2
                0x08, 0x0d, 0x02, 0x07,
                // col 3
                0x0c, 0x01, 0x06, 0x0b,
            ],
            "row r should rotate left by r"
        );
    }

    #[test]
    fn test_encrypt_block_128() -> Result<()> {
        // FIPS-197 Appendix B, round keys from A.1
        let expected_keys: [RoundKey; 11] = [
            [0x2b7e1516, 0x28aed2a6, 0xabf71588, 0x09cf4f3c],
            [0xa0fafe17, 0x88542cb1, 0x23a33939, 0x2a6c7605],
            [0xf2c295f2, 0x7a96b943, 0x5935807a, 0x7359f67f],
            [0x3d80477d, 0x4716fe3e, 0x1e237e44, 0x6d7a883b],
            [0xef44a541, 0xa8525b7f, 0xb671253b, 0xdb0bad00],
            [0xd4d1c6f8, 0x7c839d87, 0xcaf2b8bc, 0x11f915bc],
            [0x6d88a37a, 0x110b3efd, 0xdbf98641, 0xca0093fd],
            [0x4e54f70e, 0x5f5fc9f3, 0x84a64fb2, 0x4ea6dc4f],
            [0xead27321, 0xb58dbad2, 0x312bf560, 0x7f8d292f],
            [0xac7766f3, 0x19fadc21, 0x28d12941, 0x575c006e],
            [0xd014f9a8, 0xc9ee2589, 0xe13f0cc8, 0xb6630ca6],
        ];

        let key = Key::try_from_slice(&[
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, //
            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c, //
        ])?;
        let round_keys = forward_key_schedule(&expand_key(&key));
        assert_eq!(round_keys.as_slice(), &expected_keys[..]);
        assert_eq!(round_keys.rounds(), 10);

        let plaintext: Block = [
            0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, //
            0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34, //
        ];

        let expected: Block = [
            0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, //
            0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a, 0x0b, 0x32, //
        ];

        let actual = encrypt_block(&plaintext, &round_keys, &mut NoTrace);
        assert_eq!(actual, expected, "incorrect AES-128 encryption of block");
        Ok(())
    }

    #[test]
    fn every_schedule_has_a_full_set_of_round_keys() -> Result<()> {
        // a schedule only comes out of key expansion, so its length is always Nr + 1
        for size in [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256] {
            let w = expand_key(&Key::rand_key(size)?);
            for round_keys in [forward_key_schedule(&w), backward_key_schedule(&w)] {
                assert_eq!(round_keys.len(), size.nr() + 1);
                assert_eq!(round_keys.rounds(), size.nr());

                let mut steps = 0;
                let mut count = |_: usize, _: Step, _: &State| steps += 1;
                encrypt_block(&[0u8; 16], &round_keys, &mut count);
                assert_eq!(steps, 4 * size.nr(), "{} rounds expected", size.nr());
            }
        }
        Ok(())
    }
}
