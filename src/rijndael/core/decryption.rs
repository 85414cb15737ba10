use super::gf::gf_mul_general;
use super::state::{Block, State};
use super::util::{add_round_key, apply, inv_sub_byte};
use crate::rijndael::schedule::KeySchedule;
use crate::rijndael::trace::{RoundObserver, Step};

/// InvMixColumns coefficient matrix, the inverse of the MixColumns matrix.
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Inverse cipher over one block.
///
/// `round_keys` comes from
/// [backward_key_schedule](crate::backward_key_schedule): key 0 here is the
/// last key of encryption. Each inner round runs
/// `InvShiftRows, InvSubBytes, AddRoundKey, InvMixColumns`.
#[inline(always)]
pub fn decrypt_block<O>(ciphertext: &Block, round_keys: &KeySchedule, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    let nr = round_keys.rounds();

    let mut state = State::from_block(ciphertext);
    observer.input(&state);

    apply(&mut state, 0, Step::AddRoundKey, observer, |s| {
        add_round_key(s, &round_keys[0])
    });

    for (round, round_key) in round_keys.iter().enumerate().take(nr).skip(1) {
        apply(&mut state, round, Step::InvShiftRows, observer, inv_shift_rows);
        apply(&mut state, round, Step::InvSubBytes, observer, inv_sub_bytes);
        apply(&mut state, round, Step::AddRoundKey, observer, |s| {
            add_round_key(s, round_key)
        });
        apply(&mut state, round, Step::InvMixColumns, observer, inv_mix_columns);
    }

    apply(&mut state, nr, Step::InvShiftRows, observer, inv_shift_rows);
    apply(&mut state, nr, Step::InvSubBytes, observer, inv_sub_bytes);
    apply(&mut state, nr, Step::AddRoundKey, observer, |s| {
        add_round_key(s, &round_keys[nr])
    });

    state.to_block()
}

/// Replaces every byte of the state with its inverse S-box entry.
#[inline(always)]
pub fn inv_sub_bytes(state: &mut State) {
    for row in state.rows_mut() {
        for byte in row {
            *byte = inv_sub_byte(*byte);
        }
    }
}

/// Rotates row `r` right by `r` positions.
#[inline(always)]
pub fn inv_shift_rows(state: &mut State) {
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        row.rotate_right(r);
    }
}

/// Multiplies each column by the InvMixColumns matrix:
/// ```text
/// 0e 0b 0d 09
/// 09 0e 0b 0d
/// 0d 09 0e 0b
/// 0b 0d 09 0e
/// ```
#[inline(always)]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let column = state.column(col);
        let mixed = INV_MIX.map(|coeffs| {
            coeffs
                .iter()
                .zip(column)
                .fold(0u8, |acc, (&a, b)| acc ^ gf_mul_general(a, b))
        });
        state.set_column(col, mixed);
    }
}
