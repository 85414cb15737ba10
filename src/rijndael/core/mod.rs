//! Core AES building blocks: field arithmetic, tables, the state, the round
//! transforms, and the forward/inverse cipher over one 16-byte block.

pub mod constants;
mod decryption;
mod encryption;
mod gf;
mod state;
mod util;

pub use decryption::{decrypt_block, inv_mix_columns, inv_shift_rows, inv_sub_bytes};
pub use encryption::{encrypt_block, mix_columns, shift_rows, sub_bytes};
pub use gf::{gf_mul, gf_mul_general, gf_mul_simple, xtime};
pub use state::{Block, RoundKey, State};
pub use util::{add_round_key, inv_sub_byte, rot_word, sub_byte, sub_word};
