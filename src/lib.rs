//! Single-block AES (Rijndael, FIPS-197) for 128, 192, and 256-bit keys.
//!
//! [encrypt] and [decrypt] take one 16-byte block and a 16, 24, or 32 byte
//! key. There are no modes of operation and no padding. Intermediate round
//! values can be observed through [RoundObserver]. The round transforms and
//! field arithmetic are exposed in [primitives].
//!
//! The implementation favours clarity over speed and is not constant time.

mod rijndael;

pub use rijndael::core as primitives;
pub use rijndael::{
    Cipher, Error, ExpandedKey, Key, KeySchedule, KeySize, LogTrace, NoTrace, Recorder,
    Result, RoundObserver, Step, backward_key_schedule, decrypt, decrypt_traced, encrypt,
    encrypt_traced, expand_key, format_round_key, forward_key_schedule,
};
pub use rijndael::core::{Block, RoundKey, State};
