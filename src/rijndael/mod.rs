mod cipher;
pub mod core;
mod error;
mod key;
mod schedule;
mod trace;

pub use cipher::{Cipher, decrypt, decrypt_traced, encrypt, encrypt_traced};
pub use error::{Error, Result};
pub use key::{Key, KeySize};
pub use schedule::{
    ExpandedKey, KeySchedule, backward_key_schedule, expand_key, forward_key_schedule,
};
pub use trace::{LogTrace, NoTrace, Recorder, RoundObserver, Step, format_round_key};
