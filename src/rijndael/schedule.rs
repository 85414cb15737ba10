//! AES key expansion and round-key scheduling.

use std::ops::Deref;

use crate::rijndael::core::constants::{MAX_ROUNDS, MAX_WORDS, NB, RCON};
use crate::rijndael::core::{RoundKey, rot_word, sub_word};
use crate::rijndael::key::Key;

/// The `Nb * (Nr + 1)` words produced by key expansion.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExpandedKey {
    words: [u32; MAX_WORDS],
    len: usize,
}

impl ExpandedKey {
    pub fn words(&self) -> &[u32] {
        &self.words[..self.len]
    }

    /// Number of rounds (`Nr`) this expansion serves.
    pub fn rounds(&self) -> usize {
        self.len / NB - 1
    }

    fn round_key(&self, round: usize) -> RoundKey {
        let base = round * NB;
        [
            self.words[base],
            self.words[base + 1],
            self.words[base + 2],
            self.words[base + 3],
        ]
    }
}

/// `Nr + 1` round keys in the order a cipher direction consumes them.
///
/// Dereferences to `[RoundKey]`, so `schedule[i]` is the key for round `i`.
/// Only key expansion builds one, so it always holds 11, 13, or 15 keys.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeySchedule {
    round_keys: [RoundKey; MAX_ROUNDS + 1],
    len: usize,
}

impl KeySchedule {
    pub fn round_key(&self, round: usize) -> Option<&RoundKey> {
        self.as_slice().get(round)
    }

    pub fn as_slice(&self) -> &[RoundKey] {
        &self.round_keys[..self.len]
    }

    /// Number of rounds (`Nr`), one less than the number of round keys.
    pub fn rounds(&self) -> usize {
        self.len - 1
    }
}

impl Deref for KeySchedule {
    type Target = [RoundKey];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// AES key expansion (FIPS-197 section 5.2).
///
/// Returns 44, 52, or 60 words for AES-128, AES-192, and AES-256. The first
/// `Nk` words are the key itself, packed big-endian.
pub fn expand_key(key: &Key) -> ExpandedKey {
    let key_bytes = key.as_bytes();

    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key
    // Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
    // Nw   The total number of words generated by the key schedule (including initial key)
    let size = key.size();
    let nk = size.nk();
    let nw = NB * (size.nr() + 1);

    let mut w = [0u32; MAX_WORDS];

    // first nk words of w are filled with the initial key
    for (word, chunk) in w.iter_mut().zip(key_bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..nw {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            // additional substitution for AES-256 only
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    log::debug!("expanded {}-bit key into {nw} words", size.bits());
    ExpandedKey { words: w, len: nw }
}

/// Round key `i` is words `4i..4i+4`, for `i` in `0..=Nr`. Used by encryption.
pub fn forward_key_schedule(w: &ExpandedKey) -> KeySchedule {
    let nr = w.rounds();
    let mut round_keys = [[0u32; NB]; MAX_ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate().take(nr + 1) {
        *round_key = w.round_key(round);
    }
    KeySchedule {
        round_keys,
        len: nr + 1,
    }
}

/// The forward round keys in reverse: key `i` here is forward key `Nr - i`.
/// Used by decryption.
pub fn backward_key_schedule(w: &ExpandedKey) -> KeySchedule {
    let nr = w.rounds();
    let mut round_keys = [[0u32; NB]; MAX_ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate().take(nr + 1) {
        *round_key = w.round_key(nr - round);
    }
    KeySchedule {
        round_keys,
        len: nr + 1,
    }
}
