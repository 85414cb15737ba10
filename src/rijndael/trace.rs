//! Optional instrumentation for the cipher rounds.
//!
//! The round transforms never print anything. A caller that wants to see the
//! intermediate values passes a [RoundObserver] to
//! [encrypt_traced](crate::encrypt_traced) or
//! [decrypt_traced](crate::decrypt_traced), which is handed the round keys,
//! the input state, and the state after every transform.
//!
//! ## Examples
//! ```
//! # fn main() -> rijndael::Result<()> {
//! use rijndael::{Recorder, Step};
//!
//! let key = [0u8; 16];
//! let block = [0u8; 16];
//!
//! let mut recorder = Recorder::default();
//! let ciphertext = rijndael::encrypt_traced(&block, &key, &mut recorder)?;
//!
//! // 4 steps per round for AES-128 (10 rounds, counting the initial AddRoundKey)
//! assert_eq!(recorder.steps().len(), 40);
//!
//! // the last recorded state is the ciphertext
//! let (round, step, state) = recorder.steps().last().unwrap();
//! assert_eq!((*round, *step), (10, Step::AddRoundKey));
//! assert_eq!(*state, ciphertext);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::rijndael::core::{Block, RoundKey, State};

/// A named round transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    SubBytes,
    ShiftRows,
    MixColumns,
    AddRoundKey,
    InvSubBytes,
    InvShiftRows,
    InvMixColumns,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::SubBytes => "SubBytes",
            Step::ShiftRows => "ShiftRows",
            Step::MixColumns => "MixColumns",
            Step::AddRoundKey => "AddRoundKey",
            Step::InvSubBytes => "InvSubBytes",
            Step::InvShiftRows => "InvShiftRows",
            Step::InvMixColumns => "InvMixColumns",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Receives the intermediate values of one encryption or decryption.
///
/// `round` is 0 for the initial AddRoundKey and `Nr` for the final round.
/// Observers only get shared references and cannot change the result.
///
/// Any `FnMut(usize, Step, &State)` closure is an observer.
pub trait RoundObserver {
    /// Called once, before the first transform, with the round keys in the
    /// order they are about to be consumed.
    fn schedule(&mut self, _round_keys: &[RoundKey]) {}

    /// Called once with the state built from the input block.
    fn input(&mut self, _state: &State) {}

    /// Called after every transform.
    fn step(&mut self, round: usize, step: Step, state: &State);
}

impl<F> RoundObserver for F
where
    F: FnMut(usize, Step, &State),
{
    fn step(&mut self, round: usize, step: Step, state: &State) {
        self(round, step, state)
    }
}

/// Observer that ignores everything. Used by [encrypt](crate::encrypt) and
/// [decrypt](crate::decrypt).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTrace;

impl RoundObserver for NoTrace {
    #[inline(always)]
    fn step(&mut self, _round: usize, _step: Step, _state: &State) {}
}

/// Observer that writes every value to the `log` facade at trace level.
///
/// States are logged as 32 hex digits in block order, round keys as four
/// 8-digit words.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogTrace;

impl RoundObserver for LogTrace {
    fn schedule(&mut self, round_keys: &[RoundKey]) {
        for (i, round_key) in round_keys.iter().enumerate() {
            log::trace!("round key {i:>2}: {}", format_round_key(round_key));
        }
    }

    fn input(&mut self, state: &State) {
        log::trace!("input           {state:x}");
    }

    fn step(&mut self, round: usize, step: Step, state: &State) {
        log::trace!("round {round:>2} {step:<13} {state:x}");
    }
}

/// Observer that keeps a copy of everything it is shown.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    round_keys: Vec<RoundKey>,
    input: Option<Block>,
    steps: Vec<(usize, Step, Block)>,
}

impl Recorder {
    pub fn round_keys(&self) -> &[RoundKey] {
        &self.round_keys
    }

    /// The state built from the input block.
    pub fn initial_state(&self) -> Option<&Block> {
        self.input.as_ref()
    }

    /// Every `(round, step, state)` in the order they happened.
    pub fn steps(&self) -> &[(usize, Step, Block)] {
        &self.steps
    }

    /// The state after `step` in `round`, if that step ran.
    pub fn state_after(&self, round: usize, step: Step) -> Option<&Block> {
        self.steps
            .iter()
            .find(|(r, s, _)| *r == round && *s == step)
            .map(|(_, _, state)| state)
    }
}

impl RoundObserver for Recorder {
    fn schedule(&mut self, round_keys: &[RoundKey]) {
        self.round_keys = round_keys.to_vec();
    }

    fn input(&mut self, state: &State) {
        self.input = Some(state.to_block());
    }

    fn step(&mut self, round: usize, step: Step, state: &State) {
        self.steps.push((round, step, state.to_block()));
    }
}

/// Renders a round key as four big-endian words, e.g. `a0fafe17 88542cb1 ...`.
pub fn format_round_key(round_key: &RoundKey) -> String {
    round_key
        .iter()
        .map(|w| format!("{w:08x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
