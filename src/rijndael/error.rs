use rand::rand_core;
use thiserror::Error;

/// Rijndael Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Rijndael Error type.
///
/// Every variant is a precondition failure detected before any round runs;
/// nothing is partially encrypted or decrypted.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to use a key that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Attempted to encrypt or decrypt an input that is not exactly one block.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength { len: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
