use crate::rijndael::core::{Block, decrypt_block, encrypt_block};
use crate::rijndael::error::{Error, Result};
use crate::rijndael::key::{Key, KeySize};
use crate::rijndael::schedule::{backward_key_schedule, expand_key, forward_key_schedule};
use crate::rijndael::trace::{NoTrace, RoundObserver};

/// Encrypts one 16-byte block with a 16, 24, or 32 byte key.
///
/// Returns [InvalidKeyLength](crate::Error::InvalidKeyLength) or
/// [InvalidBlockLength](crate::Error::InvalidBlockLength) before doing any
/// work if either input has the wrong size.
///
/// ## Examples
/// ```
/// # fn main() -> rijndael::Result<()> {
/// use hex_literal::hex;
///
/// // FIPS-197 Appendix C.1
/// let key = hex!("000102030405060708090a0b0c0d0e0f");
/// let plaintext = hex!("00112233445566778899aabbccddeeff");
///
/// let ciphertext = rijndael::encrypt(&plaintext, &key)?;
/// assert_eq!(ciphertext, hex!("69c4e0d86a7b0430d8cdb78070b4c55a"));
/// assert_eq!(rijndael::decrypt(&ciphertext, &key)?, plaintext);
/// # Ok(())
/// # }
/// ```
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    encrypt_traced(plaintext, key, &mut NoTrace)
}

/// Decrypts one 16-byte block. Same preconditions as [encrypt].
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    decrypt_traced(ciphertext, key, &mut NoTrace)
}

/// [encrypt], reporting the round keys and every intermediate state to `observer`.
pub fn encrypt_traced<O>(plaintext: &[u8], key: &[u8], observer: &mut O) -> Result<Block>
where
    O: RoundObserver + ?Sized,
{
    let key = Key::try_from_slice(key)?;
    let block = to_block(plaintext)?;
    Ok(encrypt_with_key(&block, &key, observer))
}

/// [decrypt], reporting the round keys and every intermediate state to `observer`.
pub fn decrypt_traced<O>(ciphertext: &[u8], key: &[u8], observer: &mut O) -> Result<Block>
where
    O: RoundObserver + ?Sized,
{
    let key = Key::try_from_slice(key)?;
    let block = to_block(ciphertext)?;
    Ok(decrypt_with_key(&block, &key, observer))
}

/// Holds a validated [Key] and encrypts or decrypts single blocks with it.
///
/// Only the key is stored. The schedule is expanded afresh on every call and
/// dropped when the call returns, so a `Cipher` can be shared freely across
/// threads.
///
/// ## Examples
/// ```
/// # fn main() -> rijndael::Result<()> {
/// use rijndael::{Cipher, Key};
///
/// let key = Key::rand_key_192()?;
/// let cipher = Cipher::new(&key);
///
/// let block = *b"sixteen byte msg";
/// let ciphertext = cipher.encrypt_block(&block)?;
/// assert_eq!(cipher.decrypt_block(&ciphertext)?, block);
///
/// // anything other than one block is rejected
/// assert!(cipher.encrypt_block(b"too short").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Cipher {
    key: Key,
}

impl Cipher {
    pub fn new(key: &Key) -> Self {
        Self { key: key.clone() }
    }

    pub fn key_size(&self) -> KeySize {
        self.key.size()
    }

    pub fn encrypt_block(&self, plaintext: &[u8]) -> Result<Block> {
        self.encrypt_block_traced(plaintext, &mut NoTrace)
    }

    pub fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Block> {
        self.decrypt_block_traced(ciphertext, &mut NoTrace)
    }

    pub fn encrypt_block_traced<O>(&self, plaintext: &[u8], observer: &mut O) -> Result<Block>
    where
        O: RoundObserver + ?Sized,
    {
        let block = to_block(plaintext)?;
        Ok(encrypt_with_key(&block, &self.key, observer))
    }

    pub fn decrypt_block_traced<O>(&self, ciphertext: &[u8], observer: &mut O) -> Result<Block>
    where
        O: RoundObserver + ?Sized,
    {
        let block = to_block(ciphertext)?;
        Ok(decrypt_with_key(&block, &self.key, observer))
    }
}

fn encrypt_with_key<O>(block: &Block, key: &Key, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    let round_keys = forward_key_schedule(&expand_key(key));
    observer.schedule(&round_keys);
    encrypt_block(block, &round_keys, observer)
}

fn decrypt_with_key<O>(block: &Block, key: &Key, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    let round_keys = backward_key_schedule(&expand_key(key));
    observer.schedule(&round_keys);
    decrypt_block(block, &round_keys, observer)
}

fn to_block(bytes: &[u8]) -> Result<Block> {
    bytes.try_into().map_err(|_| {
        log::debug!("rejecting {}-byte input, expected one 16-byte block", bytes.len());
        Error::InvalidBlockLength { len: bytes.len() }
    })
}
