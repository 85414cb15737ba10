//! Key material and the variant it selects.
//!
//! A [`Key`] can only exist with a legal length, so everything downstream of
//! it (expansion, scheduling, the rounds) never has to re-check sizes.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::rijndael::error::{Error, Result};

/// AES variant, selected by key length. Carries the key-schedule parameters
/// so nothing about a call depends on shared state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Selects the variant for a key of `len` bytes.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeySize::Bits128),
            24 => Ok(KeySize::Bits192),
            32 => Ok(KeySize::Bits256),
            _ => Err(Error::InvalidKeyLength { len }),
        }
    }

    /// Key length in bytes.
    pub fn len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub fn nk(self) -> usize {
        match self {
            KeySize::Bits128 => 4,
            KeySize::Bits192 => 6,
            KeySize::Bits256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub fn nr(self) -> usize {
        self.nk() + 6
    }

    pub fn bits(self) -> usize {
        self.len() * 8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Material {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
}

/// A 16, 24, or 32 byte AES key.
///
/// ## Examples
/// ```
/// # fn main() -> rijndael::Result<()> {
/// use rijndael::{Key, KeySize};
///
/// let generated = Key::rand_key(KeySize::Bits256)?;
/// assert_eq!(generated.as_bytes().len(), 32);
///
/// let fips = Key::try_from_slice(&[
///     0x8e, 0x73, 0xb0, 0xf7, 0xda, 0x0e, 0x64, 0x52,
///     0xc8, 0x10, 0xf3, 0x2b, 0x80, 0x90, 0x79, 0xe5,
///     0x62, 0xf8, 0xea, 0xd2, 0x52, 0x2c, 0x6b, 0x7b,
/// ])?;
/// assert_eq!(fips.size(), KeySize::Bits192);
/// assert_eq!((fips.size().nk(), fips.size().nr()), (6, 12));
///
/// // 20 bytes is not an AES key
/// assert!(Key::try_from_slice(&[0u8; 20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    material: Material,
}

fn os_random<const N: usize>() -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    OsRng.try_fill_bytes(&mut buf)?;
    Ok(buf)
}

impl Key {
    /// Fresh 128-bit key from the OS RNG.
    pub fn rand_key_128() -> Result<Self> {
        Self::rand_key(KeySize::Bits128)
    }

    /// Fresh 192-bit key from the OS RNG.
    pub fn rand_key_192() -> Result<Self> {
        Self::rand_key(KeySize::Bits192)
    }

    /// Fresh 256-bit key from the OS RNG.
    pub fn rand_key_256() -> Result<Self> {
        Self::rand_key(KeySize::Bits256)
    }

    /// Fresh key of `size` from the OS RNG. Fails only if the RNG does.
    pub fn rand_key(size: KeySize) -> Result<Self> {
        let material = match size {
            KeySize::Bits128 => Material::Aes128(os_random()?),
            KeySize::Bits192 => Material::Aes192(os_random()?),
            KeySize::Bits256 => Material::Aes256(os_random()?),
        };
        Ok(Self { material })
    }

    /// Copies `bytes` into a key, or returns
    /// [InvalidKeyLength](crate::Error::InvalidKeyLength) if it is not 16,
    /// 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let wrong_len = |_| Error::InvalidKeyLength { len: bytes.len() };
        let material = match KeySize::from_len(bytes.len())? {
            KeySize::Bits128 => Material::Aes128(bytes.try_into().map_err(wrong_len)?),
            KeySize::Bits192 => Material::Aes192(bytes.try_into().map_err(wrong_len)?),
            KeySize::Bits256 => Material::Aes256(bytes.try_into().map_err(wrong_len)?),
        };
        Ok(Self { material })
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.material {
            Material::Aes128(k) => k,
            Material::Aes192(k) => k,
            Material::Aes256(k) => k,
        }
    }

    pub fn size(&self) -> KeySize {
        match self.material {
            Material::Aes128(_) => KeySize::Bits128,
            Material::Aes192(_) => KeySize::Bits192,
            Material::Aes256(_) => KeySize::Bits256,
        }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_follow_key_length() -> Result<()> {
        let cases = [(16, 4, 10), (24, 6, 12), (32, 8, 14)];
        for (len, nk, nr) in cases {
            let size = KeySize::from_len(len)?;
            assert_eq!((size.nk(), size.nr(), size.len()), (nk, nr, len));
            assert_eq!(Key::try_from_slice(&vec![0u8; len])?.size(), size);
        }
        Ok(())
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0, 1, 15, 17, 20, 23, 25, 31, 33, 64] {
            assert!(
                matches!(
                    Key::try_from_slice(&vec![0u8; len]),
                    Err(Error::InvalidKeyLength { len: l }) if l == len
                ),
                "length {len} should be rejected"
            );
        }
    }

    #[test]
    fn slice_is_copied_verbatim() -> Result<()> {
        let bytes: Vec<u8> = (0..32).collect();
        let key = Key::try_from(&bytes[..])?;
        assert_eq!(key.as_bytes(), &bytes[..]);
        Ok(())
    }

    #[test]
    fn random_keys_have_requested_size() -> Result<()> {
        for size in [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256] {
            let key = Key::rand_key(size)?;
            assert_eq!(key.size(), size);
            assert_eq!(key.as_bytes().len(), size.len());
        }
        assert_eq!(Key::rand_key_128()?.size(), KeySize::Bits128);
        assert_eq!(Key::rand_key_192()?.size(), KeySize::Bits192);
        // two random 256-bit keys colliding would mean the RNG is broken
        assert_ne!(Key::rand_key_256()?, Key::rand_key_256()?);
        Ok(())
    }
}
