//! Key types and the round-count mapping.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::AesError;

/// The three Rijndael key-size variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Classifies a key byte length, rejecting anything but 16/24/32.
    pub fn from_len(len: usize) -> Result<Self, AesError> {
        match len {
            16 => Ok(KeySize::Aes128),
            24 => Ok(KeySize::Aes192),
            32 => Ok(KeySize::Aes256),
            other => Err(AesError::InvalidKeyLength(other)),
        }
    }

    /// Key length in 32-bit words (`Nk`).
    #[inline]
    pub fn nk(self) -> usize {
        match self {
            KeySize::Aes128 => 4,
            KeySize::Aes192 => 6,
            KeySize::Aes256 => 8,
        }
    }

    /// Number of cipher rounds (`Nr`).
    #[inline]
    pub fn rounds(self) -> usize {
        match self {
            KeySize::Aes128 => 10,
            KeySize::Aes192 => 12,
            KeySize::Aes256 => 14,
        }
    }
}

/// An AES key, tagged by size.
///
/// The engine never mutates key material; the bytes are wiped when the
/// value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub enum AesKey {
    /// 16-byte key.
    Aes128([u8; 16]),
    /// 24-byte key.
    Aes192([u8; 24]),
    /// 32-byte key.
    Aes256([u8; 32]),
}

impl AesKey {
    /// Builds a key from raw bytes, classifying it by length.
    pub fn new(bytes: &[u8]) -> Result<Self, AesError> {
        match KeySize::from_len(bytes.len())? {
            KeySize::Aes128 => {
                let mut k = [0u8; 16];
                k.copy_from_slice(bytes);
                Ok(AesKey::Aes128(k))
            }
            KeySize::Aes192 => {
                let mut k = [0u8; 24];
                k.copy_from_slice(bytes);
                Ok(AesKey::Aes192(k))
            }
            KeySize::Aes256 => {
                let mut k = [0u8; 32];
                k.copy_from_slice(bytes);
                Ok(AesKey::Aes256(k))
            }
        }
    }

    /// The size variant of this key.
    #[inline]
    pub fn size(&self) -> KeySize {
        match self {
            AesKey::Aes128(_) => KeySize::Aes128,
            AesKey::Aes192(_) => KeySize::Aes192,
            AesKey::Aes256(_) => KeySize::Aes256,
        }
    }

    /// The raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AesKey::Aes128(k) => k,
            AesKey::Aes192(k) => k,
            AesKey::Aes256(k) => k,
        }
    }
}

impl Zeroize for AesKey {
    fn zeroize(&mut self) {
        match self {
            AesKey::Aes128(k) => k.zeroize(),
            AesKey::Aes192(k) => k.zeroize(),
            AesKey::Aes256(k) => k.zeroize(),
        }
    }
}

impl Drop for AesKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for AesKey {}

impl TryFrom<&[u8]> for AesKey {
    type Error = AesError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        AesKey::new(bytes)
    }
}

/// Expanded round keys: `Nr + 1` groups of four schedule words, each group
/// stored as one 16-byte block ready for `add_round_key`.
///
/// Once produced the schedule is read-only; it may be shared across
/// concurrent block operations using the same key. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: Vec<Block>,
}

impl RoundKeys {
    pub(crate) fn from_blocks(keys: Vec<Block>) -> Self {
        Self { keys }
    }

    /// Returns the round key for the given round (0..=Nr).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.keys[round]
    }

    /// Number of cipher rounds this schedule covers (`Nr`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.keys.len() - 1
    }

    /// Total number of 4-byte schedule words, `4 * (Nr + 1)`.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.keys.len() * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_valid_lengths() {
        assert_eq!(KeySize::from_len(16).unwrap(), KeySize::Aes128);
        assert_eq!(KeySize::from_len(24).unwrap(), KeySize::Aes192);
        assert_eq!(KeySize::from_len(32).unwrap(), KeySize::Aes256);
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0usize, 1, 15, 17, 23, 25, 31, 33, 48] {
            assert_eq!(
                KeySize::from_len(len),
                Err(AesError::InvalidKeyLength(len))
            );
        }
    }

    #[test]
    fn round_count_mapping() {
        assert_eq!(KeySize::Aes128.rounds(), 10);
        assert_eq!(KeySize::Aes192.rounds(), 12);
        assert_eq!(KeySize::Aes256.rounds(), 14);
        assert_eq!(KeySize::Aes128.nk(), 4);
        assert_eq!(KeySize::Aes192.nk(), 6);
        assert_eq!(KeySize::Aes256.nk(), 8);
    }

    #[test]
    fn key_round_trips_bytes() {
        let bytes: Vec<u8> = (0..24).collect();
        let key = AesKey::new(&bytes).unwrap();
        assert_eq!(key.size(), KeySize::Aes192);
        assert_eq!(key.as_bytes(), &bytes[..]);
    }
}
