//! Single-block encryption and decryption pipelines.

use crate::block::Block;
use crate::error::AesError;
use crate::key::{AesKey, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;

/// Encrypts a single block with pre-expanded round keys.
///
/// The final round skips MixColumns; this asymmetry is what the decrypt
/// pipeline mirrors to make the two inverses of each other.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(rounds));

    state
}

/// Decrypts a single block with pre-expanded round keys.
///
/// Walks the schedule downward from round `Nr` to 0, applying the inverse
/// primitives in reverse order and skipping inverse MixColumns in the
/// outermost round.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}

fn checked_block(block: &[u8]) -> Result<Block, AesError> {
    Block::try_from(block).map_err(|_| AesError::InvalidBlockLength(block.len()))
}

/// One-shot encryption of a 16-byte block under a raw 16/24/32-byte key.
///
/// Validates both lengths before any computation, expands the key, and
/// runs the forward pipeline.
pub fn cipher(block: &[u8], key: &[u8]) -> Result<Block, AesError> {
    let block = checked_block(block)?;
    let key = AesKey::new(key)?;
    let round_keys = expand_key(&key);
    Ok(encrypt_block(&block, &round_keys))
}

/// One-shot decryption of a 16-byte block under a raw 16/24/32-byte key.
pub fn decipher(block: &[u8], key: &[u8]) -> Result<Block, AesError> {
    let block = checked_block(block)?;
    let key = AesKey::new(key)?;
    let round_keys = expand_key(&key);
    Ok(decrypt_block(&block, &round_keys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const PLAIN: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54,
        0x32, 0x10,
    ];
    const KEY_128: [u8; 16] = [
        0x0f, 0x15, 0x71, 0xc9, 0x47, 0xd9, 0xe8, 0x59, 0x0c, 0xb7, 0xad, 0xd6, 0xaf, 0x7f,
        0x67, 0x98,
    ];
    const CIPHER_128: [u8; 16] = [
        0xff, 0x0b, 0x84, 0x4a, 0x08, 0x53, 0xbf, 0x7c, 0x69, 0x34, 0xab, 0x43, 0x64, 0x14,
        0x8f, 0xb9,
    ];

    // FIPS-197 appendix C.1 vector.
    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
        0x0e, 0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
        0xee, 0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4,
        0xc5, 0x5a,
    ];

    #[test]
    fn encrypt_128_vector() {
        assert_eq!(cipher(&PLAIN, &KEY_128).unwrap(), CIPHER_128);
    }

    #[test]
    fn decrypt_128_vector() {
        assert_eq!(decipher(&CIPHER_128, &KEY_128).unwrap(), PLAIN);
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = AesKey::new(&NIST_KEY).unwrap();
        let round_keys = expand_key(&key);
        assert_eq!(encrypt_block(&NIST_PLAIN, &round_keys), NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let key = AesKey::new(&NIST_KEY).unwrap();
        let round_keys = expand_key(&key);
        assert_eq!(decrypt_block(&NIST_CIPHER, &round_keys), NIST_PLAIN);
    }

    #[test]
    fn vectors_192() {
        let key = hex::decode("9d9be5c21702ee6df16de1a027c11d02ac4c7ff2a2924ba2").unwrap();
        let expected = hex::decode("b7205794969138b7592c88c8498cb5f8").unwrap();
        assert_eq!(cipher(&PLAIN, &key).unwrap().as_slice(), expected);
        assert_eq!(decipher(&expected, &key).unwrap(), PLAIN);
    }

    #[test]
    fn vectors_256() {
        let key = hex::decode("ea6fd5b5394ddaf876a4ccdd20240b675a98241e97617a0bb37e042f31770004")
            .unwrap();
        let expected = hex::decode("b3aa9cf181558bc28e0b4b4cad6194b1").unwrap();
        assert_eq!(cipher(&PLAIN, &key).unwrap().as_slice(), expected);
        assert_eq!(decipher(&expected, &key).unwrap(), PLAIN);
    }

    #[test]
    fn rejects_bad_key_lengths() {
        assert_eq!(
            cipher(&PLAIN, &[0u8; 20]),
            Err(AesError::InvalidKeyLength(20))
        );
        assert_eq!(decipher(&PLAIN, &[]), Err(AesError::InvalidKeyLength(0)));
    }

    #[test]
    fn rejects_bad_block_lengths() {
        assert_eq!(
            cipher(&[0u8; 15], &KEY_128),
            Err(AesError::InvalidBlockLength(15))
        );
        assert_eq!(
            decipher(&[0u8; 17], &KEY_128),
            Err(AesError::InvalidBlockLength(17))
        );
    }

    #[test]
    fn round_trip_random_all_key_sizes() {
        let mut rng = rand::thread_rng();
        for key_len in [16usize, 24, 32] {
            for _ in 0..100 {
                let mut key_bytes = vec![0u8; key_len];
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut key_bytes);
                rng.fill_bytes(&mut block);

                let key = AesKey::new(&key_bytes).unwrap();
                let rks = expand_key(&key);
                let ct = encrypt_block(&block, &rks);
                let pt = decrypt_block(&ct, &rks);
                assert_eq!(pt, block);
            }
        }
    }

    #[test]
    fn schedule_is_shareable_across_blocks() {
        let key = AesKey::new(&KEY_128).unwrap();
        let rks = expand_key(&key);
        let one_shot = cipher(&PLAIN, &KEY_128).unwrap();
        assert_eq!(encrypt_block(&PLAIN, &rks), one_shot);
        assert_eq!(encrypt_block(&PLAIN, &rks), one_shot);
    }
}
