//! FIPS-197 key expansion.

use crate::block::Block;
use crate::key::{AesKey, KeySize, RoundKeys};
use crate::sbox::sub;

/// Round constants: successive powers of x in GF(2^8), high byte of the
/// injected word. RCON[0] corresponds to i/Nk == 1.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let [b0, b1, b2, b3] = word.to_be_bytes();
    u32::from_be_bytes([sub(b0), sub(b1), sub(b2), sub(b3)])
}

/// Expands a key into the full schedule of `4 * (Nr + 1)` words.
///
/// The first `Nk` words are the key itself. Each later word `w[i]` XORs
/// `w[i - Nk]` with a transform of `w[i - 1]`: at multiples of `Nk` the
/// rotate/substitute/round-constant step, and for 256-bit keys only, a
/// plain substitution at `i mod Nk == 4`.
pub fn expand_key(key: &AesKey) -> RoundKeys {
    let nk = key.size().nk();
    let total_words = 4 * (key.size().rounds() + 1);

    let mut w = vec![0u32; total_words];
    for (i, chunk) in key.as_bytes().chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if key.size() == KeySize::Aes256 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let keys = w
        .chunks_exact(4)
        .map(|group| {
            let mut block: Block = [0u8; 16];
            for (word_idx, word) in group.iter().enumerate() {
                block[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&word.to_be_bytes());
            }
            block
        })
        .collect();

    RoundKeys::from_blocks(keys)
}
