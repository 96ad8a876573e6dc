//! The four round transformations and their inverses.
//!
//! Every function mutates a single state block in place. State bytes are
//! addressed column-major, so row `r` of column `c` lives at `4 * c + r`.

use crate::block::{xor_in_place, Block};
use crate::gf;
use crate::sbox::{inv_sub, sub};

/// Forward MixColumns matrix.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Inverse MixColumns matrix.
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sub(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sub(*byte);
    }
}

/// Rotates row `r` left by `r` positions. Row 0 is untouched.
#[inline]
pub fn shift_rows(state: &mut Block) {
    for r in 1..4 {
        let row = [state[r], state[4 + r], state[8 + r], state[12 + r]];
        for c in 0..4 {
            state[4 * c + r] = row[(c + r) % 4];
        }
    }
}

/// Rotates row `r` right by `r` positions, undoing [`shift_rows`].
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    for r in 1..4 {
        let row = [state[r], state[4 + r], state[8 + r], state[12 + r]];
        for c in 0..4 {
            state[4 * c + r] = row[(c + 4 - r) % 4];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4], matrix: &[[u8; 4]; 4]) {
    let src = *col;
    for (out, row) in col.iter_mut().zip(matrix.iter()) {
        *out = row
            .iter()
            .zip(src.iter())
            .fold(0u8, |acc, (&m, &s)| acc ^ gf::mul(m, s));
    }
}

/// MixColumns over all four columns independently.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for c in 0..4 {
        let idx = 4 * c;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column, &MIX);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Inverse MixColumns over all four columns independently.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for c in 0..4 {
        let idx = 4 * c;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column, &INV_MIX);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// XORs a round key into the state. Self-inverse.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
