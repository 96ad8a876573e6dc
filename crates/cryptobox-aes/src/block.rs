//! Block representation helpers.
//!
//! A block is the flat serialization of the 4x4 AES state in column-major
//! order: `block[4 * col + row]` holds the state byte at `(row, col)`, so
//! the first four bytes of a block form the first state column.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Number of bytes in a block.
pub const BLOCK_SIZE: usize = 16;

/// XORs `rhs` into `dst` byte by byte.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
