//! Rijndael/AES block cipher engine for the cryptobox workspace.
//!
//! This crate follows the FIPS-197 specification and provides:
//! - Key schedule for 128-, 192-, and 256-bit keys.
//! - Single-block encryption and decryption (raw ECB, one block per call).
//! - Public types shared across the workspace.
//!
//! The engine is stateless per call: padding, block chaining, and any
//! integrity checking belong to the caller. The implementation aims for
//! clarity and testability rather than constant-time guarantees; it should
//! not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{cipher, decipher, decrypt_block, encrypt_block};
pub use crate::error::AesError;
pub use crate::key::{AesKey, KeySize, RoundKeys};
pub use crate::schedule::expand_key;
