//! Error type for caller contract violations.

use thiserror::Error;

/// Errors reported by the cipher engine.
///
/// Both variants are detected before any computation begins; no partial key
/// schedule or partial transform is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AesError {
    /// The supplied key is not 16, 24, or 32 bytes long.
    #[error("invalid key length {0}, expected 16, 24, or 32 bytes")]
    InvalidKeyLength(usize),
    /// The supplied block is not exactly 16 bytes long.
    #[error("invalid block length {0}, expected exactly 16 bytes")]
    InvalidBlockLength(usize),
}
