//! Boundary errors surfaced before any block is processed.

use thiserror::Error;

/// Errors reported by the engine's fallible boundaries.
///
/// Every variant is detected at a boundary: key load, ciphertext length
/// check, padding inspection. The round pipeline itself never fails;
/// transform inputs are structurally guaranteed by the fixed 4×4 state
/// shape.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Key length disagrees with the declared key size.
    #[error("key is {actual} bytes but the declared key size needs {expected}")]
    InvalidKeySize {
        /// Byte length the declared key size requires.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },
    /// Key is shorter than the declared key size requires.
    #[error("key is {got} bytes, shorter than the required {needed}")]
    InvalidKeyBytes {
        /// Byte length the declared key size requires.
        needed: usize,
        /// Byte length actually supplied.
        got: usize,
    },
    /// Ciphertext length is not a positive multiple of the block length.
    #[error("ciphertext length {len} is not a positive multiple of 16")]
    MalformedCiphertext {
        /// Offending ciphertext length.
        len: usize,
    },
    /// Decrypted tail bytes do not form consistent padding.
    #[error("decrypted padding bytes are inconsistent")]
    PaddingValidationFailure,
}
