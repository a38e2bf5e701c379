//! AES-128/AES-256 cipher engine with byte-stream framing.
//!
//! This crate implements the FIPS-197 block cipher and provides:
//! - Rijndael key schedule for 128- and 256-bit keys.
//! - The SubBytes/ShiftRows/MixColumns/AddRoundKey round pipeline over a
//!   4×4 state, with single-block encryption and decryption.
//! - PKCS#7-style framing so the cipher applies to arbitrary-length byte
//!   streams, one independent block at a time (no chaining mode, no IV).
//!
//! The S-box pair, round constants, and GF(2^8) multiplication tables are
//! fixed static data in [`tables`]; the engine never derives them.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod framing;
mod key;
mod round;
mod state;
pub mod tables;

pub use crate::cipher::{decrypt, decrypt_block, encrypt, encrypt_block};
pub use crate::error::Error;
pub use crate::framing::BLOCK_LEN;
pub use crate::key::{KeySchedule, KeySize};
pub use crate::state::State;
