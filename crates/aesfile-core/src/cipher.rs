//! Block-cipher pipelines and the byte-stream entry points.

use crate::error::Error;
use crate::framing;
use crate::key::{KeySchedule, KeySize};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::state::State;

/// Runs the forward cipher over one 16-byte state.
///
/// MixColumns is omitted in the final round, as FIPS-197 requires.
pub fn encrypt_block(block: State, schedule: &KeySchedule) -> State {
    let rounds = schedule.num_rounds();
    let mut state = add_round_key(block, &schedule.round_key(0));

    for round in 1..rounds {
        state = sub_bytes(state);
        state = shift_rows(state);
        state = mix_columns(state);
        state = add_round_key(state, &schedule.round_key(round));
    }

    state = sub_bytes(state);
    state = shift_rows(state);
    add_round_key(state, &schedule.round_key(rounds))
}

/// Runs the inverse cipher over one 16-byte state, mirroring
/// [`encrypt_block`] exactly.
pub fn decrypt_block(block: State, schedule: &KeySchedule) -> State {
    let rounds = schedule.num_rounds();
    let mut state = add_round_key(block, &schedule.round_key(rounds));

    for round in (1..rounds).rev() {
        state = inv_shift_rows(state);
        state = inv_sub_bytes(state);
        state = add_round_key(state, &schedule.round_key(round));
        state = inv_mix_columns(state);
    }

    state = inv_shift_rows(state);
    state = inv_sub_bytes(state);
    add_round_key(state, &schedule.round_key(0))
}

/// Encrypts `plaintext` of any length under `key`.
///
/// The key expands once; each padded 16-byte block then runs through the
/// forward cipher independently (no chaining, no IV), with block order
/// preserved in the output. The result always carries at least one block
/// of padding.
pub fn encrypt(key: &[u8], size: KeySize, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    let schedule = KeySchedule::expand(key, size)?;
    let blocks = framing::frame(plaintext);
    let mut out = Vec::with_capacity(blocks.len() * framing::BLOCK_LEN);
    for block in blocks {
        let state = encrypt_block(State::from_bytes(&block), &schedule);
        out.extend_from_slice(&state.to_bytes());
    }
    Ok(out)
}

/// Decrypts ciphertext produced by [`encrypt`] under the same key.
///
/// Length and padding problems surface as errors before or after the block
/// pass; no partial output is ever returned.
pub fn decrypt(key: &[u8], size: KeySize, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    let schedule = KeySchedule::expand(key, size)?;
    let blocks = framing::split_blocks(ciphertext)?;
    let mut out = Vec::with_capacity(ciphertext.len());
    for block in blocks {
        let state = decrypt_block(State::from_bytes(&block), &schedule);
        out.extend_from_slice(&state.to_bytes());
    }
    framing::deframe(out)
}
