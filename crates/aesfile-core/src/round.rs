//! The four round transformations and their inverses.
//!
//! Every function here is a pure value transform: it takes the current
//! [`State`] and returns the next one. The forward and inverse sets are
//! separate functions selected by the pipelines in `cipher`; no direction
//! flag threads through the primitives.

use crate::state::State;
use crate::tables::{INV_SBOX, MUL11, MUL13, MUL14, MUL2, MUL3, MUL9, SBOX};

/// Substitutes every state byte through the forward S-box.
#[inline]
pub fn sub_bytes(state: State) -> State {
    State(state.0.map(|row| row.map(|b| SBOX[b as usize])))
}

/// Substitutes every state byte through the inverse S-box.
#[inline]
pub fn inv_sub_bytes(state: State) -> State {
    State(state.0.map(|row| row.map(|b| INV_SBOX[b as usize])))
}

/// Rotates row `r` left by `r` positions; row 0 never moves.
#[inline]
pub fn shift_rows(state: State) -> State {
    let mut m = state.0;
    for (r, row) in m.iter_mut().enumerate() {
        row.rotate_left(r);
    }
    State(m)
}

/// Rotates row `r` right by `r` positions, exactly undoing [`shift_rows`].
#[inline]
pub fn inv_shift_rows(state: State) -> State {
    let mut m = state.0;
    for (r, row) in m.iter_mut().enumerate() {
        row.rotate_right(r);
    }
    State(m)
}

/// Multiplies every column by the MDS matrix over GF(2^8), with every
/// product drawn from the precomputed MUL tables.
pub fn mix_columns(state: State) -> State {
    let s = state.0;
    let mut m = [[0u8; 4]; 4];
    for c in 0..4 {
        let (a0, a1, a2, a3) = (
            s[0][c] as usize,
            s[1][c] as usize,
            s[2][c] as usize,
            s[3][c] as usize,
        );
        m[0][c] = MUL2[a0] ^ MUL3[a1] ^ s[2][c] ^ s[3][c];
        m[1][c] = s[0][c] ^ MUL2[a1] ^ MUL3[a2] ^ s[3][c];
        m[2][c] = s[0][c] ^ s[1][c] ^ MUL2[a2] ^ MUL3[a3];
        m[3][c] = MUL3[a0] ^ s[1][c] ^ s[2][c] ^ MUL2[a3];
    }
    State(m)
}

/// Multiplies every column by the inverse MDS matrix over GF(2^8).
pub fn inv_mix_columns(state: State) -> State {
    let s = state.0;
    let mut m = [[0u8; 4]; 4];
    for c in 0..4 {
        let (a0, a1, a2, a3) = (
            s[0][c] as usize,
            s[1][c] as usize,
            s[2][c] as usize,
            s[3][c] as usize,
        );
        m[0][c] = MUL14[a0] ^ MUL11[a1] ^ MUL13[a2] ^ MUL9[a3];
        m[1][c] = MUL9[a0] ^ MUL14[a1] ^ MUL11[a2] ^ MUL13[a3];
        m[2][c] = MUL13[a0] ^ MUL9[a1] ^ MUL14[a2] ^ MUL11[a3];
        m[3][c] = MUL11[a0] ^ MUL13[a1] ^ MUL9[a2] ^ MUL14[a3];
    }
    State(m)
}

/// XORs the state with one round key; self-inverse.
///
/// Word `c` of the round key covers column `c`, with byte `r` of the
/// big-endian word landing on row `r`. This orientation must match the
/// key-schedule word layout exactly.
#[inline]
pub fn add_round_key(state: State, round_key: &[u32; 4]) -> State {
    let mut m = state.0;
    for (c, word) in round_key.iter().enumerate() {
        let bytes = word.to_be_bytes();
        for (r, &byte) in bytes.iter().enumerate() {
            m[r][c] ^= byte;
        }
    }
    State(m)
}
