//! Byte-stream framing: block assembly and PKCS#7-style padding.

use crate::error::Error;

/// Cipher block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// Splits plaintext into padded 16-byte blocks.
///
/// The pad byte value doubles as the pad count (1..=16). A full padding
/// block is appended when the input length is already a multiple of 16,
/// the empty input included; the final block is therefore always a padding
/// block.
pub fn frame(bytes: &[u8]) -> Vec<[u8; BLOCK_LEN]> {
    let pad = BLOCK_LEN - bytes.len() % BLOCK_LEN;
    let mut blocks = Vec::with_capacity(bytes.len() / BLOCK_LEN + 1);
    let mut chunks = bytes.chunks_exact(BLOCK_LEN);
    for chunk in &mut chunks {
        blocks.push(chunk.try_into().expect("chunk length is sixteen"));
    }

    let mut last = [pad as u8; BLOCK_LEN];
    let remainder = chunks.remainder();
    last[..remainder.len()].copy_from_slice(remainder);
    blocks.push(last);
    blocks
}

/// Splits ciphertext into exact 16-byte blocks.
///
/// Fails with [`Error::MalformedCiphertext`] when the length is zero or not
/// a multiple of 16: a well-formed stream carries at least the padding
/// block.
pub fn split_blocks(bytes: &[u8]) -> Result<Vec<[u8; BLOCK_LEN]>, Error> {
    if bytes.is_empty() || bytes.len() % BLOCK_LEN != 0 {
        return Err(Error::MalformedCiphertext { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(BLOCK_LEN)
        .map(|chunk| chunk.try_into().expect("chunk length is sixteen"))
        .collect())
}

/// Strips the trailing padding from recovered plaintext.
///
/// The final byte names the pad count `p`; `p` must lie in 1..=16 and the
/// last `p` bytes must all equal `p`. Anything else fails with
/// [`Error::PaddingValidationFailure`].
pub fn deframe(mut bytes: Vec<u8>) -> Result<Vec<u8>, Error> {
    let &last = bytes.last().ok_or(Error::PaddingValidationFailure)?;
    let pad = last as usize;
    if !(1..=BLOCK_LEN).contains(&pad) || bytes.len() < pad {
        return Err(Error::PaddingValidationFailure);
    }
    if bytes[bytes.len() - pad..].iter().any(|&b| b != last) {
        return Err(Error::PaddingValidationFailure);
    }
    bytes.truncate(bytes.len() - pad);
    Ok(bytes)
}
