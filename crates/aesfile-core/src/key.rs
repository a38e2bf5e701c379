//! Key sizes and the Rijndael key schedule.

use crate::error::Error;
use crate::tables::{RCON, SBOX};

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Raw key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes256 => 32,
        }
    }

    /// Number of cipher rounds (`Nr`).
    pub fn num_rounds(self) -> usize {
        match self {
            KeySize::Aes128 => 10,
            KeySize::Aes256 => 14,
        }
    }

    /// Number of 32-bit words in the raw key (`Nk`).
    pub fn key_words(self) -> usize {
        match self {
            KeySize::Aes128 => 4,
            KeySize::Aes256 => 8,
        }
    }

    /// Maps a key length in bits to a key size.
    pub fn from_bits(bits: usize) -> Option<Self> {
        match bits {
            128 => Some(KeySize::Aes128),
            256 => Some(KeySize::Aes256),
            _ => None,
        }
    }
}

/// Expanded round-key words for one raw key.
///
/// Words `0..Nk` are the raw key verbatim; every later word is a pure
/// function of its predecessors. Nothing mutates the schedule after
/// expansion, so it is shared read-only across all block operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    words: Vec<u32>,
    size: KeySize,
}

impl KeySchedule {
    /// Expands `key` into `4 * (Nr + 1)` big-endian round-key words.
    ///
    /// Fails with [`Error::InvalidKeyBytes`] when the key is shorter than
    /// `size` requires, and [`Error::InvalidKeySize`] when the lengths
    /// otherwise disagree.
    pub fn expand(key: &[u8], size: KeySize) -> Result<Self, Error> {
        let expected = size.key_len();
        if key.len() < expected {
            return Err(Error::InvalidKeyBytes {
                needed: expected,
                got: key.len(),
            });
        }
        if key.len() != expected {
            return Err(Error::InvalidKeySize {
                expected,
                actual: key.len(),
            });
        }

        let nk = size.key_words();
        let total = 4 * (size.num_rounds() + 1);
        let mut words = Vec::with_capacity(total);
        for chunk in key.chunks_exact(4) {
            let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
            words.push(u32::from_be_bytes(bytes));
        }

        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
            } else if size == KeySize::Aes256 && i % nk == 4 {
                // Extra substitution at the midpoint of each 8-word key block.
                temp = sub_word(temp);
            }
            words.push(words[i - nk] ^ temp);
        }

        Ok(Self { words, size })
    }

    /// Key size this schedule was expanded from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of cipher rounds the schedule covers.
    pub fn num_rounds(&self) -> usize {
        self.size.num_rounds()
    }

    /// All expanded words: 44 for AES-128, 60 for AES-256.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// The four words consumed by AddRoundKey in round `round` (0..=Nr).
    #[inline]
    pub fn round_key(&self, round: usize) -> [u32; 4] {
        let base = 4 * round;
        self.words[base..base + 4]
            .try_into()
            .expect("schedule covers every round")
    }
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = SBOX[(word >> 24) as usize] as u32;
    let b1 = SBOX[(word >> 16) as u8 as usize] as u32;
    let b2 = SBOX[(word >> 8) as u8 as usize] as u32;
    let b3 = SBOX[word as u8 as usize] as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS-197 appendix A.1 key.
    const KEY_128: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn expansion_matches_fips_appendix_a1() {
        let schedule = KeySchedule::expand(&KEY_128, KeySize::Aes128).unwrap();
        assert_eq!(schedule.words().len(), 44);
        assert_eq!(schedule.words()[0], 0x2b7e1516);
        assert_eq!(schedule.words()[4], 0xa0fafe17);
        assert_eq!(schedule.words()[43], 0xb6630ca6);
    }

    #[test]
    fn expansion_matches_fips_appendix_a3() {
        let key = hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
            .unwrap();
        let schedule = KeySchedule::expand(&key, KeySize::Aes256).unwrap();
        assert_eq!(schedule.words().len(), 60);
        // Word 8 is the first derived word; word 12 passes through the
        // midpoint SubWord branch.
        assert_eq!(schedule.words()[8], 0x9ba35411);
        assert_eq!(schedule.words()[12], 0xa8b09c1a);
        assert_eq!(schedule.words()[59], 0x706c631e);
    }

    #[test]
    fn expansion_is_deterministic() {
        let first = KeySchedule::expand(&KEY_128, KeySize::Aes128).unwrap();
        let second = KeySchedule::expand(&KEY_128, KeySize::Aes128).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn raw_key_prefix_is_preserved() {
        let key: Vec<u8> = (0u8..32).collect();
        let schedule = KeySchedule::expand(&key, KeySize::Aes256).unwrap();
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            let word = u32::from_be_bytes(chunk.try_into().unwrap());
            assert_eq!(schedule.words()[i], word);
        }
    }

    #[test]
    fn short_key_is_rejected() {
        let err = KeySchedule::expand(&[0u8; 12], KeySize::Aes128).unwrap_err();
        assert_eq!(err, Error::InvalidKeyBytes { needed: 16, got: 12 });

        let err = KeySchedule::expand(&[0u8; 16], KeySize::Aes256).unwrap_err();
        assert_eq!(err, Error::InvalidKeyBytes { needed: 32, got: 16 });
    }

    #[test]
    fn oversized_key_is_rejected() {
        let err = KeySchedule::expand(&[0u8; 32], KeySize::Aes128).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidKeySize {
                expected: 16,
                actual: 32
            }
        );
    }

    #[test]
    fn key_size_from_bits() {
        assert_eq!(KeySize::from_bits(128), Some(KeySize::Aes128));
        assert_eq!(KeySize::from_bits(256), Some(KeySize::Aes256));
        assert_eq!(KeySize::from_bits(192), None);
    }
}
