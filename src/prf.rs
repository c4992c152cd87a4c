//! Block-cipher PRF used as the FF1 round function.
//!
//! FF1 needs three things from its block cipher: a single-block encryption
//! (CIPH), a CBC-MAC over a whole number of blocks (PRF), and a counter-style
//! expansion of the PRF output when a round needs more than 16 bytes of
//! pseudorandom material. Only CIPH is cipher specific; the other two are
//! provided on top of it by [`BlockPrf`].

use alloc::vec::Vec;

use aes::cipher::{Array, BlockCipherEncrypt, KeyInit, consts::U16};
use aes::{Aes128, Aes192, Aes256};

use crate::common::{BLOCK_LENGTH, Error, MAX_LEN, Result, xor_blocks};
use crate::numeral::xor;

/// Trait for AES ciphers that can back the FF1 PRF.
pub trait AesCipher: BlockCipherEncrypt<BlockSize = U16> + KeyInit + Clone {
    const KEY_LEN: usize;
}

impl AesCipher for Aes128 {
    const KEY_LEN: usize = 16;
}

impl AesCipher for Aes192 {
    const KEY_LEN: usize = 24;
}

impl AesCipher for Aes256 {
    const KEY_LEN: usize = 32;
}

/// The pseudorandom function capability consumed by the Feistel engine.
pub trait BlockPrf {
    /// CIPH: encrypt exactly one 16-byte block.
    fn ciph(&self, block: &[u8]) -> Result<[u8; BLOCK_LENGTH]>;

    /// PRF: CBC-MAC with an all-zero IV over `input`, returning the last block.
    ///
    /// `input` must be a positive multiple of 16 bytes, at most 4096 bytes.
    fn prf(&self, input: &[u8]) -> Result<[u8; BLOCK_LENGTH]> {
        if input.is_empty() || input.len() > MAX_LEN {
            return Err(Error::invalid(
                "PRF input length must be in [1, 4096]",
                input.len(),
            ));
        }
        if input.len() % BLOCK_LENGTH != 0 {
            return Err(Error::invalid(
                "PRF input length must be a multiple of 16",
                input.len(),
            ));
        }

        let mut y = [0u8; BLOCK_LENGTH];
        for chunk in input.chunks_exact(BLOCK_LENGTH) {
            y = self.ciph(&xor(chunk, &y)?)?;
        }
        Ok(y)
    }

    /// Expand a PRF output `r` into `r || CIPH(r ^ [1]^16) || ... || CIPH(r ^ [num_blocks]^16)`.
    fn expand(&self, r: &[u8; BLOCK_LENGTH], num_blocks: usize) -> Result<Vec<u8>> {
        let mut s = Vec::with_capacity((num_blocks + 1) * BLOCK_LENGTH);
        s.extend_from_slice(r);
        for j in 1..=num_blocks {
            let counter = (j as u128).to_be_bytes();
            s.extend_from_slice(&self.ciph(&xor_blocks(r, &counter))?);
        }
        Ok(s)
    }
}

/// [`BlockPrf`] backed by AES in single-block ECB mode, no padding.
///
/// The key schedule is expanded once at construction and wiped on drop.
#[derive(Clone)]
pub struct AesPrf<Aes: AesCipher> {
    cipher: Aes,
}

impl<Aes: AesCipher> AesPrf<Aes> {
    /// Key length in bytes required by this cipher.
    pub const KEY_LENGTH: usize = Aes::KEY_LEN;

    /// Schedule `key` for use as the FF1 round key.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::invalid("key must not be empty", 0));
        }
        if key.len() != Aes::KEY_LEN {
            return Err(Error::invalid(
                "key length must match the AES key size",
                key.len(),
            ));
        }
        let cipher = Aes::new_from_slice(key)
            .map_err(|_| Error::invalid("key length must match the AES key size", key.len()))?;
        Ok(Self { cipher })
    }
}

impl<Aes: AesCipher> BlockPrf for AesPrf<Aes> {
    fn ciph(&self, block: &[u8]) -> Result<[u8; BLOCK_LENGTH]> {
        let bytes: [u8; BLOCK_LENGTH] = block
            .try_into()
            .map_err(|_| Error::invalid("cipher block must be 16 bytes", block.len()))?;
        let mut ga_block: Array<u8, U16> = Array::from(bytes);
        self.cipher.encrypt_block(&mut ga_block);
        Ok(ga_block.into())
    }
}
