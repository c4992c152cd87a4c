//! FF1 Feistel engine (NIST SP 800-38G, algorithms 7 and 8).
//!
//! The input numeral string is split into halves A and B. Each of the ten
//! rounds feeds B (A when decrypting) through the PRF, adds (subtracts) the
//! result to the other half modulo radix^m and swaps the halves. Half lengths
//! alternate between u = floor(n/2) and v = n - u, keyed on the round index.
//!
//! Security properties:
//! - Ciphertext length and radix equal those of the plaintext
//! - Deterministic: equal (key, tweak, plaintext) give equal ciphertext
//! - No authentication - consider AEAD if integrity protection is needed

use alloc::vec::Vec;

use aes::{Aes128, Aes192, Aes256};
use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::common::{
    BLOCK_LENGTH, DEFAULT_MAX_TWEAK_LENGTH, Direction, Error, MAX_LEN, MAX_RADIX, MIN_LEN,
    MIN_RADIX, NUM_ROUNDS, Result, domain_is_large_enough,
};
use crate::numeral::{
    byte_array, byte_length, concatenate, mod_big_int, num, num_bytes, pow, str_radix,
};
use crate::prf::{AesCipher, AesPrf, BlockPrf};

/// Length of P || Q for a `t`-byte tweak and `b`-byte halves.
fn prf_input_length(t: usize, b: usize) -> usize {
    BLOCK_LENGTH + (t + 1 + b).div_ceil(BLOCK_LENGTH) * BLOCK_LENGTH
}

/// Generic FF1 cipher, parameterized by its PRF.
#[derive(Clone)]
pub struct Ff1<Prf: BlockPrf> {
    prf: Prf,
    max_tweak_length: usize,
}

/// FF1 over AES-128.
#[allow(non_camel_case_types)]
pub type Ff1_128 = Ff1<AesPrf<Aes128>>;

/// FF1 over AES-192.
#[allow(non_camel_case_types)]
pub type Ff1_192 = Ff1<AesPrf<Aes192>>;

/// FF1 over AES-256.
#[allow(non_camel_case_types)]
pub type Ff1_256 = Ff1<AesPrf<Aes256>>;

impl<Aes: AesCipher> Ff1<AesPrf<Aes>> {
    /// Initialize FF1 from an AES key, accepting tweaks of up to 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_max_tweak_length(key, DEFAULT_MAX_TWEAK_LENGTH)
    }

    /// Initialize FF1 from an AES key with an explicit tweak length bound.
    ///
    /// The bound belongs to this instance only and never changes afterwards.
    pub fn with_max_tweak_length(key: &[u8], max_tweak_length: usize) -> Result<Self> {
        Self::from_prf(AesPrf::new(key)?, max_tweak_length)
    }
}

impl<Prf: BlockPrf> Ff1<Prf> {
    /// Number of Feistel rounds.
    pub const NUM_ROUNDS: u8 = NUM_ROUNDS;

    /// Build an engine around an existing PRF.
    pub fn from_prf(prf: Prf, max_tweak_length: usize) -> Result<Self> {
        if max_tweak_length > MAX_LEN {
            return Err(Error::invalid(
                "maximum tweak length must be in [0, 4096]",
                max_tweak_length,
            ));
        }
        Ok(Self {
            prf,
            max_tweak_length,
        })
    }

    /// Longest tweak, in bytes, this instance accepts.
    pub fn max_tweak_length(&self) -> usize {
        self.max_tweak_length
    }

    /// Encrypt a digit array in the given radix.
    ///
    /// All digits must be in range [0, radix). Output has the same length and
    /// its digits are in the same range.
    pub fn encrypt(&self, tweak: &[u8], radix: u32, plaintext: &[u16]) -> Result<Vec<u16>> {
        self.ff1(tweak, radix, plaintext, Direction::Encrypt)
    }

    /// Decrypt a digit array produced by [`Ff1::encrypt`].
    pub fn decrypt(&self, tweak: &[u8], radix: u32, ciphertext: &[u16]) -> Result<Vec<u16>> {
        self.ff1(tweak, radix, ciphertext, Direction::Decrypt)
    }

    /// Check every parameter and return b, the byte length of NUM of the longer half.
    fn validate(&self, tweak: &[u8], radix: u32, src: &[u16]) -> Result<usize> {
        if tweak.len() > self.max_tweak_length {
            return Err(Error::invalid(
                "tweak length must not exceed the configured maximum",
                tweak.len(),
            ));
        }
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Error::invalid(
                "radix must be in [2, 65536]",
                radix as usize,
            ));
        }
        if !(MIN_LEN..=MAX_LEN).contains(&src.len()) {
            return Err(Error::invalid(
                "input length must be in [2, 4096]",
                src.len(),
            ));
        }
        if let Some(&digit) = src.iter().find(|&&d| u32::from(d) >= radix) {
            return Err(Error::invalid(
                "digit must be less than the radix",
                digit as usize,
            ));
        }
        if !domain_is_large_enough(radix, src.len()) {
            return Err(Error::DomainTooSmall {
                radix,
                length: src.len(),
            });
        }

        let n = src.len();
        let b = byte_length(radix, n - n / 2)?;
        if prf_input_length(tweak.len(), b) > MAX_LEN {
            return Err(Error::InputTooLong {
                radix,
                length: n,
                tweak_length: tweak.len(),
            });
        }
        Ok(b)
    }

    fn ff1(&self, tweak: &[u8], radix: u32, src: &[u16], direction: Direction) -> Result<Vec<u16>> {
        let b = self.validate(tweak, radix, src)?;

        let n = src.len();
        let t = tweak.len();
        let u = n / 2;
        let v = n - u;
        let d = 4 * b.div_ceil(4) + 4;
        let extra_blocks = d.div_ceil(BLOCK_LENGTH) - 1;

        debug!(radix, n, t, ?direction, "ff1");

        let mut p = [0u8; BLOCK_LENGTH];
        p[..3].copy_from_slice(&[1, 2, 1]);
        p[3..6].copy_from_slice(&radix.to_be_bytes()[1..]);
        p[6] = 10;
        p[7] = (u % 256) as u8;
        p[8..12].copy_from_slice(&(n as u32).to_be_bytes());
        p[12..16].copy_from_slice(&(t as u32).to_be_bytes());

        // P || T || 0^((-t-b-1) mod 16); the round byte and NUM of the half follow.
        let mut pq_prefix = concatenate(&p, tweak);
        pq_prefix.resize(prf_input_length(t, b) - 1 - b, 0);

        let mut a = src[..u].to_vec();
        let mut bb = src[u..].to_vec();

        for step in 0..NUM_ROUNDS {
            let i = match direction {
                Direction::Encrypt => step,
                Direction::Decrypt => NUM_ROUNDS - 1 - step,
            };
            let m = if i % 2 == 0 { u } else { v };
            trace!(round = i, m, "ff1 round");

            let fed = match direction {
                Direction::Encrypt => &bb,
                Direction::Decrypt => &a,
            };
            let q_tail = concatenate(&[i], &byte_array(&num(fed, radix)?, b)?);
            let pq = concatenate(&pq_prefix, &q_tail);

            let r = self.prf.prf(&pq)?;
            let mut s = self.prf.expand(&r, extra_blocks)?;
            s.truncate(d);
            let y = BigInt::from(num_bytes(&s));

            let modulus = pow(radix, m);
            match direction {
                Direction::Encrypt => {
                    let sum = BigInt::from(num(&a, radix)?) + y;
                    let c = mod_big_int(&sum, &modulus)?;
                    a = core::mem::replace(&mut bb, str_radix(&c, radix, m)?);
                }
                Direction::Decrypt => {
                    let diff = BigInt::from(num(&bb, radix)?) - y;
                    let c = mod_big_int(&diff, &modulus)?;
                    bb = core::mem::replace(&mut a, str_radix(&c, radix, m)?);
                }
            }
        }

        a.extend_from_slice(&bb);
        Ok(a)
    }
}
