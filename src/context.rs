//! String-level FF1 encryption with a fixed key and tweak.
//!
//! An [`EncryptionContext`] owns an AES-256 FF1 engine, the tweak and both
//! built-in alphabets. Each call classifies its input as numeric (radix 10) or
//! alphanumeric (radix 62), encodes it, runs the engine and decodes the result,
//! so ciphertext keeps the length and alphabet of the plaintext.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;
use zeroize::Zeroizing;

use crate::alphabet::{Alphabet, Charset, classify_radix};
use crate::common::{DEFAULT_MAX_TWEAK_LENGTH, Error, MAX_LEN, Result};
use crate::ff1::Ff1_256;

/// Reusable, immutable FF1 configuration.
#[derive(Clone)]
pub struct EncryptionContext {
    engine: Ff1_256,
    tweak: String,
    max_tweak_length: usize,
    numeric: Alphabet,
    alphanumeric: Alphabet,
}

impl EncryptionContext {
    /// Configure a context from a 32-byte key and a tweak of at most 32 characters.
    pub fn configure(key: &[u8], tweak: &str) -> Result<Self> {
        Self::with_max_tweak_length(key, tweak, DEFAULT_MAX_TWEAK_LENGTH)
    }

    /// Configure a context with an explicit tweak length bound, in characters.
    pub fn with_max_tweak_length(key: &[u8], tweak: &str, max_tweak_length: usize) -> Result<Self> {
        if max_tweak_length > MAX_LEN {
            return Err(Error::invalid(
                "maximum tweak length must be in [0, 4096]",
                max_tweak_length,
            ));
        }
        if tweak.len() > MAX_LEN {
            return Err(Error::invalid(
                "tweak must not exceed 4096 UTF-8 bytes",
                tweak.len(),
            ));
        }
        let tweak_chars = tweak.chars().count();
        if tweak_chars > max_tweak_length {
            return Err(Error::invalid(
                "tweak length must not exceed the configured maximum",
                tweak_chars,
            ));
        }

        // The bound is enforced in characters here; the engine sees UTF-8 bytes.
        let engine = Ff1_256::with_max_tweak_length(key, max_tweak_length.max(tweak.len()))?;
        debug!(tweak_chars, max_tweak_length, "configured ff1 context");

        Ok(Self {
            engine,
            tweak: String::from(tweak),
            max_tweak_length,
            numeric: Alphabet::numeric(),
            alphanumeric: Alphabet::alphanumeric(),
        })
    }

    /// Configure a context from a base64-encoded key (usually 44 characters).
    pub fn from_base64_key(encoded_key: &str, tweak: &str) -> Result<Self> {
        let key: Zeroizing<Vec<u8>> = Zeroizing::new(
            STANDARD
                .decode(encoded_key.trim())
                .map_err(|_| Error::invalid("key must be valid base64", encoded_key.len()))?,
        );
        Self::configure(&key, tweak)
    }

    pub fn tweak(&self) -> &str {
        &self.tweak
    }

    pub fn max_tweak_length(&self) -> usize {
        self.max_tweak_length
    }

    fn alphabet(&self, charset: Charset) -> &Alphabet {
        match charset {
            Charset::Numeric => &self.numeric,
            Charset::Alphanumeric => &self.alphanumeric,
        }
    }

    /// Encrypt a numeric or alphanumeric string.
    ///
    /// The alphabet is picked by [`classify_radix`]. Keep that [`Charset`] if
    /// the ciphertext must later go through [`EncryptionContext::decrypt_as`].
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.encrypt_as(plaintext, classify_radix(plaintext))
    }

    /// Decrypt a string, classifying the ciphertext itself.
    ///
    /// This inverts [`EncryptionContext::encrypt`] only when the ciphertext
    /// falls in the same charset as the plaintext. An alphanumeric plaintext
    /// can encrypt to a string of digits, which is then decrypted as radix 10
    /// and yields a wrong result without an error. Use
    /// [`EncryptionContext::decrypt_as`] with the plaintext's charset when
    /// alphanumeric values are involved.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.decrypt_as(ciphertext, classify_radix(ciphertext))
    }

    /// Encrypt `plaintext` in the given charset.
    pub fn encrypt_as(&self, plaintext: &str, charset: Charset) -> Result<String> {
        let alphabet = self.alphabet(charset);
        debug!(?charset, length = plaintext.len(), "encrypt");

        let digits = alphabet.encode(plaintext)?;
        let encrypted = self
            .engine
            .encrypt(self.tweak.as_bytes(), alphabet.radix(), &digits)?;
        alphabet.decode(&encrypted)
    }

    /// Decrypt `ciphertext` in the given charset.
    pub fn decrypt_as(&self, ciphertext: &str, charset: Charset) -> Result<String> {
        let alphabet = self.alphabet(charset);
        debug!(?charset, length = ciphertext.len(), "decrypt");

        let digits = alphabet.encode(ciphertext)?;
        let decrypted = self
            .engine
            .decrypt(self.tweak.as_bytes(), alphabet.radix(), &digits)?;
        alphabet.decode(&decrypted)
    }
}

impl fmt::Debug for EncryptionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionContext")
            .field("tweak", &self.tweak)
            .field("max_tweak_length", &self.max_tweak_length)
            .finish_non_exhaustive()
    }
}
