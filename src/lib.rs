//! FF1 format-preserving encryption (NIST SP 800-38G).
//!
//! FF1 encrypts a numeral string of length n in some radix into another numeral
//! string of the same length and radix, under an AES key and an optional
//! public tweak. It is typically used for structured identifiers such as
//! account numbers or licence numbers, where the ciphertext has to fit the
//! same field as the plaintext.
//!
//! # Layers
//!
//! - [`EncryptionContext`]: string in, string out. Picks radix 10 or 62 from
//!   the input, with AES-256.
//! - [`Ff1`]: the Feistel engine over digit arrays in any radix in
//!   `[2, 65536]`, generic over its [`BlockPrf`].
//! - [`Alphabet`]: character ↔ digit codec.
//! - [`numeral`]: the big-integer and byte-string kernel.
//!
//! # Quick Start
//!
//! ## Encrypting an identifier
//!
//! ```rust
//! use ff1::EncryptionContext;
//!
//! let key = [0u8; 32];
//! let ctx = EncryptionContext::configure(&key, "").unwrap();
//!
//! let ciphertext = ctx.encrypt("1234567890").unwrap();
//! assert_eq!(ciphertext.len(), 10);
//! assert!(ciphertext.chars().all(|c| c.is_ascii_digit()));
//!
//! assert_eq!(ctx.decrypt(&ciphertext).unwrap(), "1234567890");
//! ```
//!
//! ## Using the engine directly
//!
//! ```rust
//! use ff1::Ff1_256;
//!
//! let cipher = Ff1_256::new(&[7u8; 32]).unwrap();
//!
//! // Radix 16 digits
//! let plaintext = [0xd, 0xe, 0xa, 0xd, 0xb, 0xe, 0xe, 0xf];
//! let ciphertext = cipher.encrypt(b"tweak", 16, &plaintext).unwrap();
//! assert!(ciphertext.iter().all(|&d| d < 16));
//!
//! let decrypted = cipher.decrypt(b"tweak", 16, &ciphertext).unwrap();
//! assert_eq!(decrypted, plaintext);
//! ```
//!
//! # Security Considerations
//!
//! - **Small domains**: inputs are accepted once radix^length reaches 100.
//!   NIST SP 800-38G requires at least 1,000,000; enforce that yourself when
//!   it applies.
//! - **Deterministic**: equal plaintexts encrypt to equal ciphertexts under the
//!   same key and tweak.
//! - **No authentication**: use an AEAD if integrity matters.
//! - **Charset on decrypt**: [`EncryptionContext::decrypt`] classifies the
//!   ciphertext again. An alphanumeric value whose ciphertext happens to be all
//!   digits is then decrypted as radix 10 and comes back wrong, without an
//!   error. Keep the plaintext's [`Charset`] and use
//!   [`EncryptionContext::decrypt_as`] for alphanumeric data.
//!
//! # Feature Flags
//!
//! - `std` (default): Enable standard library support
//! - When disabled, the crate is `no_std` compatible (requires `alloc`)

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
pub mod common;
pub mod context;
pub mod ff1;
pub mod numeral;
pub mod prf;

#[cfg(test)]
mod cross_check;

pub use alphabet::{Alphabet, Charset, classify_radix, sanitize};
pub use common::{Error, Result};
pub use context::EncryptionContext;
pub use ff1::{Ff1, Ff1_128, Ff1_192, Ff1_256};
pub use prf::{AesCipher, AesPrf, BlockPrf};
