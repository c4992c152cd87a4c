//! Common definitions shared by the FF1 engine, its PRF and the codecs.

/// Unified error type for all FF1 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key, tweak, radix, length or digit parameter is out of range.
    #[error("invalid argument: {constraint} (got {value})")]
    InvalidArgument {
        /// The violated constraint.
        constraint: &'static str,
        /// The offending value.
        value: usize,
    },
    /// A character is not part of the selected alphabet.
    #[error("character {0:?} is not in the alphabet")]
    InvalidCharacter(char),
    /// A digit value has no character in the selected alphabet.
    #[error("digit value {0} has no character in the alphabet")]
    UnmappedDigit(u16),
    /// An alphabet was built from a character list with repeats.
    #[error("character {0:?} appears more than once in the alphabet")]
    DuplicateCharacter(char),
    /// radix^length is below the minimum domain size of 100.
    #[error("domain too small: radix {radix} with length {length} gives fewer than 100 values")]
    DomainTooSmall {
        /// Radix of the rejected input.
        radix: u32,
        /// Length of the rejected input.
        length: usize,
    },
    /// P || Q for this radix, length and tweak would exceed the 4096-byte PRF input.
    #[error(
        "input too long: radix {radix} with length {length} and a {tweak_length}-byte tweak exceeds the 4096-byte PRF input"
    )]
    InputTooLong {
        /// Radix of the rejected input.
        radix: u32,
        /// Length of the rejected input.
        length: usize,
        /// Tweak length in bytes.
        tweak_length: usize,
    },
}

impl Error {
    pub(crate) const fn invalid(constraint: &'static str, value: usize) -> Self {
        Error::InvalidArgument { constraint, value }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// AES block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix.
pub const MAX_RADIX: u32 = 65536;

/// Shortest numeral string accepted by the engine.
pub const MIN_LEN: usize = 2;

/// Longest numeral string accepted by the engine. Also bounds byte buffers.
pub const MAX_LEN: usize = 4096;

/// Number of Feistel rounds.
pub const NUM_ROUNDS: u8 = 10;

/// Maximum tweak length used when none is configured.
pub const DEFAULT_MAX_TWEAK_LENGTH: usize = 32;

/// Smallest accepted radix^length.
///
/// NIST SP 800-38G asks for a domain of at least one million values; this
/// crate keeps the historical floor of 100 so that existing short identifiers
/// keep working. Callers that need the standard's bound must enforce it.
pub const MIN_DOMAIN_SIZE: u64 = 100;

/// Direction of cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// XOR two 16-byte blocks, storing result in the first argument.
#[inline]
pub fn xor_block(dst: &mut [u8; BLOCK_LENGTH], src: &[u8; BLOCK_LENGTH]) {
    for i in 0..BLOCK_LENGTH {
        dst[i] ^= src[i];
    }
}

/// XOR two 16-byte blocks, returning a new block.
#[inline]
pub fn xor_blocks(a: &[u8; BLOCK_LENGTH], b: &[u8; BLOCK_LENGTH]) -> [u8; BLOCK_LENGTH] {
    let mut result = *a;
    xor_block(&mut result, b);
    result
}

/// Returns true when `radix^length >= MIN_DOMAIN_SIZE`.
pub fn domain_is_large_enough(radix: u32, length: usize) -> bool {
    let mut size: u64 = 1;
    for _ in 0..length {
        size = size.saturating_mul(u64::from(radix));
        if size >= MIN_DOMAIN_SIZE {
            return true;
        }
    }
    size >= MIN_DOMAIN_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_xor_blocks() {
        let a = [0xFFu8; BLOCK_LENGTH];
        let mut b = [0u8; BLOCK_LENGTH];
        b[15] = 0x0F;
        let c = xor_blocks(&a, &b);
        assert_eq!(c[0], 0xFF);
        assert_eq!(c[15], 0xF0);
    }

    #[test]
    fn test_domain_floor() {
        assert!(!domain_is_large_enough(10, 1));
        assert!(domain_is_large_enough(10, 2));
        assert!(!domain_is_large_enough(2, 6));
        assert!(domain_is_large_enough(2, 7));
        assert!(!domain_is_large_enough(1, 4096));
        assert!(domain_is_large_enough(65536, 2));
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid("radix must be in [2, 65536]", 1);
        assert_eq!(
            format!("{}", err),
            "invalid argument: radix must be in [2, 65536] (got 1)"
        );
        assert_eq!(
            format!("{}", Error::InvalidCharacter('$')),
            "character '$' is not in the alphabet"
        );
        assert_eq!(
            format!("{}", Error::DomainTooSmall { radix: 10, length: 1 }),
            "domain too small: radix 10 with length 1 gives fewer than 100 values"
        );
        assert_eq!(
            format!(
                "{}",
                Error::InputTooLong {
                    radix: 65536,
                    length: 4096,
                    tweak_length: 0
                }
            ),
            "input too long: radix 65536 with length 4096 and a 0-byte tweak exceeds the 4096-byte PRF input"
        );
    }
}
