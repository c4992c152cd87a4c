//! Alphabets mapping between human-readable numeral strings and digit arrays.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{Error, MAX_RADIX, Result};

const NUMERIC: &str = "0123456789";
const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An ordered bijection between characters and digit values `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    index: BTreeMap<char, u16>,
}

impl Alphabet {
    /// Build an alphabet; each character's digit value is its position.
    pub fn new<I: IntoIterator<Item = char>>(characters: I) -> Result<Self> {
        let mut chars = Vec::new();
        let mut index = BTreeMap::new();

        for c in characters {
            if chars.len() >= MAX_RADIX as usize {
                return Err(Error::invalid(
                    "alphabet must not exceed 65536 characters",
                    chars.len() + 1,
                ));
            }
            if index.insert(c, chars.len() as u16).is_some() {
                return Err(Error::DuplicateCharacter(c));
            }
            chars.push(c);
        }
        Ok(Self { chars, index })
    }

    fn from_static(characters: &'static str) -> Self {
        let chars: Vec<char> = characters.chars().collect();
        let index = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u16))
            .collect();
        Self { chars, index }
    }

    /// `0-9`, radix 10.
    pub fn numeric() -> Self {
        Self::from_static(NUMERIC)
    }

    /// `0-9A-Za-z`, radix 62.
    pub fn alphanumeric() -> Self {
        Self::from_static(ALPHANUMERIC)
    }

    /// Number of characters, which is the radix of encoded digit arrays.
    pub fn radix(&self) -> u32 {
        self.chars.len() as u32
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    /// Map every character of `text` to its digit value.
    pub fn encode(&self, text: &str) -> Result<Vec<u16>> {
        text.chars()
            .map(|c| self.index.get(&c).copied().ok_or(Error::InvalidCharacter(c)))
            .collect()
    }

    /// Map every digit value back to its character.
    pub fn decode(&self, digits: &[u16]) -> Result<String> {
        digits
            .iter()
            .map(|&d| {
                self.chars
                    .get(d as usize)
                    .copied()
                    .ok_or(Error::UnmappedDigit(d))
            })
            .collect()
    }
}

/// Character set detected for an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Decimal digits only, radix 10.
    Numeric,
    /// Digits and ASCII letters, radix 62.
    Alphanumeric,
}

impl Charset {
    pub fn radix(self) -> u32 {
        match self {
            Charset::Numeric => 10,
            Charset::Alphanumeric => 62,
        }
    }

    pub fn alphabet(self) -> Alphabet {
        match self {
            Charset::Numeric => Alphabet::numeric(),
            Charset::Alphanumeric => Alphabet::alphanumeric(),
        }
    }
}

/// Pick the character set for `text` from its character codes.
///
/// Any character in the 'A'..='z' code range selects the alphanumeric set;
/// everything else is treated as numeric. Only membership in the resulting
/// alphabet is checked later, so callers should [`sanitize`] first.
pub fn classify_radix(text: &str) -> Charset {
    if text.chars().any(|c| ('A'..='z').contains(&c)) {
        Charset::Alphanumeric
    } else {
        Charset::Numeric
    }
}

/// Remove every character outside `[A-Za-z0-9]`.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_new_assigns_positions() {
        let alphabet = Alphabet::new("abc".chars()).unwrap();
        assert_eq!(alphabet.radix(), 3);
        assert_eq!(alphabet.encode("cab").unwrap(), vec![2, 0, 1]);
        assert_eq!(alphabet.decode(&[1, 1, 0]).unwrap(), "bba");
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert_eq!(
            Alphabet::new("abca".chars()),
            Err(Error::DuplicateCharacter('a'))
        );
    }

    #[test]
    fn test_builtin_alphabets() {
        let numeric = Alphabet::numeric();
        assert_eq!(numeric.radix(), 10);
        assert_eq!(numeric.encode("0123456789").unwrap(), (0..10).collect::<Vec<u16>>());

        let alnum = Alphabet::alphanumeric();
        assert_eq!(alnum.radix(), 62);
        assert_eq!(alnum.encode("9Aaz").unwrap(), vec![9, 10, 36, 61]);
        assert_eq!(alnum, Alphabet::new(ALPHANUMERIC.chars()).unwrap());
    }

    #[test]
    fn test_encode_invalid_character() {
        let numeric = Alphabet::numeric();
        assert_eq!(numeric.encode("12a4"), Err(Error::InvalidCharacter('a')));
        assert_eq!(
            Alphabet::alphanumeric().encode("AB-C"),
            Err(Error::InvalidCharacter('-'))
        );
    }

    #[test]
    fn test_decode_unmapped_digit() {
        assert_eq!(Alphabet::numeric().decode(&[1, 10]), Err(Error::UnmappedDigit(10)));
    }

    #[test]
    fn test_classify_radix() {
        assert_eq!(classify_radix("0123456789"), Charset::Numeric);
        assert_eq!(classify_radix("7693804ABC3407980"), Charset::Alphanumeric);
        assert_eq!(classify_radix("abc"), Charset::Alphanumeric);
        assert_eq!(classify_radix("12$4"), Charset::Numeric);
        assert_eq!(Charset::Numeric.radix(), 10);
        assert_eq!(Charset::Alphanumeric.alphabet().radix(), 62);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("123-45-6789"), "123456789");
        assert_eq!(sanitize("AB c_d!9"), "ABcd9");
        assert_eq!(sanitize("é1"), "1");
    }
}
