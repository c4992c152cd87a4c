//! Arbitrary-precision numeral and byte-string arithmetic used by FF1.
//!
//! FF1 moves between three representations of the same value: digit arrays in
//! some radix (most significant digit first), unsigned big integers, and
//! fixed-width big-endian byte strings. The functions here convert between
//! them and provide the handful of byte operations the round function needs.
//!
//! Values routinely exceed 64 bits (radix 65536 over 2048 digits is a
//! 32768-bit number), so everything is built on `num-bigint`.

use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};

use crate::common::{Error, MAX_LEN, MAX_RADIX, MIN_RADIX, Result};

fn check_radix(radix: u32) -> Result<()> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Error::invalid(
            "radix must be in [2, 65536]",
            radix as usize,
        ));
    }
    Ok(())
}

/// Encode `x` as a big-endian byte string of exactly `s` bytes.
///
/// Fails if `s` is outside `[1, 4096]` or if `x` does not fit in `s` bytes.
pub fn byte_array(x: &BigUint, s: usize) -> Result<Vec<u8>> {
    if !(1..=MAX_LEN).contains(&s) {
        return Err(Error::invalid("byte string length must be in [1, 4096]", s));
    }

    let bytes = x.to_bytes_be();
    if x.is_zero() {
        return Ok(alloc::vec![0u8; s]);
    }
    if bytes.len() > s {
        return Err(Error::invalid(
            "value must be less than 256^s (bytes needed)",
            bytes.len(),
        ));
    }

    let mut out = alloc::vec![0u8; s];
    out[s - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Return a new byte string holding `x` followed by `y`.
pub fn concatenate(x: &[u8], y: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(x.len() + y.len());
    out.extend_from_slice(x);
    out.extend_from_slice(y);
    out
}

/// Byte-wise XOR of two equal-length, non-empty byte strings.
pub fn xor(x: &[u8], y: &[u8]) -> Result<Vec<u8>> {
    for len in [x.len(), y.len()] {
        if !(1..=MAX_LEN).contains(&len) {
            return Err(Error::invalid(
                "xor operand length must be in [1, 4096]",
                len,
            ));
        }
    }
    if x.len() != y.len() {
        return Err(Error::invalid(
            "xor operands must have the same length",
            y.len(),
        ));
    }
    Ok(x.iter().zip(y).map(|(a, b)| a ^ b).collect())
}

/// NUM_radix: interpret a most-significant-first digit array as an integer.
pub fn num(digits: &[u16], radix: u32) -> Result<BigUint> {
    check_radix(radix)?;
    if !(1..=MAX_LEN).contains(&digits.len()) {
        return Err(Error::invalid(
            "numeral length must be in [1, 4096]",
            digits.len(),
        ));
    }

    let base = BigUint::from(radix);
    let mut x = BigUint::zero();
    for &d in digits {
        if u32::from(d) >= radix {
            return Err(Error::invalid("digit must be less than the radix", d as usize));
        }
        x *= &base;
        x += d;
    }
    Ok(x)
}

/// NUM: interpret a byte string as a big-endian unsigned integer.
#[inline]
pub fn num_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// STR^m_radix: the `m`-digit, most-significant-first representation of `x`.
///
/// Fails if `x >= radix^m`.
pub fn str_radix(x: &BigUint, radix: u32, m: usize) -> Result<Vec<u16>> {
    check_radix(radix)?;
    if !(1..=MAX_LEN).contains(&m) {
        return Err(Error::invalid("numeral length must be in [1, 4096]", m));
    }

    let base = BigUint::from(radix);
    let mut rest = x.clone();
    let mut out = alloc::vec![0u16; m];
    for slot in out.iter_mut().rev() {
        if rest.is_zero() {
            break;
        }
        let digit = &rest % &base;
        *slot = digit
            .to_u16()
            .ok_or(Error::invalid("digit must fit in 16 bits", radix as usize))?;
        rest /= &base;
    }

    if !rest.is_zero() {
        return Err(Error::invalid("value must be less than radix^m", m));
    }
    Ok(out)
}

/// `x mod m` in `[0, m)`, for a signed `x`.
pub fn mod_big_int(x: &BigInt, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::invalid("modulus must be a positive integer", 0));
    }

    let modulus = BigInt::from(m.clone());
    let mut r = x % &modulus;
    if r.sign() == Sign::Minus {
        r += &modulus;
    }
    let (_, magnitude) = r.into_parts();
    Ok(magnitude)
}

/// `x^m` as an arbitrary-precision integer.
pub fn pow(x: u32, m: usize) -> BigUint {
    let base = BigUint::from(x);
    let mut result = BigUint::one();
    let mut remaining = m;
    while remaining > 0 {
        let step = remaining.min(u32::MAX as usize);
        result *= base.pow(step as u32);
        remaining -= step;
    }
    result
}

/// Number of bytes needed to hold any `v`-digit numeral in `radix`:
/// `ceil(ceil(v * log2(radix)) / 8)`.
///
/// `ceil(v * log2(radix))` is the bit length of `radix^v - 1`, which keeps the
/// computation exact for every radix.
pub fn byte_length(radix: u32, v: usize) -> Result<usize> {
    check_radix(radix)?;
    if v == 0 {
        return Err(Error::invalid("half length must be positive", v));
    }
    let max_value = pow(radix, v) - 1u32;
    Ok(max_value.bits().div_ceil(8) as usize)
}
