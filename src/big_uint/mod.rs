//! Fallible arithmetic and conversion helpers over [`num_bigint::BigUint`].
//!
//! The crate does not implement multiprecision arithmetic itself; `num-bigint`
//! supplies the representation and the total operations. This module adds the
//! partial operations the input encoding needs as explicit `Result`-returning
//! functions, so a caller can tell an out-of-domain input apart from a
//! programming error.

mod utils;
pub use utils::*;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::InputError;

/// Parses a big unsigned integer from a hexadecimal string.
///
/// An optional `0x` prefix is accepted. Fails with [`InputError::InvalidHex`]
/// on empty input or non-hex digits.
pub fn from_hex_str(hex: &str) -> Result<BigUint, InputError> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if digits.is_empty() {
        return Err(InputError::InvalidHex);
    }
    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(InputError::InvalidHex)
}

/// Formats a big unsigned integer as a lowercase hexadecimal string without a
/// prefix. `from_hex_str(&to_hex_str(v)) == v` for all `v`.
pub fn to_hex_str(value: &BigUint) -> String {
    value.to_str_radix(16)
}

/// Computes `a - b`, failing with [`InputError::Underflow`] when `b > a`.
pub fn try_sub(a: &BigUint, b: &BigUint) -> Result<BigUint, InputError> {
    if b > a {
        return Err(InputError::Underflow);
    }
    Ok(a - b)
}

/// Computes the quotient and remainder of `a / b`, failing with
/// [`InputError::DivisionByZero`] when `b` is zero.
pub fn try_div_rem(a: &BigUint, b: &BigUint) -> Result<(BigUint, BigUint), InputError> {
    if b.is_zero() {
        return Err(InputError::DivisionByZero);
    }
    Ok((a / b, a % b))
}

/// Computes `base^exp mod modulus`, failing with
/// [`InputError::DivisionByZero`] when the modulus is zero.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint, InputError> {
    if modulus.is_zero() {
        return Err(InputError::DivisionByZero);
    }
    Ok(base.modpow(exp, modulus))
}

/// Computes `-n^{-1} mod r`, the negated modular inverse used as the `N'`
/// constant of Montgomery reduction.
///
/// Fails with [`InputError::InvalidModulus`] when `n` has no inverse modulo
/// `r`, i.e. when the two are not coprime.
pub fn neg_mod_inverse(n: &BigUint, r: &BigUint) -> Result<BigUint, InputError> {
    let inv = n.modinv(r).ok_or(InputError::InvalidModulus)?;
    Ok((r - inv) % r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::One;

    #[test]
    fn hex_round_trip() {
        let value = BigUint::parse_bytes(b"deadbeef0123456789abcdef", 16).unwrap();
        assert_eq!(from_hex_str(&to_hex_str(&value)).unwrap(), value);
        assert_eq!(from_hex_str("0xff").unwrap(), BigUint::from(255u64));
        assert!(from_hex_str("").is_err());
        assert!(from_hex_str("0x").is_err());
        assert!(from_hex_str("xyz").is_err());
    }

    #[test]
    fn sub_underflows_below_zero() {
        let a = BigUint::from(5u64);
        let b = BigUint::from(7u64);
        assert_eq!(try_sub(&b, &a).unwrap(), BigUint::from(2u64));
        assert!(matches!(try_sub(&a, &b), Err(InputError::Underflow)));
        assert_eq!(try_sub(&a, &a).unwrap(), BigUint::ZERO);
    }

    #[test]
    fn div_rem_rejects_zero_divisor() {
        let a = BigUint::from(100u64);
        let b = BigUint::from(7u64);
        let (q, r) = try_div_rem(&a, &b).unwrap();
        assert_eq!(q, BigUint::from(14u64));
        assert_eq!(r, BigUint::from(2u64));
        assert!(matches!(
            try_div_rem(&a, &BigUint::ZERO),
            Err(InputError::DivisionByZero)
        ));
    }

    #[test]
    fn mod_pow_matches_known_values() {
        let base = BigUint::from(4u64);
        let exp = BigUint::from(13u64);
        let modulus = BigUint::from(497u64);
        assert_eq!(
            mod_pow(&base, &exp, &modulus).unwrap(),
            BigUint::from(445u64)
        );
        assert!(matches!(
            mod_pow(&base, &exp, &BigUint::ZERO),
            Err(InputError::DivisionByZero)
        ));
    }

    #[test]
    fn neg_mod_inverse_satisfies_redc_identity() {
        // N * N' == -1 mod R
        let n = BigUint::from(97u64);
        let r = BigUint::one() << 16;
        let n_prime = neg_mod_inverse(&n, &r).unwrap();
        assert_eq!((&n * &n_prime) % &r, &r - BigUint::one());
    }

    #[test]
    fn neg_mod_inverse_rejects_non_coprime() {
        let n = BigUint::from(6u64);
        let r = BigUint::one() << 16;
        assert!(matches!(
            neg_mod_inverse(&n, &r),
            Err(InputError::InvalidModulus)
        ));
    }
}
