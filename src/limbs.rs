//! Little-endian fixed-width, fixed-count limb encoding of big unsigned
//! integers.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::big_uint::decompose_biguint;
use crate::InputError;

/// An ordered, fixed-length sequence of limbs, little-endian: index 0 is the
/// least significant. Every limb is strictly below `2^limb_width`, and every
/// position past the value's significant bits is exactly zero, so that
/// `sum(limb[i] << (limb_width * i))` reproduces the encoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimbArray {
    limbs: Vec<BigUint>,
    limb_width: usize,
}

impl LimbArray {
    /// Encodes `value` into `limb_count` limbs of `limb_width` bits each.
    ///
    /// Fails with [`InputError::ValueTooLarge`] when
    /// `value >= 2^(limb_width * limb_count)`. Values are never sliced down to
    /// the configured count.
    pub fn encode(
        value: &BigUint,
        limb_width: usize,
        limb_count: usize,
    ) -> Result<Self, InputError> {
        if value.bits() > (limb_width * limb_count) as u64 {
            return Err(InputError::ValueTooLarge {
                bits: value.bits(),
                limb_width,
                limb_count,
            });
        }
        let limbs = decompose_biguint(value, limb_count, limb_width);
        Ok(Self { limbs, limb_width })
    }

    /// Recomposes the encoded value. Exact inverse of [`LimbArray::encode`]
    /// for every value that encodes successfully.
    pub fn decode(&self) -> BigUint {
        self.limbs
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, limb| (acc << self.limb_width) + limb)
    }

    /// The limb values, least significant first.
    pub fn limbs(&self) -> &[BigUint] {
        &self.limbs
    }

    /// The configured bit width of each limb.
    pub fn limb_width(&self) -> usize {
        self.limb_width
    }

    /// The configured limb count.
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// One decimal string per limb, least significant first. This is the
    /// textual form the circuit executor consumes.
    pub fn to_decimal_strings(&self) -> Vec<String> {
        self.limbs.iter().map(|l| l.to_str_radix(10)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn round_trips_values_below_capacity() {
        let samples = [
            BigUint::ZERO,
            BigUint::one(),
            BigUint::from(u64::MAX),
            BigUint::parse_bytes(b"fedcba9876543210fedcba9876543210", 16).unwrap(),
            (BigUint::one() << 240) - BigUint::one(),
        ];
        for value in samples {
            let encoded = LimbArray::encode(&value, 120, 2).unwrap();
            assert_eq!(encoded.decode(), value);
        }
    }

    #[test]
    fn zero_encodes_to_all_zero_limbs() {
        let encoded = LimbArray::encode(&BigUint::ZERO, 120, 18).unwrap();
        assert_eq!(encoded.len(), 18);
        assert!(encoded.limbs().iter().all(|l| l.is_zero()));
        assert_eq!(encoded.to_decimal_strings(), vec!["0"; 18]);
    }

    #[test]
    fn rejects_values_at_or_above_capacity() {
        let limit = BigUint::one() << 240;
        assert!(matches!(
            LimbArray::encode(&limit, 120, 2),
            Err(InputError::ValueTooLarge {
                limb_width: 120,
                limb_count: 2,
                ..
            })
        ));
        let max = &limit - BigUint::one();
        assert!(LimbArray::encode(&max, 120, 2).is_ok());
    }

    #[test]
    fn limbs_stay_below_width_bound() {
        let value = (BigUint::one() << 2048) - BigUint::from(12345u64);
        let encoded = LimbArray::encode(&value, 120, 18).unwrap();
        let bound = BigUint::one() << 120;
        assert!(encoded.limbs().iter().all(|l| l < &bound));
        assert_eq!(encoded.decode(), value);
    }

    #[test]
    fn weighted_sum_reproduces_value() {
        let value = BigUint::parse_bytes(b"0123456789abcdef0011223344556677", 16).unwrap();
        let encoded = LimbArray::encode(&value, 120, 3).unwrap();
        let sum = encoded
            .limbs()
            .iter()
            .enumerate()
            .fold(BigUint::ZERO, |acc, (i, limb)| {
                acc + (limb << (120 * i))
            });
        assert_eq!(sum, value);
    }

    #[test]
    fn decimal_strings_are_radix_ten() {
        let value = BigUint::from(1_000_000_007u64);
        let encoded = LimbArray::encode(&value, 120, 2).unwrap();
        assert_eq!(
            encoded.to_decimal_strings(),
            vec!["1000000007".to_string(), "0".to_string()]
        );
    }
}
