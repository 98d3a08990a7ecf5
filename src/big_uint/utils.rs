use num_bigint::BigUint;
use num_traits::One;

/// Splits a sequence of 64-bit digits into `number_of_limbs` limbs of
/// `bit_len` bits each, little-endian, zero-padding past the last digit.
///
/// Fast path for limb widths of at most 64 bits; wider limbs go through
/// [`BigUint`] mask-and-shift instead.
pub(crate) fn decompose_u64_digits_to_limbs(
    e: impl IntoIterator<Item = u64>,
    number_of_limbs: usize,
    bit_len: usize,
) -> Vec<u64> {
    debug_assert!(bit_len <= 64);
    let mut e = e.into_iter();
    let mask: u64 = ((1u128 << bit_len) - 1u128) as u64;
    let mut u64_digit = e.next().unwrap_or(0);
    let mut rem = 64;
    (0..number_of_limbs)
        .map(|_| match rem.cmp(&bit_len) {
            core::cmp::Ordering::Greater => {
                let limb = u64_digit & mask;
                u64_digit >>= bit_len;
                rem -= bit_len;
                limb
            }
            core::cmp::Ordering::Equal => {
                let limb = u64_digit & mask;
                u64_digit = e.next().unwrap_or(0);
                rem = 64;
                limb
            }
            core::cmp::Ordering::Less => {
                let mut limb = u64_digit;
                u64_digit = e.next().unwrap_or(0);
                limb |= (u64_digit & ((1 << (bit_len - rem)) - 1)) << rem;
                u64_digit >>= bit_len - rem;
                rem += 64 - bit_len;
                limb
            }
        })
        .collect()
}

/// Splits a [`BigUint`] into `number_of_limbs` limbs of `bit_len` bits each,
/// little-endian. Bits beyond `number_of_limbs * bit_len` are discarded; the
/// caller is responsible for rejecting values that do not fit.
pub fn decompose_biguint(
    e: &BigUint,
    number_of_limbs: usize,
    bit_len: usize,
) -> Vec<BigUint> {
    if bit_len <= 64 {
        decompose_u64_digits_to_limbs(e.iter_u64_digits(), number_of_limbs, bit_len)
            .into_iter()
            .map(BigUint::from)
            .collect()
    } else {
        let mask = (BigUint::one() << bit_len) - BigUint::one();
        let mut rest = e.clone();
        (0..number_of_limbs)
            .map(|_| {
                let limb = &rest & &mask;
                rest >>= bit_len;
                limb
            })
            .collect()
    }
}
