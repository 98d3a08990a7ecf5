//! Montgomery-reduction parameter derivation for the verification circuit.
//!
//! The circuit reduces products modulo the RSA modulus `n` with Montgomery
//! arithmetic over the radix `R = 2^(limb_width * limb_count)`. Which
//! precomputed constants it expects is part of its external contract, so the
//! choice is an explicit [`RedcConvention`] rather than something inferred
//! here.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use crate::big_uint::neg_mod_inverse;
use crate::{CircuitParams, InputError, LimbArray};

/// The set of Montgomery constants the consuming circuit expects.
///
/// Both forms work over `R = 2^(limb_width * limb_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedcConvention {
    /// A single constant, `R^2 mod n`. This is what the executor's
    /// `redc_params_limbs` wire field carries.
    #[default]
    RSquared,
    /// The pair `(R^2 mod n, -n^{-1} mod R)`, for circuits that run the full
    /// REDC recurrence instead of deriving `N'` themselves.
    RSquaredAndNegInv,
}

/// Precomputed reduction parameters for one modulus, immutable once derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionParams {
    /// The modulus itself in limb form.
    pub modulus_limbs: LimbArray,
    /// `R^2 mod n` in limb form.
    pub redc_limbs: LimbArray,
    /// `-n^{-1} mod R` in limb form; present only under
    /// [`RedcConvention::RSquaredAndNegInv`].
    pub neg_inv_limbs: Option<LimbArray>,
}

impl ReductionParams {
    /// Derives the reduction parameters for `modulus` at the given circuit
    /// parameters.
    ///
    /// Fails with [`InputError::InvalidModulus`] when `modulus < 2`, with
    /// [`InputError::EvenModulus`] when it is even (classical Montgomery
    /// reduction needs an odd modulus), and propagates
    /// [`InputError::ValueTooLarge`] when the modulus does not fit the limb
    /// layout.
    pub fn derive(
        modulus: &BigUint,
        params: &CircuitParams,
        convention: RedcConvention,
    ) -> Result<Self, InputError> {
        if *modulus < BigUint::from(2u64) {
            return Err(InputError::InvalidModulus);
        }
        if !modulus.bit(0) {
            return Err(InputError::EvenModulus);
        }
        let modulus_limbs = LimbArray::encode(modulus, params.limb_width, params.limb_count)?;

        let r = BigUint::one() << params.total_bits();
        let r_squared = (&r * &r) % modulus;
        let redc_limbs = LimbArray::encode(&r_squared, params.limb_width, params.limb_count)?;

        let neg_inv_limbs = match convention {
            RedcConvention::RSquared => None,
            RedcConvention::RSquaredAndNegInv => {
                let n_prime = neg_mod_inverse(modulus, &r)?;
                Some(LimbArray::encode(
                    &n_prime,
                    params.limb_width,
                    params.limb_count,
                )?)
            }
        };
        debug!(
            modulus_bits = modulus.bits(),
            limb_width = params.limb_width,
            limb_count = params.limb_count,
            "derived montgomery reduction parameters"
        );
        Ok(Self {
            modulus_limbs,
            redc_limbs,
            neg_inv_limbs,
        })
    }
}

/// A read-mostly cache of [`ReductionParams`] keyed by the modulus's
/// canonical big-endian byte form.
///
/// Derivation runs at most once per distinct modulus, including under
/// concurrent first access; later lookups share the same `Arc`.
#[derive(Debug)]
pub struct ReductionParamsCache {
    params: CircuitParams,
    convention: RedcConvention,
    entries: Mutex<HashMap<Vec<u8>, Arc<ReductionParams>>>,
}

impl ReductionParamsCache {
    /// Creates an empty cache for one circuit parameterization.
    pub fn new(params: CircuitParams, convention: RedcConvention) -> Self {
        Self {
            params,
            convention,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached parameters for `modulus`, deriving them on first
    /// access.
    pub fn get_or_derive(&self, modulus: &BigUint) -> Result<Arc<ReductionParams>, InputError> {
        let key = modulus.to_bytes_be();
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(found) = entries.get(&key) {
            return Ok(Arc::clone(found));
        }
        let derived = Arc::new(ReductionParams::derive(
            modulus,
            &self.params,
            self.convention,
        )?);
        entries.insert(key, Arc::clone(&derived));
        Ok(derived)
    }

    /// Number of distinct moduli currently cached.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
