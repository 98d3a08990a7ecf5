//! Assembly of the full numeric input bundle for the verification circuit.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    BoundedVec, CircuitParams, InputError, LimbArray, RedcConvention, ReductionParams,
};

/// The assembled circuit input: the packed message plus the modulus,
/// reduction-constant, and signature limb arrays. Owns every field; nothing
/// aliases the key material it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInputBundle {
    /// The signed message bytes, zero-padded to the buffer capacity.
    pub data: BoundedVec,
    /// The RSA modulus in limb form.
    pub pubkey_modulus_limbs: LimbArray,
    /// `R^2 mod n` in limb form.
    pub redc_params_limbs: LimbArray,
    /// The signature integer in limb form.
    pub signature_limbs: LimbArray,
}

/// The textual wire form of a [`SignedInputBundle`], field for field what the
/// external circuit executor expects: every number is a decimal string, one
/// per byte for `data` and one per limb for the limb arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitInputs {
    pub data: Vec<String>,
    pub data_len: String,
    pub pubkey_modulus_limbs: Vec<String>,
    pub redc_params_limbs: Vec<String>,
    pub signature_limbs: Vec<String>,
}

/// Assembles the input bundle from already-materialized values: the encoded
/// payload bytes, the raw signature integer, and the public modulus.
///
/// Pure composition of the packing, limb-encoding, and parameter-derivation
/// steps; the first failing sub-step's error propagates unchanged and no
/// partial bundle is ever returned. The reduction constant follows
/// [`RedcConvention::RSquared`], the single-array form carried by the wire
/// contract.
pub fn assemble(
    payload: &[u8],
    signature: &BigUint,
    modulus: &BigUint,
    params: &CircuitParams,
) -> Result<SignedInputBundle, InputError> {
    let data = BoundedVec::pack(payload, params.max_data_size)?;
    let reduction = ReductionParams::derive(modulus, params, RedcConvention::RSquared)?;
    let signature_limbs = LimbArray::encode(signature, params.limb_width, params.limb_count)?;
    debug!(
        payload_len = data.len(),
        limb_count = params.limb_count,
        "assembled circuit input bundle"
    );
    Ok(SignedInputBundle {
        data,
        pubkey_modulus_limbs: reduction.modulus_limbs,
        redc_params_limbs: reduction.redc_limbs,
        signature_limbs,
    })
}

impl SignedInputBundle {
    /// The payload length in bytes, exposed on the wire as `data_len`.
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /// Converts the bundle to its textual wire form.
    pub fn to_circuit_inputs(&self) -> CircuitInputs {
        CircuitInputs {
            data: self.data.to_decimal_strings(),
            data_len: self.data.len().to_string(),
            pubkey_modulus_limbs: self.pubkey_modulus_limbs.to_decimal_strings(),
            redc_params_limbs: self.redc_params_limbs.to_decimal_strings(),
            signature_limbs: self.signature_limbs.to_decimal_strings(),
        }
    }
}
