//! JWS-style glue around the numeric core: claim encoding, key-material
//! extraction, and PKCS#1 v1.5 signing.
//!
//! None of this is circuit arithmetic; it exists so a caller holding an
//! [`rsa::RsaPrivateKey`] and a JSON claim set can produce a complete
//! [`SignedInputBundle`] in one call, the way a test-fixture generator does.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use num_bigint::BigUint;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::{assemble, CircuitParams, InputError, SignedInputBundle};

/// Serializes `claims` to JSON and base64url-encodes the result (no padding,
/// RFC 7515 style). The returned bytes are the message the signature covers
/// and the circuit hashes.
pub fn encode_claims<T: Serialize>(claims: &T) -> Result<Vec<u8>, InputError> {
    let json = serde_json::to_vec(claims)?;
    Ok(URL_SAFE_NO_PAD.encode(json).into_bytes())
}

/// Extracts the modulus of an RSA public key as a [`BigUint`].
///
/// The `rsa` crate carries its own big-integer type internally, so the value
/// crosses over through its canonical big-endian byte form.
pub fn modulus_from_public_key(public_key: &RsaPublicKey) -> BigUint {
    BigUint::from_bytes_be(&public_key.n().to_bytes_be())
}

/// Signs an already-encoded payload with RSASSA-PKCS1-v1_5 over SHA-256 and
/// returns the signature as a big-endian integer.
pub fn sign_encoded_payload(
    private_key: &RsaPrivateKey,
    payload: &[u8],
) -> Result<BigUint, InputError> {
    let digest = Sha256::digest(payload);
    let signature = private_key.sign(Pkcs1v15Sign::new::<Sha256>(), &digest)?;
    Ok(BigUint::from_bytes_be(&signature))
}

/// End-to-end fixture path: encodes `claims`, signs the encoded payload with
/// `private_key`, and assembles the circuit input bundle against the key's
/// own modulus.
pub fn generate_inputs<T: Serialize>(
    private_key: &RsaPrivateKey,
    claims: &T,
    params: &CircuitParams,
) -> Result<SignedInputBundle, InputError> {
    let payload = encode_claims(claims)?;
    let signature = sign_encoded_payload(private_key, &payload)?;
    let modulus = modulus_from_public_key(&RsaPublicKey::from(private_key));
    assemble(&payload, &signature, &modulus, params)
}
