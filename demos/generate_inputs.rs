//! The following example samples an RSA key pair, signs a small JSON claim
//! set, and prints the assembled circuit input bundle as JSON in the exact
//! wire form the external circuit executor expects.

use noir_jwt_inputs::{generate_inputs, CircuitParams};
use rsa::RsaPrivateKey;
use serde_json::json;

fn main() {
    // 1. Uniformly sample a 2048-bit RSA key pair.
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("failed to generate a key");

    // 2. Build a claim set in place of a real payment payload.
    let claims = json!({
        "iss": "https://issuer.example",
        "sub": "1234567890",
        "amount": "12.50",
        "currency": "USD",
    });

    // 3. Encode, sign, and assemble the bundle at the default circuit
    //    parameters (120-bit limbs, 18 limbs, 1536-byte buffer).
    let params = CircuitParams::default();
    let bundle = generate_inputs(&private_key, &claims, &params)
        .expect("failed to assemble circuit inputs");

    // 4. Print the wire form.
    let inputs = bundle.to_circuit_inputs();
    println!("{}", serde_json::to_string_pretty(&inputs).unwrap());
}
