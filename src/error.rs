/// Errors produced while encoding circuit inputs.
///
/// Every failure is terminal for the current assembly attempt; nothing in
/// this crate retries. The assembler surfaces the first failing sub-step's
/// error unchanged.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("value of {bits} bits does not fit into {limb_count} limbs of {limb_width} bits")]
    ValueTooLarge {
        bits: u64,
        limb_width: usize,
        limb_count: usize,
    },
    #[error("payload of {len} bytes exceeds the buffer capacity of {capacity} bytes")]
    CapacityExceeded { len: usize, capacity: usize },
    #[error("modulus must be an odd integer greater than one")]
    InvalidModulus,
    #[error("modulus must be odd for Montgomery reduction")]
    EvenModulus,
    #[error("division by zero")]
    DivisionByZero,
    #[error("subtraction would underflow below zero")]
    Underflow,
    #[error("invalid hexadecimal string")]
    InvalidHex,
    #[error(transparent)]
    Rsa(#[from] rsa::errors::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
