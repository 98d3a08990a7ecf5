//! This library converts an RSA-signed payload into the numeric input bundle
//! consumed by a constrained-arithmetic verification circuit.
//!
//! The circuit side of RSA verification works over fixed-width, fixed-count
//! limb representations of big integers and expects precomputed
//! Montgomery-reduction parameters for the public modulus. This crate covers
//! the host side of that contract: it splits the modulus and the signature
//! into little-endian limbs ([`LimbArray`]), derives the reduction constants
//! ([`ReductionParams`]), packs the signed message into a fixed-capacity
//! zero-padded buffer ([`BoundedVec`]), and assembles everything into a
//! [`SignedInputBundle`] whose textual form ([`CircuitInputs`]) matches the
//! executor's wire format field for field.
//!
//! Limb width, limb count, and buffer capacity are properties of the target
//! circuit, not of this crate; they are threaded explicitly through every
//! operation as [`CircuitParams`].

pub mod big_uint;
pub use big_uint::*;

mod assembler;
mod bounded_vec;
mod error;
mod jws;
mod limbs;
mod redc;

pub use assembler::*;
pub use bounded_vec::*;
pub use error::*;
pub use jws::*;
pub use limbs::*;
pub use redc::*;

/// The maximum byte length of the encoded payload accepted by the default
/// target circuit.
pub const MAX_DATA_SIZE: usize = 1536;

/// The bit width of a single limb expected by the default target circuit.
pub const LIMB_WIDTH: usize = 120;

/// The number of limbs expected by the default target circuit. 18 limbs of
/// 120 bits cover a 2048-bit RSA modulus.
pub const LIMB_COUNT: usize = 18;

/// Numeric parameters of the target circuit.
///
/// Every encoding operation in this crate takes these explicitly so the same
/// code serves circuits with other limb layouts or buffer capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitParams {
    /// Bit width of a single limb.
    pub limb_width: usize,
    /// Number of limbs in every limb array.
    pub limb_count: usize,
    /// Capacity in bytes of the payload buffer.
    pub max_data_size: usize,
}

impl CircuitParams {
    /// Creates new [`CircuitParams`].
    pub fn new(limb_width: usize, limb_count: usize, max_data_size: usize) -> Self {
        Self {
            limb_width,
            limb_count,
            max_data_size,
        }
    }

    /// Total bit capacity of a limb array, i.e. `limb_width * limb_count`.
    pub fn total_bits(&self) -> usize {
        self.limb_width * self.limb_count
    }
}

impl Default for CircuitParams {
    fn default() -> Self {
        Self::new(LIMB_WIDTH, LIMB_COUNT, MAX_DATA_SIZE)
    }
}
