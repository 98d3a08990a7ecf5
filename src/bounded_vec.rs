//! Fixed-capacity zero-padded byte buffers with an explicit length tag.

use crate::InputError;

/// A byte string stored in a fixed-capacity buffer: `storage` always holds
/// exactly `capacity` bytes, the first `len` of which are the payload and the
/// rest exactly zero. This mirrors the bounded-vector input shape of the
/// verification circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedVec {
    storage: Vec<u8>,
    len: usize,
}

impl BoundedVec {
    /// Packs `data` into a buffer of `capacity` bytes.
    ///
    /// Fails with [`InputError::CapacityExceeded`] when `data` is longer than
    /// `capacity`; the data is never truncated.
    pub fn pack(data: &[u8], capacity: usize) -> Result<Self, InputError> {
        if data.len() > capacity {
            return Err(InputError::CapacityExceeded {
                len: data.len(),
                capacity,
            });
        }
        let mut storage = vec![0u8; capacity];
        storage[..data.len()].copy_from_slice(data);
        Ok(Self {
            storage,
            len: data.len(),
        })
    }

    /// The packed payload, without the zero padding. Exact inverse of
    /// [`BoundedVec::pack`].
    pub fn unpack(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// The full zero-padded buffer of `capacity` bytes.
    pub fn storage(&self) -> &[u8] {
        &self.storage
    }

    /// The payload length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// One decimal string per storage byte, padding included. This is the
    /// textual form the circuit executor consumes.
    pub fn to_decimal_strings(&self) -> Vec<String> {
        self.storage.iter().map(|byte| byte.to_string()).collect()
    }
}
