//! Bit sequence validation and MSB-first byte packing.

use crate::error::{Error, Result};
use bitvec::prelude::*;

/// Checks that every element of `bits` is 0 or 1.
///
/// # Errors
///
/// Returns [`Error::InvalidBit`] naming the first offending position.
pub fn validate_bits(bits: &[u8]) -> Result<()> {
    match bits.iter().position(|&bit| bit > 1) {
        Some(position) => Err(Error::InvalidBit {
            position,
            value: bits[position],
        }),
        None => Ok(()),
    }
}

/// Expands bytes into one `u8` per bit, most significant bit first.
pub(crate) fn unpack(bytes: &[u8]) -> Vec<u8> {
    bytes
        .view_bits::<Msb0>()
        .iter()
        .by_vals()
        .map(u8::from)
        .collect()
}

/// Packs bits into bytes, most significant bit first, zero padding the last byte.
pub(crate) fn pack(bits: &[u8]) -> Vec<u8> {
    let mut packed: BitVec<u8, Msb0> = bits.iter().map(|&bit| bit != 0).collect();
    packed.set_uninitialized(false);
    packed.into_vec()
}
