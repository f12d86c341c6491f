use super::bits::validate_bits;
use super::checks::{is_parity_position, parity, parity_bit_count};
use crate::error::Result;

/// Encodes a sequence of data bits into a Hamming codeword.
///
/// # Arguments
///
/// * `data` - Data bits to protect, each 0 or 1. May be empty.
///
/// # Returns
///
/// A codeword of `data.len() + parity_bit_count(data.len())` bits with parity bits at the
/// power-of-two positions and `data` in the remaining slots, in order.
///
/// # Errors
///
/// [`Error::InvalidBit`](crate::error::Error::InvalidBit) if `data` holds a value other
/// than 0 or 1.
///
/// # Examples
///
/// ```
/// use hamming_code::ecc::hamming::encode;
///
/// assert_eq!(encode(&[]).unwrap(), vec![0]);
/// assert_eq!(encode(&[1]).unwrap(), vec![1, 1, 1]);
/// assert!(encode(&[1, 2]).is_err());
/// ```
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    validate_bits(data)?;
    Ok(encode_bits(data))
}

/// Encodes bits already known to be 0 or 1.
pub(crate) fn encode_bits(data: &[u8]) -> Vec<u8> {
    let r = parity_bit_count(data.len());
    let mut codeword = vec![0u8; data.len() + r];

    // Exactly data.len() slots are left once the r parity slots are skipped
    codeword
        .iter_mut()
        .enumerate()
        .filter(|(i, _)| !is_parity_position(*i))
        .zip(data)
        .for_each(|((_, slot), &bit)| *slot = bit);

    for p in 0..r {
        codeword[(1 << p) - 1] = parity(&codeword, p);
    }

    codeword
}
