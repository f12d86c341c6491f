//! Parity placement and evaluation.
//!
//! Everything here works on 0-based storage indices. The code itself is defined on
//! 1-based positions, so each function notes where the `+ 1` / `- 1` shift happens.

/// Returns `true` if 0-based index `i` holds a parity bit.
///
/// The 1-based position `i + 1` is a power of two exactly when `i & (i + 1) == 0`:
/// adding one to `2^p - 1` carries through every set bit.
///
/// ```
/// use hamming_code::ecc::hamming::is_parity_position;
///
/// let parity: Vec<usize> = (0..16).filter(|&i| is_parity_position(i)).collect();
/// assert_eq!(parity, vec![0, 1, 3, 7, 15]);
/// ```
#[inline]
pub fn is_parity_position(i: usize) -> bool {
    i & (i + 1) == 0
}

/// Number of parity bits needed to protect `data_bits` data bits.
///
/// Returns the smallest `r >= 1` with `2^r >= data_bits + r + 1`: the `r` checks must be able
/// to name "no error" plus every position of the `data_bits + r` bit codeword. Position 1 is a
/// parity bit even for empty data.
///
/// # Examples
///
/// ```
/// use hamming_code::ecc::hamming::parity_bit_count;
///
/// assert_eq!(parity_bit_count(0), 1);
/// assert_eq!(parity_bit_count(4), 3);
/// assert_eq!(parity_bit_count(11), 4);
/// assert_eq!(parity_bit_count(12), 5);
/// ```
pub fn parity_bit_count(data_bits: usize) -> usize {
    // 2^r outgrows data_bits + r + 1, so counting up terminates at the minimum.
    // Starting at 0 instead would only differ for data_bits == 0.
    let mut r = 1;
    while (1usize << r) < data_bits + r + 1 {
        r += 1;
    }
    r
}

/// Number of parity bits carried by a codeword of `len` bits.
///
/// Smallest `r` with `2^r >= len + 1`. For `len == codeword_len(k)` this agrees with
/// [`parity_bit_count`]`(k)`, so a decoder never needs the original data length.
pub fn parity_bits_for_len(len: usize) -> usize {
    let mut r = 0;
    while (1usize << r) < len + 1 {
        r += 1;
    }
    r
}

/// Total codeword length for `data_bits` data bits.
pub fn codeword_len(data_bits: usize) -> usize {
    data_bits + parity_bit_count(data_bits)
}

/// Number of data slots in a codeword of `len` bits.
pub fn data_len(len: usize) -> usize {
    len - parity_bits_for_len(len)
}

/// Computes the value parity bit `p` must hold for `codeword`.
///
/// Parity index `p` lives at 1-based position `2^p` (0-based `(1 << p) - 1`) and covers
/// every 1-based position with bit `p` set. The result is the XOR of the covered bits,
/// leaving out the parity slot itself, so it does not depend on what that slot holds.
///
/// # Arguments
///
/// * `codeword` - Codeword bits, each 0 or 1
/// * `p` - 0-based parity index
///
/// # Returns
///
/// The expected parity bit, 0 or 1. A codeword passes check `p` when this equals
/// `codeword[(1 << p) - 1]`.
pub fn parity(codeword: &[u8], p: usize) -> u8 {
    let mask = 1usize << p;
    let slot = mask - 1;
    codeword
        .iter()
        .enumerate()
        .skip(slot + 1)
        .filter(|&(i, _)| (i + 1) & mask != 0)
        .fold(0, |acc, (_, &bit)| acc ^ bit)
}
