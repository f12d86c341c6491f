use super::bits::validate_bits;
use super::checks::{is_parity_position, parity, parity_bits_for_len};
use crate::error::Result;
use log::{debug, warn};
use std::fmt::{Display, Formatter};

/// What the decoder found in a received codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every parity check passed
    Clean,
    /// A single bit was flipped back; `position` is its 0-based index
    Corrected { position: usize },
    /// The syndrome pointed past the end of the codeword; nothing was changed
    Uncorrectable { syndrome: usize },
}

impl Outcome {
    /// `true` only when the codeword arrived untouched
    pub fn is_clean(&self) -> bool {
        matches!(self, Outcome::Clean)
    }

    /// `true` when the returned data can be trusted (clean or corrected)
    pub fn is_recovered(&self) -> bool {
        !matches!(self, Outcome::Uncorrectable { .. })
    }

    /// The raw syndrome, or 0 for a clean codeword
    pub fn syndrome(&self) -> usize {
        match *self {
            Outcome::Clean => 0,
            Outcome::Corrected { position } => position + 1,
            Outcome::Uncorrectable { syndrome } => syndrome,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Clean => write!(f, "clean"),
            Outcome::Corrected { position } => write!(f, "corrected bit {}", position),
            Outcome::Uncorrectable { syndrome } => {
                write!(f, "uncorrectable (syndrome {})", syndrome)
            }
        }
    }
}

/// Data recovered from a codeword together with the decoder's verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Recovered data bits
    pub data: Vec<u8>,
    /// Whether and how the codeword was repaired
    pub outcome: Outcome,
}

impl Decoded {
    /// Collapses the outcome to the `(data, clean)` pair returned by [`decode`]
    pub fn into_parts(self) -> (Vec<u8>, bool) {
        let clean = self.outcome.is_clean();
        (self.data, clean)
    }
}

/// Decodes a received codeword, correcting at most one flipped bit.
///
/// # Arguments
///
/// * `codeword` - Received bits, each 0 or 1. The slice is not modified.
///
/// # Returns
///
/// The recovered data bits and a flag that is `true` only if every parity check passed.
/// The flag is `false` both when a bit was corrected and when the syndrome was out of
/// range; use [`decode_detailed`] to tell those apart.
///
/// # Examples
///
/// ```
/// use hamming_code::ecc::hamming::decode;
///
/// assert_eq!(decode(&[0]).unwrap(), (vec![], true));
/// assert_eq!(decode(&[1]).unwrap(), (vec![], false));
/// assert_eq!(decode(&[1, 1, 1]).unwrap(), (vec![1], true));
/// ```
pub fn decode(codeword: &[u8]) -> Result<(Vec<u8>, bool)> {
    decode_detailed(codeword).map(Decoded::into_parts)
}

/// Decodes a received codeword and reports exactly what was done to it.
///
/// # Errors
///
/// [`Error::InvalidBit`](crate::error::Error::InvalidBit) if `codeword` holds a value
/// other than 0 or 1.
///
/// # Examples
///
/// ```
/// use hamming_code::ecc::hamming::{decode_detailed, Outcome};
///
/// // 1-based positions 2 and 4 flipped in a 5-bit codeword: syndrome 6 is out of range
/// let decoded = decode_detailed(&[0, 0, 1, 0, 1]).unwrap();
/// assert_eq!(decoded.outcome, Outcome::Uncorrectable { syndrome: 6 });
/// ```
pub fn decode_detailed(codeword: &[u8]) -> Result<Decoded> {
    validate_bits(codeword)?;
    Ok(decode_bits(codeword))
}

/// Decodes bits already known to be 0 or 1.
pub(crate) fn decode_bits(received: &[u8]) -> Decoded {
    let n = received.len();
    let mut codeword = received.to_vec();

    let syndrome = compute_syndrome(&codeword);
    let outcome = if syndrome == 0 {
        Outcome::Clean
    } else if syndrome <= n {
        // syndrome is a 1-based position
        let position = syndrome - 1;
        codeword[position] ^= 1;
        debug!(
            "Corrected bit {} of {}-bit codeword (syndrome {})",
            position, n, syndrome
        );
        Outcome::Corrected { position }
    } else {
        warn!(
            "Syndrome {} exceeds codeword length {}, leaving codeword uncorrected",
            syndrome, n
        );
        Outcome::Uncorrectable { syndrome }
    };

    Decoded {
        data: extract_data(&codeword),
        outcome,
    }
}

/// Sets bit `p` for every parity check `p` that fails.
fn compute_syndrome(codeword: &[u8]) -> usize {
    (0..parity_bits_for_len(codeword.len()))
        .filter(|&p| parity(codeword, p) != codeword[(1 << p) - 1])
        .fold(0, |acc, p| acc | (1 << p))
}

fn extract_data(codeword: &[u8]) -> Vec<u8> {
    codeword
        .iter()
        .enumerate()
        .filter(|(i, _)| !is_parity_position(*i))
        .map(|(_, &bit)| bit)
        .collect()
}
