//! Block codec that protects byte buffers with fixed-size Hamming codewords.
//!
//! Input bytes are read most significant bit first and cut into blocks of `data_bits` bits.
//! Each block becomes one codeword of `total_bits()` bits; codewords are concatenated and
//! packed back into bytes, with the final byte zero padded.

use super::bits::{pack, unpack};
use super::checks::parity_bit_count;
use super::decoder::{decode_bits, Decoded, Outcome};
use super::encoder::encode_bits;
use crate::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use log::trace;
use std::fmt::{Display, Formatter};

/// Represents a Hamming code configuration.
/// A Hamming(n,k) code encodes k data bits with n - k parity bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingCode {
    /// Number of data bits per block
    data_bits: usize,
    /// Number of parity bits per block
    parity_bits: usize,
}

impl HammingCode {
    /// Creates a new Hamming code configuration.
    ///
    /// # Arguments
    ///
    /// * `data_bits` - Number of data bits to encode in each block
    ///
    /// # Returns
    ///
    /// A new Hamming code configuration or an error if the parameters are invalid
    pub fn new(data_bits: usize) -> Result<Self> {
        if data_bits == 0 {
            return Err(Error::invalid_input("Data bits must be positive"));
        }

        Ok(HammingCode {
            data_bits,
            parity_bits: parity_bit_count(data_bits),
        })
    }

    /// Creates a standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        HammingCode {
            data_bits: 4,
            parity_bits: 3,
        }
    }

    /// Creates a (15,11) Hamming code
    pub fn hamming_15_11() -> Self {
        HammingCode {
            data_bits: 11,
            parity_bits: 4,
        }
    }

    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Gets the total code word length (data bits + parity bits)
    pub fn total_bits(&self) -> usize {
        self.data_bits + self.parity_bits
    }

    /// Number of blocks needed to carry `input_bytes` bytes
    fn blocks_for(&self, input_bytes: usize) -> usize {
        (input_bytes * 8).div_ceil(self.data_bits)
    }

    /// Gets the number of encoded bytes needed for a given number of input bytes
    pub fn encoded_bytes_needed(&self, input_bytes: usize) -> usize {
        (self.blocks_for(input_bytes) * self.total_bits()).div_ceil(8)
    }

    /// Encodes a byte slice using the configured Hamming code
    ///
    /// # Arguments
    ///
    /// * `data` - Data to encode
    ///
    /// # Returns
    ///
    /// The encoded data with parity bits, `encoded_bytes_needed(data.len())` bytes long
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        if data.is_empty() {
            return Vec::new();
        }

        let mut bits = unpack(data);
        let blocks = self.blocks_for(data.len());
        bits.resize(blocks * self.data_bits, 0);
        trace!("Encoding {} bytes as {} blocks with {}", data.len(), blocks, self);

        let codewords = map_blocks(&bits, self.data_bits, encode_bits);
        pack(&codewords.concat())
    }

    /// Decodes `input_bytes` bytes from a buffer produced by [`HammingCode::encode`],
    /// correcting a single bit error in each block.
    ///
    /// Blocks whose syndrome is out of range are left as received and reported as
    /// [`Outcome::Uncorrectable`] in the returned [`BlockReport`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `encoded` is shorter than
    /// `encoded_bytes_needed(input_bytes)`.
    pub fn decode_exact(&self, encoded: &[u8], input_bytes: usize) -> Result<BlockReport> {
        let needed = self.encoded_bytes_needed(input_bytes);
        if encoded.len() < needed {
            return Err(Error::InvalidInput(format!(
                "Encoded data too short, need at least {} bytes",
                needed
            )));
        }

        let blocks = self.blocks_for(input_bytes);
        let bits = unpack(&encoded[..needed]);
        trace!("Decoding {} blocks with {}", blocks, self);

        let decoded = map_blocks(
            &bits[..blocks * self.total_bits()],
            self.total_bits(),
            decode_bits,
        );

        let mut data_bits = Vec::with_capacity(blocks * self.data_bits);
        let mut outcomes = Vec::with_capacity(blocks);
        for Decoded { data, outcome } in decoded {
            data_bits.extend(data);
            outcomes.push(outcome);
        }
        data_bits.truncate(input_bytes * 8);

        Ok(BlockReport {
            data: pack(&data_bits),
            outcomes,
        })
    }
}

impl Display for HammingCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hamming({},{})", self.total_bits(), self.data_bits)
    }
}

impl ErrorCorrection for HammingCode {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(HammingCode::encode(self, data))
    }

    /// Recovers every whole byte carried by the complete blocks in `data`. When the block
    /// size does not divide the input evenly this can include trailing zero padding bytes;
    /// use [`HammingCode::decode_exact`] when the original length is known.
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let blocks = data.len() * 8 / self.total_bits();
        let input_bytes = blocks * self.data_bits / 8;
        self.decode_exact(data, input_bytes)?.into_result()
    }
}

/// Bytes recovered by [`HammingCode::decode_exact`] with one outcome per block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    /// Recovered bytes
    pub data: Vec<u8>,
    /// Decoder outcome for each block, in order
    pub outcomes: Vec<Outcome>,
}

impl BlockReport {
    /// Number of blocks in which a single bit was corrected
    pub fn corrected(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, Outcome::Corrected { .. }))
            .count()
    }

    /// Number of blocks left uncorrected
    pub fn uncorrectable(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.is_recovered())
            .count()
    }

    /// `true` if every block passed all parity checks
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_clean)
    }

    /// Returns the data, or an error naming the first uncorrectable block
    pub fn into_result(self) -> Result<Vec<u8>> {
        let bad = self
            .outcomes
            .iter()
            .enumerate()
            .find_map(|(block, outcome)| match *outcome {
                Outcome::Uncorrectable { syndrome } => Some((block, syndrome)),
                _ => None,
            });

        match bad {
            Some((block, syndrome)) => Err(Error::Uncorrectable { block, syndrome }),
            None => Ok(self.data),
        }
    }
}

/// Applies `f` to each `size`-bit block of `bits`, in order.
#[cfg(feature = "parallel")]
fn map_blocks<T, F>(bits: &[u8], size: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&[u8]) -> T + Send + Sync,
{
    use rayon::prelude::*;
    bits.par_chunks(size).map(f).collect()
}

/// Applies `f` to each `size`-bit block of `bits`, in order.
#[cfg(not(feature = "parallel"))]
fn map_blocks<T, F>(bits: &[u8], size: usize, f: F) -> Vec<T>
where
    F: Fn(&[u8]) -> T,
{
    bits.chunks(size).map(f).collect()
}

/// Creates a standard (7,4) Hamming code
pub fn create_hamming_7_4() -> HammingCode {
    HammingCode::standard_7_4()
}

/// Creates a Hamming code with custom parameters
pub fn create_hamming(data_bits: usize) -> Result<HammingCode> {
    HammingCode::new(data_bits)
}
