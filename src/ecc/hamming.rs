//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! Parity bits sit at every codeword position whose 1-based index is a power of two (1, 2, 4, 8, ...)
//! and data bits fill the remaining positions in order. The parity bit at position `2^p` covers
//! every position whose 1-based index has bit `p` set, so the failed checks of a received
//! codeword, read as a binary number, spell out the 1-based position of a single flipped bit.
//! The most common variant is (7,4) Hamming code, which encodes 4 data bits into 7 bits by
//! adding 3 parity bits.
//!
//! This implementation provides:
//! - Encoding of arbitrary-length bit sequences ([`encode`])
//! - Decoding with single-bit error correction ([`decode`], [`decode_detailed`])
//! - A block codec over byte buffers with a configurable block size ([`HammingCode`])
//!
//! Bits are represented as `u8` values that must be 0 or 1. Anything else is rejected with
//! [`Error::InvalidBit`](crate::error::Error::InvalidBit) before any parity is computed.
//!
//! # Index conventions
//!
//! Codewords are stored 0-indexed but the code is defined over 1-based positions. A 0-based
//! index `i` is a parity slot when `i + 1` is a power of two, which is the same as
//! `i & (i + 1) == 0`. Parity index `p` lives at 0-based slot `(1 << p) - 1`, and a nonzero
//! syndrome `s` names 0-based slot `s - 1`.
//!
//! # Examples
//!
//! ```
//! use hamming_code::ecc::hamming::{decode, encode};
//!
//! let data = [1, 0, 1, 1];
//! let mut codeword = encode(&data).unwrap();
//! assert_eq!(codeword, vec![0, 1, 1, 0, 0, 1, 1]);
//!
//! codeword[4] ^= 1;
//! assert_eq!(decode(&codeword).unwrap(), (data.to_vec(), false));
//! ```
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Digital broadcasting
//! - Data storage systems

mod bits;
mod block;
mod checks;
mod decoder;
mod encoder;

pub use bits::validate_bits;
pub use block::{create_hamming, create_hamming_7_4, BlockReport, HammingCode};
pub use checks::{
    codeword_len, data_len, is_parity_position, parity, parity_bit_count, parity_bits_for_len,
};
pub use decoder::{decode, decode_detailed, Decoded, Outcome};
pub use encoder::encode;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_bits(rng: &mut StdRng, len: usize) -> Vec<u8> {
        (0..len).map(|_| rng.gen_range(0..=1)).collect()
    }

    #[test]
    fn test_round_trip_representative_lengths() {
        let mut rng = StdRng::seed_from_u64(0x4841_4d4d);
        for k in [0, 1, 4, 8, 16, 100] {
            for _ in 0..20 {
                let data = random_bits(&mut rng, k);
                let codeword = encode(&data).unwrap();
                assert_eq!(codeword.len(), k + parity_bit_count(k));
                assert_eq!(decode(&codeword).unwrap(), (data, true));
            }
        }
    }

    #[test]
    fn test_round_trip_exhaustive_small() {
        for k in 0..=10usize {
            for pattern in 0..(1u32 << k) {
                let data: Vec<u8> = (0..k).map(|i| ((pattern >> i) & 1) as u8).collect();
                let codeword = encode(&data).unwrap();
                assert_eq!(decode(&codeword).unwrap(), (data, true));
            }
        }
    }

    #[test]
    fn test_every_single_flip_is_corrected() {
        let mut rng = StdRng::seed_from_u64(7);
        for k in [0, 1, 2, 3, 4, 5, 8, 11, 16, 26, 57, 100] {
            let data = random_bits(&mut rng, k);
            let codeword = encode(&data).unwrap();
            for i in 0..codeword.len() {
                let mut received = codeword.clone();
                received[i] ^= 1;

                let decoded = decode_detailed(&received).unwrap();
                assert_eq!(decoded.data, data, "k={} flip={}", k, i);
                assert_eq!(decoded.outcome, Outcome::Corrected { position: i });
                assert_eq!(decode(&received).unwrap(), (data.clone(), false));
            }
        }
    }

    #[test]
    fn test_decoding_has_no_hidden_state() {
        let data = vec![1, 1, 0, 1, 0, 0, 1, 0];
        let codeword = encode(&data).unwrap();
        let first = decode(&codeword).unwrap();
        let second = decode(&codeword).unwrap();
        assert_eq!(first, second);

        let mut received = codeword.clone();
        received[5] ^= 1;
        let first = decode_detailed(&received).unwrap();
        let second = decode_detailed(&received).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seven_four_scenario() {
        let data = [1, 0, 1, 1];
        assert_eq!(parity_bit_count(data.len()), 3);

        let mut codeword = encode(&data).unwrap();
        assert_eq!(codeword.len(), 7);

        codeword[4] ^= 1;
        assert_eq!(decode(&codeword).unwrap(), (vec![1, 0, 1, 1], false));
    }

    #[test]
    fn test_empty_data_scenario() {
        assert_eq!(encode(&[]).unwrap(), vec![0]);
        assert_eq!(decode(&[0]).unwrap(), (vec![], true));
        assert_eq!(decode(&[1]).unwrap(), (vec![], false));
        assert_eq!(
            decode_detailed(&[1]).unwrap().outcome,
            Outcome::Corrected { position: 0 }
        );
    }
}
