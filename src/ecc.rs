//! Error correction code implementations.
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! Currently implemented:
//! - Hamming codes (single-error-correcting)
//!
//! # Examples
//!
//! ```rust
//! use hamming_code::ecc::{ErrorCorrection, HammingCode};
//!
//! let code = HammingCode::standard_7_4();
//! let mut encoded = ErrorCorrection::encode(&code, b"hi").unwrap();
//! encoded[0] ^= 0x20;
//! assert_eq!(ErrorCorrection::decode(&code, &encoded).unwrap(), b"hi");
//! ```

pub use crate::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Hamming error correction codes
pub mod hamming;
pub use hamming::{
    create_hamming, create_hamming_7_4, decode, decode_detailed, encode, BlockReport, Decoded,
    HammingCode, Outcome,
};
