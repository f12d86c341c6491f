pub mod ecc;
pub mod error;

pub use ecc::hamming::{
    decode, decode_detailed, encode, parity, parity_bit_count, BlockReport, Decoded,
    HammingCode, Outcome,
};
pub use ecc::ErrorCorrection;
pub use error::{Error, Result};
