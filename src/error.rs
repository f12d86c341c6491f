use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the Hamming encoders and decoders
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit sequence contained something other than 0 or 1
    #[error("invalid bit value {value} at position {position}, expected 0 or 1")]
    InvalidBit { position: usize, value: u8 },

    /// Invalid code parameters or a malformed encoded buffer
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A block's syndrome pointed past the end of the codeword
    #[error("uncorrectable block {block}: syndrome {syndrome} exceeds codeword length")]
    Uncorrectable { block: usize, syndrome: usize },
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidBit {
            position: 3,
            value: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid bit value 2 at position 3, expected 0 or 1"
        );

        let err = Error::invalid_input("Data bits must be positive");
        assert_eq!(err.to_string(), "Invalid input: Data bits must be positive");

        let err = Error::Uncorrectable {
            block: 1,
            syndrome: 13,
        };
        assert_eq!(
            err.to_string(),
            "uncorrectable block 1: syndrome 13 exceeds codeword length"
        );
    }
}
