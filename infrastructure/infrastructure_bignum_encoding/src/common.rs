//! Common Encoding/Decoding Utilities
//!
//! Error types shared by the radix codec and the custom alphabet.

use std::fmt;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A digit value is not valid in the target radix
    DigitOutOfRange {
        /// Offending digit value
        digit: u8,
        /// Radix being encoded
        radix: u32,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::DigitOutOfRange { digit, radix } => {
                write!(f, "digit value {} is not valid in radix {}", digit, radix)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No symbols to decode
    Empty,
    /// Symbol is not part of the alphabet for this radix
    InvalidSymbol {
        /// Offending symbol
        symbol: char,
        /// Character offset of the symbol
        position: usize,
        /// Radix being decoded
        radix: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "no digits to decode"),
            DecodeError::InvalidSymbol {
                symbol,
                position,
                radix,
            } => write!(
                f,
                "symbol {:?} at position {} is not a radix {} digit",
                symbol, position, radix
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::DigitOutOfRange { digit: 30, radix: 27 };
        assert_eq!(err.to_string(), "digit value 30 is not valid in radix 27");
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::InvalidSymbol {
            symbol: 'z',
            position: 3,
            radix: 16,
        };
        assert_eq!(err.to_string(), "symbol 'z' at position 3 is not a radix 16 digit");
        assert_eq!(DecodeError::Empty.to_string(), "no digits to decode");
    }
}
