//! Conversion Errors
//!
//! Every failure aborts the run. There is no retry and no partial result.

use std::fmt;

use entities_utilities::RadixError;
use infrastructure_bignum_encoding::EncodeError;

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Output radix outside `[2, 62]`
    InvalidRadix(RadixError),
    /// The input does not start with a decimal digit
    EmptyInput,
    /// Every input digit was claimed by the integer part
    NoFractionDigits {
        /// Size of the parsed value in base 10
        decimal_digits: usize,
        /// Configured integer-part digits
        integer_digits: usize,
    },
    /// The safety margin exceeds the estimated output digit count
    DigitCountUnderflow {
        /// Estimate before the margin
        estimate: usize,
        /// Margin that was to be subtracted
        margin: usize,
    },
    /// The rescaled value has more digits than the estimate allows
    DigitCountMismatch {
        /// Estimated output digits
        expected: usize,
        /// Digits actually rendered
        actual: usize,
    },
    /// The encoder rejected a digit
    Encoding(EncodeError),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidRadix(err) => write!(f, "invalid radix: {}", err),
            ConversionError::EmptyInput => {
                write!(f, "input does not start with a base-10 integer")
            }
            ConversionError::NoFractionDigits {
                decimal_digits,
                integer_digits,
            } => write!(
                f,
                "input has {} digits, none left after {} integer digits",
                decimal_digits, integer_digits
            ),
            ConversionError::DigitCountUnderflow { estimate, margin } => write!(
                f,
                "too few input digits: estimate of {} output digits cannot absorb a margin of {}",
                estimate, margin
            ),
            ConversionError::DigitCountMismatch { expected, actual } => write!(
                f,
                "rescaled value has {} digits, at most {} expected",
                actual, expected
            ),
            ConversionError::Encoding(err) => write!(f, "encoding failed: {}", err),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::InvalidRadix(err) => Some(err),
            ConversionError::Encoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RadixError> for ConversionError {
    fn from(err: RadixError) -> Self {
        ConversionError::InvalidRadix(err)
    }
}

impl From<EncodeError> for ConversionError {
    fn from(err: EncodeError) -> Self {
        ConversionError::Encoding(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_utilities::Radix;

    #[test]
    fn test_invalid_radix_message() {
        let err: ConversionError = Radix::new(63).unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "invalid radix: radix 63 is outside the supported range [2, 62]"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_underflow_message() {
        let err = ConversionError::DigitCountUnderflow { estimate: 0, margin: 1 };
        assert_eq!(
            err.to_string(),
            "too few input digits: estimate of 0 output digits cannot absorb a margin of 1"
        );
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            ConversionError::EmptyInput.to_string(),
            "input does not start with a base-10 integer"
        );
    }
}
