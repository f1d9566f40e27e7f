//! Digit-Count Estimator
//!
//! `n` decimal digits pin a fraction down to a window of width `10^-n`.
//! Base-`r` digits each shrink the window by a factor of `r`, so the most
//! digits that can be stated without guessing is `floor(n / log10(r))`.
//!
//! The estimate is the only floating-point step of the conversion. Everything
//! after it is exact integer arithmetic.

use entities_utilities::Radix;

use crate::error::ConversionError;

/// Safety margin subtracted from the estimate
///
/// `One` gives up the last output digit in exchange for robustness against
/// rounding right at the boundary of the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitMargin {
    /// Emit every digit the estimate allows
    #[default]
    None,
    /// Emit one digit fewer than the estimate allows
    One,
}

impl DigitMargin {
    /// Number of digits given up
    pub fn count(self) -> usize {
        match self {
            DigitMargin::None => 0,
            DigitMargin::One => 1,
        }
    }

    /// Margin for a digit count of 0 or 1
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            0 => Some(DigitMargin::None),
            1 => Some(DigitMargin::One),
            _ => None,
        }
    }
}

/// Maximum number of base-`out_radix` digits supported by `in_digit_count` decimal digits
///
/// # Errors
///
/// - [`ConversionError::EmptyInput`] if `in_digit_count` is zero
/// - [`ConversionError::DigitCountUnderflow`] if the margin is larger than the estimate
pub fn estimate(
    in_digit_count: usize,
    out_radix: Radix,
    margin: DigitMargin,
) -> Result<usize, ConversionError> {
    if in_digit_count == 0 {
        return Err(ConversionError::EmptyInput);
    }
    let raw = (in_digit_count as f64 / out_radix.log10()).floor() as usize;
    raw.checked_sub(margin.count())
        .ok_or(ConversionError::DigitCountUnderflow {
            estimate: raw,
            margin: margin.count(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix(value: u32) -> Radix {
        Radix::new(value).unwrap()
    }

    #[test]
    fn test_hex_with_margin() {
        // floor(8 / log10(16)) = floor(6.64) = 6
        assert_eq!(estimate(8, radix(16), DigitMargin::None), Ok(6));
        assert_eq!(estimate(8, radix(16), DigitMargin::One), Ok(5));
    }

    #[test]
    fn test_single_digit_base_27() {
        assert_eq!(estimate(1, radix(27), DigitMargin::None), Ok(0));
    }

    #[test]
    fn test_decimal_is_identity() {
        for n in [1usize, 2, 10, 1000, 1_000_000] {
            assert_eq!(estimate(n, Radix::DECIMAL, DigitMargin::None), Ok(n));
        }
    }

    #[test]
    fn test_zero_digits_is_empty_input() {
        assert_eq!(
            estimate(0, radix(27), DigitMargin::None),
            Err(ConversionError::EmptyInput)
        );
    }

    #[test]
    fn test_margin_underflow_is_an_error() {
        assert_eq!(
            estimate(1, radix(27), DigitMargin::One),
            Err(ConversionError::DigitCountUnderflow { estimate: 0, margin: 1 })
        );
    }

    #[test]
    fn test_margin_from_count() {
        assert_eq!(DigitMargin::from_count(0), Some(DigitMargin::None));
        assert_eq!(DigitMargin::from_count(1), Some(DigitMargin::One));
        assert_eq!(DigitMargin::from_count(2), None);
        assert_eq!(DigitMargin::default().count(), 0);
    }
}
