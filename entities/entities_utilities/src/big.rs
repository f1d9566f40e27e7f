//! Big Number Operations
//!
//! Provides arbitrary precision unsigned integer operations.
//!
//! This module uses the `malachite` crate for high-performance
//! arbitrary-precision arithmetic. All values are non-negative and every
//! division truncates, which for non-negative operands is the same as
//! rounding toward negative infinity.
//!
//! Arithmetic methods take `self` by value: a big number moves from one
//! operation to the next and is never aliased, so intermediate results of
//! hundreds of megabytes are not copied.

use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::Pow;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::Digits;
use malachite::Natural;

use crate::radix::Radix;

/// Big number representation using malachite's Natural
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Natural,
}

impl BigNumber {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            value: Natural::ZERO,
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Natural::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Natural::from(value),
        }
    }

    /// Parse a string of decimal digits
    ///
    /// Returns `None` if the string is empty or contains anything other than
    /// ASCII digits. Leading zeros are accepted.
    pub fn from_decimal_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Natural::from_str(digits).ok().map(Self::from_natural)
    }

    /// `base ^ exponent`, computed by fast exponentiation
    pub fn power(base: u32, exponent: u64) -> Self {
        Self {
            value: Natural::from(base).pow(exponent),
        }
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == Natural::ZERO
    }

    /// Multiply: x * y
    pub fn times(self, other: &Self) -> Self {
        Self {
            value: self.value * &other.value,
        }
    }

    /// Truncating division: floor(x / y)
    ///
    /// Returns None if dividing by zero
    pub fn div_floor(self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: self.value / &other.value,
        })
    }

    /// Multiply by a single-limb factor in place: x * y
    pub fn times_small(mut self, factor: u32) -> Self {
        self.value *= Natural::from(factor);
        self
    }

    /// Truncating division by a single-limb divisor: floor(x / y)
    ///
    /// Returns None if dividing by zero
    pub fn div_small(mut self, divisor: u32) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        self.value /= Natural::from(divisor);
        Some(self)
    }

    /// Multiply by `radix ^ exponent`
    pub fn times_radix_pow(self, radix: Radix, exponent: u64) -> Self {
        Self {
            value: self.value * Natural::from(radix.get()).pow(exponent),
        }
    }

    /// Truncating division by `radix ^ exponent`
    ///
    /// Infallible: a radix is never zero.
    pub fn div_radix_pow(self, radix: Radix, exponent: u64) -> Self {
        Self {
            value: self.value / Natural::from(radix.get()).pow(exponent),
        }
    }

    /// Multiply by `radix`
    pub fn times_radix(self, radix: Radix) -> Self {
        self.times_small(radix.get())
    }

    /// Truncating division by `radix`
    pub fn div_radix(mut self, radix: Radix) -> Self {
        self.value /= Natural::from(radix.get());
        self
    }

    /// Digit values in the given radix, most significant first
    ///
    /// Zero has the single digit `0`. Every other value has no leading zero
    /// digits.
    pub fn to_digits_desc(&self, radix: Radix) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        self.value.to_digits_desc(&radix.as_u8())
    }

    /// Build a number from digit values in the given radix, most significant first
    ///
    /// Returns None if any digit is not smaller than the radix.
    pub fn from_digits_desc(radix: Radix, digits: &[u8]) -> Option<Self> {
        Natural::from_digits_desc(&radix.as_u8(), digits.iter().copied()).map(Self::from_natural)
    }

    /// Convert to u64
    ///
    /// Returns None if the value is too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Get the internal Natural value (for advanced use)
    pub fn as_natural(&self) -> &Natural {
        &self.value
    }

    /// Create from Natural (for advanced use)
    pub fn from_natural(value: Natural) -> Self {
        Self { value }
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
