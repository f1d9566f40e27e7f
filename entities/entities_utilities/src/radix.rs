//! Radix Module
//!
//! Provides the validated radix type shared by every layer.
//!
//! A radix is checked once, when it enters the system, and is immutable
//! afterwards. Every component that accepts a [`Radix`] can rely on it being
//! inside the supported range `[2, 62]`.

use std::fmt;

/// Positional radix in the supported range `[Radix::MIN, Radix::MAX]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u8);

impl Radix {
    /// Smallest supported radix
    pub const MIN: u32 = 2;

    /// Largest supported radix (10 numerals + 26 + 26 letters)
    pub const MAX: u32 = 62;

    /// The input radix. Input is always decimal.
    pub const DECIMAL: Radix = Radix(10);

    /// Validate a radix
    ///
    /// # Errors
    ///
    /// Returns [`RadixError`] if `value` is outside `[2, 62]`.
    pub fn new(value: u32) -> Result<Self, RadixError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RadixError { value })
        }
    }

    /// The radix as a `u32`
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// The radix as a `u8` (always fits, see [`Radix::MAX`])
    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// Decimal logarithm of the radix, always strictly positive
    pub fn log10(self) -> f64 {
        f64::from(self.0).log10()
    }
}

impl TryFrom<u32> for Radix {
    type Error = RadixError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Radix outside the supported range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixError {
    /// The rejected value
    pub value: u32,
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radix {} is outside the supported range [{}, {}]",
            self.value,
            Radix::MIN,
            Radix::MAX
        )
    }
}

impl std::error::Error for RadixError {}
