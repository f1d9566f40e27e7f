//! Entities Layer: Utilities
//!
//! Provides the core value types of the conversion engine:
//! - Big number operations (unsigned, arbitrary precision)
//! - Validated radices
//! - Decimal digit strings located inside raw input buffers

pub mod big;
pub mod digit_string;
pub mod radix;

pub use big::BigNumber;
pub use digit_string::DigitString;
pub use radix::{Radix, RadixError};
