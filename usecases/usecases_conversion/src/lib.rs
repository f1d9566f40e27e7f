//! Use Cases Layer: Conversion
//!
//! Converts a decimal digit string into another radix without inventing
//! digits the input does not determine.
//!
//! ## Overview
//!
//! The input digits are read as a fraction `0.d1 d2 ... dn` in base 10. Such a
//! fraction is only known to within `10^-n`, so the number of base-`r` digits
//! that can be stated is bounded by `n / log10(r)`. The conversion runs three
//! stages, strictly in order:
//!
//! - **[`estimator`](estimator/index.html)**: how many output digits the
//!   input supports
//!
//! - **[`rescaler`](rescaler/index.html)**: `floor(value * r^d / 10^n)` in
//!   exact integer arithmetic
//!
//! - **encoding**: rendering into the custom alphabet (see
//!   `infrastructure_bignum_encoding`)
//!
//! [`pipeline`](pipeline/index.html) ties the stages together and checks the
//! invariants between them; [`config`](config/index.html) holds the explicit
//! engine configuration.
//!
//! ## Examples
//!
//! ```rust
//! use entities_utilities::Radix;
//! use usecases_conversion::{ConversionConfig, Converter, DigitMargin};
//!
//! let config = ConversionConfig::new(Radix::new(16).unwrap()).with_margin(DigitMargin::One);
//! let conversion = Converter::new(config).convert_digits("14159265").unwrap();
//! assert_eq!(conversion.out_digit_count, 5);
//! assert_eq!(conversion.symbols, "BDCOF");
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod pipeline;
pub mod rescaler;

pub use config::{ConversionConfig, PadPolicy};
pub use error::ConversionError;
pub use estimator::{estimate, DigitMargin};
pub use pipeline::{Conversion, Converter, DigitCounts};
pub use rescaler::{rescale, ExactPowerRescaler, IterativeRescaler, RescalePolicy, Rescaler};
