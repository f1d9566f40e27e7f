//! Infrastructure Layer: Bignum Encoding
//!
//! Renders big numbers as digit sequences and maps those sequences into the
//! custom output alphabet.
//!
//! ## Codecs
//!
//! - **[`radix_codec`](radix_codec/index.html)**: Native rendering of a
//!   `BigNumber` in any radix from 2 to 62 using the conventional
//!   `0-9a-zA-Z` digit table, and parsing back.
//!
//! - **[`alphabet`](alphabet/index.html)**: The custom alphabet. Digit value 0
//!   is the placeholder `_`, every other value maps to a letter or numeral
//!   through a fixed lookup table.
//!
//! ## Encoding Pipeline
//!
//! ```text
//! BigNumber --radix_codec--> digit values --alphabet--> custom symbols
//!                    \--> native symbols --alphabet--/
//! ```
//!
//! Both paths produce the same symbols; the native path exists for
//! interoperability with conventional radix strings.

mod common;

pub mod alphabet;
pub mod radix_codec;

pub use alphabet::{CustomAlphabet, PLACEHOLDER};
pub use radix_codec::RadixCodec;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};

use entities_utilities::{BigNumber, Radix};

/// Encode a big number into the custom alphabet
///
/// One symbol per base-`radix` digit, most significant first.
pub fn encode(value: &BigNumber, radix: Radix) -> Result<String, EncodeError> {
    let digits = RadixCodec::digit_values(value, radix);
    CustomAlphabet::encode_digits(&digits, radix)
}
