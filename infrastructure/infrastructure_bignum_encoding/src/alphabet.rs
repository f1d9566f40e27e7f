//! Custom Alphabet Module
//!
//! The output alphabet of the converter, one character per digit value.
//!
//! | value  | symbol  |
//! |--------|---------|
//! | 0      | `_`     |
//! | 1-26   | `A`-`Z` |
//! | 27-52  | `a`-`z` |
//! | 53-61  | `1`-`9` |
//!
//! Digit value 0 has no letter; it is written as the placeholder `_`. For
//! radices up to 27 every non-zero digit is an uppercase letter, so base-27
//! output reads as text over the alphabet `_A-Z`.
//!
//! The mapping is held in two fixed tables, one per direction, and is a
//! bijection on the 62 digit values.

use entities_utilities::Radix;

use crate::common::{DecodeError, EncodeError};
use crate::radix_codec::RadixCodec;

/// Symbol for digit value 0
pub const PLACEHOLDER: char = '_';

/// Custom symbols indexed by digit value
const SYMBOLS: &[u8; 62] = b"_ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz123456789";

const NO_VALUE: u8 = u8::MAX;

/// Digit value of every byte, `NO_VALUE` for bytes outside the alphabet
const VALUES: [u8; 256] = {
    let mut table = [NO_VALUE; 256];
    let mut value = 0;
    while value < SYMBOLS.len() {
        table[SYMBOLS[value] as usize] = value as u8;
        value += 1;
    }
    table
};

/// Custom output alphabet
pub struct CustomAlphabet;

impl CustomAlphabet {
    /// Symbol for a digit value, if the value is a digit of `radix`
    pub fn symbol(digit: u8, radix: Radix) -> Option<char> {
        if digit < radix.as_u8() {
            Some(SYMBOLS[digit as usize] as char)
        } else {
            None
        }
    }

    /// Digit value of a symbol, if the symbol is a digit of `radix`
    pub fn value(symbol: char, radix: Radix) -> Option<u8> {
        if !symbol.is_ascii() {
            return None;
        }
        let value = VALUES[symbol as usize];
        if value < radix.as_u8() {
            Some(value)
        } else {
            None
        }
    }

    /// Encode digit values, most significant first
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::DigitOutOfRange`] for a value that is not a
    /// digit of `radix`.
    pub fn encode_digits(digits: &[u8], radix: Radix) -> Result<String, EncodeError> {
        let mut out = String::with_capacity(digits.len());
        for &digit in digits {
            let symbol = Self::symbol(digit, radix).ok_or(EncodeError::DigitOutOfRange {
                digit,
                radix: radix.get(),
            })?;
            out.push(symbol);
        }
        Ok(out)
    }

    /// Decode custom symbols into digit values
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for an empty string or a symbol that is not a
    /// digit of `radix`.
    pub fn decode_digits(symbols: &str, radix: Radix) -> Result<Vec<u8>, DecodeError> {
        if symbols.is_empty() {
            return Err(DecodeError::Empty);
        }
        symbols
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Self::value(symbol, radix).ok_or(DecodeError::InvalidSymbol {
                    symbol,
                    position,
                    radix: radix.get(),
                })
            })
            .collect()
    }

    /// Remap a native rendering (`0-9a-zA-Z`) into the custom alphabet
    pub fn native_to_custom(native: &str, radix: Radix) -> Result<String, DecodeError> {
        let digits = RadixCodec::native_digit_values(native, radix)?;
        // Values come from the native table of the same radix
        Ok(digits.into_iter().map(|d| SYMBOLS[d as usize] as char).collect())
    }

    /// Remap custom symbols back into the native rendering
    pub fn custom_to_native(symbols: &str, radix: Radix) -> Result<String, DecodeError> {
        let digits = Self::decode_digits(symbols, radix)?;
        Ok(digits
            .into_iter()
            .filter_map(|d| RadixCodec::native_symbol(d, radix))
            .collect())
    }

    /// Left-pad with the placeholder up to `width` symbols
    ///
    /// Never truncates: a longer string is returned unchanged.
    pub fn pad_left(symbols: String, width: usize) -> String {
        let len = symbols.chars().count();
        if len >= width {
            return symbols;
        }
        let mut padded = String::with_capacity(width);
        padded.extend(std::iter::repeat(PLACEHOLDER).take(width - len));
        padded.push_str(&symbols);
        padded
    }
}
