//! Radix Codec Module
//!
//! Native rendering of big numbers in radices 2 to 62.
//!
//! ## Native Digit Table
//!
//! | value  | symbols |
//! |--------|---------|
//! | 0-9    | `0`-`9` |
//! | 10-35  | `a`-`z` |
//! | 36-61  | `A`-`Z` |
//!
//! Digits are emitted most significant first. The only rendering with a
//! leading zero is the value zero itself, which renders as `"0"`.

use entities_utilities::{BigNumber, Radix};

use crate::common::DecodeError;

/// Native digit symbols indexed by digit value
pub const NATIVE_DIGITS: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const NO_VALUE: u8 = u8::MAX;

/// Digit value of every byte, `NO_VALUE` for bytes outside the table
const NATIVE_VALUES: [u8; 256] = {
    let mut table = [NO_VALUE; 256];
    let mut value = 0;
    while value < NATIVE_DIGITS.len() {
        table[NATIVE_DIGITS[value] as usize] = value as u8;
        value += 1;
    }
    table
};

/// Native radix codec
pub struct RadixCodec;

impl RadixCodec {
    /// Digit values of `value` in `radix`, most significant first
    pub fn digit_values(value: &BigNumber, radix: Radix) -> Vec<u8> {
        value.to_digits_desc(radix)
    }

    /// Native symbol for a digit value, if the value is a digit of `radix`
    pub fn native_symbol(digit: u8, radix: Radix) -> Option<char> {
        if digit < radix.as_u8() {
            Some(NATIVE_DIGITS[digit as usize] as char)
        } else {
            None
        }
    }

    /// Digit value of a native symbol, if the symbol is a digit of `radix`
    pub fn native_value(symbol: char, radix: Radix) -> Option<u8> {
        if !symbol.is_ascii() {
            return None;
        }
        let value = NATIVE_VALUES[symbol as usize];
        if value < radix.as_u8() {
            Some(value)
        } else {
            None
        }
    }

    /// Render `value` in `radix` with the native digit table
    pub fn render_native(value: &BigNumber, radix: Radix) -> String {
        Self::digit_values(value, radix)
            .into_iter()
            .map(|d| NATIVE_DIGITS[d as usize] as char)
            .collect()
    }

    /// Digit values of a native rendering
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the string is empty or holds a symbol that
    /// is not a digit of `radix`.
    pub fn native_digit_values(native: &str, radix: Radix) -> Result<Vec<u8>, DecodeError> {
        if native.is_empty() {
            return Err(DecodeError::Empty);
        }
        native
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Self::native_value(symbol, radix).ok_or(DecodeError::InvalidSymbol {
                    symbol,
                    position,
                    radix: radix.get(),
                })
            })
            .collect()
    }

    /// Parse a native rendering back into a big number
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the string is empty or holds a symbol that
    /// is not a digit of `radix`.
    pub fn parse_native(native: &str, radix: Radix) -> Result<BigNumber, DecodeError> {
        let digits = Self::native_digit_values(native, radix)?;
        // Every digit was checked against the radix above
        Ok(BigNumber::from_digits_desc(radix, &digits).unwrap_or_else(BigNumber::zero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix(value: u32) -> Radix {
        Radix::new(value).unwrap()
    }

    #[test]
    fn test_render_conventional_radices() {
        let value = BigNumber::from_u64(255);
        assert_eq!(RadixCodec::render_native(&value, radix(16)), "ff");
        assert_eq!(RadixCodec::render_native(&value, radix(10)), "255");
        assert_eq!(RadixCodec::render_native(&value, radix(2)), "11111111");
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(RadixCodec::render_native(&BigNumber::zero(), radix(27)), "0");
    }

    #[test]
    fn test_render_upper_table() {
        assert_eq!(RadixCodec::render_native(&BigNumber::from_u64(36), radix(62)), "A");
        assert_eq!(RadixCodec::render_native(&BigNumber::from_u64(61), radix(62)), "Z");
        assert_eq!(RadixCodec::render_native(&BigNumber::from_u64(62), radix(62)), "10");
        assert_eq!(RadixCodec::render_native(&BigNumber::from_u64(35), radix(36)), "z");
    }

    #[test]
    fn test_native_value_respects_radix() {
        assert_eq!(RadixCodec::native_value('f', radix(16)), Some(15));
        assert_eq!(RadixCodec::native_value('g', radix(16)), None);
        assert_eq!(RadixCodec::native_value('Z', radix(62)), Some(61));
        assert_eq!(RadixCodec::native_value('_', radix(62)), None);
        assert_eq!(RadixCodec::native_value('π', radix(62)), None);
    }

    #[test]
    fn test_native_symbol_respects_radix() {
        assert_eq!(RadixCodec::native_symbol(26, radix(27)), Some('q'));
        assert_eq!(RadixCodec::native_symbol(27, radix(27)), None);
    }

    #[test]
    fn test_parse_native() {
        assert_eq!(RadixCodec::parse_native("243f6", radix(16)).unwrap().to_u64(), Some(0x243f6));
        assert_eq!(RadixCodec::parse_native("", radix(16)), Err(DecodeError::Empty));
        assert_eq!(
            RadixCodec::parse_native("12x", radix(16)),
            Err(DecodeError::InvalidSymbol {
                symbol: 'x',
                position: 2,
                radix: 16
            })
        );
    }
}
