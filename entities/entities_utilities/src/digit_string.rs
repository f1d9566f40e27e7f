//! Digit String Module
//!
//! Locates the run of decimal digits at the start of a raw input buffer.
//!
//! Input files commonly end with a newline or other terminator. The digit
//! string stops at the first byte that is not an ASCII digit, and only that
//! prefix takes part in the conversion.

use crate::big::BigNumber;

/// A non-empty run of ASCII decimal digits borrowed from an input buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitString<'a> {
    digits: &'a [u8],
}

impl<'a> DigitString<'a> {
    /// Locate the leading digit run of `buffer`
    ///
    /// Returns `None` if the buffer does not start with a decimal digit.
    pub fn locate(buffer: &'a [u8]) -> Option<Self> {
        let end = buffer
            .iter()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(buffer.len());
        if end == 0 {
            None
        } else {
            Some(Self {
                digits: &buffer[..end],
            })
        }
    }

    /// Number of digit characters, including leading zeros
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; a located digit string holds at least one digit
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Size of the parsed value in base 10
    ///
    /// Leading zeros carry no value and are not counted. The value zero has
    /// one digit.
    pub fn significant_len(&self) -> usize {
        let zeros = self.digits.iter().take_while(|&&b| b == b'0').count();
        (self.digits.len() - zeros).max(1)
    }

    /// The digits as a string slice
    pub fn as_str(&self) -> &'a str {
        // Every byte is an ASCII digit
        std::str::from_utf8(self.digits).unwrap_or_default()
    }

    /// The digits as raw bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.digits
    }

    /// Parse the digit string into a big number
    pub fn parse(&self) -> BigNumber {
        BigNumber::from_decimal_digits(self.as_str()).unwrap_or_else(BigNumber::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_stops_at_terminator() {
        let ds = DigitString::locate(b"14159265\n").unwrap();
        assert_eq!(ds.as_str(), "14159265");
        assert_eq!(ds.len(), 8);
    }

    #[test]
    fn test_locate_whole_buffer() {
        let ds = DigitString::locate(b"3").unwrap();
        assert_eq!(ds.as_str(), "3");
        assert!(!ds.is_empty());
    }

    #[test]
    fn test_locate_rejects_non_digit_start() {
        assert!(DigitString::locate(b"").is_none());
        assert!(DigitString::locate(b"\n123").is_none());
        assert!(DigitString::locate(b"-5").is_none());
        assert!(DigitString::locate(b" 42").is_none());
    }

    #[test]
    fn test_embedded_terminator() {
        let ds = DigitString::locate(b"12\x0034").unwrap();
        assert_eq!(ds.as_str(), "12");
    }

    #[test]
    fn test_significant_len_ignores_leading_zeros() {
        assert_eq!(DigitString::locate(b"000123").unwrap().significant_len(), 3);
        assert_eq!(DigitString::locate(b"0").unwrap().significant_len(), 1);
        assert_eq!(DigitString::locate(b"0000").unwrap().significant_len(), 1);
        assert_eq!(DigitString::locate(b"1000").unwrap().significant_len(), 4);
    }

    #[test]
    fn test_parse() {
        let value = DigitString::locate(b"0042\r\n").unwrap().parse();
        assert_eq!(value.to_u64(), Some(42));
    }
}
