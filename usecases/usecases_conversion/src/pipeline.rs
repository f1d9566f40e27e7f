//! Conversion Pipeline
//!
//! Runs parse → estimate → rescale → encode for one input. Each stage
//! consumes the output of the previous one; the big number is moved from
//! stage to stage and never shared.

use entities_utilities::{BigNumber, DigitString, Radix};
use infrastructure_bignum_encoding::{encode, CustomAlphabet};
use infrastructure_debugging::DebugUtils;
use tracing::{debug, info};

use crate::config::{ConversionConfig, PadPolicy};
use crate::error::ConversionError;
use crate::estimator::estimate;
use crate::rescaler::rescale;

/// Result of one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Output digit sequence in the custom alphabet
    pub symbols: String,
    /// Output radix
    pub radix: Radix,
    /// Input digits counted as precision
    pub in_digit_count: usize,
    /// Output digits supported by the input
    pub out_digit_count: usize,
    /// Length of the canonical rendering before padding
    pub native_len: usize,
}

/// Sizes of a parsed digit string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitCounts {
    /// Digits as written, leading zeros included
    pub written: usize,
    /// Size of the value in base 10; leading zeros dropped, at least 1
    pub significant: usize,
}

/// Conversion engine bound to one configuration
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert the digits at the start of a raw input buffer
    ///
    /// The buffer is released as soon as it has been parsed.
    pub fn convert_buffer(&self, buffer: Vec<u8>) -> Result<Conversion, ConversionError> {
        let (value, counts) = Self::parse(&buffer)?;
        drop(buffer);
        self.convert_value(value, counts)
    }

    /// Convert a decimal digit string
    pub fn convert_digits(&self, digits: &str) -> Result<Conversion, ConversionError> {
        let (value, counts) = Self::parse(digits.as_bytes())?;
        self.convert_value(value, counts)
    }

    /// Parse the leading digits of `buffer`
    ///
    /// Returns the value together with its written and significant digit counts.
    ///
    /// # Errors
    ///
    /// [`ConversionError::EmptyInput`] if the buffer does not start with a digit.
    pub fn parse(buffer: &[u8]) -> Result<(BigNumber, DigitCounts), ConversionError> {
        let digits = DigitString::locate(buffer).ok_or(ConversionError::EmptyInput)?;
        debug!(
            buffer_len = buffer.len(),
            digits = digits.len(),
            value = %DebugUtils::preview(digits.as_str()),
            "parsed input"
        );
        let counts = DigitCounts {
            written: digits.len(),
            significant: digits.significant_len(),
        };
        Ok((digits.parse(), counts))
    }

    /// Run estimate, rescale and encode on a parsed value
    ///
    /// Without an integer part the precision is the size of `value` in base
    /// 10. With one, the integer part is the first `integer_digits` digits as
    /// written, so leading zeros belong to it and the rest are fraction digits.
    pub fn convert_value(
        &self,
        value: BigNumber,
        counts: DigitCounts,
    ) -> Result<Conversion, ConversionError> {
        let integer_digits = self.config.integer_digits();
        let in_digit_count = if integer_digits == 0 {
            counts.significant
        } else {
            counts.written.saturating_sub(integer_digits)
        };
        if in_digit_count == 0 && integer_digits > 0 {
            return Err(ConversionError::NoFractionDigits {
                decimal_digits: counts.written,
                integer_digits,
            });
        }

        let out_radix = self.config.out_radix();
        let out_digit_count = estimate(in_digit_count, out_radix, self.config.digit_margin())?;
        info!(
            in_digit_count,
            out_digit_count,
            radix = out_radix.get(),
            "estimated output digits"
        );

        let scaled = rescale(
            value,
            self.config.in_radix(),
            in_digit_count,
            out_radix,
            out_digit_count,
            self.config.rescale_policy(),
        );

        let symbols = encode(&scaled, out_radix)?;
        drop(scaled);
        let native_len = symbols.len();

        // Without an integer part the scaled value is below out_radix^out_digit_count
        if integer_digits == 0 && native_len > out_digit_count.max(1) {
            return Err(ConversionError::DigitCountMismatch {
                expected: out_digit_count,
                actual: native_len,
            });
        }

        let symbols = match self.config.pad_policy() {
            PadPolicy::ToDigitCount => CustomAlphabet::pad_left(symbols, out_digit_count),
            PadPolicy::None => symbols,
        };
        debug!(
            native_len,
            symbols = %DebugUtils::preview(&symbols),
            "encoded"
        );

        Ok(Conversion {
            symbols,
            radix: out_radix,
            in_digit_count,
            out_digit_count,
            native_len,
        })
    }
}
