//! Conversion Configuration
//!
//! Every knob of the engine is an explicit field of [`ConversionConfig`].
//! The input radix is not configurable: input is always decimal.

use entities_utilities::Radix;

use crate::estimator::DigitMargin;
use crate::rescaler::RescalePolicy;

/// Whether short renderings are left-padded to the estimated digit count
///
/// A canonical rendering drops leading zero digits. Padding restores them so
/// the output reads positionally as "digits after the radix point".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadPolicy {
    /// Left-pad with the placeholder symbol up to the estimated digit count
    #[default]
    ToDigitCount,
    /// Emit the canonical rendering as-is
    None,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    out_radix: Radix,
    digit_margin: DigitMargin,
    rescale_policy: RescalePolicy,
    pad_policy: PadPolicy,
    integer_digits: usize,
}

impl ConversionConfig {
    /// Configuration with default policies for the given output radix
    pub fn new(out_radix: Radix) -> Self {
        Self {
            out_radix,
            digit_margin: DigitMargin::default(),
            rescale_policy: RescalePolicy::default(),
            pad_policy: PadPolicy::default(),
            integer_digits: 0,
        }
    }

    /// Set the digit-count safety margin
    pub fn with_margin(mut self, margin: DigitMargin) -> Self {
        self.digit_margin = margin;
        self
    }

    /// Set the rescaling strategy
    pub fn with_rescale_policy(mut self, policy: RescalePolicy) -> Self {
        self.rescale_policy = policy;
        self
    }

    /// Set the padding policy
    pub fn with_pad_policy(mut self, policy: PadPolicy) -> Self {
        self.pad_policy = policy;
        self
    }

    /// Treat the first `digits` input digits as the integer part
    ///
    /// Those digits are not counted as input precision. For a file holding
    /// `31415...` and `digits = 1` the output is `3` followed by the converted
    /// fraction.
    pub fn with_integer_digits(mut self, digits: usize) -> Self {
        self.integer_digits = digits;
        self
    }

    /// Input radix, fixed at 10
    pub fn in_radix(&self) -> Radix {
        Radix::DECIMAL
    }

    pub fn out_radix(&self) -> Radix {
        self.out_radix
    }

    pub fn digit_margin(&self) -> DigitMargin {
        self.digit_margin
    }

    pub fn rescale_policy(&self) -> RescalePolicy {
        self.rescale_policy
    }

    pub fn pad_policy(&self) -> PadPolicy {
        self.pad_policy
    }

    pub fn integer_digits(&self) -> usize {
        self.integer_digits
    }
}
