//! Bignum Rescaler
//!
//! Computes `floor(value * out_radix^out_digits / in_radix^in_digits)`.
//!
//! ## Strategies
//!
//! - **ExactPower**: raises both radices to their digit counts by fast
//!   exponentiation, then performs one multiplication and one truncating
//!   division. Subquadratic in the digit counts.
//! - **IterativeApproximate**: `out_digits` single-limb multiplications by
//!   `out_radix`, then `in_digits` single-limb truncating divisions by
//!   `in_radix`. Quadratic; kept for cross-checking.
//!
//! Because every multiplication happens before the first division, the
//! iterative strategy yields the same value as the exact one:
//! `floor(floor(x / a) / b) == floor(x / (a * b))` for non-negative `x`.

use std::time::Instant;

use entities_utilities::{BigNumber, Radix};
use tracing::debug;

/// Rescaling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RescalePolicy {
    /// Power, multiply, divide
    #[default]
    ExactPower,
    /// Repeated single-limb multiply, then repeated single-limb divide
    IterativeApproximate,
}

impl RescalePolicy {
    /// The rescaler implementing this policy
    pub fn rescaler(self) -> &'static dyn Rescaler {
        match self {
            RescalePolicy::ExactPower => &ExactPowerRescaler,
            RescalePolicy::IterativeApproximate => &IterativeRescaler,
        }
    }
}

/// Rescaler trait for the rescaling strategies
///
/// Implementations consume the value and return the rescaled one; the caller
/// must not rely on any earlier handle to the value afterwards.
pub trait Rescaler {
    /// `floor(value * out_radix^out_digits / in_radix^in_digits)`
    fn rescale(
        &self,
        value: BigNumber,
        in_radix: Radix,
        in_digits: usize,
        out_radix: Radix,
        out_digits: usize,
    ) -> BigNumber;
}

/// Fast-exponentiation rescaler
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactPowerRescaler;

impl Rescaler for ExactPowerRescaler {
    fn rescale(
        &self,
        value: BigNumber,
        in_radix: Radix,
        in_digits: usize,
        out_radix: Radix,
        out_digits: usize,
    ) -> BigNumber {
        value
            .times_radix_pow(out_radix, out_digits as u64)
            .div_radix_pow(in_radix, in_digits as u64)
    }
}

/// Single-limb step rescaler
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeRescaler;

impl Rescaler for IterativeRescaler {
    fn rescale(
        &self,
        value: BigNumber,
        in_radix: Radix,
        in_digits: usize,
        out_radix: Radix,
        out_digits: usize,
    ) -> BigNumber {
        let mut value = value;
        for _ in 0..out_digits {
            value = value.times_radix(out_radix);
        }
        for _ in 0..in_digits {
            value = value.div_radix(in_radix);
        }
        value
    }
}

/// Rescale `value` with the given policy
pub fn rescale(
    value: BigNumber,
    in_radix: Radix,
    in_digits: usize,
    out_radix: Radix,
    out_digits: usize,
    policy: RescalePolicy,
) -> BigNumber {
    let started = Instant::now();
    let result = policy
        .rescaler()
        .rescale(value, in_radix, in_digits, out_radix, out_digits);
    let elapsed_ms = started.elapsed().as_millis() as u64;
    debug!(?policy, in_digits, out_digits, elapsed_ms, "rescaled");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix(value: u32) -> Radix {
        Radix::new(value).unwrap()
    }

    #[test]
    fn test_exact_hex_fraction() {
        let value = BigNumber::from_u64(14159265);
        let result = rescale(value, Radix::DECIMAL, 8, radix(16), 5, RescalePolicy::ExactPower);
        assert_eq!(result.to_u64(), Some(0x243f6));
    }

    #[test]
    fn test_iterative_hex_fraction() {
        let value = BigNumber::from_u64(14159265);
        let result = rescale(
            value,
            Radix::DECIMAL,
            8,
            radix(16),
            5,
            RescalePolicy::IterativeApproximate,
        );
        assert_eq!(result.to_u64(), Some(0x243f6));
    }

    #[test]
    fn test_zero_output_digits_truncates_to_zero() {
        let value = BigNumber::from_u64(3);
        for policy in [RescalePolicy::ExactPower, RescalePolicy::IterativeApproximate] {
            let result = rescale(value.clone(), Radix::DECIMAL, 1, radix(27), 0, policy);
            assert!(result.is_zero());
        }
    }

    #[test]
    fn test_identity_scale() {
        let value = BigNumber::from_u64(987654321);
        let result = rescale(value.clone(), Radix::DECIMAL, 0, radix(2), 0, RescalePolicy::ExactPower);
        assert_eq!(result, value);
    }

    #[test]
    fn test_default_policy_is_exact() {
        assert_eq!(RescalePolicy::default(), RescalePolicy::ExactPower);
    }
}
