//! Integration tests for entities_utilities crate
//!
//! These tests verify big number, radix and digit string operations end-to-end.

use entities_utilities::*;

#[test]
fn test_digit_string_to_big_number_integration() {
    let buffer = b"31415926535897932384626433832795028841971\n".to_vec();
    let digits = DigitString::locate(&buffer).unwrap();
    assert_eq!(digits.len(), 41);
    assert_eq!(digits.significant_len(), 41);

    let value = digits.parse();
    assert_eq!(value.to_string(), "31415926535897932384626433832795028841971");
}

#[test]
fn test_digit_round_trip_every_radix() {
    let value = BigNumber::from_decimal_digits("271828182845904523536028747135266249775724709369995").unwrap();
    for r in Radix::MIN..=Radix::MAX {
        let radix = Radix::new(r).unwrap();
        let digits = value.to_digits_desc(radix);
        assert!(digits.iter().all(|&d| u32::from(d) < r));
        assert_ne!(digits[0], 0);
        assert_eq!(BigNumber::from_digits_desc(radix, &digits), Some(value.clone()));
    }
}

#[test]
fn test_power_matches_repeated_multiplication() {
    let mut repeated = BigNumber::from_u32(1);
    for _ in 0..50 {
        repeated = repeated.times_small(27);
    }
    assert_eq!(repeated, BigNumber::power(27, 50));
}

#[test]
fn test_nested_truncation_equals_single_division() {
    // floor(floor(x / a) / b) == floor(x / (a * b)) for non-negative x
    let x = BigNumber::from_decimal_digits("987654321987654321987654321").unwrap();
    let mut nested = x.clone();
    for _ in 0..7 {
        nested = nested.div_small(10).unwrap();
    }
    let single = x.div_floor(&BigNumber::power(10, 7)).unwrap();
    assert_eq!(nested, single);
}

#[test]
fn test_radix_rejects_out_of_range_values() {
    for bad in [0u32, 1, 63, 64, 255, u32::MAX] {
        let err = Radix::new(bad).unwrap_err();
        assert_eq!(err.value, bad);
    }
}
