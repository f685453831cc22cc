use super::*;
use pretty_assertions::assert_eq;

#[test]
fn new_normalizes_trailing_zeros() {
    let d = Decimal::new(1200, -2, false).unwrap();
    assert_eq!(d.mantissa(), 12);
    assert_eq!(d.exponent(), 0);
}

#[test]
fn equal_values_compare_equal() {
    assert_eq!(Decimal::new(125, -1, false), Decimal::new(12500, -3, false));
}

#[test]
fn zero_drops_sign_and_exponent() {
    let zero = Decimal::new(0, 17, true).unwrap();
    assert_eq!(zero, Decimal::ZERO);
    assert!(zero.is_zero());
    assert!(!zero.is_sign_negative());
    assert_eq!(Decimal::default(), Decimal::ZERO);
}

#[test]
fn new_rejects_too_many_digits() {
    // 39 significant digits.
    let too_wide = 10u128.pow(38) + 1;
    assert_eq!(Decimal::new(too_wide, 0, false), None);
    assert!(Decimal::new(10u128.pow(38) - 1, 0, false).is_some());
}

#[test]
fn new_rejects_exponent_out_of_range() {
    assert_eq!(Decimal::new(1, 128, false), None);
    assert_eq!(Decimal::new(1, -129, false), None);
    assert!(Decimal::new(1, 127, false).is_some());
    // Normalization can bring an exponent back into range.
    assert!(Decimal::new(1000, -130, false).is_some());
}

#[test]
fn from_digits_combines_integer_and_fraction() {
    let d = Decimal::from_digits(true, "012", "500", 0).unwrap();
    assert_eq!(d.mantissa(), 125);
    assert_eq!(d.exponent(), -1);
    assert!(d.is_sign_negative());
}

#[test]
fn from_digits_applies_exponent() {
    let d = Decimal::from_digits(false, "1", "5", 3).unwrap();
    assert_eq!(d.to_string(), "1500");
}

#[test]
fn from_digits_ignores_leading_zeros_in_digit_limit() {
    let digits = format!("{}{}", "0".repeat(50), "7");
    assert_eq!(
        Decimal::from_digits(false, &digits, "", 0),
        Decimal::new(7, 0, false)
    );
}

#[test]
fn from_digits_all_zero_is_zero() {
    assert_eq!(Decimal::from_digits(true, "000", "00", 999), Some(Decimal::ZERO));
}

// === Display ===

#[test]
fn display_plain_notation() {
    let cases = [
        ((125, -1, true), "-12.5"),
        ((12, 2, false), "1200"),
        ((3, -3, false), "0.003"),
        ((42, 0, false), "42"),
        ((0, 0, false), "0"),
    ];
    for ((mantissa, exponent, negative), expected) in cases {
        let d = Decimal::new(mantissa, exponent, negative).unwrap();
        assert_eq!(d.to_string(), expected);
    }
}
