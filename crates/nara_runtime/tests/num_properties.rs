use nara_runtime::{EmptyCallStack, TextValue, ThrowKind, format_i64, parse_i64};
use proptest::prelude::*;

proptest! {
    #[test]
    fn format_matches_std_rendering(v in any::<i64>()) {
        prop_assert_eq!(format_i64(v).to_string(), v.to_string());
    }
}

proptest! {
    #[test]
    fn parse_inverts_format(v in any::<i64>()) {
        let text = format_i64(v);
        prop_assert_eq!(parse_i64(&text, &EmptyCallStack).unwrap(), v);
    }
}

proptest! {
    #[test]
    fn parse_matches_std_for_plain_digits(s in "-?[0-9]{1,18}") {
        let expected: i64 = s.parse().unwrap();
        let parsed = parse_i64(&TextValue::from_str(&s), &EmptyCallStack).unwrap();
        prop_assert_eq!(parsed, expected);
    }
}

#[test]
fn zero_formats_as_single_digit() {
    assert_eq!(format_i64(0).to_string(), "0");
}

#[test]
fn zero_parses_with_and_without_sign() {
    assert_eq!(parse_i64(&TextValue::from_str("0"), &EmptyCallStack).unwrap(), 0);
    assert_eq!(parse_i64(&TextValue::from_str("-0"), &EmptyCallStack).unwrap(), 0);
}

#[test]
fn leading_zeros_are_accepted() {
    assert_eq!(parse_i64(&TextValue::from_str("007"), &EmptyCallStack).unwrap(), 7);
}

#[test]
fn min_value_round_trips() {
    let text = format_i64(i64::MIN);
    assert_eq!(text.to_string(), "-9223372036854775808");
    assert_eq!(parse_i64(&text, &EmptyCallStack).unwrap(), i64::MIN);
}

#[test]
fn magnitude_past_range_wraps() {
    let two_pow_63 = TextValue::from_str("9223372036854775808");
    assert_eq!(parse_i64(&two_pow_63, &EmptyCallStack).unwrap(), i64::MIN);
    let two_pow_64 = TextValue::from_str("18446744073709551616");
    assert_eq!(parse_i64(&two_pow_64, &EmptyCallStack).unwrap(), 0);
}

#[test]
fn malformed_text_fails_as_number_format() {
    for bad in ["", "-", "+5", "1-2", " 7", "7 ", "12a3", "--4"] {
        let err = parse_i64(&TextValue::from_str(bad), &EmptyCallStack).unwrap_err();
        assert_eq!(err.kind(), ThrowKind::NumberFormat, "input {bad:?}");
    }
}

#[test]
fn failure_message_names_the_input() {
    let err = parse_i64(&TextValue::from_str("12a3"), &EmptyCallStack).unwrap_err();
    let message = err.message().unwrap().to_string();
    assert!(message.contains("12a3"), "{message}");
}
