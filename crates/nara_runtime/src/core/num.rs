//! Base-10 conversion between signed 64-bit integers and text.

use super::text::TextValue;
use crate::throw::Throw;
use crate::util::CallStack;

/// Enough units for the longest rendering: 19 digits plus a sign.
const SCRATCH_UNITS: usize = 20;

/// Formats `value` in base 10, with a leading `-` for negative values.
pub fn format_i64(value: i64) -> TextValue {
    if value == 0 {
        return TextValue::from_str("0");
    }
    let mut scratch = ['0'; SCRATCH_UNITS];
    let mut end = SCRATCH_UNITS;
    let negative = value < 0;
    // i64::MIN has no positive counterpart; its magnitude survives as u64.
    let mut magnitude = if negative {
        value.wrapping_neg() as u64
    } else {
        value as u64
    };
    while magnitude != 0 {
        end -= 1;
        scratch[end] = (b'0' + (magnitude % 10) as u8) as char;
        magnitude /= 10;
    }
    if negative {
        end -= 1;
        scratch[end] = '-';
    }
    TextValue::from_units(&scratch[end..])
}

/// Parses an optional `-` followed by one or more decimal digits.
///
/// Any other shape fails with a number format error naming the full input.
/// Magnitudes past the 64-bit range wrap, so every formatted value parses
/// back to itself, `i64::MIN` included.
pub fn parse_i64(text: &TextValue, calls: &dyn CallStack) -> Result<i64, Throw> {
    let units = text.units();
    let (negative, digits) = match units.split_first() {
        Some((&'-', rest)) => (true, rest),
        _ => (false, units),
    };
    if digits.is_empty() {
        return Err(Throw::number_format(text, calls));
    }
    let mut value: i64 = 0;
    let mut scale: i64 = 1;
    for unit in digits.iter().rev() {
        let Some(digit) = unit.to_digit(10) else {
            return Err(Throw::number_format(text, calls));
        };
        value = value.wrapping_add((digit as i64).wrapping_mul(scale));
        scale = scale.wrapping_mul(10);
    }
    if negative {
        value = value.wrapping_neg();
    }
    Ok(value)
}
