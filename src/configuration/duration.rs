//! Duration strings in the `<number><unit>` form, e.g. `5m`, `1h30m` or `1.5s`.

use std::time::Duration;

use thiserror::Error;


const NANOSECONDS_PER_MICROSECOND: u128 = 1_000;
const NANOSECONDS_PER_MILLISECOND: u128 = 1_000_000;
const NANOSECONDS_PER_SECOND: u128 = 1_000_000_000;
const NANOSECONDS_PER_MINUTE: u128 = 60 * NANOSECONDS_PER_SECOND;
const NANOSECONDS_PER_HOUR: u128 = 60 * NANOSECONDS_PER_MINUTE;

/// Largest representable duration, in nanoseconds (signed 64-bit range).
const MAX_NANOSECONDS: u128 = i64::MAX as u128;

/// Fraction digits past this point cannot change the nanosecond result.
const MAX_FRACTION_DIGITS: usize = 18;


#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("duration is empty")]
    Empty,

    #[error("negative durations are not allowed")]
    Negative,

    #[error("expected a number")]
    InvalidNumber,

    #[error("missing unit (expected one of ns, us, ms, s, m, h)")]
    MissingUnit,

    #[error("unknown unit \"{0}\" (expected one of ns, us, ms, s, m, h)")]
    UnknownUnit(String),

    #[error("duration is out of range")]
    Overflow,
}


fn unit_in_nanoseconds(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOSECONDS_PER_MICROSECOND),
        "ms" => Some(NANOSECONDS_PER_MILLISECOND),
        "s" => Some(NANOSECONDS_PER_SECOND),
        "m" => Some(NANOSECONDS_PER_MINUTE),
        "h" => Some(NANOSECONDS_PER_HOUR),
        _ => None,
    }
}

fn split_leading_digits(value: &str) -> (&str, &str) {
    let digit_count = value.bytes().take_while(u8::is_ascii_digit).count();
    value.split_at(digit_count)
}


/// Parse a duration string made of one or more `<decimal number><unit>` segments.
///
/// Accepted units are `ns`, `us` (also `µs`), `ms`, `s`, `m` and `h`.
/// A lone `0` is the only value allowed without a unit.
pub fn parse_duration(value: &str) -> Result<Duration, DurationParseError> {
    let mut remaining = value;

    if remaining.starts_with('-') {
        return Err(DurationParseError::Negative);
    }
    if let Some(unsigned) = remaining.strip_prefix('+') {
        remaining = unsigned;
    }

    if remaining == "0" {
        return Ok(Duration::ZERO);
    }
    if remaining.is_empty() {
        return Err(DurationParseError::Empty);
    }


    let mut total_nanoseconds: u128 = 0;

    while !remaining.is_empty() {
        let (integer_digits, after_integer) = split_leading_digits(remaining);

        let (fraction_digits, after_number) = match after_integer.strip_prefix('.') {
            Some(after_dot) => split_leading_digits(after_dot),
            None => ("", after_integer),
        };

        if integer_digits.is_empty() && fraction_digits.is_empty() {
            return Err(DurationParseError::InvalidNumber);
        }


        let unit_length = after_number
            .find(|character: char| character == '.' || character.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, after_unit) = after_number.split_at(unit_length);

        if unit.is_empty() {
            return Err(DurationParseError::MissingUnit);
        }

        let unit_nanoseconds = unit_in_nanoseconds(unit)
            .ok_or_else(|| DurationParseError::UnknownUnit(unit.to_string()))?;


        let integer_part: u128 = if integer_digits.is_empty() {
            0
        } else {
            integer_digits
                .parse()
                .map_err(|_| DurationParseError::Overflow)?
        };

        let whole_nanoseconds = integer_part
            .checked_mul(unit_nanoseconds)
            .filter(|whole| *whole <= MAX_NANOSECONDS)
            .ok_or(DurationParseError::Overflow)?;

        let mut fraction: u128 = 0;
        let mut fraction_scale: u128 = 1;
        for digit in fraction_digits.bytes().take(MAX_FRACTION_DIGITS) {
            fraction = fraction * 10 + u128::from(digit - b'0');
            fraction_scale *= 10;
        }
        // Both terms are at most MAX_NANOSECONDS and one unit, so this cannot wrap.
        let segment_nanoseconds = whole_nanoseconds + fraction * unit_nanoseconds / fraction_scale;


        total_nanoseconds = total_nanoseconds
            .checked_add(segment_nanoseconds)
            .filter(|total| *total <= MAX_NANOSECONDS)
            .ok_or(DurationParseError::Overflow)?;

        remaining = after_unit;
    }

    // PANIC SAFETY: bounded by MAX_NANOSECONDS above, which fits into u64.
    Ok(Duration::from_nanos(total_nanoseconds as u64))
}
