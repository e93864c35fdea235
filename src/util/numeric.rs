//! Lenient numeric parsing shared by the formatter and the metrics engine.

/// Parse the leading base-10 integer of `input`.
///
/// Accepts optional leading whitespace and a single `+`/`-` sign, then reads
/// digits until the first non-digit. Anything after the digits is ignored, so
/// `"30 units"` parses as `30`. Returns `None` when no digit is found or the
/// value does not fit in an `i64`.
#[must_use]
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for digit in rest[..digits_len].bytes() {
        value = value
            .checked_mul(10)?
            .checked_add(i64::from(digit - b'0'))?;
    }

    Some(if negative { -value } else { value })
}

/// Round to the nearest integer, with halves going toward positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
