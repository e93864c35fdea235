//! Currency and count formatting using Indian numbering units.
//!
//! Compact notation abbreviates large rupee amounts with Thousand/Lakh/Crore
//! suffixes (`₹1.50L`, `₹2Cr`). Full notation keeps every digit and groups
//! them the Indian way (`₹1,50,000`): the last three digits, then pairs.
//!
//! Malformed input never fails. It renders as the zero amount (`₹0`).

use super::numeric::{parse_leading_int, round_half_up};

/// Currency glyph prefixed to every rupee amount.
pub const CURRENCY_GLYPH: &str = "₹";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// An amount as it arrives from offer data: a number or a numeric string.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Resolve to a finite number, or `None` if the input is not numeric.
    ///
    /// Text is read as a base-10 integer (see [`parse_leading_int`]).
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.is_finite().then_some(*n),
            #[allow(clippy::cast_precision_loss)]
            Self::Text(s) => parse_leading_int(s).map(|n| n as f64),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Amount {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Format an amount compactly with a `Cr`, `L` or `K` suffix.
///
/// Scaled values are rounded to two decimals; an all-zero fraction is
/// dropped (`₹2Cr`, but `₹1.50L`). Amounts below one thousand, including all
/// negative amounts, are rendered in full with digit grouping.
#[must_use]
pub fn format_compact(value: impl Into<Amount>) -> String {
    let Some(value) = value.into().value() else {
        return zero_amount();
    };

    if value >= CRORE {
        format_scaled(value, CRORE, "Cr")
    } else if value >= LAKH {
        format_scaled(value, LAKH, "L")
    } else if value >= THOUSAND {
        format_scaled(value, THOUSAND, "K")
    } else {
        format!("{CURRENCY_GLYPH}{}", group_decimal(value))
    }
}

/// Format an amount as a full rupee value with Indian digit grouping.
///
/// Fractional amounts are rounded to the nearest rupee.
#[must_use]
pub fn format_full(value: impl Into<Amount>) -> String {
    let Some(value) = value.into().value() else {
        return zero_amount();
    };

    #[allow(clippy::cast_possible_truncation)]
    let rupees = round_half_up(value) as i64;
    format!("{CURRENCY_GLYPH}{}", format_count(rupees))
}

/// Format a plain quantity (units, sessions) with digit grouping, no glyph.
#[must_use]
pub fn format_count(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_indian(value.unsigned_abs()))
}

/// Format an integer percentage.
#[must_use]
pub fn format_percent(value: i64) -> String {
    format!("{value}%")
}

/// Group the digits of `value` as `xx,xx,xxx`.
#[must_use]
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

fn zero_amount() -> String {
    format!("{CURRENCY_GLYPH}0")
}

#[allow(clippy::cast_possible_truncation)]
fn format_scaled(value: f64, divisor: f64, suffix: &str) -> String {
    let hundredths = round_half_up(value * 100.0 / divisor) as i64;
    let whole = hundredths / 100;
    let fraction = hundredths % 100;

    if fraction == 0 {
        format!("{CURRENCY_GLYPH}{whole}{suffix}")
    } else {
        format!("{CURRENCY_GLYPH}{whole}.{fraction:02}{suffix}")
    }
}

/// Grouped rendering with up to three fractional digits, trailing zeros trimmed.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn group_decimal(value: f64) -> String {
    let thousandths = round_half_up(value.abs() * 1000.0) as u64;
    let whole = thousandths / 1000;
    let fraction = thousandths % 1000;
    let sign = if value < 0.0 && thousandths != 0 { "-" } else { "" };

    let mut out = format!("{sign}{}", group_indian(whole));
    if fraction != 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_compact(formatted: &str, suffix: &str) -> f64 {
        formatted
            .trim_start_matches(CURRENCY_GLYPH)
            .trim_end_matches(suffix)
            .parse()
            .expect("compact value should be numeric")
    }

    #[test]
    fn small_amounts_have_no_suffix() {
        assert_eq!(format_compact(0), "₹0");
        assert_eq!(format_compact(450), "₹450");
        assert_eq!(format_compact(999), "₹999");
    }

    #[test]
    fn small_amounts_match_grouped_digits() {
        for v in (0..1000).step_by(37) {
            assert_eq!(format_compact(v), format!("₹{}", group_indian(v as u64)));
        }
    }

    #[test]
    fn thousands_use_k_suffix() {
        assert_eq!(format_compact(1000), "₹1K");
        assert_eq!(format_compact(2596), "₹2.60K");
        assert_eq!(format_compact(12_500), "₹12.50K");
        assert_eq!(format_compact(99_999), "₹100K");
    }

    #[test]
    fn thousands_round_to_two_decimals() {
        for v in [1000_i64, 1234, 5555, 45_678, 99_994] {
            let formatted = format_compact(v);
            assert!(formatted.ends_with('K'), "{formatted}");
            let expected = round_half_up(v as f64 * 100.0 / 1000.0) / 100.0;
            assert!((strip_compact(&formatted, "K") - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn lakhs_use_l_suffix() {
        assert_eq!(format_compact(100_000), "₹1L");
        assert_eq!(format_compact(150_000), "₹1.50L");
        assert_eq!(format_compact(239_980), "₹2.40L");
        assert_eq!(format_compact(359_970), "₹3.60L");
    }

    #[test]
    fn crores_use_cr_suffix() {
        assert_eq!(format_compact(10_000_000), "₹1Cr");
        assert_eq!(format_compact(20_000_000), "₹2Cr");
        assert_eq!(format_compact(123_456_789), "₹12.35Cr");
    }

    #[test]
    fn threshold_boundaries_split_correctly() {
        assert!(format_compact(99_999).ends_with('K'));
        assert!(format_compact(100_000).ends_with('L'));
        assert!(format_compact(9_999_999).ends_with('L'));
        assert!(format_compact(10_000_000).ends_with("Cr"));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        assert_eq!(format_compact("150000"), "₹1.50L");
        assert_eq!(format_full("150000"), "₹1,50,000");
    }

    #[test]
    fn non_numeric_input_falls_back_to_zero() {
        assert_eq!(format_compact("abc"), "₹0");
        assert_eq!(format_compact(""), "₹0");
        assert_eq!(format_full("n/a"), "₹0");
        assert_eq!(format_compact(f64::NAN), "₹0");
        assert_eq!(format_full(f64::INFINITY), "₹0");
    }

    #[test]
    fn negative_and_fractional_amounts() {
        assert_eq!(format_compact(-500_000), "₹-5,00,000");
        assert_eq!(format_compact(450.5), "₹450.5");
        assert_eq!(format_compact(1500.75), "₹1.50K");
    }

    #[test]
    fn full_format_groups_indian_style() {
        assert_eq!(format_full(450), "₹450");
        assert_eq!(format_full(2596), "₹2,596");
        assert_eq!(format_full(239_980), "₹2,39,980");
        assert_eq!(format_full(12_345_678), "₹1,23,45,678");
        assert_eq!(format_full(2595.5), "₹2,596");
        assert_eq!(format_full(0.499_999_999_999_999_94_f64), "₹0");
        assert_eq!(
            format_full(4_503_599_627_370_497_i64),
            "₹4,50,35,99,62,73,70,497"
        );
    }

    #[test]
    fn count_format_has_no_glyph() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(100_000), "1,00,000");
        assert_eq!(format_count(-98_765), "-98,765");
    }

    #[test]
    fn formatting_is_idempotent() {
        assert_eq!(format_compact(239_980), format_compact(239_980));
        assert_eq!(format_full("2596"), format_full("2596"));
    }

    #[test]
    fn group_indian_handles_all_lengths() {
        assert_eq!(group_indian(7), "7");
        assert_eq!(group_indian(1234), "1,234");
        assert_eq!(group_indian(12_345), "12,345");
        assert_eq!(group_indian(123_456), "1,23,456");
        assert_eq!(group_indian(1_234_567), "12,34,567");
    }

    #[test]
    fn format_percent_appends_sign() {
        assert_eq!(format_percent(36), "36%");
    }
}
