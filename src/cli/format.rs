//! Format command implementation.

use crate::cli::args::{AmountStyle, FormatArgs};
use crate::core::models::{FormatPayload, FormatStyle};
use crate::error::Result;
use crate::render::{self, RenderOptions};
use crate::util::format::{Amount, format_compact, format_count, format_full};
use crate::util::numeric::parse_leading_int;

/// Execute the format command.
pub fn execute(args: &FormatArgs, options: RenderOptions) -> Result<()> {
    let payload = build(args, options.amounts);
    super::emit(&render::render_format(&payload, options)?);
    Ok(())
}

/// Format the value. `--full` and `--count` override the configured amount style.
#[must_use]
pub fn build(args: &FormatArgs, amounts: AmountStyle) -> FormatPayload {
    let style = if args.count {
        FormatStyle::Count
    } else if args.full || amounts == AmountStyle::Full {
        FormatStyle::Full
    } else {
        FormatStyle::Compact
    };

    let formatted = match style {
        FormatStyle::Count => format_count(parse_leading_int(&args.value).unwrap_or(0)),
        FormatStyle::Full => format_full(parse_amount(&args.value)),
        FormatStyle::Compact => format_compact(parse_amount(&args.value)),
    };

    FormatPayload {
        input: args.value.clone(),
        style,
        formatted,
    }
}

/// Decimal input is read as a number; anything else goes through the
/// formatter's lenient text path.
fn parse_amount(raw: &str) -> Amount {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map_or_else(|| Amount::from(raw), Amount::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: &str, full: bool, count: bool) -> FormatArgs {
        FormatArgs {
            value: value.to_string(),
            full,
            count,
        }
    }

    #[test]
    fn compact_by_default() {
        let payload = build(&args("150000", false, false), AmountStyle::Compact);
        assert_eq!(payload.style, FormatStyle::Compact);
        assert_eq!(payload.formatted, "₹1.50L");
    }

    #[test]
    fn full_flag_and_full_style_agree() {
        assert_eq!(
            build(&args("239980", true, false), AmountStyle::Compact).formatted,
            "₹2,39,980"
        );
        assert_eq!(
            build(&args("239980", false, false), AmountStyle::Full).formatted,
            "₹2,39,980"
        );
    }

    #[test]
    fn count_has_no_glyph() {
        let payload = build(&args("1234567", false, true), AmountStyle::Full);
        assert_eq!(payload.style, FormatStyle::Count);
        assert_eq!(payload.formatted, "12,34,567");
    }

    #[test]
    fn decimals_and_garbage() {
        assert_eq!(
            build(&args("450.5", false, false), AmountStyle::Compact).formatted,
            "₹450.5"
        );
        assert_eq!(
            build(&args("abc", false, false), AmountStyle::Compact).formatted,
            "₹0"
        );
        assert_eq!(
            build(&args("12abc", false, false), AmountStyle::Compact).formatted,
            "₹12"
        );
        assert_eq!(
            build(&args("NaN", false, false), AmountStyle::Compact).formatted,
            "₹0"
        );
    }

    #[test]
    fn negative_amounts_stay_unscaled() {
        assert_eq!(
            build(&args("-500000", false, false), AmountStyle::Compact).formatted,
            "₹-5,00,000"
        );
    }
}
