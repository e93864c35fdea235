//! Quote command implementation.

use crate::cli::args::QuoteArgs;
use crate::core::metrics::QuotePayload;
use crate::core::models::TargetUnits;
use crate::error::Result;
use crate::render::{self, RenderOptions};

/// Execute the quote command.
pub fn execute(args: &QuoteArgs, options: RenderOptions) -> Result<()> {
    let quote = build(args)?;
    super::emit(&render::render_quote(&quote, options)?);
    Ok(())
}

/// Validate arguments and compute the quote.
pub fn build(args: &QuoteArgs) -> Result<QuotePayload> {
    args.validate()?;

    let units = args.units.as_deref().map(parse_units);
    tracing::debug!(
        price = args.price,
        final_price = ?args.final_price,
        ?units,
        "Computing quote"
    );

    let quote = QuotePayload::new(args.price, args.final_price, units);
    if quote.metrics.is_final_above_standard() {
        tracing::warn!(
            price = args.price,
            final_price = ?args.final_price,
            "final price exceeds standard price"
        );
    }
    Ok(quote)
}

/// Whole numbers become counts; anything else is kept as legacy text.
fn parse_units(raw: &str) -> TargetUnits {
    raw.trim()
        .parse::<i64>()
        .map_or_else(|_| TargetUnits::Text(raw.to_string()), TargetUnits::Count)
}
