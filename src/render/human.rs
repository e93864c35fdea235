//! Human-readable output using colored.
//!
//! Renders month groups as indented cards: one header per month, one line
//! per offer and one line per priced location.

use std::fmt::Write as _;

use colored::{Color, Colorize};

use crate::cli::args::AmountStyle;
use crate::core::metrics::{PricingMetrics, QuotePayload};
use crate::core::models::FormatPayload;
use crate::core::report::{MonthGroup, OfferSummary, PriceDisplay, ReportPayload};
use crate::util::format::{format_count, format_percent};

/// Apply a foreground color unless colors are disabled.
fn paint(text: &str, color: Color, no_color: bool) -> String {
    if no_color {
        text.to_string()
    } else {
        text.color(color).to_string()
    }
}

fn bold(text: &str, no_color: bool) -> String {
    if no_color {
        text.to_string()
    } else {
        text.bold().to_string()
    }
}

fn dim(text: &str, no_color: bool) -> String {
    if no_color {
        text.to_string()
    } else {
        text.dimmed().to_string()
    }
}

/// Render a report for human consumption.
#[must_use]
pub fn render_report(payload: &ReportPayload, amounts: AmountStyle, no_color: bool) -> String {
    if payload.months.is_empty() {
        return format!("{}\n", dim("No offers found.", no_color));
    }

    let mut output = String::new();
    for group in &payload.months {
        render_month(&mut output, group, amounts, no_color);
        output.push('\n');
    }

    let _ = writeln!(
        output,
        "{} {} offers, {} projected",
        bold("Total:", no_color),
        payload.totals.active_count,
        paint(
            &amounts.render(payload.totals.projected_revenue),
            Color::Green,
            no_color
        ),
    );

    output
}

fn render_month(output: &mut String, group: &MonthGroup, amounts: AmountStyle, no_color: bool) {
    let header = paint(&group.label, Color::Cyan, no_color);
    let _ = writeln!(
        output,
        "{}  {}",
        bold(&header, no_color),
        dim(
            &format!(
                "{} offers, {} projected",
                group.totals.active_count,
                amounts.render(group.totals.projected_revenue)
            ),
            no_color
        )
    );

    for offer in &group.offers {
        render_offer(output, offer, amounts, no_color);
    }
}

fn render_offer(output: &mut String, offer: &OfferSummary, amounts: AmountStyle, no_color: bool) {
    let mut title = offer.title.clone();
    if let Some(category) = &offer.category {
        let _ = write!(title, " [{category}]");
    }
    if offer.cancelled {
        let _ = writeln!(
            output,
            "  {} {}",
            dim(&title, no_color),
            paint("(cancelled)", Color::Red, no_color)
        );
    } else {
        let _ = writeln!(output, "  {}", bold(&title, no_color));
    }

    match &offer.price {
        PriceDisplay::Locations(locations) => {
            for entry in locations {
                let _ = writeln!(
                    output,
                    "    {:<10} {}",
                    entry.location.display_name(),
                    metrics_line(&entry.metrics, amounts, no_color)
                );
            }
        }
        PriceDisplay::Text(text) => {
            let _ = writeln!(output, "    {text}");
        }
        PriceDisplay::Unpriced => {
            let _ = writeln!(output, "    {}", dim("No price set", no_color));
        }
    }

    for warning in &offer.warnings {
        let _ = writeln!(
            output,
            "    {} {warning}",
            paint("warning:", Color::Yellow, no_color)
        );
    }
}

/// One line of price, discount, savings and projection figures.
fn metrics_line(metrics: &PricingMetrics, amounts: AmountStyle, no_color: bool) -> String {
    let mut parts = Vec::new();

    match metrics.final_price.filter(|_| metrics.savings.is_some()) {
        Some(final_price) => parts.push(format!(
            "{} → {}",
            dim(&amounts.render(metrics.standard_price), no_color),
            bold(&amounts.render(final_price), no_color)
        )),
        None => parts.push(bold(&amounts.render(metrics.effective_price), no_color)),
    }

    if let Some(discount) = metrics.discount_percent {
        let color = if discount < 0 { Color::Red } else { Color::Green };
        parts.push(paint(&format!("{} off", format_percent(discount)), color, no_color));
    }
    if let Some(savings) = metrics.savings {
        let color = if savings < 0.0 { Color::Red } else { Color::Green };
        parts.push(paint(
            &format!("save {}", amounts.render(savings)),
            color,
            no_color,
        ));
    }
    if let Some(units) = metrics.target_units {
        parts.push(format!("{} units", format_count(units)));
    }
    if let Some(revenue) = metrics.projected_revenue {
        parts.push(format!("{} projected", amounts.render(revenue)));
    }

    parts.join("  ")
}

/// Render a quote for human consumption.
#[must_use]
pub fn render_quote(quote: &QuotePayload, amounts: AmountStyle, no_color: bool) -> String {
    let mut output = format!("{}\n", metrics_line(&quote.metrics, amounts, no_color));
    if quote.metrics.is_final_above_standard() {
        let _ = writeln!(
            output,
            "{} final price is above the standard price",
            paint("warning:", Color::Yellow, no_color)
        );
    }
    output
}

/// Render a formatted value: just the value.
#[must_use]
pub fn render_format(payload: &FormatPayload) -> String {
    format!("{}\n", payload.formatted)
}
