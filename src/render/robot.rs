//! Robot-mode output (JSON and Markdown).
//!
//! JSON goes out in the versioned [`RobotOutput`] envelope. Markdown is terse
//! and table-shaped so it pastes cleanly into tickets and chat.

use std::fmt::Write as _;

use crate::cli::args::AmountStyle;
use crate::core::metrics::{PricingMetrics, QuotePayload};
use crate::core::models::{FormatPayload, RobotOutput};
use crate::core::report::{MonthGroup, PriceDisplay, ReportPayload};
use crate::error::Result;
use crate::util::format::{format_count, format_percent};

/// Render any envelope as JSON.
pub fn render_json<T: serde::Serialize>(output: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(output)?)
    } else {
        Ok(serde_json::to_string(output)?)
    }
}

/// Render a report as JSON. Offer warnings are listed in `errors`.
pub fn render_report_json(
    payload: &ReportPayload,
    flags: Vec<String>,
    pretty: bool,
) -> Result<String> {
    let output = RobotOutput::new("report", payload)
        .with_flags(flags)
        .with_errors(payload.warnings());
    render_json(&output, pretty)
}

/// Render a quote as JSON.
pub fn render_quote_json(quote: &QuotePayload, flags: Vec<String>, pretty: bool) -> Result<String> {
    let mut errors = Vec::new();
    if quote.metrics.is_final_above_standard() {
        errors.push("final price is above the standard price".to_string());
    }
    let output = RobotOutput::new("quote", quote)
        .with_flags(flags)
        .with_errors(errors);
    render_json(&output, pretty)
}

/// Render a formatted value as JSON.
pub fn render_format_json(
    payload: &FormatPayload,
    flags: Vec<String>,
    pretty: bool,
) -> Result<String> {
    render_json(&RobotOutput::new("format", payload).with_flags(flags), pretty)
}

/// Render a report as Markdown.
#[must_use]
pub fn render_report_md(payload: &ReportPayload, amounts: AmountStyle) -> String {
    let mut output = String::new();

    if payload.months.is_empty() {
        output.push_str("_No offers._\n");
        return output;
    }

    for group in &payload.months {
        render_month_md(&mut output, group, amounts);
    }

    let _ = writeln!(output, "## Total");
    let _ = writeln!(
        output,
        "- offers: {} (active {})",
        payload.totals.offer_count, payload.totals.active_count
    );
    let _ = writeln!(
        output,
        "- projected_revenue: {}",
        amounts.render(payload.totals.projected_revenue)
    );

    output
}

fn render_month_md(output: &mut String, group: &MonthGroup, amounts: AmountStyle) {
    let _ = writeln!(output, "## {}", group.label);
    let _ = writeln!(
        output,
        "- offers: {} (active {})",
        group.totals.offer_count, group.totals.active_count
    );
    let _ = writeln!(
        output,
        "- projected_revenue: {}\n",
        amounts.render(group.totals.projected_revenue)
    );

    output.push_str("| offer | location | price | final | discount | savings | units | revenue |\n");
    output.push_str("|-------|----------|-------|-------|----------|---------|-------|---------|\n");

    for offer in &group.offers {
        let title = if offer.cancelled {
            format!("~~{}~~", escape_cell(&offer.title))
        } else {
            escape_cell(&offer.title)
        };

        match &offer.price {
            PriceDisplay::Locations(locations) => {
                for entry in locations {
                    let cells = metric_cells(&entry.metrics, amounts);
                    let _ = writeln!(
                        output,
                        "| {title} | {} | {} |",
                        entry.location,
                        cells.join(" | ")
                    );
                }
            }
            PriceDisplay::Text(text) => {
                let _ = writeln!(
                    output,
                    "| {title} | - | {} | - | - | - | - | - |",
                    escape_cell(text)
                );
            }
            PriceDisplay::Unpriced => {
                let _ = writeln!(output, "| {title} | - | - | - | - | - | - | - |");
            }
        }
    }

    output.push('\n');
}

/// Render a quote as Markdown.
#[must_use]
pub fn render_quote_md(quote: &QuotePayload, amounts: AmountStyle) -> String {
    let metrics = &quote.metrics;
    let mut output = String::from("## Quote\n");

    let _ = writeln!(output, "- standard_price: {}", amounts.render(metrics.standard_price));
    if let Some(final_price) = metrics.final_price {
        let _ = writeln!(output, "- final_price: {}", amounts.render(final_price));
    }
    if let Some(discount) = metrics.discount_percent {
        let _ = writeln!(output, "- discount: {}", format_percent(discount));
    }
    if let Some(savings) = metrics.savings {
        let _ = writeln!(output, "- savings: {}", amounts.render(savings));
    }
    if let Some(units) = metrics.target_units {
        let _ = writeln!(output, "- target_units: {}", format_count(units));
    }
    if let Some(revenue) = metrics.projected_revenue {
        let _ = writeln!(output, "- projected_revenue: {}", amounts.render(revenue));
    }
    if metrics.is_final_above_standard() {
        output.push_str("- warning: final price is above the standard price\n");
    }

    output
}

/// Render a formatted value as Markdown.
#[must_use]
pub fn render_format_md(payload: &FormatPayload) -> String {
    format!("`{}`\n", payload.formatted)
}

fn metric_cells(metrics: &PricingMetrics, amounts: AmountStyle) -> [String; 6] {
    let dash = || "-".to_string();
    [
        amounts.render(metrics.standard_price),
        metrics.final_price.map_or_else(dash, |p| amounts.render(p)),
        metrics.discount_percent.map_or_else(dash, format_percent),
        metrics.savings.map_or_else(dash, |s| amounts.render(s)),
        metrics.target_units.map_or_else(dash, format_count),
        metrics
            .projected_revenue
            .map_or_else(dash, |r| amounts.render(r)),
    ]
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
