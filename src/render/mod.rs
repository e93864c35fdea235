//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::cli::args::{AmountStyle, OutputFormat};
use crate::core::metrics::QuotePayload;
use crate::core::models::FormatPayload;
use crate::core::report::ReportPayload;
use crate::error::Result;

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub amounts: AmountStyle,
    pub pretty: bool,
    pub no_color: bool,
}

impl RenderOptions {
    /// Flags recorded in the JSON envelope's `meta.flags`.
    #[must_use]
    pub fn flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if self.pretty {
            flags.push("pretty".to_string());
        }
        if self.amounts == AmountStyle::Full {
            flags.push("amounts=full".to_string());
        }
        flags
    }
}

/// Render a report.
pub fn render_report(payload: &ReportPayload, options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Human => Ok(human::render_report(
            payload,
            options.amounts,
            options.no_color,
        )),
        OutputFormat::Json => robot::render_report_json(payload, options.flags(), options.pretty),
        OutputFormat::Md => Ok(robot::render_report_md(payload, options.amounts)),
    }
}

/// Render a quote.
pub fn render_quote(quote: &QuotePayload, options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Human => Ok(human::render_quote(
            quote,
            options.amounts,
            options.no_color,
        )),
        OutputFormat::Json => robot::render_quote_json(quote, options.flags(), options.pretty),
        OutputFormat::Md => Ok(robot::render_quote_md(quote, options.amounts)),
    }
}

/// Render a formatted value.
pub fn render_format(payload: &FormatPayload, options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Human => Ok(human::render_format(payload)),
        OutputFormat::Json => robot::render_format_json(payload, options.flags(), options.pretty),
        OutputFormat::Md => Ok(robot::render_format_md(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_reflect_non_default_options() {
        assert!(RenderOptions::default().flags().is_empty());
        let options = RenderOptions {
            pretty: true,
            amounts: AmountStyle::Full,
            ..RenderOptions::default()
        };
        assert_eq!(options.flags(), ["pretty", "amounts=full"]);
    }

    #[test]
    fn dispatches_on_format() {
        let payload = FormatPayload {
            input: "1000".into(),
            style: crate::core::models::FormatStyle::Compact,
            formatted: "₹1K".into(),
        };
        let human = render_format(&payload, RenderOptions::default()).unwrap();
        assert_eq!(human, "₹1K\n");

        let json = render_format(
            &payload,
            RenderOptions {
                format: OutputFormat::Json,
                ..RenderOptions::default()
            },
        )
        .unwrap();
        assert!(json.starts_with('{'));
    }
}
