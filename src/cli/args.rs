//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Offer planning dashboard - pricing metrics in Indian rupee notation.
#[derive(Parser, Debug)]
#[command(name = "offerdash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// How amounts are rendered in human and markdown output
    #[arg(long, value_enum, value_name = "STYLE", global = true)]
    pub amounts: Option<AmountStyle>,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show offers grouped by month with their pricing metrics
    Report(ReportArgs),

    /// Compute metrics for an ad-hoc price
    Quote(QuoteArgs),

    /// Format an amount or count
    Format(FormatArgs),
}

/// Arguments for the `report` command.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Offer catalog (JSON). Defaults to the configured offers file.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Only show one month (YYYY-MM or "July 2025")
    #[arg(long, value_name = "MONTH")]
    pub month: Option<String>,

    /// Only show one location (mumbai, bengaluru)
    #[arg(long, value_name = "LOCATION")]
    pub location: Option<String>,

    /// Include cancelled offers
    #[arg(long)]
    pub include_cancelled: bool,
}

/// Arguments for the `quote` command.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Standard price
    #[arg(long, value_name = "AMOUNT")]
    pub price: f64,

    /// Final (offer) price
    #[arg(long = "final", value_name = "AMOUNT")]
    pub final_price: Option<f64>,

    /// Target units; legacy string values are accepted
    #[arg(long, value_name = "UNITS", allow_hyphen_values = true)]
    pub units: Option<String>,
}

impl QuoteArgs {
    /// Validate argument combinations.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::OfferError;

        if !self.price.is_finite() {
            return Err(OfferError::Config(
                "--price must be a finite number".to_string(),
            ));
        }
        if self.final_price.is_some_and(|p| !p.is_finite()) {
            return Err(OfferError::Config(
                "--final must be a finite number".to_string(),
            ));
        }

        Ok(())
    }
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Amount or count to format
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Render the full grouped amount instead of the compact form
    #[arg(long, conflicts_with = "count")]
    pub full: bool,

    /// Render a plain count (no currency glyph)
    #[arg(long)]
    pub count: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// Markdown output
    Md,
}

/// Amount rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AmountStyle {
    /// ₹2.40L
    #[default]
    Compact,
    /// ₹2,39,980
    Full,
}

impl AmountStyle {
    /// Render an amount in this style.
    #[must_use]
    pub fn render(self, amount: f64) -> String {
        match self {
            Self::Compact => crate::util::format_compact(amount),
            Self::Full => crate::util::format_full(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn report_accepts_filters() {
        let cli = Cli::try_parse_from([
            "offerdash",
            "report",
            "offers.json",
            "--month",
            "2025-07",
            "--location",
            "mumbai",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let Some(Commands::Report(args)) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.file, Some(PathBuf::from("offers.json")));
        assert_eq!(args.month.as_deref(), Some("2025-07"));
        assert!(!args.include_cancelled);
    }

    #[test]
    fn format_accepts_negative_values() {
        let cli = Cli::try_parse_from(["offerdash", "format", "-500000"]).unwrap();
        let Some(Commands::Format(args)) = cli.command else {
            panic!("expected format command");
        };
        assert_eq!(args.value, "-500000");
    }

    #[test]
    fn format_full_conflicts_with_count() {
        assert!(Cli::try_parse_from(["offerdash", "format", "1", "--full", "--count"]).is_err());
    }

    #[test]
    fn quote_rejects_non_finite_price() {
        let args = QuoteArgs {
            price: f64::NAN,
            final_price: None,
            units: None,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn amount_style_renders() {
        assert_eq!(AmountStyle::Compact.render(239_980.0), "₹2.40L");
        assert_eq!(AmountStyle::Full.render(239_980.0), "₹2,39,980");
    }
}
