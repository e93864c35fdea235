//! offerdash - offer planning dashboard
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use offerdash::cli::{Cli, Commands, OutputFormat};
use offerdash::core::logging;
use offerdash::error::OfferError;
use offerdash::render::RenderOptions;
use offerdash::storage::ResolvedConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config first: its log level feeds logging setup.
    let resolved = ResolvedConfig::resolve(&cli);

    let config_level = resolved.as_ref().ok().and_then(|c| c.log_level.clone());
    let log_level = logging::LogLevel::select(
        cli.log_level.as_deref(),
        logging::parse_log_level_from_env(),
        config_level.as_deref(),
        cli.verbose,
    );
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    logging::init(log_level, log_format, logging::parse_log_file_from_env());

    let command = command_name(&cli);

    let config = match resolved {
        Ok(config) => config,
        Err(e) => {
            // Config is unusable; fall back to what the CLI alone says.
            let format = if cli.json {
                OutputFormat::Json
            } else {
                cli.format.unwrap_or_default()
            };
            return fail(&e, command, format, cli.no_color, cli.pretty);
        }
    };

    let options = RenderOptions {
        format: config.format,
        amounts: config.amounts,
        pretty: config.pretty,
        no_color: config.no_color || !offerdash::util::env::should_use_color(config.no_color),
    };

    match run(cli, &config, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e, command, options.format, options.no_color, options.pretty),
    }
}

fn run(cli: Cli, config: &ResolvedConfig, options: RenderOptions) -> offerdash::Result<()> {
    match cli.command {
        None => {
            print_quickstart();
            Ok(())
        }
        Some(Commands::Report(args)) => offerdash::cli::report::execute(&args, config, options),
        Some(Commands::Quote(args)) => offerdash::cli::quote::execute(&args, options),
        Some(Commands::Format(args)) => offerdash::cli::format::execute(&args, options),
    }
}

fn fail(
    error: &OfferError,
    command: &str,
    format: OutputFormat,
    no_color: bool,
    pretty: bool,
) -> ExitCode {
    tracing::error!(code = error.error_code(), "{error}");
    let output = offerdash::render::error::render_error(error, command, format, no_color, pretty);
    match format {
        // Scripts read the failure envelope from stdout.
        OutputFormat::Json | OutputFormat::Md => println!("{output}"),
        OutputFormat::Human => eprintln!("{output}"),
    }
    ExitCode::from(error.exit_code() as u8)
}

fn command_name(cli: &Cli) -> &'static str {
    match cli.command {
        Some(Commands::Report(_)) => "report",
        Some(Commands::Quote(_)) => "quote",
        Some(Commands::Format(_)) => "format",
        None => "offerdash",
    }
}

/// Print quickstart help when no command is given.
fn print_quickstart() {
    println!(
        r"offerdash - Offer planning dashboard

Pricing metrics for monthly offers, in Indian rupee notation.

USAGE:
    offerdash [OPTIONS] <COMMAND>

COMMANDS:
    report   Show offers grouped by month with discount and revenue figures
    quote    Compute metrics for an ad-hoc price
    format   Format an amount (₹1.50L) or a count (1,50,000)

QUICK START:
    offerdash report offers.json                   # All months, all locations
    offerdash report offers.json --month 2025-07   # One month
    offerdash report --location mumbai             # Uses the configured catalog
    offerdash quote --price 18638 --final 11999 --units 30
    offerdash format 20000000                      # ₹2Cr

ROBOT MODE:
    offerdash report offers.json --json   # JSON envelope (offerdash.v1)
    offerdash report offers.json --format md

For more help: offerdash --help"
    );
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
}
