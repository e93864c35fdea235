//! Report command implementation.

use std::path::PathBuf;

use crate::cli::args::ReportArgs;
use crate::core::calendar::MonthKey;
use crate::core::models::Location;
use crate::core::report::{ReportFilter, ReportPayload, build_report};
use crate::error::{OfferError, Result};
use crate::render::{self, RenderOptions};
use crate::storage::{AppPaths, OfferCatalog, ResolvedConfig};

/// Execute the report command.
pub fn execute(args: &ReportArgs, config: &ResolvedConfig, options: RenderOptions) -> Result<()> {
    let payload = build(args, config)?;
    super::emit(&render::render_report(&payload, options)?);
    Ok(())
}

/// Load the catalog and build the report without printing it.
pub fn build(args: &ReportArgs, config: &ResolvedConfig) -> Result<ReportPayload> {
    let filter = parse_filter(args)?;
    let path = catalog_path(args, config)?;

    tracing::debug!(path = %path.display(), ?filter, "Starting report");

    let catalog = OfferCatalog::load(&path)?;
    let months = build_report(&catalog.offers, &filter);

    Ok(ReportPayload::new(
        Some(path.display().to_string()),
        filter,
        months,
    ))
}

fn parse_filter(args: &ReportArgs) -> Result<ReportFilter> {
    Ok(ReportFilter {
        month: args.month.as_deref().map(MonthKey::parse).transpose()?,
        location: args
            .location
            .as_deref()
            .map(Location::from_cli_name)
            .transpose()?,
        include_cancelled: args.include_cancelled,
    })
}

/// FILE argument, then the configured catalog, then the conventional data-dir
/// catalog when it exists.
fn catalog_path(args: &ReportArgs, config: &ResolvedConfig) -> Result<PathBuf> {
    if let Some(file) = &args.file {
        return Ok(file.clone());
    }
    if let Some(file) = &config.offers_file {
        tracing::debug!(source = %config.sources.offers_file, "Using configured catalog");
        return Ok(file.clone());
    }

    let fallback = AppPaths::new().default_offers_file();
    if fallback.exists() {
        return Ok(fallback);
    }

    Err(OfferError::NoCatalog)
}
