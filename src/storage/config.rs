//! Configuration file loading and resolution.
//!
//! Loads configuration from:
//! - Linux: `~/.config/offerdash/config.toml`
//! - macOS: `~/Library/Application Support/com.offerdash.offerdash/config.toml`
//! - Windows: `%APPDATA%/offerdash/config/config.toml`
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `OFFERDASH_FORMAT`: Output format (human, json, md)
//! - `OFFERDASH_AMOUNTS`: Amount style (compact, full)
//! - `OFFERDASH_NO_COLOR` or `NO_COLOR`: Disable colors
//! - `OFFERDASH_PRETTY`: Pretty-print JSON output (1, true, yes)
//! - `OFFERDASH_OFFERS_FILE`: Default offer catalog
//! - `OFFERDASH_CONFIG`: Override config file path

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::AppPaths;
use crate::cli::args::{AmountStyle, Cli, OutputFormat};
use crate::core::logging::LogLevel;
use crate::error::{OfferError, Result};
use crate::util::env::is_truthy;

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable for output format.
pub const ENV_FORMAT: &str = "OFFERDASH_FORMAT";
/// Environment variable for amount style.
pub const ENV_AMOUNTS: &str = "OFFERDASH_AMOUNTS";
/// Environment variable to disable colors.
pub const ENV_NO_COLOR: &str = "OFFERDASH_NO_COLOR";
/// Standard environment variable to disable colors.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
/// Environment variable for pretty JSON output.
pub const ENV_PRETTY: &str = "OFFERDASH_PRETTY";
/// Environment variable for the default offer catalog.
pub const ENV_OFFERS_FILE: &str = "OFFERDASH_OFFERS_FILE";
/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "OFFERDASH_CONFIG";

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Amount rendering style.
    pub amounts: AmountStyle,
    /// Whether to disable colored output.
    pub no_color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
    /// Catalog used when `report` gets no FILE argument.
    pub offers_file: Option<PathBuf>,
    /// Log level from the config file, if any.
    pub log_level: Option<String>,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub format: ConfigSource,
    pub amounts: ConfigSource,
    pub no_color: ConfigSource,
    pub pretty: ConfigSource,
    pub offers_file: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, the process environment,
    /// and the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but is invalid
    /// - `OFFERDASH_CONFIG` names a file that does not exist
    /// - Any resolved value is invalid (e.g., unknown format)
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok();
        let config = Self::load_config(&lookup)?;
        Self::resolve_with(cli, &config, lookup)
    }

    /// Resolve against an explicit config and env lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the config or an env override holds an invalid value.
    pub fn resolve_with<F>(cli: &Cli, config: &Config, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        config.validate()?;

        let mut sources = ConfigSources::default();

        let format = Self::resolve_format(cli, config, &lookup, &mut sources.format)?;
        let amounts = Self::resolve_amounts(cli, config, &lookup, &mut sources.amounts)?;
        let no_color = Self::resolve_no_color(cli, config, &lookup, &mut sources.no_color);
        let pretty = Self::resolve_pretty(cli, config, &lookup, &mut sources.pretty);
        let offers_file = Self::resolve_offers_file(config, &lookup, &mut sources.offers_file);

        let resolved = Self {
            format,
            amounts,
            no_color,
            pretty,
            offers_file,
            log_level: config.general.log_level.clone(),
            sources,
        };
        tracing::debug!(?resolved, "Resolved configuration");
        Ok(resolved)
    }

    /// Load config file, respecting the `OFFERDASH_CONFIG` override.
    fn load_config<F>(lookup: &F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENV_CONFIG).filter(|p| !p.trim().is_empty()) {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(OfferError::ConfigNotFound {
                        path: path.display().to_string(),
                    });
                }
                Config::load_from(&path)
            }
            None => Config::load(),
        }
    }

    fn resolve_format<F>(
        cli: &Cli,
        config: &Config,
        lookup: &F,
        source: &mut ConfigSource,
    ) -> Result<OutputFormat>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 1. CLI --json shorthand, then --format
        if cli.json {
            *source = ConfigSource::Cli;
            return Ok(OutputFormat::Json);
        }
        if let Some(format) = cli.format {
            *source = ConfigSource::Cli;
            return Ok(format);
        }

        // 2. Environment variable
        if let Some(format_env) = lookup(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return parse_format(&format_env);
        }

        // 3. Config file
        if let Some(ref format_str) = config.output.format {
            *source = ConfigSource::ConfigFile;
            return parse_format(format_str);
        }

        // 4. Default
        *source = ConfigSource::Default;
        Ok(OutputFormat::Human)
    }

    fn resolve_amounts<F>(
        cli: &Cli,
        config: &Config,
        lookup: &F,
        source: &mut ConfigSource,
    ) -> Result<AmountStyle>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(amounts) = cli.amounts {
            *source = ConfigSource::Cli;
            return Ok(amounts);
        }

        if let Some(amounts_env) = lookup(ENV_AMOUNTS) {
            *source = ConfigSource::Env;
            return parse_amounts(&amounts_env);
        }

        if let Some(ref amounts) = config.output.amounts {
            *source = ConfigSource::ConfigFile;
            return parse_amounts(amounts);
        }

        *source = ConfigSource::Default;
        Ok(AmountStyle::Compact)
    }

    fn resolve_no_color<F>(
        cli: &Cli,
        config: &Config,
        lookup: &F,
        source: &mut ConfigSource,
    ) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        if cli.no_color {
            *source = ConfigSource::Cli;
            return true;
        }

        // OFFERDASH_NO_COLOR must be truthy; NO_COLOR counts when merely set
        if lookup(ENV_NO_COLOR).is_some_and(|v| is_truthy(&v))
            || lookup(ENV_NO_COLOR_STD).is_some()
        {
            *source = ConfigSource::Env;
            return true;
        }

        // config.output.color = false means no_color = true
        if !config.output.color {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    fn resolve_pretty<F>(cli: &Cli, config: &Config, lookup: &F, source: &mut ConfigSource) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        if cli.pretty {
            *source = ConfigSource::Cli;
            return true;
        }

        if lookup(ENV_PRETTY).is_some_and(|v| is_truthy(&v)) {
            *source = ConfigSource::Env;
            return true;
        }

        if config.output.pretty {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    /// The FILE argument of `report` outranks this; it is applied by the command.
    fn resolve_offers_file<F>(
        config: &Config,
        lookup: &F,
        source: &mut ConfigSource,
    ) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_OFFERS_FILE).filter(|p| !p.trim().is_empty()) {
            *source = ConfigSource::Env;
            return Some(PathBuf::from(path));
        }

        if let Some(ref path) = config.general.offers_file {
            *source = ConfigSource::ConfigFile;
            return Some(path.clone());
        }

        *source = ConfigSource::Default;
        None
    }
}

/// Parse a format string into [`OutputFormat`].
fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.trim().to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        "md" | "markdown" => Ok(OutputFormat::Md),
        _ => Err(OfferError::ConfigInvalid {
            key: "format".to_string(),
            value: s.to_string(),
            message: "valid formats: human, json, md".to_string(),
        }),
    }
}

/// Parse an amount style string into [`AmountStyle`].
fn parse_amounts(s: &str) -> Result<AmountStyle> {
    match s.trim().to_lowercase().as_str() {
        "compact" => Ok(AmountStyle::Compact),
        "full" => Ok(AmountStyle::Full),
        _ => Err(OfferError::ConfigInvalid {
            key: "amounts".to_string(),
            value: s.to_string(),
            message: "valid styles: compact, full".to_string(),
        }),
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Catalog to report on when none is given.
    pub offers_file: Option<PathBuf>,
    /// Default log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, md).
    pub format: Option<String>,
    /// Whether to use colors in output.
    pub color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
    /// Amount style (compact, full).
    pub amounts: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty: false,
            amounts: None,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default config if the file doesn't exist.
    /// Returns error only if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    /// Returns error only if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| OfferError::ConfigParse {
            path: path.display().to_string(),
            line: e.span().map(|span| line_of(&content, span.start)),
            message: e.message().to_string(),
        })
    }

    /// Get the config file path.
    #[must_use]
    pub fn config_path() -> PathBuf {
        AppPaths::new().config_file()
    }

    /// Validate configuration values.
    ///
    /// Checks that:
    /// - Output format is valid (human, json, md)
    /// - Amount style is valid (compact, full)
    /// - Log level is a known level
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            parse_format(format)?;
        }

        if let Some(amounts) = &self.output.amounts {
            parse_amounts(amounts)?;
        }

        if let Some(level) = &self.general.log_level
            && LogLevel::from_arg(level).is_none()
        {
            return Err(OfferError::ConfigInvalid {
                key: "log_level".to_string(),
                value: level.clone(),
                message: "valid levels: trace, debug, info, warn, error".to_string(),
            });
        }

        Ok(())
    }
}

/// 1-based line number of a byte offset.
fn line_of(content: &str, offset: usize) -> usize {
    content
        .get(..offset)
        .map_or(1, |prefix| prefix.matches('\n').count() + 1)
}
