//! Error types for offerdash.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! - **Configuration**: config file parsing, invalid values, bad CLI arguments
//! - **Input**: offer catalogs that are missing or malformed
//! - **Internal**: I/O, serialization, unclassified failures
//!
//! Malformed numbers inside an offer are not errors: the formatter and the
//! metrics engine coerce them to zero. Only the layers around the core
//! (catalog loading, configuration, CLI) fail.
//!
//! Each error has a stable error code (e.g., `OD-C001`) for programmatic handling.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Configuration issues (parse errors, invalid values, bad arguments).
    Configuration,
    /// Offer catalog issues (missing file, invalid JSON).
    Input,
    /// Internal errors (I/O, serialization, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Input => "Input error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Configuration => "C",
            Self::Input => "I",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Offer catalog or config file not found
    NotFound = 2,
    /// Parse/format errors, invalid arguments
    ParseError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for offerdash operations.
#[derive(Error, Debug)]
pub enum OfferError {
    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Configuration file not found at an explicitly requested path.
    #[error("config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse {
        path: String,
        line: Option<usize>,
        message: String,
    },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unknown location name.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// Month that is not `YYYY-MM` or `Month YYYY`.
    #[error("invalid month: {0}")]
    InvalidMonth(String),

    // ==========================================================================
    // Input errors (Category: Input)
    // ==========================================================================
    /// Offer catalog file does not exist.
    #[error("offer catalog not found: {path}")]
    CatalogNotFound { path: String },

    /// Offer catalog is not valid JSON or does not match the offer model.
    #[error("offer catalog parse error at {path}:{line}:{column}: {message}")]
    CatalogParse {
        path: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// No catalog path was given and none is configured.
    #[error("no offer catalog specified")]
    NoCatalog,

    // ==========================================================================
    // Internal errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OfferError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigNotFound { .. } | Self::CatalogNotFound { .. } | Self::NoCatalog => {
                ExitCode::NotFound
            }

            Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_)
            | Self::InvalidLocation(_)
            | Self::InvalidMonth(_)
            | Self::CatalogParse { .. } => ExitCode::ParseError,

            Self::Io(_) | Self::Json(_) | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and routing.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_)
            | Self::InvalidLocation(_)
            | Self::InvalidMonth(_) => ErrorCategory::Configuration,

            Self::CatalogNotFound { .. } | Self::CatalogParse { .. } | Self::NoCatalog => {
                ErrorCategory::Input
            }

            Self::Io(_) | Self::Json(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `OD-{category}{number}` where category is:
    /// - C: Configuration
    /// - I: Input
    /// - X: Internal
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "OD-C001",
            Self::ConfigParse { .. } => "OD-C002",
            Self::ConfigInvalid { .. } => "OD-C003",
            Self::Config(_) => "OD-C004",
            Self::InvalidLocation(_) => "OD-C010",
            Self::InvalidMonth(_) => "OD-C011",

            Self::CatalogNotFound { .. } => "OD-I001",
            Self::CatalogParse { .. } => "OD-I002",
            Self::NoCatalog => "OD-I003",

            Self::Io(_) => "OD-X001",
            Self::Json(_) => "OD-X002",
            Self::Other(_) => "OD-X099",
        }
    }

    /// A short actionable hint for the human error renderer.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ConfigNotFound { path } => Some(format!(
                "Create {path} or unset OFFERDASH_CONFIG to use the default location"
            )),
            Self::ConfigParse { line: Some(line), .. } => {
                Some(format!("Check the TOML syntax near line {line}"))
            }
            Self::ConfigParse { .. } => Some("Check the TOML syntax of the config file".into()),
            Self::ConfigInvalid { key, .. } => Some(format!("Fix or remove '{key}' in config")),
            Self::InvalidLocation(_) => Some("Valid locations: mumbai, bengaluru".into()),
            Self::InvalidMonth(_) => Some("Use YYYY-MM, e.g. 2025-01".into()),
            Self::CatalogNotFound { .. } => {
                Some("Pass an existing offers JSON file or set OFFERDASH_OFFERS_FILE".into())
            }
            Self::CatalogParse { line, column, .. } => Some(format!(
                "The catalog must be a JSON array of offers; see line {line}, column {column}"
            )),
            Self::NoCatalog => Some(
                "Pass a file: offerdash report offers.json (or set general.offers_file)".into(),
            ),
            Self::Config(_) | Self::Io(_) | Self::Json(_) | Self::Other(_) => None,
        }
    }
}

/// Result type alias for offerdash operations.
pub type Result<T> = std::result::Result<T, OfferError>;
