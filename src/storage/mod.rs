//! Storage for configuration and offer catalogs.

pub mod catalog;
pub mod config;
pub mod paths;

pub use catalog::OfferCatalog;
pub use config::{
    Config, ConfigSource, ConfigSources, ENV_AMOUNTS, ENV_CONFIG, ENV_FORMAT, ENV_NO_COLOR,
    ENV_NO_COLOR_STD, ENV_OFFERS_FILE, ENV_PRETTY, ResolvedConfig,
};
pub use paths::AppPaths;
