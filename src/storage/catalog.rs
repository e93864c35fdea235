//! Offer catalog loading.
//!
//! A catalog is a JSON file holding either a bare array of offers or an
//! object with an `offers` array. Catalogs are read-only.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::models::Offer;
use crate::error::{OfferError, Result};

/// Offers loaded from one catalog file.
#[derive(Debug, Clone, Default)]
pub struct OfferCatalog {
    /// Where the offers came from, if loaded from disk.
    pub source: Option<PathBuf>,
    pub offers: Vec<Offer>,
}

#[derive(Deserialize)]
struct WrappedCatalog {
    offers: Vec<Offer>,
}

impl OfferCatalog {
    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// - [`OfferError::CatalogNotFound`] if `path` does not exist
    /// - [`OfferError::CatalogParse`] if the content is not a valid catalog
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OfferError::CatalogNotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!(?path, "Loading offer catalog");
        let content = fs::read_to_string(path)?;
        let mut catalog = Self::parse(&content, &path.display().to_string())?;
        catalog.source = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            offers = catalog.offers.len(),
            "Loaded offer catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::CatalogParse`] if the content is not a valid catalog.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    /// Number of offers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether the catalog has no offers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let to_parse_error = |e: serde_json::Error| OfferError::CatalogParse {
            path: origin.to_string(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        };

        let offers = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Offer>>(content).map_err(to_parse_error)?
        } else {
            serde_json::from_str::<WrappedCatalog>(content)
                .map_err(to_parse_error)?
                .offers
        };

        warn_duplicate_ids(&offers);

        Ok(Self {
            source: None,
            offers,
        })
    }
}

fn warn_duplicate_ids(offers: &[Offer]) {
    let mut seen = HashSet::new();
    for offer in offers {
        if !seen.insert(offer.id.as_str()) {
            tracing::warn!(offer_id = %offer.id, "Duplicate offer id in catalog");
        }
    }
}
