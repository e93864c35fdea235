//! Offer data model.
//!
//! An [`Offer`] is read-only input owned by whoever stores offers. Field names
//! follow the camelCase JSON the dashboard persists. Per-location fields are
//! exposed through [`Offer::pricing_for`], which collapses the
//! `priceMumbai`/`priceBengaluru` style duplication into one
//! [`LocationPricing`] tuple per [`Location`].
//!
//! Target-unit fields arrive as numbers or numeric strings. They are
//! normalized to `Option<i64>` once, at deserialization time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{OfferError, Result};
use crate::util::numeric::parse_leading_int;

// =============================================================================
// Location
// =============================================================================

/// Retail locations that scope offer pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Mumbai,
    Bengaluru,
}

impl Location {
    /// All locations in display order.
    pub const ALL: &'static [Self] = &[Self::Mumbai, Self::Bengaluru];

    /// CLI name for this location.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Mumbai => "mumbai",
            Self::Bengaluru => "bengaluru",
        }
    }

    /// Display name for human output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mumbai => "Mumbai",
            Self::Bengaluru => "Bengaluru",
        }
    }

    /// Parse from CLI argument. `bangalore` is accepted as an alias.
    pub fn from_cli_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_lowercase();
        if lower == "bangalore" {
            return Ok(Self::Bengaluru);
        }
        Self::ALL
            .iter()
            .find(|l| l.cli_name() == lower)
            .copied()
            .ok_or_else(|| OfferError::InvalidLocation(name.to_string()))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// Target Units
// =============================================================================

/// A sales-volume target as stored by legacy records: a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetUnits {
    Count(i64),
    Fractional(f64),
    Text(String),
}

impl TargetUnits {
    /// Number of units. Unparseable or empty text counts as zero; fractional
    /// numbers are truncated toward zero.
    #[must_use]
    pub fn units(&self) -> i64 {
        match self {
            Self::Count(n) => *n,
            #[allow(clippy::cast_possible_truncation)]
            Self::Fractional(n) if n.is_finite() => n.trunc() as i64,
            Self::Fractional(_) => 0,
            Self::Text(s) => parse_leading_int(s).unwrap_or(0),
        }
    }

    /// Normalize a stored field. Blank text means the field was never filled
    /// in and is treated as absent; anything else resolves to [`Self::units`].
    #[must_use]
    pub fn normalize(self) -> Option<i64> {
        match &self {
            Self::Text(s) if s.trim().is_empty() => None,
            _ => Some(self.units()),
        }
    }
}

impl Default for TargetUnits {
    fn default() -> Self {
        Self::Count(0)
    }
}

impl From<i64> for TargetUnits {
    fn from(value: i64) -> Self {
        Self::Count(value)
    }
}

impl From<i32> for TargetUnits {
    fn from(value: i32) -> Self {
        Self::Count(i64::from(value))
    }
}

impl From<u32> for TargetUnits {
    fn from(value: u32) -> Self {
        Self::Count(i64::from(value))
    }
}

impl From<Option<i64>> for TargetUnits {
    fn from(value: Option<i64>) -> Self {
        Self::Count(value.unwrap_or(0))
    }
}

impl From<&str> for TargetUnits {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TargetUnits {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// =============================================================================
// Offer
// =============================================================================

/// A promotional offer for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Record identifier. Numeric ids are kept as their decimal string.
    #[serde(default, deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Calendar month, `YYYY-MM` or `Month YYYY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub is_cancelled: bool,

    #[serde(default, deserialize_with = "de::price", skip_serializing_if = "Option::is_none")]
    pub price_mumbai: Option<f64>,

    #[serde(default, deserialize_with = "de::price", skip_serializing_if = "Option::is_none")]
    pub price_bengaluru: Option<f64>,

    #[serde(default, deserialize_with = "de::price", skip_serializing_if = "Option::is_none")]
    pub final_price_mumbai: Option<f64>,

    #[serde(default, deserialize_with = "de::price", skip_serializing_if = "Option::is_none")]
    pub final_price_bengaluru: Option<f64>,

    /// Generic target, used when a location has no target of its own.
    #[serde(default, deserialize_with = "de::units", skip_serializing_if = "Option::is_none")]
    pub target_units: Option<i64>,

    #[serde(default, deserialize_with = "de::units", skip_serializing_if = "Option::is_none")]
    pub target_units_mumbai: Option<i64>,

    #[serde(default, deserialize_with = "de::units", skip_serializing_if = "Option::is_none")]
    pub target_units_bengaluru: Option<i64>,

    /// Free-text price shown when no location has a price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,
}

impl Offer {
    /// Pricing tuple for one location, or `None` when that location has no
    /// standard price.
    ///
    /// Target units fall back to the generic `targetUnits` field when the
    /// location has none.
    #[must_use]
    pub fn pricing_for(&self, location: Location) -> Option<LocationPricing> {
        let (price, final_price, units) = match location {
            Location::Mumbai => (
                self.price_mumbai,
                self.final_price_mumbai,
                self.target_units_mumbai,
            ),
            Location::Bengaluru => (
                self.price_bengaluru,
                self.final_price_bengaluru,
                self.target_units_bengaluru,
            ),
        };

        Some(LocationPricing {
            standard_price: price?,
            final_price,
            target_units: units.or(self.target_units),
        })
    }

    /// Whether any location carries a standard price.
    #[must_use]
    pub fn has_location_pricing(&self) -> bool {
        Location::ALL.iter().any(|l| self.pricing_for(*l).is_some())
    }

    /// Free-text price, only when no location-specific price exists.
    #[must_use]
    pub fn fallback_pricing(&self) -> Option<&str> {
        if self.has_location_pricing() {
            return None;
        }
        self.pricing
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Standard price, optional final price and optional target for one location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPricing {
    pub standard_price: f64,
    pub final_price: Option<f64>,
    pub target_units: Option<i64>,
}

impl LocationPricing {
    /// Final price if present, else the standard price.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.final_price.unwrap_or(self.standard_price)
    }

    /// Whether a final price exists and differs from the standard price.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.final_price
            .is_some_and(|final_price| (final_price - self.standard_price).abs() > f64::EPSILON)
    }
}

// =============================================================================
// Robot Output Envelope
// =============================================================================

/// Schema version stamped on every JSON document.
pub const SCHEMA_VERSION: &str = "offerdash.v1";

/// Versioned envelope for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotOutput<T> {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub command: String,
    pub data: T,

    #[serde(default)]
    pub errors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<Vec<ErrorDetail>>,

    pub meta: RobotMeta,
}

/// Metadata for robot output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotMeta {
    pub format: String,
    pub flags: Vec<String>,
    pub runtime: String,
}

/// Structured description of a failed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub code: String,
    pub category: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&OfferError> for ErrorDetail {
    fn from(error: &OfferError) -> Self {
        Self {
            code: error.error_code().to_string(),
            category: error.category().to_string(),
            message: error.to_string(),
            hint: error.hint(),
        }
    }
}

impl<T> RobotOutput<T> {
    /// Create a new robot output envelope.
    pub fn new(command: impl Into<String>, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            command: command.into(),
            data,
            errors: Vec::new(),
            error_details: None,
            meta: RobotMeta {
                format: "json".to_string(),
                flags: Vec::new(),
                runtime: "cli".to_string(),
            },
        }
    }

    /// Record the flags that shaped this output.
    #[must_use]
    pub fn with_flags(mut self, flags: Vec<String>) -> Self {
        self.meta.flags = flags;
        self
    }

    /// Attach non-fatal warnings.
    #[must_use]
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

impl RobotOutput<Option<()>> {
    /// Envelope for a command that failed; `data` is `null`.
    pub fn failure(command: impl Into<String>, error: &OfferError) -> Self {
        let mut output = Self::new(command, None);
        output.errors = vec![error.to_string()];
        output.error_details = Some(vec![ErrorDetail::from(error)]);
        output
    }
}

/// Which formatter a `format` request used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    Compact,
    Full,
    Count,
}

/// Result of formatting one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatPayload {
    pub input: String,
    pub style: FormatStyle,
    pub formatted: String,
}

// =============================================================================
// Lenient field deserializers
// =============================================================================

mod de {
    use super::{Deserialize, Deserializer, TargetUnits};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Option::<Scalar>::deserialize(deserializer)? {
            Some(Scalar::Int(n)) => n.to_string(),
            Some(Scalar::Float(n)) => n.to_string(),
            Some(Scalar::Text(s)) => s,
            None => String::new(),
        })
    }

    /// Prices entered through forms sometimes arrive as strings; blank or
    /// non-numeric text is treated as absent.
    #[allow(clippy::cast_precision_loss)]
    pub fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Scalar>::deserialize(deserializer)? {
            Some(Scalar::Int(n)) => Some(n as f64),
            Some(Scalar::Float(n)) => n.is_finite().then_some(n),
            Some(Scalar::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            None => None,
        })
    }

    pub fn units<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(Option::<TargetUnits>::deserialize(deserializer)?.and_then(TargetUnits::normalize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mumbai_offer() -> Offer {
        Offer {
            id: "1".to_string(),
            title: "Monsoon Glow Facial".to_string(),
            month: Some("2025-07".to_string()),
            price_mumbai: Some(14595.0),
            final_price_mumbai: Some(11999.0),
            target_units_mumbai: Some(20),
            ..Offer::default()
        }
    }

    #[test]
    fn location_parses_cli_names() {
        assert_eq!(Location::from_cli_name("mumbai").unwrap(), Location::Mumbai);
        assert_eq!(Location::from_cli_name("Bengaluru").unwrap(), Location::Bengaluru);
        assert_eq!(Location::from_cli_name("bangalore").unwrap(), Location::Bengaluru);
        assert!(matches!(
            Location::from_cli_name("delhi"),
            Err(OfferError::InvalidLocation(_))
        ));
    }

    #[test]
    fn target_units_accept_numbers_and_strings() {
        assert_eq!(TargetUnits::from(30).units(), 30);
        assert_eq!(TargetUnits::from("30").units(), 30);
        assert_eq!(TargetUnits::from("").units(), 0);
        assert_eq!(TargetUnits::from("lots").units(), 0);
        assert_eq!(TargetUnits::Fractional(12.9).units(), 12);
        assert_eq!(TargetUnits::from(None).units(), 0);
    }

    #[test]
    fn blank_target_text_normalizes_to_absent() {
        assert_eq!(TargetUnits::from("  ").normalize(), None);
        assert_eq!(TargetUnits::from("abc").normalize(), Some(0));
        assert_eq!(TargetUnits::from(0).normalize(), Some(0));
    }

    #[test]
    fn pricing_for_uses_same_location_fields() {
        let offer = mumbai_offer();
        let pricing = offer.pricing_for(Location::Mumbai).unwrap();
        assert!((pricing.standard_price - 14595.0).abs() < f64::EPSILON);
        assert_eq!(pricing.final_price, Some(11999.0));
        assert_eq!(pricing.target_units, Some(20));
        assert!(offer.pricing_for(Location::Bengaluru).is_none());
    }

    #[test]
    fn pricing_for_falls_back_to_generic_target() {
        let offer = Offer {
            price_bengaluru: Some(9000.0),
            target_units: Some(15),
            target_units_mumbai: Some(4),
            ..Offer::default()
        };
        let pricing = offer.pricing_for(Location::Bengaluru).unwrap();
        assert_eq!(pricing.target_units, Some(15));
    }

    #[test]
    fn final_price_without_standard_price_is_not_pricing() {
        let offer = Offer {
            final_price_mumbai: Some(500.0),
            pricing: Some("From ₹499".to_string()),
            ..Offer::default()
        };
        assert!(offer.pricing_for(Location::Mumbai).is_none());
        assert_eq!(offer.fallback_pricing(), Some("From ₹499"));
    }

    #[test]
    fn fallback_pricing_ignored_when_location_price_exists() {
        let mut offer = mumbai_offer();
        offer.pricing = Some("Call for price".to_string());
        assert_eq!(offer.fallback_pricing(), None);
    }

    #[test]
    fn effective_price_prefers_final_price() {
        let pricing = LocationPricing {
            standard_price: 1000.0,
            final_price: Some(800.0),
            target_units: None,
        };
        assert!((pricing.effective_price() - 800.0).abs() < f64::EPSILON);
        assert!(pricing.has_discount());

        let full_price = LocationPricing {
            final_price: None,
            ..pricing
        };
        assert!((full_price.effective_price() - 1000.0).abs() < f64::EPSILON);
        assert!(!full_price.has_discount());

        let same_price = LocationPricing {
            final_price: Some(1000.0),
            ..pricing
        };
        assert!(!same_price.has_discount());
    }

    #[test]
    fn deserializes_dashboard_json() {
        let json = r#"{
            "id": 1721900000000,
            "title": "Monsoon Glow Facial",
            "month": "2025-07",
            "priceMumbai": 14595,
            "finalPriceMumbai": "11999",
            "targetUnitsMumbai": "20",
            "targetUnitsBengaluru": "",
            "targetUnits": 12.0,
            "isCancelled": false,
            "someUiFlag": true
        }"#;
        let offer: Offer = serde_json::from_str(json).expect("offer should parse");
        assert_eq!(offer.id, "1721900000000");
        assert_eq!(offer.price_mumbai, Some(14595.0));
        assert_eq!(offer.final_price_mumbai, Some(11999.0));
        assert_eq!(offer.target_units_mumbai, Some(20));
        assert_eq!(offer.target_units_bengaluru, None);
        assert_eq!(offer.target_units, Some(12));
        assert!(!offer.is_cancelled);
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let offer: Offer =
            serde_json::from_str(r#"{"title": "Draft", "priceMumbai": null, "targetUnits": null}"#)
                .expect("offer should parse");
        assert_eq!(offer.id, "");
        assert_eq!(offer.price_mumbai, None);
        assert_eq!(offer.target_units, None);
        assert!(!offer.has_location_pricing());
    }

    #[test]
    fn serializes_normalized_units_as_numbers() {
        let offer: Offer = serde_json::from_str(r#"{"id": "a", "targetUnitsMumbai": "25"}"#)
            .expect("offer should parse");
        let value = serde_json::to_value(&offer).expect("offer should serialize");
        assert_eq!(value["targetUnitsMumbai"], 25);
        assert!(value.get("priceMumbai").is_none());
    }

    #[test]
    fn robot_output_envelope_fields() {
        let output = RobotOutput::new("quote", vec![1, 2]).with_flags(vec!["pretty".into()]);
        let value = serde_json::to_value(&output).expect("envelope should serialize");
        assert_eq!(value["schemaVersion"], SCHEMA_VERSION);
        assert_eq!(value["command"], "quote");
        assert_eq!(value["data"], serde_json::json!([1, 2]));
        assert_eq!(value["errors"], serde_json::json!([]));
        assert_eq!(value["meta"]["flags"][0], "pretty");
        assert!(value.get("errorDetails").is_none());
        assert!(value["generatedAt"].is_string());
    }

    #[test]
    fn robot_output_failure_carries_details() {
        let error = OfferError::NoCatalog;
        let output = RobotOutput::failure("report", &error);
        let value = serde_json::to_value(&output).expect("envelope should serialize");
        assert!(value["data"].is_null());
        assert_eq!(value["errors"][0], error.to_string());
        assert_eq!(value["errorDetails"][0]["code"], error.error_code());
    }
}
