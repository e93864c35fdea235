//! Derived offer metrics: discount, savings and projected revenue.
//!
//! The three raw operations are plain arithmetic with no gating; callers
//! decide when they apply. [`location_metrics`] is the gated, location-scoped
//! entry point used by reports.

use serde::{Deserialize, Serialize};

use crate::core::models::{LocationPricing, TargetUnits};
use crate::util::numeric::round_half_up;

/// Discount as a whole percentage of the standard price, rounded half-up.
///
/// A zero `standard_price` is a caller error; the result is then meaningless.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn discount_percent(standard_price: f64, final_price: f64) -> i64 {
    round_half_up((standard_price - final_price) / standard_price * 100.0) as i64
}

/// Absolute savings. Negative when the final price exceeds the standard price.
#[must_use]
pub fn savings_amount(standard_price: f64, final_price: f64) -> f64 {
    standard_price - final_price
}

/// Revenue if the target volume sells at `effective_price`.
///
/// Target units may be a number or a numeric string; non-numeric text counts
/// as zero units. The product is not rounded.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn projected_revenue(effective_price: f64, target_units: impl Into<TargetUnits>) -> f64 {
    effective_price * target_units.into().units() as f64
}

/// Display-ready figures for one location's pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingMetrics {
    pub standard_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
    pub effective_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_units: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_revenue: Option<f64>,
}

impl PricingMetrics {
    /// Whether the final price is above the standard price.
    #[must_use]
    pub fn is_final_above_standard(&self) -> bool {
        self.savings.is_some_and(|s| s < 0.0)
    }
}

/// Compute metrics for one location.
///
/// Discount and savings only appear when a final price exists and differs
/// from the standard price; the discount additionally needs a non-zero
/// standard price. Projected revenue only appears when a target is set,
/// and a zero target yields zero revenue.
#[must_use]
pub fn location_metrics(pricing: &LocationPricing) -> PricingMetrics {
    let effective_price = pricing.effective_price();

    let (discount, savings) = match pricing.final_price {
        Some(final_price) if pricing.has_discount() => {
            let discount = (pricing.standard_price != 0.0)
                .then(|| discount_percent(pricing.standard_price, final_price));
            (
                discount,
                Some(savings_amount(pricing.standard_price, final_price)),
            )
        }
        _ => (None, None),
    };

    PricingMetrics {
        standard_price: pricing.standard_price,
        final_price: pricing.final_price,
        effective_price,
        discount_percent: discount,
        savings,
        target_units: pricing.target_units,
        projected_revenue: pricing
            .target_units
            .map(|units| projected_revenue(effective_price, units)),
    }
}

/// Metrics for an ad-hoc price, outside any catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    #[serde(flatten)]
    pub metrics: PricingMetrics,
    /// Target units exactly as given, when they were text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_input: Option<String>,
}

impl QuotePayload {
    /// Quote a standard price with an optional final price and target.
    #[must_use]
    pub fn new(standard_price: f64, final_price: Option<f64>, units: Option<TargetUnits>) -> Self {
        let units_input = match &units {
            Some(TargetUnits::Text(text)) => Some(text.clone()),
            _ => None,
        };
        let pricing = LocationPricing {
            standard_price,
            final_price,
            target_units: units.and_then(TargetUnits::normalize),
        };
        Self {
            metrics: location_metrics(&pricing),
            units_input,
        }
    }
}
