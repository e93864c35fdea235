//! Offer reports grouped by calendar month.
//!
//! Turns a slice of [`Offer`]s into display-ready [`MonthGroup`]s. Pricing
//! goes through [`location_metrics`]; offers without any location price fall
//! back to their free-text `pricing`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::calendar::MonthKey;
use crate::core::metrics::{PricingMetrics, location_metrics};
use crate::core::models::{Location, Offer};

/// Label for offers without a usable month.
pub const UNSCHEDULED_LABEL: &str = "Unscheduled";

/// Metrics for one location of an offer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMetrics {
    pub location: Location,
    #[serde(flatten)]
    pub metrics: PricingMetrics,
}

/// What an offer card shows as its price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum PriceDisplay {
    /// Per-location metrics.
    Locations(Vec<LocationMetrics>),
    /// Free-text fallback price.
    Text(String),
    /// Nothing to show.
    Unpriced,
}

/// Data inconsistencies noticed while summarizing. They never block a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MetricsWarning {
    /// Final price above the standard price; savings are negative.
    #[serde(rename_all = "camelCase")]
    FinalAboveStandard { location: Location, savings: f64 },
    /// Standard price of zero; no discount percentage can be computed.
    ZeroStandardPrice { location: Location },
}

impl std::fmt::Display for MetricsWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FinalAboveStandard { location, .. } => {
                write!(f, "{location}: final price is above the standard price")
            }
            Self::ZeroStandardPrice { location } => {
                write!(f, "{location}: standard price is zero")
            }
        }
    }
}

/// One offer, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSummary {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthKey>,
    pub cancelled: bool,
    pub price: PriceDisplay,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MetricsWarning>,
}

impl OfferSummary {
    /// Sum of projected revenue across the shown locations.
    #[must_use]
    pub fn projected_revenue(&self) -> f64 {
        match &self.price {
            PriceDisplay::Locations(locations) => locations
                .iter()
                .filter_map(|l| l.metrics.projected_revenue)
                .sum(),
            PriceDisplay::Text(_) | PriceDisplay::Unpriced => 0.0,
        }
    }
}

/// Aggregates for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotals {
    pub offer_count: usize,
    pub active_count: usize,
    /// Projected revenue of active (non-cancelled) offers.
    pub projected_revenue: f64,
}

/// Offers that share a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGroup {
    /// `None` for the unscheduled group.
    pub month: Option<MonthKey>,
    pub label: String,
    pub offers: Vec<OfferSummary>,
    pub totals: MonthTotals,
}

/// Which offers and locations a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    pub month: Option<MonthKey>,
    pub location: Option<Location>,
    pub include_cancelled: bool,
}

/// A full report: month groups plus catalog-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    /// Catalog path, when loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub filter: ReportFilter,
    pub months: Vec<MonthGroup>,
    pub totals: MonthTotals,
}

impl ReportPayload {
    /// Wrap month groups and sum their totals.
    #[must_use]
    pub fn new(source: Option<String>, filter: ReportFilter, months: Vec<MonthGroup>) -> Self {
        let totals = months
            .iter()
            .fold(MonthTotals::default(), |acc, group| MonthTotals {
                offer_count: acc.offer_count + group.totals.offer_count,
                active_count: acc.active_count + group.totals.active_count,
                projected_revenue: acc.projected_revenue + group.totals.projected_revenue,
            });
        Self {
            source,
            filter,
            months,
            totals,
        }
    }

    /// All warnings across the report, as display strings.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.months
            .iter()
            .flat_map(|group| &group.offers)
            .flat_map(|offer| {
                offer
                    .warnings
                    .iter()
                    .map(move |warning| format!("{}: {warning}", offer.id))
            })
            .collect()
    }
}

/// Summarize one offer.
///
/// With a `location`, only that location's metrics are included. Returns
/// `None` when the offer has prices for other locations only.
#[must_use]
pub fn summarize_offer(offer: &Offer, location: Option<Location>) -> Option<OfferSummary> {
    let locations: Vec<Location> = location.map_or_else(|| Location::ALL.to_vec(), |l| vec![l]);

    let mut warnings = Vec::new();
    let metrics: Vec<LocationMetrics> = locations
        .into_iter()
        .filter_map(|location| {
            let pricing = offer.pricing_for(location)?;
            let metrics = location_metrics(&pricing);
            collect_warnings(offer, location, &metrics, &mut warnings);
            Some(LocationMetrics { location, metrics })
        })
        .collect();

    let price = if !metrics.is_empty() {
        PriceDisplay::Locations(metrics)
    } else if offer.has_location_pricing() {
        // Priced, but not for the requested location.
        return None;
    } else if let Some(text) = offer.fallback_pricing() {
        PriceDisplay::Text(text.to_string())
    } else {
        PriceDisplay::Unpriced
    };

    Some(OfferSummary {
        id: offer.id.clone(),
        title: offer.title.clone(),
        category: offer.category.clone(),
        month: offer_month(offer),
        cancelled: offer.is_cancelled,
        price,
        warnings,
    })
}

/// Group offers by month, in chronological order with unscheduled offers last.
///
/// Offers keep their input order inside a month.
#[must_use]
pub fn build_report(offers: &[Offer], filter: &ReportFilter) -> Vec<MonthGroup> {
    let mut scheduled: BTreeMap<MonthKey, Vec<OfferSummary>> = BTreeMap::new();
    let mut unscheduled: Vec<OfferSummary> = Vec::new();

    for offer in offers {
        if offer.is_cancelled && !filter.include_cancelled {
            continue;
        }
        let Some(summary) = summarize_offer(offer, filter.location) else {
            continue;
        };
        if filter.month.is_some() && summary.month != filter.month {
            continue;
        }

        match summary.month {
            Some(month) => scheduled.entry(month).or_default().push(summary),
            None => unscheduled.push(summary),
        }
    }

    let mut groups: Vec<MonthGroup> = scheduled
        .into_iter()
        .map(|(month, offers)| MonthGroup::new(Some(month), month.label(), offers))
        .collect();

    if !unscheduled.is_empty() {
        groups.push(MonthGroup::new(
            None,
            UNSCHEDULED_LABEL.to_string(),
            unscheduled,
        ));
    }

    tracing::debug!(
        offers = offers.len(),
        groups = groups.len(),
        ?filter,
        "Built offer report"
    );

    groups
}

impl MonthGroup {
    fn new(month: Option<MonthKey>, label: String, offers: Vec<OfferSummary>) -> Self {
        let active: Vec<&OfferSummary> = offers.iter().filter(|o| !o.cancelled).collect();
        let totals = MonthTotals {
            offer_count: offers.len(),
            active_count: active.len(),
            projected_revenue: active.iter().map(|o| o.projected_revenue()).sum(),
        };
        Self {
            month,
            label,
            offers,
            totals,
        }
    }
}

fn offer_month(offer: &Offer) -> Option<MonthKey> {
    let raw = offer.month.as_deref()?;
    match MonthKey::parse(raw) {
        Ok(month) => Some(month),
        Err(_) => {
            tracing::debug!(offer_id = %offer.id, month = raw, "Unrecognized offer month");
            None
        }
    }
}

fn collect_warnings(
    offer: &Offer,
    location: Location,
    metrics: &PricingMetrics,
    warnings: &mut Vec<MetricsWarning>,
) {
    if let Some(savings) = metrics.savings.filter(|_| metrics.is_final_above_standard()) {
        tracing::warn!(
            offer_id = %offer.id,
            %location,
            savings,
            "final price exceeds standard price"
        );
        warnings.push(MetricsWarning::FinalAboveStandard { location, savings });
    }

    if metrics.standard_price == 0.0 {
        tracing::warn!(offer_id = %offer.id, %location, "standard price is zero");
        warnings.push(MetricsWarning::ZeroStandardPrice { location });
    }
}
