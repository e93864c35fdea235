//! Core data models, metrics and reports.

pub mod calendar;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;

pub use calendar::MonthKey;
pub use metrics::{
    PricingMetrics, QuotePayload, discount_percent, location_metrics, projected_revenue,
    savings_amount,
};
pub use models::{
    ErrorDetail, FormatPayload, FormatStyle, Location, LocationPricing, Offer, RobotMeta,
    RobotOutput, SCHEMA_VERSION, TargetUnits,
};
pub use report::{
    LocationMetrics, MetricsWarning, MonthGroup, MonthTotals, OfferSummary, PriceDisplay,
    ReportFilter, ReportPayload, build_report, summarize_offer,
};
