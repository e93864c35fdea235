//! Calendar-month keys used to group offers.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::{OfferError, Result};

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// Build from a year and a 1-based month.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Parse `YYYY-MM`, `YYYY-MM-DD`, `Month YYYY` or `Mon YYYY`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let candidates = [
            (format!("{trimmed}-01"), "%Y-%m-%d"),
            (trimmed.to_string(), "%Y-%m-%d"),
            (format!("1 {trimmed}"), "%d %B %Y"),
            (format!("1 {trimmed}"), "%d %b %Y"),
        ];

        candidates
            .iter()
            .find_map(|(text, fmt)| NaiveDate::parse_from_str(text, fmt).ok())
            .and_then(|date| Self::new(date.year(), date.month()))
            .ok_or_else(|| OfferError::InvalidMonth(input.to_string()))
    }

    /// Stable key, e.g. `2025-07`.
    #[must_use]
    pub fn key(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    /// Display label, e.g. `July 2025`.
    #[must_use]
    pub fn label(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}
