//! Shared types used by both content collections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A start date with an optional end date.
///
/// An absent end means the entry is still ongoing ("Present"). Wherever
/// ranges are compared, an open end counts as the most recent possible
/// date, never the earliest.
///
/// In documents the range is spelled as two sibling keys, so entries embed
/// it with `#[serde(flatten)]`:
///
/// ```json
/// { "startDate": "2022-03", "endDate": null }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate", with = "crate::dates::date_format")]
    pub start: NaiveDate,
    #[serde(
        rename = "endDate",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date_format"
    )]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// True when the range has no end date.
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// End date for ordering purposes: open ends sort after every real date.
    pub fn effective_end(&self) -> NaiveDate {
        self.end.unwrap_or(NaiveDate::MAX)
    }

    /// Newest-first ordering: later start first, then later (or open) end first.
    pub fn newest_first(&self, other: &Self) -> Ordering {
        other
            .start
            .cmp(&self.start)
            .then_with(|| other.effective_end().cmp(&self.effective_end()))
    }
}
