//! Date parsing, serde adapters and display formatting.
//!
//! Content documents carry dates in three shapes, all accepted wherever a
//! date is expected:
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `2024-03-01` | calendar date |
//! | `2024-03` | first day of that month |
//! | `2024-03-01T10:30:00Z` | RFC 3339 timestamp (offset normalized to UTC) |
//!
//! Publication timestamps are kept as `DateTime<Utc>`; portfolio dates
//! (experience, education, projects) are plain `NaiveDate`s.

use crate::types::DateRange;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse a calendar date from any of the accepted shapes.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(ts) = parse_timestamp_strict(s) {
        return Some(ts.date_naive());
    }
    // "YYYY-MM" → first of the month
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Parse a publication timestamp. Date-only input means midnight UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    parse_timestamp_strict(s).or_else(|| {
        parse_date(s)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    })
}

fn parse_timestamp_strict(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offset-less timestamps are taken as UTC
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Serde adapter for required `NaiveDate` fields.
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}

/// Serde adapter for optional `NaiveDate` fields. `null` and absent both mean `None`.
pub mod option_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.collect_str(&date.format("%Y-%m-%d")),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}"))),
        }
    }
}

/// Serde adapter for publication timestamps.
pub mod timestamp_format {
    use super::SecondsFormat;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// "March 1, 2024"
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "March 2024"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "Mar 2024"
pub fn format_short_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Render a range with the given per-date formatter; an open end reads "Present".
///
/// ```text
/// Mar 2022 - Present
/// September 2016 - June 2020
/// ```
pub fn format_range(range: &DateRange, fmt: fn(NaiveDate) -> String) -> String {
    let end = range.end.map(fmt).unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", fmt(range.start), end)
}

/// Human duration between two dates, largest unit only.
///
/// Months are counted as 30 days and years as 12 such months, so the result
/// is an approximation meant for display ("2 years", "7 months", "12 days").
/// An open end is measured up to `today`.
pub fn describe_duration(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> String {
    let end = end.unwrap_or(today);
    let days = (end - start).num_days().unsigned_abs();
    let months = days / 30;
    let years = months / 12;

    if years > 0 {
        plural(years, "year")
    } else if months > 0 {
        plural(months, "month")
    } else {
        plural(days, "day")
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
