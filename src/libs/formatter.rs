//! Formatting helpers for time entries and durations.
//!
//! All hour totals use the same "0.00" decimal format so the `bins` output
//! lines up, and entry listings share one set of strftime patterns.

use crate::api::TimeEntry;
use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Start column pattern for entry listings, e.g. `Tue 03-14 09:30`.
pub const ENTRY_START_FORMAT: &str = "%a %m-%d %H:%M";

/// Stop column pattern, time of day only.
pub const ENTRY_STOP_FORMAT: &str = "%H:%M";

/// Full timestamp pattern used in confirmation messages.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A time entry with all fields pre-formatted for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormattedEntry {
    pub start: String,
    pub stop: String,
    pub custom_id: String,
    pub name: String,
}

/// Formats a wire entry for the `recent` listing.
pub fn format_entry(entry: &TimeEntry) -> Result<FormattedEntry> {
    Ok(FormattedEntry {
        start: entry.start_local()?.format(ENTRY_START_FORMAT).to_string(),
        stop: entry.end_local()?.format(ENTRY_STOP_FORMAT).to_string(),
        custom_id: entry.task.custom_id.clone().unwrap_or_default(),
        name: entry.task.name.clone(),
    })
}

/// Formats a duration as decimal hours with two decimal places.
pub fn format_hours(duration: &Duration) -> String {
    format!("{:.2}", duration.num_milliseconds() as f64 / 3_600_000.0)
}

pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}
