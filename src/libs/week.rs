//! Week-window arithmetic and weekly hour summaries.
//!
//! A week runs Sunday 00:00:00 through the following Saturday 23:59:59,
//! local time. A Sunday reference date starts its own week rather than
//! closing the previous one. Windows are computed on demand and discarded
//! after use; nothing here touches the network or the disk.

use crate::api::TimeEntry;
use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::collections::BTreeMap;

/// How many weekly bins the `bins` command reports, current week included.
pub const BIN_COUNT: i64 = 5;

/// A Sunday-to-Saturday window around a reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekWindow {
    /// Sunday 00:00:00 local.
    pub start: NaiveDateTime,
    /// Saturday 23:59:59 local, inclusive.
    pub end: NaiveDateTime,
}

impl WeekWindow {
    /// Computes the window containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_sunday() as i64;
        let first_day = date - Duration::days(offset);
        let last_day = first_day + Duration::days(6);
        Self {
            start: first_day.and_hms_opt(0, 0, 0).unwrap(),
            end: last_day.and_hms_opt(23, 59, 59).unwrap(),
        }
    }

    /// The last `BIN_COUNT` windows relative to `today`, oldest first.
    pub fn last_bins(today: NaiveDate) -> Vec<Self> {
        (0..BIN_COUNT)
            .rev()
            .map(|weeks_back| Self::containing(today - Duration::days(7 * weeks_back)))
            .collect()
    }

    pub fn start_millis(&self) -> Result<i64> {
        local_millis(&self.start)
    }

    pub fn end_millis(&self) -> Result<i64> {
        local_millis(&self.end)
    }
}

/// Converts a local naive timestamp to epoch milliseconds.
///
/// DST transitions can make a local time ambiguous or nonexistent; the
/// earliest valid interpretation is used, matching how entry timestamps
/// round-trip through the service.
pub fn local_millis(datetime: &NaiveDateTime) -> Result<i64> {
    Local
        .from_local_datetime(datetime)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| anyhow::anyhow!("{} does not exist in the local timezone", datetime))
}

/// Aggregated hours for one week window.
#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub entry_count: usize,
    pub total: Duration,
    /// Per-task-name totals, keyed by display name.
    pub buckets: BTreeMap<String, Duration>,
}

impl WeekSummary {
    /// Buckets entries by task display name and sums their durations.
    pub fn from_entries(entries: &[TimeEntry]) -> Result<Self> {
        let mut summary = Self {
            entry_count: entries.len(),
            total: Duration::zero(),
            buckets: BTreeMap::new(),
        };
        for entry in entries {
            let duration = entry.duration()?;
            summary.total = summary.total + duration;
            let bucket = summary.buckets.entry(entry.task.name.clone()).or_insert_with(Duration::zero);
            *bucket = *bucket + duration;
        }
        Ok(summary)
    }
}
