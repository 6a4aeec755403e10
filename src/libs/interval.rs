//! Shorthand interval syntax for the `add` command.
//!
//! Three mutually exclusive forms, always three tokens with the target last:
//!
//! 1. `since last TARGET`: start where the most recent entry stopped,
//!    end now.
//! 2. `HHMM HHMM TARGET`: today's clock times, both in [0, 2359].
//! 3. `N min|m|hour|h TARGET`: end now, start N units earlier.
//!
//! The target must not be an integer; task ids and short names always
//! contain something non-numeric, so a number in that position is a
//! misplaced argument.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeUnit {
    Minutes,
    Hours,
}

/// A parsed, validated `add` interval specification.
#[derive(Debug, Clone, PartialEq)]
pub enum AddSpec {
    /// `since last TARGET`
    SinceLast,
    /// `HHMM HHMM TARGET`, validated so that start < end and both are
    /// real clock times.
    ClockRange { start: u32, end: u32 },
    /// `N min|m|hour|h TARGET`
    Backwards { amount: i64, unit: TimeUnit },
}

fn is_integer(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

fn validate_clock(value: u32) -> Result<()> {
    if value > 2359 {
        msg_bail_anyhow!(Message::ClockValueOutOfRange);
    }
    if value % 100 > 59 {
        msg_bail_anyhow!(Message::ClockMinutesInvalid(value));
    }
    Ok(())
}

impl AddSpec {
    /// Detects which syntax the first two tokens use and validates it.
    pub fn parse(first: &str, second: &str, target: &str) -> Result<Self> {
        if is_integer(target) {
            msg_bail_anyhow!(Message::AddTargetNumeric(target.to_string()));
        }

        if first == "since" && second == "last" {
            return Ok(Self::SinceLast);
        }

        if let (Ok(start), Ok(end)) = (first.parse::<u32>(), second.parse::<u32>()) {
            validate_clock(start)?;
            validate_clock(end)?;
            if end <= start {
                msg_bail_anyhow!(Message::ClockRangeInverted);
            }
            return Ok(Self::ClockRange { start, end });
        }

        if let Ok(amount) = first.parse::<i64>() {
            let unit = match second {
                "min" | "m" => Some(TimeUnit::Minutes),
                "hour" | "h" => Some(TimeUnit::Hours),
                _ => None,
            };
            if let Some(unit) = unit {
                if amount <= 0 {
                    msg_bail_anyhow!(Message::AddInvalidSyntax);
                }
                return Ok(Self::Backwards { amount, unit });
            }
        }

        Err(msg_error_anyhow!(Message::AddInvalidSyntax))
    }
}

/// Expands a validated `HHMM` pair into start and end timestamps on `date`.
pub fn clock_interval(start: u32, end: u32, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let to_datetime = |value: u32| date.and_hms_opt(value / 100, value % 100, 0).unwrap();
    (to_datetime(start), to_datetime(end))
}

/// Expands `N` units back from `now` into start and end timestamps.
pub fn backwards_interval(amount: i64, unit: TimeUnit, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let span = match unit {
        TimeUnit::Minutes => Duration::minutes(amount),
        TimeUnit::Hours => Duration::hours(amount),
    };
    (now - span, now)
}
