//! Conference day windows.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use serde::Serialize;

use crate::error::{ClockError, Result};

/// One day of the event, bounded by two instants.
///
/// Equality and hashing are instant-based: the same window written with a
/// different UTC offset is the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConferenceDay {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl ConferenceDay {
    /// Build a day window.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidDay`] if `start` is after `end`.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Result<Self> {
        if start > end {
            return Err(ClockError::InvalidDay(format!(
                "start {} is after end {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a day window from two RFC 3339 strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_instant(start)?, parse_instant(end)?)
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `instant` falls inside the window, both ends inclusive.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}

/// Parse an RFC 3339 datetime string, keeping its offset.
pub(crate) fn parse_instant(s: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map_err(|e| ClockError::InvalidDatetime(format!("'{}': {}", s, e)))
}
