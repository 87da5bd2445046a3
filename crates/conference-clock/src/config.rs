//! Loading the conference table.
//!
//! Raw values arrive as strings (a JSON file or `CONFERENCE_*` environment
//! variables) and are validated all at once by
//! [`ConferenceConfig::into_schedule`]. A bad timestamp or zone fails there,
//! before anything is classified against it.

use std::collections::BTreeMap;
use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::day::{parse_instant, ConferenceDay};
use crate::error::{ClockError, Result};
use crate::schedule::{ConferenceSchedule, WIFI_OFFERING};

pub const ENV_TIMEZONE: &str = "CONFERENCE_TIMEZONE";
pub const ENV_WIFI_OFFERING_START: &str = "CONFERENCE_WIFI_OFFERING_START";

/// An unvalidated day window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayWindowConfig {
    pub start: String,
    pub end: String,
}

/// Conference configuration as written by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConferenceConfig {
    /// IANA timezone name of the venue.
    pub timezone: String,
    pub days: Vec<DayWindowConfig>,
    /// Feature name to RFC 3339 start instant.
    #[serde(default)]
    pub features: BTreeMap<String, String>,
}

// ── ConferenceConfig ────────────────────────────────────────────────────────

impl ConferenceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ClockError::InvalidConfig(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading conference config");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Read `CONFERENCE_TIMEZONE`, `CONFERENCE_DAY{N}_START`/`_END` and
    /// `CONFERENCE_WIFI_OFFERING_START` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading values through `lookup`.
    ///
    /// Days are numbered from 1 and read until the first missing start. A
    /// later day, or an end without a start, after that point is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = lookup(ENV_TIMEZONE)
            .ok_or_else(|| ClockError::InvalidConfig(format!("{ENV_TIMEZONE} is not set")))?;

        let mut days = Vec::new();
        for n in 1.. {
            let start_key = format!("CONFERENCE_DAY{n}_START");
            let end_key = format!("CONFERENCE_DAY{n}_END");
            let Some(start) = lookup(&start_key) else {
                break;
            };
            let end = lookup(&end_key)
                .ok_or_else(|| ClockError::InvalidConfig(format!("{end_key} is not set")))?;
            days.push(DayWindowConfig { start, end });
        }

        // Numbering must be contiguous: nothing may follow the first gap.
        let next = days.len() + 1;
        for key in [
            format!("CONFERENCE_DAY{next}_END"),
            format!("CONFERENCE_DAY{}_START", next + 1),
        ] {
            if lookup(&key).is_some() {
                return Err(ClockError::InvalidConfig(format!(
                    "{key} is set but CONFERENCE_DAY{next}_START is not"
                )));
            }
        }

        let mut features = BTreeMap::new();
        if let Some(start) = lookup(ENV_WIFI_OFFERING_START) {
            features.insert(WIFI_OFFERING.to_string(), start);
        }

        Ok(Self {
            timezone,
            days,
            features,
        })
    }

    // ── validation ──────────────────────────────────────────────────────

    /// Validate and build the schedule.
    ///
    /// # Errors
    ///
    /// - [`ClockError::InvalidTimezone`] for an unknown IANA name
    /// - [`ClockError::InvalidDatetime`] for a malformed timestamp
    /// - [`ClockError::InvalidDay`] for a day that ends before it starts
    /// - [`ClockError::InvalidConfig`] for no days, or days out of order
    pub fn into_schedule(self) -> Result<ConferenceSchedule> {
        let result = self.build();
        match &result {
            Ok(schedule) => debug!(
                timezone = %schedule.timezone(),
                days = schedule.days().len(),
                "conference schedule loaded"
            ),
            Err(e) => warn!(error = %e, "rejected conference config"),
        }
        result
    }

    fn build(self) -> Result<ConferenceSchedule> {
        let timezone = parse_timezone(&self.timezone)?;

        let days = self
            .days
            .iter()
            .enumerate()
            .map(|(i, d)| {
                ConferenceDay::parse(&d.start, &d.end).map_err(|e| match e {
                    ClockError::InvalidDay(msg) => {
                        ClockError::InvalidDay(format!("day {}: {msg}", i + 1))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut schedule = ConferenceSchedule::new(timezone, days)?;
        for (name, start) in &self.features {
            schedule = schedule.with_feature(name.clone(), parse_instant(start)?);
        }
        Ok(schedule)
    }
}

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| ClockError::InvalidTimezone(format!("'{}'", s)))
}

// ── Tests ───────────────────────────────────────────────────────────────────
