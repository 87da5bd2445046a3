//! The configured conference: ordered day windows, home timezone, and
//! instant-gated feature windows.
//!
//! A [`ConferenceSchedule`] is validated once when it is built and never
//! mutated afterwards, so it can be shared freely between threads.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::Tz;

use crate::clock::Clock;
use crate::day::ConferenceDay;
use crate::error::{ClockError, Result};

/// Feature name for the Wi-Fi offering window.
pub const WIFI_OFFERING: &str = "wifi_offering";

#[derive(Debug, Clone, PartialEq)]
pub struct ConferenceSchedule {
    timezone: Tz,
    days: Vec<ConferenceDay>,
    features: BTreeMap<String, DateTime<FixedOffset>>,
}

// ── ConferenceSchedule ──────────────────────────────────────────────────────

impl ConferenceSchedule {
    /// Build a schedule from days in chronological order.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `days` is empty, out of
    /// order, or overlapping. Consecutive days may share a boundary instant.
    pub fn new(timezone: Tz, days: Vec<ConferenceDay>) -> Result<Self> {
        if days.is_empty() {
            return Err(ClockError::InvalidConfig(
                "at least one conference day is required".to_string(),
            ));
        }
        for (i, pair) in days.windows(2).enumerate() {
            if pair[1].start() < pair[0].end() {
                return Err(ClockError::InvalidConfig(format!(
                    "day {} must not start before day {} ends",
                    i + 2,
                    i + 1
                )));
            }
        }
        Ok(Self {
            timezone,
            days,
            features: BTreeMap::new(),
        })
    }

    /// Add a named feature gated on `start`.
    pub fn with_feature(mut self, name: impl Into<String>, start: DateTime<FixedOffset>) -> Self {
        self.features.insert(name.into(), start);
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn days(&self) -> &[ConferenceDay] {
        &self.days
    }

    pub fn features(&self) -> impl Iterator<Item = (&str, DateTime<FixedOffset>)> {
        self.features.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn first_day(&self) -> &ConferenceDay {
        // Non-empty by construction.
        &self.days[0]
    }

    pub fn last_day(&self) -> &ConferenceDay {
        &self.days[self.days.len() - 1]
    }

    // ── day lookup and labels ───────────────────────────────────────────

    /// Position of `day` in the configured list, matched by value.
    pub fn day_index(&self, day: &ConferenceDay) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }

    /// The configured day containing `instant`, with its index.
    pub fn day_at<Z: TimeZone>(&self, instant: &DateTime<Z>) -> Option<(usize, &ConferenceDay)> {
        self.days
            .iter()
            .enumerate()
            .find(|(_, d)| d.contains(instant))
    }

    /// Display label for a configured day.
    ///
    /// With `in_conference_time_zone` the label is the day's calendar date in
    /// the conference zone (`"May 14"`); otherwise it is ordinal (`"Day 1"`).
    ///
    /// # Panics
    ///
    /// Panics if `day` is not one of the configured days.
    pub fn day_label(&self, day: &ConferenceDay, in_conference_time_zone: bool) -> String {
        let Some(index) = self.day_index(day) else {
            panic!(
                "unknown conference day: {} - {}",
                day.start().to_rfc3339(),
                day.end().to_rfc3339()
            );
        };
        if in_conference_time_zone {
            day.start()
                .with_timezone(&self.timezone)
                .format("%B %-d")
                .to_string()
        } else {
            format!("Day {}", index + 1)
        }
    }

    // ── conference started / ended ──────────────────────────────────────

    /// Whether `now` is past the first day's start.
    pub fn has_conference_started<Z: TimeZone>(&self, now: &DateTime<Z>) -> bool {
        *now > self.first_day().start()
    }

    /// Whether `now` is past the last day's end.
    pub fn has_conference_ended<Z: TimeZone>(&self, now: &DateTime<Z>) -> bool {
        *now > self.last_day().end()
    }

    pub fn has_conference_started_with(&self, clock: &dyn Clock) -> bool {
        self.has_conference_started(&clock.now())
    }

    pub fn has_conference_ended_with(&self, clock: &dyn Clock) -> bool {
        self.has_conference_ended(&clock.now())
    }

    // ── feature windows ─────────────────────────────────────────────────

    /// Whether the named feature window has opened at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::UnknownFeature`] if no window by that name is
    /// configured.
    pub fn is_feature_open<Z: TimeZone>(&self, name: &str, now: &DateTime<Z>) -> Result<bool> {
        self.features
            .get(name)
            .map(|start| is_feature_window_open(now, start))
            .ok_or_else(|| ClockError::UnknownFeature(name.to_string()))
    }

    pub fn is_feature_open_with(&self, name: &str, clock: &dyn Clock) -> Result<bool> {
        self.is_feature_open(name, &clock.now())
    }

    /// The Wi-Fi offering window, if one is configured.
    pub fn wifi_offering_started<Z: TimeZone>(&self, now: &DateTime<Z>) -> Result<bool> {
        self.is_feature_open(WIFI_OFFERING, now)
    }
}

// ── is_feature_window_open ──────────────────────────────────────────────────

/// Whether `now` is strictly after `window_start`.
pub fn is_feature_window_open<Z1: TimeZone, Z2: TimeZone>(
    now: &DateTime<Z1>,
    window_start: &DateTime<Z2>,
) -> bool {
    *now > *window_start
}

// ── Tests ───────────────────────────────────────────────────────────────────
