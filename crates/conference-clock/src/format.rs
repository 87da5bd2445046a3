//! Locale-aware rendering of session times.
//!
//! Output follows fixed patterns per function; the words (weekday and month
//! names, AM/PM markers) come from the supplied [`Locale`]. Exact glyphs are
//! whatever chrono's locale tables produce.

use chrono::{DateTime, Locale, TimeZone};
use chrono_tz::Tz;

use crate::error::{ClockError, Result};
use crate::schedule::ConferenceSchedule;

// ── locale and zone helpers ─────────────────────────────────────────────────

/// Parse a POSIX locale name such as `en_US` or `de_DE`.
pub fn parse_locale(name: &str) -> Result<Locale> {
    Locale::try_from(name.trim())
        .map_err(|_| ClockError::InvalidConfig(format!("unknown locale '{}'", name)))
}

/// The same instant expressed in `tz`.
pub fn zoned_time<Z: TimeZone>(instant: &DateTime<Z>, tz: Tz) -> DateTime<Tz> {
    instant.with_timezone(&tz)
}

/// Whether `tz` is the conference's home timezone.
pub fn is_conference_time_zone(schedule: &ConferenceSchedule, tz: Tz) -> bool {
    schedule.timezone() == tz
}

// ── time strings ────────────────────────────────────────────────────────────

/// Weekday, date and time without the year, e.g. `Tuesday, May 14, 1:55 PM`.
pub fn time_string<Z: TimeZone>(instant: &DateTime<Z>, tz: Tz, locale: Locale) -> String {
    zoned_time(instant, tz)
        .format_localized("%A, %B %-d, %-I:%M %p", locale)
        .to_string()
}

/// Short date, e.g. `Tue, May 14`.
pub fn abbreviated_time_string<Z: TimeZone>(instant: &DateTime<Z>, tz: Tz, locale: Locale) -> String {
    zoned_time(instant, tz)
        .format_localized("%a, %b %-d", locale)
        .to_string()
}

/// A session slot, e.g. `Tue, May 14, 11:30 AM - 12:30 PM`.
///
/// The start's meridiem is only written when it differs from the end's:
/// `Tue, May 14, 9:00 - 10:40 AM`.
pub fn time_range_string<Z1: TimeZone, Z2: TimeZone>(
    start: &DateTime<Z1>,
    end: &DateTime<Z2>,
    tz: Tz,
    locale: Locale,
) -> String {
    let start = zoned_time(start, tz);
    let end = zoned_time(end, tz);

    let mut out = start
        .format_localized("%a, %b %-d, %-I:%M ", locale)
        .to_string();

    let start_meridiem = start.format_localized("%p", locale).to_string();
    let end_meridiem = end.format_localized("%p", locale).to_string();
    if start_meridiem != end_meridiem {
        out.push_str(&start_meridiem);
        out.push(' ');
    }

    out.push_str(&end.format_localized("- %-I:%M %p", locale).to_string());
    out
}

// ── Tests ───────────────────────────────────────────────────────────────────
