//! # conference-clock
//!
//! Time-window logic for a conference companion app.
//!
//! Given a validated table of conference days, this crate answers whether a
//! session is before, during, or after "now", which configured day a window
//! is (and how to label it), whether the conference has started or ended,
//! and whether an instant-gated feature such as the Wi-Fi offering is open.
//! "Now" is always passed in, either as an instant or through a [`Clock`].
//!
//! ## Modules
//!
//! - [`session`] — Session records and before/during/after classification
//! - [`day`] — Conference day windows
//! - [`schedule`] — The ordered day table, day labels, start/end and feature checks
//! - [`config`] — Loading the day table from JSON or `CONFERENCE_*` environment variables
//! - [`format`] — Locale-aware time strings
//! - [`export`] — Calendar-event and share-text hand-off
//! - [`clock`] — Injectable "now" providers
//! - [`error`] — Error types

pub mod clock;
pub mod config;
pub mod day;
pub mod error;
pub mod export;
pub mod format;
pub mod schedule;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{parse_timezone, ConferenceConfig, DayWindowConfig};
pub use day::ConferenceDay;
pub use error::ClockError;
pub use export::{share_text, CalendarEvent};
pub use format::{
    abbreviated_time_string, is_conference_time_zone, parse_locale, time_range_string,
    time_string, zoned_time,
};
pub use schedule::{is_feature_window_open, ConferenceSchedule, WIFI_OFFERING};
pub use session::{session_state, session_state_at, Room, Session, SessionRelativeTimeState};
