//! Sessions and their position relative to "now".

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// A room a session is held in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
}

/// The parts of a scheduled talk this crate reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub room: Option<Room>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    #[serde(default)]
    pub speakers: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Session {
    /// A session with only the fields classification needs.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            room: None,
            start,
            end,
            speakers: Vec::new(),
            url: None,
        }
    }
}

/// Where "now" sits relative to a session's time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionRelativeTimeState {
    Before,
    During,
    After,
    /// No session was supplied.
    Unknown,
}

impl SessionRelativeTimeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "BEFORE",
            Self::During => "DURING",
            Self::After => "AFTER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for SessionRelativeTimeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `now` against a session's slot.
///
/// Comparisons are strict, so `now == start` and `now == end` are both
/// [`SessionRelativeTimeState::During`]. Instants are compared absolutely;
/// the offsets they carry do not matter.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use conference_clock::{session_state, Session, SessionRelativeTimeState};
///
/// let session = Session::new(
///     "keynote",
///     "Keynote",
///     DateTime::parse_from_rfc3339("2024-05-14T10:00:00-07:00").unwrap(),
///     DateTime::parse_from_rfc3339("2024-05-14T11:30:00-07:00").unwrap(),
/// );
/// let now = DateTime::parse_from_rfc3339("2024-05-14T17:15:00Z").unwrap();
/// assert_eq!(session_state(Some(&session), &now), SessionRelativeTimeState::During);
/// assert_eq!(session_state(None, &now), SessionRelativeTimeState::Unknown);
/// ```
pub fn session_state<Tz: TimeZone>(
    session: Option<&Session>,
    now: &DateTime<Tz>,
) -> SessionRelativeTimeState {
    match session {
        None => SessionRelativeTimeState::Unknown,
        Some(s) if *now < s.start => SessionRelativeTimeState::Before,
        Some(s) if *now > s.end => SessionRelativeTimeState::After,
        Some(_) => SessionRelativeTimeState::During,
    }
}

/// [`session_state`] with "now" read from `clock`.
pub fn session_state_at(session: Option<&Session>, clock: &dyn Clock) -> SessionRelativeTimeState {
    session_state(session, &clock.now())
}
