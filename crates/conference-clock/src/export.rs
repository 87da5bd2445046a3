//! Hand-off of a session to calendars and share sheets.

use serde::Serialize;

use crate::session::Session;

/// What a calendar insert needs to know about a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub location: Option<String>,
    pub description: String,
    /// Milliseconds since the Unix epoch.
    pub begin_time: i64,
    pub end_time: i64,
}

impl CalendarEvent {
    pub fn from_session(session: &Session) -> Self {
        Self {
            title: session.title.clone(),
            location: session.room.as_ref().map(|r| r.name.clone()),
            description: session.description.clone(),
            begin_time: session.start.timestamp_millis(),
            end_time: session.end.timestamp_millis(),
        }
    }
}

/// One-line text for sharing a session.
pub fn share_text(session: &Session) -> String {
    match &session.url {
        Some(url) => format!("Check out \"{}\" {}", session.title, url),
        None => format!("Check out \"{}\"", session.title),
    }
}
