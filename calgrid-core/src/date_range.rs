//! Time range passed to event providers.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::window::CalendarWindow;

/// Inclusive-start, exclusive-end range of instants to fetch events for.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        TimeRange { from, to }
    }

    /// The range covered by a calendar window.
    pub fn from_window(window: &CalendarWindow) -> Self {
        TimeRange {
            from: window.start(),
            to: window.end(),
        }
    }

    /// `from` as an RFC3339 string (`2025-12-18T20:00:00Z`).
    pub fn from_rfc3339(&self) -> String {
        self.from.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// `to` as an RFC3339 string.
    pub fn to_rfc3339(&self) -> String {
        self.to.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
