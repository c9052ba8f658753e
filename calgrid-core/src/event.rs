//! Provider-neutral event type.
//!
//! Providers convert their API responses into `Event`, and everything else in
//! calgrid (layout, queries, the HTTP boundary) works exclusively with it.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EVENT_COLOR;

/// A calendar event.
///
/// `start` and `end` keep the UTC offset the provider reported, which is what
/// "the event's own local day" means when grouping by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Hex color, e.g. `#4285f4`
    pub color: String,
    pub start: DateTime<FixedOffset>,
    /// May precede `start` for malformed provider data; layout clamps the duration to zero.
    pub end: DateTime<FixedOffset>,
    pub is_all_day: bool,
}

impl Event {
    /// Create a timed event with the default color and no description or location.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Event {
            id: id.into(),
            name: name.into(),
            description: None,
            location: None,
            color: DEFAULT_EVENT_COLOR.to_string(),
            start,
            end,
            is_all_day: false,
        }
    }

    /// Calendar day of the start, in the event's own offset.
    pub fn local_date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}
