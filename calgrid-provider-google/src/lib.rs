//! Google Calendar event source for calgrid.
//!
//! Reads a single calendar through the public Calendar API v3 using an API
//! key, expands recurring events server-side (`singleEvents=true`), and
//! converts the results into `calgrid_core::Event`.

mod from_google;
mod google;
mod types;

pub use from_google::{FromGoogle, color_for};
pub use google::GoogleCalendar;
pub use types::{GoogleEvent, GoogleEventList, GoogleEventTime};
