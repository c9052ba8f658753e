//! Core types for calgrid.
//!
//! This crate holds everything that does not talk to the network:
//! - `Event` and the calendar window it is laid out in
//! - `layout`: ruler, per-event geometry and overlap columns
//! - `query`/`format`: classification and display helpers for events
//! - `provider`: the trait that event sources implement

pub mod clock;
pub mod config;
pub mod constants;
pub mod date_range;
pub mod error;
pub mod event;
pub mod format;
pub mod layout;
pub mod provider;
pub mod query;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_range::TimeRange;
pub use error::{CalGridError, CalGridResult};
pub use event::Event;
pub use provider::EventProvider;
pub use window::CalendarWindow;
