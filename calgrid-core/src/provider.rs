//! The event fetch capability.
//!
//! The layout engine never calls a provider; binaries fetch a snapshot of
//! events through this trait and hand the materialized list to the engine.

use std::future::Future;

use crate::date_range::TimeRange;
use crate::error::CalGridResult;
use crate::event::Event;

pub trait EventProvider: Send + Sync {
    /// Fetch at most `max_results` events overlapping `range`, ordered by start time.
    ///
    /// Failures surface as `CalGridError::Provider`.
    fn fetch_events(
        &self,
        range: &TimeRange,
        max_results: u32,
    ) -> impl Future<Output = CalGridResult<Vec<Event>>> + Send;
}
