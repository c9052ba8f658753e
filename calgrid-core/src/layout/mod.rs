//! Layout engine: turns a calendar window and a snapshot of events into
//! everything a grid renderer needs.
//!
//! - `ruler`: hour/date markers and total height (window only)
//! - `geometry`: per-event vertical offset and height
//! - `columns`: per-event column inside its overlap cluster

mod boundaries;
pub mod columns;
pub mod geometry;
pub mod ruler;

pub use boundaries::count_day_boundaries;
pub use columns::{ColumnPlacement, assign_columns, events_overlap};
pub use geometry::{EventGeometry, event_geometry, event_height, event_offset};
pub use ruler::{
    DateMarker, HourMarker, Ruler, build_ruler, calendar_height, date_markers, hour_markers,
};

use serde::Serialize;
use tracing::debug;

use crate::event::Event;
use crate::window::CalendarWindow;

/// Full placement of one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLayout {
    pub event: Event,
    pub top_offset: f64,
    pub height: f64,
    pub column: usize,
    pub total_columns: usize,
}

/// Ruler plus laid-out events for one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarLayout {
    pub ruler: Ruler,
    pub events: Vec<EventLayout>,
    /// Number of grid columns the UI is designed around
    pub columns_hint: usize,
}

/// Combine vertical geometry and column placement, in input order.
///
/// All-day events take no part in column assignment; they sit alone in
/// column 0 of their own lane.
pub fn layout_events(window: &CalendarWindow, events: &[Event]) -> Vec<EventLayout> {
    let timed: Vec<usize> = (0..events.len())
        .filter(|&i| !events[i].is_all_day)
        .collect();
    let timed_events: Vec<&Event> = timed.iter().map(|&i| &events[i]).collect();
    let timed_columns = assign_columns(&timed_events);

    let mut placements = vec![
        ColumnPlacement {
            column: 0,
            total_columns: 1,
        };
        events.len()
    ];
    for (&i, placement) in timed.iter().zip(timed_columns) {
        placements[i] = placement;
    }

    debug!(
        events = events.len(),
        timed = timed.len(),
        "laid out calendar events"
    );

    events
        .iter()
        .zip(placements)
        .map(|(event, placement)| {
            let geometry = event_geometry(window, event);
            EventLayout {
                event: event.clone(),
                top_offset: geometry.top_offset,
                height: geometry.height,
                column: placement.column,
                total_columns: placement.total_columns,
            }
        })
        .collect()
}

pub fn build_layout(
    window: &CalendarWindow,
    events: &[Event],
    columns_hint: usize,
) -> CalendarLayout {
    CalendarLayout {
        ruler: build_ruler(window),
        events: layout_events(window, events),
        columns_hint,
    }
}
