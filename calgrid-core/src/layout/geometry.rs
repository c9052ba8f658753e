//! Vertical placement of a single event inside the window.

use serde::Serialize;

use crate::event::Event;
use crate::layout::boundaries::count_day_boundaries;
use crate::layout::ruler::offset_for;
use crate::window::{CalendarWindow, hours_between};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGeometry {
    pub top_offset: f64,
    pub height: f64,
}

pub fn event_geometry(window: &CalendarWindow, event: &Event) -> EventGeometry {
    EventGeometry {
        top_offset: event_offset(window, event),
        height: event_height(window, event),
    }
}

/// Duration in layout units plus a gutter for each midnight the event spans.
///
/// All-day events live in their own lane and have no height here.
pub fn event_height(window: &CalendarWindow, event: &Event) -> f64 {
    if event.is_all_day {
        return 0.0;
    }

    let duration_hours = hours_between(&event.start, &event.end).max(0.0);
    let day_boundaries = count_day_boundaries(window, &event.start, &event.end);

    duration_hours * window.hour_height() + f64::from(day_boundaries) * window.day_separation()
}

/// Distance from the top of the grid; events starting at or before the
/// window start are clipped to 0.
pub fn event_offset(window: &CalendarWindow, event: &Event) -> f64 {
    if event.is_all_day {
        return 0.0;
    }

    let start = event.start.to_utc();
    if start <= window.start() {
        return 0.0;
    }

    let crossed = count_day_boundaries(window, &window.start(), &start);
    offset_for(window, &start, crossed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn window() -> CalendarWindow {
        CalendarWindow::new(
            utc("2025-12-18T12:00:00-08:00"),
            utc("2025-12-21T19:00:00-08:00"),
            chrono_tz::America::Los_Angeles,
            5.0,
        )
        .unwrap()
    }

    fn event(start: &str, end: &str) -> Event {
        Event::new(
            "e1",
            "Event",
            DateTime::parse_from_rfc3339(start).unwrap(),
            DateTime::parse_from_rfc3339(end).unwrap(),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_one_hour_event_height() {
        let e = event("2025-12-19T09:00:00-08:00", "2025-12-19T10:00:00-08:00");
        assert_close(event_height(&window(), &e), 5.0);
    }

    #[test]
    fn test_overnight_event_includes_gutter() {
        let e = event("2025-12-19T22:00:00-08:00", "2025-12-20T02:00:00-08:00");
        assert_close(event_height(&window(), &e), 4.0 * 5.0 + 6.0);
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        let e = event("2025-12-19T10:00:00-08:00", "2025-12-19T09:00:00-08:00");
        assert_close(event_height(&window(), &e), 0.0);
    }

    #[test]
    fn test_zero_length_event_has_no_height() {
        let w = window();
        let e = event("2025-12-19T09:00:00-08:00", "2025-12-19T09:00:00-08:00");
        assert_close(event_height(&w, &e), 0.0);
        assert_close(event_offset(&w, &e), 5.0 + 21.0 * 5.0 + 6.0);

        let at_midnight = event("2025-12-20T00:00:00-08:00", "2025-12-20T00:00:00-08:00");
        assert_close(event_height(&w, &at_midnight), 0.0);
    }

    #[test]
    fn test_offset_same_day_as_start() {
        let e = event("2025-12-18T15:00:00-08:00", "2025-12-18T16:00:00-08:00");
        assert_close(event_offset(&window(), &e), 5.0 + 3.0 * 5.0);
    }

    #[test]
    fn test_offset_next_day_adds_gutter() {
        // 21 hours after start, one midnight crossed
        let e = event("2025-12-19T09:00:00-08:00", "2025-12-19T10:00:00-08:00");
        assert_close(event_offset(&window(), &e), 5.0 + 21.0 * 5.0 + 6.0);
    }

    #[test]
    fn test_offset_lines_up_with_hour_marker() {
        let w = window();
        let markers = crate::layout::ruler::hour_markers(&w);
        let nine_am = markers.iter().find(|m| m.label == "9 AM").unwrap();

        let e = event("2025-12-19T09:00:00-08:00", "2025-12-19T10:00:00-08:00");
        assert_close(event_offset(&w, &e), nine_am.top_offset);
    }

    #[test]
    fn test_event_before_window_is_clipped() {
        let e = event("2025-12-17T09:00:00-08:00", "2025-12-17T10:00:00-08:00");
        assert_close(event_offset(&window(), &e), 0.0);
    }

    #[test]
    fn test_event_at_window_start_is_clipped() {
        let e = event("2025-12-18T12:00:00-08:00", "2025-12-18T13:00:00-08:00");
        assert_close(event_offset(&window(), &e), 0.0);
    }

    #[test]
    fn test_all_day_event_has_no_geometry() {
        let mut e = event("2025-12-19T00:00:00-08:00", "2025-12-20T00:00:00-08:00");
        e.is_all_day = true;
        assert_eq!(
            event_geometry(&window(), &e),
            EventGeometry {
                top_offset: 0.0,
                height: 0.0
            }
        );
    }

    #[test]
    fn test_geometry_is_idempotent() {
        let w = window();
        let e = event("2025-12-20T13:15:00-08:00", "2025-12-20T14:45:00-08:00");
        let first = event_geometry(&w, &e);
        let second = event_geometry(&w, &e);
        assert_eq!(first.top_offset.to_bits(), second.top_offset.to_bits());
        assert_eq!(first.height.to_bits(), second.height.to_bits());
    }
}
