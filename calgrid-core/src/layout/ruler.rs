//! Hour and date markers for the calendar grid, derived from the window alone.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::Serialize;

use crate::constants::DATE_MARKER_HEIGHT;
use crate::format::{date_label, hour_label};
use crate::layout::boundaries::count_day_boundaries;
use crate::window::{CalendarWindow, hours_between};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourMarker {
    /// 12-hour clock label, e.g. "1 PM"
    pub label: String,
    pub top_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateMarker {
    /// e.g. "Thu, Dec 18"
    pub label: String,
    pub top_offset: f64,
    /// Gap between the previous marker and this one.
    pub margin_top: f64,
}

/// The static grid for a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ruler {
    pub total_height: f64,
    pub hour_markers: Vec<HourMarker>,
    pub date_markers: Vec<DateMarker>,
}

pub fn build_ruler(window: &CalendarWindow) -> Ruler {
    Ruler {
        total_height: calendar_height(window),
        hour_markers: hour_markers(window),
        date_markers: date_markers(window),
    }
}

/// Top padding, one hour-height per hour, a gutter per day rollover, bottom padding.
pub fn calendar_height(window: &CalendarWindow) -> f64 {
    let unit = window.hour_height();
    let hours = hours_between(&window.start(), &window.end());
    let day_boundaries = count_day_boundaries(window, &window.start(), &window.end());

    unit + hours * unit + f64::from(day_boundaries) * window.day_separation() + unit
}

/// Vertical position of `instant` on the grid when `crossed` midnights lie
/// between the window start and it.
pub(crate) fn offset_for(window: &CalendarWindow, instant: &DateTime<Utc>, crossed: u32) -> f64 {
    let unit = window.hour_height();
    unit + hours_between(&window.start(), instant) * unit
        + f64::from(crossed) * window.day_separation()
}

/// One marker per whole local hour in `[start, end]`.
pub fn hour_markers(window: &CalendarWindow) -> Vec<HourMarker> {
    let tz = window.timezone();
    let mut markers = Vec::new();

    let mut current = first_hour_at_or_after(window);
    let mut prev_day = window.local_date(&window.start());
    let mut crossed = 0;

    while current <= window.end() {
        let local = current.with_timezone(&tz);
        let day = local.date_naive();
        if day != prev_day {
            crossed += 1;
            prev_day = day;
        }

        markers.push(HourMarker {
            label: hour_label(local.hour()),
            top_offset: offset_for(window, &current, crossed),
        });

        current += Duration::hours(1);
    }

    markers
}

/// The window start rounded up to the next local hour boundary.
fn first_hour_at_or_after(window: &CalendarWindow) -> DateTime<Utc> {
    let start = window.start();
    let local = start.with_timezone(&window.timezone());

    let past_hour = Duration::minutes(i64::from(local.minute()))
        + Duration::seconds(i64::from(local.second()))
        + Duration::nanoseconds(i64::from(local.nanosecond()));

    if past_hour.is_zero() {
        start
    } else {
        start - past_hour + Duration::hours(1)
    }
}

/// One marker per local calendar day from the start's day through the end's day.
pub fn date_markers(window: &CalendarWindow) -> Vec<DateMarker> {
    let unit = window.hour_height();
    let last_day = window.local_date(&window.end());

    let mut markers = Vec::new();
    let mut day = window.local_date(&window.start());
    let mut day_index: u32 = 0;
    let mut prev_top = 0.0;

    while day <= last_day {
        let (top_offset, margin_top) = if day_index == 0 {
            (0.0, 0.0)
        } else {
            let midnight = window.local_midnight(day);
            let top = offset_for(window, &midnight, day_index) - unit;
            (top, top - prev_top - DATE_MARKER_HEIGHT)
        };

        markers.push(DateMarker {
            label: date_label(day),
            top_offset,
            margin_top,
        });

        prev_top = top_offset;
        day_index += 1;
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    markers
}
