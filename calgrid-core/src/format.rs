//! Display strings for markers and events.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::event::Event;

/// 12-hour label for an hour of the day: `0` -> "12 AM", `13` -> "1 PM".
pub fn hour_label(hour: u32) -> String {
    let (display, period) = twelve_hour(hour);
    format!("{display} {period}")
}

/// e.g. "Thu, Dec 18"
pub fn date_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Time range of an event in `tz`, e.g. "9 - 10:30 AM" or "11:30 AM - 1 PM".
///
/// The period is printed once when both ends share it. Minutes are shown
/// only when non-zero.
pub fn format_event_time(event: &Event, tz: &Tz) -> String {
    if event.is_all_day {
        return "All day".to_string();
    }

    let (start, start_period) = clock_time(&event.start.with_timezone(tz));
    let (end, end_period) = clock_time(&event.end.with_timezone(tz));

    if start_period == end_period {
        format!("{start} - {end} {end_period}")
    } else {
        format!("{start} {start_period} - {end} {end_period}")
    }
}

/// Start day of an event in its own offset, e.g. "Fri, Dec 19".
pub fn format_event_date(event: &Event) -> String {
    date_label(event.local_date())
}

fn twelve_hour(hour: u32) -> (u32, &'static str) {
    let period = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    (display, period)
}

fn clock_time<T: TimeZone>(time: &DateTime<T>) -> (String, &'static str) {
    let (hour, period) = twelve_hour(time.hour());
    let text = match time.minute() {
        0 => hour.to_string(),
        minute => format!("{hour}:{minute:02}"),
    };
    (text, period)
}
