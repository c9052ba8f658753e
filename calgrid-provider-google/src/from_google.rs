use calgrid_core::constants::DEFAULT_EVENT_COLOR;
use calgrid_core::window::local_midnight;
use calgrid_core::{CalGridError, CalGridResult, Event};
use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;

use crate::types::{GoogleEvent, GoogleEventTime};

pub trait FromGoogle {
    /// Convert an API event; all-day dates are anchored to local midnight in `tz`.
    fn from_google(event: GoogleEvent, tz: &Tz) -> CalGridResult<Self>
    where
        Self: Sized;
}

impl FromGoogle for Event {
    fn from_google(event: GoogleEvent, tz: &Tz) -> CalGridResult<Self> {
        let start = event
            .start
            .as_ref()
            .ok_or_else(|| missing_time(&event, "start"))?;
        let end = event
            .end
            .as_ref()
            .ok_or_else(|| missing_time(&event, "end"))?;

        // Google marks all-day events by leaving out dateTime
        let is_all_day = start.date_time.is_none();

        let start = resolve_time(start, tz).ok_or_else(|| missing_time(&event, "start"))?;
        let end = resolve_time(end, tz).ok_or_else(|| missing_time(&event, "end"))?;

        Ok(Event {
            id: event.id.unwrap_or_default(),
            name: event.summary.unwrap_or_default(),
            description: event.description.filter(|s| !s.is_empty()),
            location: event.location.filter(|s| !s.is_empty()),
            color: color_for(event.color_id.as_deref()).to_string(),
            start,
            end,
            is_all_day,
        })
    }
}

/// Google's event palette; unknown or missing ids get the default blue.
pub fn color_for(color_id: Option<&str>) -> &'static str {
    match color_id {
        Some("1") => "#7986cb",
        Some("2") => "#33b679",
        Some("3") => "#8e24aa",
        Some("4") => "#e67c73",
        Some("5") => "#f6bf26",
        Some("6") => "#f4511e",
        Some("7") => "#039be5",
        Some("8") => "#616161",
        Some("9") => "#3f51b5",
        Some("10") => "#0b8043",
        Some("11") => "#d50000",
        _ => DEFAULT_EVENT_COLOR,
    }
}

fn resolve_time(time: &GoogleEventTime, tz: &Tz) -> Option<DateTime<FixedOffset>> {
    if let Some(dt) = time.date_time {
        return Some(dt);
    }
    time.date
        .map(|date| local_midnight(tz, date).with_timezone(tz).fixed_offset())
}

fn missing_time(event: &GoogleEvent, which: &str) -> CalGridError {
    CalGridError::Provider(format!(
        "Event '{}' has no {} time",
        event.id.as_deref().unwrap_or("<no id>"),
        which
    ))
}
