//! The fixed calendar window every layout is computed against.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::{DAY_SEPARATION_FACTOR, MS_PER_HOUR};
use crate::error::{CalGridError, CalGridResult};

/// Start/end instants, display timezone and the height of one hour.
///
/// Immutable once built; `start < end` is guaranteed by `new`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    timezone: Tz,
    hour_height: f64,
}

impl CalendarWindow {
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        timezone: Tz,
        hour_height: f64,
    ) -> CalGridResult<Self> {
        if start >= end {
            return Err(CalGridError::InvalidWindow(format!(
                "start ({}) must be before end ({})",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        if !hour_height.is_finite() || hour_height <= 0.0 {
            return Err(CalGridError::InvalidWindow(format!(
                "hour height must be a positive number, got {hour_height}"
            )));
        }

        Ok(CalendarWindow {
            start,
            end,
            timezone,
            hour_height,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Layout units per hour.
    pub fn hour_height(&self) -> f64 {
        self.hour_height
    }

    /// Gutter added for every local midnight crossed.
    pub fn day_separation(&self) -> f64 {
        DAY_SEPARATION_FACTOR * self.hour_height
    }

    /// Calendar day of `instant` in the window's timezone.
    pub fn local_date<T: TimeZone>(&self, instant: &DateTime<T>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    /// First instant of `date` in the window's timezone.
    pub fn local_midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        local_midnight(&self.timezone, date)
    }
}

/// Fractional hours from `from` to `to` (negative when `to` is earlier).
pub fn hours_between<A: TimeZone, B: TimeZone>(from: &DateTime<A>, to: &DateTime<B>) -> f64 {
    let ms = to.timestamp_millis() - from.timestamp_millis();
    ms as f64 / MS_PER_HOUR
}

/// First instant of `date` in `tz`.
///
/// When a DST transition repeats midnight the earlier instant wins; when it
/// skips midnight the day starts where the clock lands after the jump.
pub fn local_midnight(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Gap: read the naive midnight with the offset in effect before the jump.
            let before = tz
                .from_local_datetime(&(naive - TimeDelta::hours(1)))
                .earliest()
                .map(|dt| dt.offset().fix())
                .unwrap_or_else(|| tz.offset_from_utc_datetime(&naive).fix());
            Utc.from_utc_datetime(&(naive - before))
        }
    }
}
