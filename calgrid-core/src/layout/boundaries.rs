//! Local-midnight counting shared by the ruler and event geometry.

use chrono::{DateTime, TimeZone};

use crate::window::CalendarWindow;

/// Number of local midnights `m` (window timezone) with `from < m <= to`.
///
/// Zero when `to <= from`. Midnights are stepped as calendar days, so a
/// 23- or 25-hour DST day still counts as one boundary.
pub fn count_day_boundaries<A: TimeZone, B: TimeZone>(
    window: &CalendarWindow,
    from: &DateTime<A>,
    to: &DateTime<B>,
) -> u32 {
    if to.timestamp_millis() <= from.timestamp_millis() {
        return 0;
    }

    let mut count = 0;
    let mut date = window.local_date(from);
    while let Some(next) = date.succ_opt() {
        if window.local_midnight(next).timestamp_millis() > to.timestamp_millis() {
            break;
        }
        count += 1;
        date = next;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn window() -> CalendarWindow {
        CalendarWindow::new(
            utc("2025-12-18T12:00:00-08:00"),
            utc("2025-12-21T19:00:00-08:00"),
            chrono_tz::America::Los_Angeles,
            5.0,
        )
        .unwrap()
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_same_day_has_no_boundaries() {
        let count = count_day_boundaries(
            &window(),
            &utc("2025-12-19T09:00:00-08:00"),
            &utc("2025-12-19T23:59:00-08:00"),
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_midnight_itself_counts_as_crossed() {
        let count = count_day_boundaries(
            &window(),
            &utc("2025-12-19T22:00:00-08:00"),
            &utc("2025-12-20T00:00:00-08:00"),
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_starting_at_midnight_does_not_count_it() {
        let count = count_day_boundaries(
            &window(),
            &utc("2025-12-19T00:00:00-08:00"),
            &utc("2025-12-19T10:00:00-08:00"),
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_whole_window_spans_three_rollovers() {
        let w = window();
        assert_eq!(count_day_boundaries(&w, &w.start(), &w.end()), 3);
    }

    #[test]
    fn test_reversed_range_is_zero() {
        let count = count_day_boundaries(
            &window(),
            &utc("2025-12-20T10:00:00-08:00"),
            &utc("2025-12-19T10:00:00-08:00"),
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_uses_window_timezone_not_utc() {
        // 15:00 -> 17:00 Pacific crosses UTC midnight but not local midnight
        let count = count_day_boundaries(
            &window(),
            &utc("2025-12-19T15:00:00-08:00"),
            &utc("2025-12-19T17:00:00-08:00"),
        );
        assert_eq!(count, 0);
    }
}
