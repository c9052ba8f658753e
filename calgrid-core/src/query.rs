//! Classification, grouping and lookup over event lists.
//!
//! Anything that depends on "now" takes a `Clock`.

use chrono::{NaiveDate, TimeDelta};

use crate::clock::Clock;
use crate::constants::{MS_PER_HOUR, MS_PER_MINUTE};
use crate::event::Event;
use crate::format::date_label;

/// Events sharing a start day, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub label: String,
    pub events: Vec<Event>,
}

/// `now` lies in `[start, end]`, both ends inclusive.
pub fn is_event_now(event: &Event, clock: &impl Clock) -> bool {
    let now = clock.now();
    event.start <= now && now <= event.end
}

pub fn is_event_upcoming(event: &Event, clock: &impl Clock) -> bool {
    event.start > clock.now()
}

pub fn is_event_past(event: &Event, clock: &impl Clock) -> bool {
    event.end < clock.now()
}

/// `end - start`; negative for inverted events.
pub fn event_duration(event: &Event) -> TimeDelta {
    event.end.signed_duration_since(event.start)
}

pub fn event_duration_minutes(event: &Event) -> i64 {
    round_half_up(event_duration(event).num_milliseconds() as f64 / MS_PER_MINUTE)
}

pub fn event_duration_hours(event: &Event) -> i64 {
    round_half_up(event_duration(event).num_milliseconds() as f64 / MS_PER_HOUR)
}

// Halves round toward positive infinity, -1.5 -> -1
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Group by each event's own local start day.
pub fn group_events_by_date(events: &[Event]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();

    for event in events {
        let date = event.local_date();
        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.events.push(event.clone()),
            None => groups.push(DateGroup {
                date,
                label: date_label(date),
                events: vec![event.clone()],
            }),
        }
    }

    groups
}

pub fn events_for_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.local_date() == date).collect()
}

/// First event in input order that has not started yet.
pub fn next_event<'a>(events: &'a [Event], clock: &impl Clock) -> Option<&'a Event> {
    events.iter().find(|e| is_event_upcoming(e, clock))
}

/// First event in input order that is in progress.
pub fn current_event<'a>(events: &'a [Event], clock: &impl Clock) -> Option<&'a Event> {
    events.iter().find(|e| is_event_now(e, clock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{DateTime, Utc};

    fn event(id: &str, start: &str, end: &str) -> Event {
        Event::new(
            id,
            id,
            DateTime::parse_from_rfc3339(start).unwrap(),
            DateTime::parse_from_rfc3339(end).unwrap(),
        )
    }

    fn clock_at(s: &str) -> FixedClock {
        FixedClock(DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc))
    }

    fn sample() -> Vec<Event> {
        vec![
            event("breakfast", "2025-12-19T08:00:00-08:00", "2025-12-19T09:00:00-08:00"),
            event("standup", "2025-12-19T09:00:00-08:00", "2025-12-19T09:15:00-08:00"),
            event("lunch", "2025-12-19T12:00:00-08:00", "2025-12-19T13:00:00-08:00"),
            event("dinner", "2025-12-20T18:00:00-08:00", "2025-12-20T20:00:00-08:00"),
        ]
    }

    #[test]
    fn test_now_is_inclusive_at_both_ends() {
        let e = event("e", "2025-12-19T09:00:00-08:00", "2025-12-19T10:00:00-08:00");
        assert!(is_event_now(&e, &clock_at("2025-12-19T09:00:00-08:00")));
        assert!(is_event_now(&e, &clock_at("2025-12-19T10:00:00-08:00")));
        assert!(!is_event_now(&e, &clock_at("2025-12-19T10:00:01-08:00")));
    }

    #[test]
    fn test_upcoming_and_past() {
        let e = event("e", "2025-12-19T09:00:00-08:00", "2025-12-19T10:00:00-08:00");

        let before = clock_at("2025-12-19T08:00:00-08:00");
        assert!(is_event_upcoming(&e, &before));
        assert!(!is_event_past(&e, &before));

        let after = clock_at("2025-12-19T11:00:00-08:00");
        assert!(!is_event_upcoming(&e, &after));
        assert!(is_event_past(&e, &after));

        let at_start = clock_at("2025-12-19T09:00:00-08:00");
        assert!(!is_event_upcoming(&e, &at_start));
        assert!(!is_event_past(&e, &at_start));
    }

    #[test]
    fn test_durations_round() {
        let e = event("e", "2025-12-19T09:00:00-08:00", "2025-12-19T10:30:00-08:00");
        assert_eq!(event_duration(&e), TimeDelta::minutes(90));
        assert_eq!(event_duration_minutes(&e), 90);
        assert_eq!(event_duration_hours(&e), 2);

        let short = event("s", "2025-12-19T09:00:00-08:00", "2025-12-19T09:29:00-08:00");
        assert_eq!(event_duration_hours(&short), 0);

        let seconds = event("t", "2025-12-19T09:00:00-08:00", "2025-12-19T09:00:29-08:00");
        assert_eq!(event_duration_minutes(&seconds), 0);
    }

    #[test]
    fn test_inverted_duration_is_negative() {
        let e = event("e", "2025-12-19T10:00:00-08:00", "2025-12-19T09:00:00-08:00");
        assert_eq!(event_duration_minutes(&e), -60);
    }

    #[test]
    fn test_group_by_date_keeps_first_seen_order() {
        let mut events = sample();
        events.insert(
            0,
            event("late", "2025-12-20T07:00:00-08:00", "2025-12-20T08:00:00-08:00"),
        );

        let groups = group_events_by_date(&events);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Sat, Dec 20", "Fri, Dec 19"]);

        let ids: Vec<&str> = groups[0].events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "dinner"]);
        assert_eq!(groups[1].events.len(), 3);
    }

    #[test]
    fn test_group_uses_events_own_offset() {
        // Same instant, different reported offsets land on different days
        let events = vec![
            event("tokyo", "2025-12-20T08:00:00+09:00", "2025-12-20T09:00:00+09:00"),
            event("la", "2025-12-19T15:00:00-08:00", "2025-12-19T16:00:00-08:00"),
        ];
        assert_eq!(group_events_by_date(&events).len(), 2);
    }

    #[test]
    fn test_events_for_date() {
        let events = sample();
        let friday = NaiveDate::from_ymd_opt(2025, 12, 19).unwrap();
        assert_eq!(events_for_date(&events, friday).len(), 3);

        let sunday = NaiveDate::from_ymd_opt(2025, 12, 21).unwrap();
        assert!(events_for_date(&events, sunday).is_empty());
    }

    #[test]
    fn test_next_and_current_event() {
        let events = sample();
        let clock = clock_at("2025-12-19T09:00:00-08:00");

        // breakfast ends exactly now and is found first
        assert_eq!(current_event(&events, &clock).unwrap().id, "breakfast");
        assert_eq!(next_event(&events, &clock).unwrap().id, "lunch");
    }

    #[test]
    fn test_lookups_on_empty_list() {
        let clock = clock_at("2025-12-19T09:00:00-08:00");
        assert!(next_event(&[], &clock).is_none());
        assert!(current_event(&[], &clock).is_none());
        assert!(group_events_by_date(&[]).is_empty());
    }
}
