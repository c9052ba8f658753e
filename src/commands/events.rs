use std::ptr;

use anyhow::Result;
use calgrid_core::format::format_event_time;
use calgrid_core::query::{current_event, group_events_by_date, is_event_past, next_event};
use calgrid_core::{CalendarWindow, Clock, Event};
use owo_colors::OwoColorize;

pub fn run(window: &CalendarWindow, events: &[Event], clock: &impl Clock) -> Result<()> {
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for line in event_lines(window, events, clock) {
        println!("{line}");
    }
    Ok(())
}

fn event_lines(window: &CalendarWindow, events: &[Event], clock: &impl Clock) -> Vec<String> {
    let tz = window.timezone();
    let current = current_event(events, clock);
    let next = next_event(events, clock);

    let mut lines = Vec::new();
    for (i, group) in group_events_by_date(events).iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(group.label.bold().to_string());

        // Walk the caller's slice so tags compare by identity, not by id
        for event in events.iter().filter(|e| e.local_date() == group.date) {
            let time = format!("{:>17}", format_event_time(event, &tz));
            let tag = if same_event(current, event) {
                format!(" {}", "now".green())
            } else if same_event(next, event) {
                format!(" {}", "next".yellow())
            } else {
                String::new()
            };

            let line = format!("  {} {}{}", time, event.name, tag);
            if is_event_past(event, clock) {
                lines.push(line.dimmed().to_string());
            } else {
                lines.push(line);
            }
        }
    }

    lines
}

fn same_event(candidate: Option<&Event>, event: &Event) -> bool {
    candidate.is_some_and(|c| ptr::eq(c, event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::FixedClock;
    use chrono::{DateTime, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn event(id: &str, start: &str, end: &str) -> Event {
        Event::new(
            id,
            id,
            DateTime::parse_from_rfc3339(start).unwrap(),
            DateTime::parse_from_rfc3339(end).unwrap(),
        )
    }

    #[test]
    fn test_marks_current_and_next() {
        let window = CalendarWindow::new(
            utc("2025-12-18T12:00:00-08:00"),
            utc("2025-12-21T19:00:00-08:00"),
            chrono_tz::America::Los_Angeles,
            5.0,
        )
        .unwrap();
        let events = vec![
            event("standup", "2025-12-19T09:00:00-08:00", "2025-12-19T09:15:00-08:00"),
            event("review", "2025-12-19T09:00:00-08:00", "2025-12-19T10:30:00-08:00"),
            event("lunch", "2025-12-19T11:30:00-08:00", "2025-12-19T13:00:00-08:00"),
        ];
        let clock = FixedClock(utc("2025-12-19T09:20:00-08:00"));

        let lines = event_lines(&window, &events, &clock);

        assert!(lines[0].contains("Fri, Dec 19"));
        assert!(lines[1].contains("standup"));
        assert!(!lines[1].contains("now"));
        assert!(lines[2].contains("9 - 10:30 AM") && lines[2].contains("now"));
        assert!(lines[3].contains("11:30 AM - 1 PM") && lines[3].contains("next"));
    }

    #[test]
    fn test_events_without_ids_are_tagged_individually() {
        let window = CalendarWindow::new(
            utc("2025-12-18T12:00:00-08:00"),
            utc("2025-12-21T19:00:00-08:00"),
            chrono_tz::America::Los_Angeles,
            5.0,
        )
        .unwrap();
        let mut events = vec![
            event("", "2025-12-19T09:00:00-08:00", "2025-12-19T10:00:00-08:00"),
            event("", "2025-12-19T11:00:00-08:00", "2025-12-19T12:00:00-08:00"),
            event("", "2025-12-19T14:00:00-08:00", "2025-12-19T15:00:00-08:00"),
        ];
        events[0].name = "Planning".to_string();
        events[1].name = "Interview".to_string();
        events[2].name = "Retro".to_string();
        let clock = FixedClock(utc("2025-12-19T09:30:00-08:00"));

        let lines = event_lines(&window, &events, &clock);

        assert!(lines[1].contains("Planning") && lines[1].contains("now"));
        assert!(lines[2].contains("Interview") && lines[2].contains("next"));
        assert!(!lines[3].contains("now") && !lines[3].contains("next"));
    }
}
