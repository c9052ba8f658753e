use anyhow::Result;
use calgrid_core::layout::{EventLayout, build_layout};
use calgrid_core::{CalendarWindow, Event};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(window: &CalendarWindow, events: &[Event], columns_hint: usize) -> Result<()> {
    let layout = build_layout(window, events, columns_hint);

    println!(
        "{} {:.1} {} {}",
        "height".dimmed(),
        layout.ruler.total_height,
        "columns".dimmed(),
        layout.columns_hint
    );

    if layout.events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut sorted: Vec<&EventLayout> = layout.events.iter().collect();
    sorted.sort_by(|a, b| a.top_offset.total_cmp(&b.top_offset));
    for event_layout in sorted {
        println!("{}", event_layout.render());
    }

    Ok(())
}
