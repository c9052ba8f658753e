use anyhow::Result;
use calgrid_core::CalendarWindow;
use calgrid_core::layout::{Ruler, build_ruler};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(window: &CalendarWindow) -> Result<()> {
    for line in ruler_lines(&build_ruler(window)) {
        println!("{line}");
    }
    Ok(())
}

/// Date markers interleaved with the hours that follow them.
fn ruler_lines(ruler: &Ruler) -> Vec<String> {
    let mut lines = Vec::new();
    let mut dates = ruler.date_markers.iter().peekable();

    for hour in &ruler.hour_markers {
        while let Some(date) = dates.next_if(|d| d.top_offset <= hour.top_offset) {
            lines.push(date.render());
        }
        lines.push(hour.render());
    }
    lines.extend(dates.map(|d| d.render()));

    lines.push(format!("{} {:.1}", "total height".dimmed(), ruler.total_height));
    lines
}
