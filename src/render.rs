//! Colored terminal rendering for layout types.

use calgrid_core::layout::{DateMarker, EventLayout, HourMarker};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DateMarker {
    fn render(&self) -> String {
        format!(
            "{:>8.1}  {} {}",
            self.top_offset,
            self.label.bold(),
            format!("(+{:.1})", self.margin_top).dimmed()
        )
    }
}

impl Render for HourMarker {
    fn render(&self) -> String {
        format!("{:>8.1}    {}", self.top_offset, self.label.dimmed())
    }
}

impl Render for EventLayout {
    fn render(&self) -> String {
        let lane = if self.event.is_all_day {
            "all-day".to_string()
        } else {
            format!("col {}/{}", self.column + 1, self.total_columns)
        };

        format!(
            "{:>8.1} {:>6.1}  {:<9} {}",
            self.top_offset,
            self.height,
            lane.cyan(),
            self.event.name
        )
    }
}
