pub mod events;
pub mod layout;
pub mod ruler;

use anyhow::{Context, Result};
use calgrid_core::config::CalGridConfig;
use calgrid_core::{CalendarWindow, Event, EventProvider, TimeRange};
use calgrid_provider_google::GoogleCalendar;

/// Fetch the configured calendar's events for the window.
pub async fn fetch_window_events(
    config: &CalGridConfig,
    window: &CalendarWindow,
) -> Result<Vec<Event>> {
    let provider = GoogleCalendar::from_config(&config.google, window.timezone())?;

    provider
        .fetch_events(&TimeRange::from_window(window), config.google.max_results)
        .await
        .with_context(|| format!("Failed to fetch events from {}", provider.calendar_id()))
}
