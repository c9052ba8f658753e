//! Calendar endpoints

use anyhow::Context;
use axum::{Json, Router, extract::State, routing::get};
use calgrid_core::layout::{CalendarLayout, build_layout};
use calgrid_core::{Event, EventProvider};
use serde::Serialize;
use tracing::info;

use crate::routes::AppError;
use crate::state::AppState;

const FETCH_ERROR: &str = "Failed to fetch calendar events";

pub fn router<P: EventProvider + 'static>() -> Router<AppState<P>> {
    Router::new()
        .route("/api/calendar", get(list_events::<P>))
        .route("/api/calendar/layout", get(calendar_layout::<P>))
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

async fn fetch_window_events<P: EventProvider>(state: &AppState<P>) -> anyhow::Result<Vec<Event>> {
    let events = state
        .provider
        .fetch_events(&state.time_range(), state.max_results)
        .await
        .context(FETCH_ERROR)?;

    info!(count = events.len(), "fetched calendar events");
    Ok(events)
}

/// GET /api/calendar - Events in the configured window
async fn list_events<P: EventProvider>(
    State(state): State<AppState<P>>,
) -> Result<Json<EventsResponse>, AppError> {
    let events = fetch_window_events(&state).await?;
    Ok(Json(EventsResponse { events }))
}

/// GET /api/calendar/layout - Ruler plus positioned events
async fn calendar_layout<P: EventProvider>(
    State(state): State<AppState<P>>,
) -> Result<Json<CalendarLayout>, AppError> {
    let events = fetch_window_events(&state).await?;
    Ok(Json(build_layout(&state.window, &events, state.columns_hint)))
}
