use std::sync::Arc;

use calgrid_core::{CalendarWindow, EventProvider, TimeRange};

/// Shared application state.
///
/// The window is fixed for the lifetime of the process; events are fetched
/// fresh on every request.
pub struct AppState<P> {
    pub window: Arc<CalendarWindow>,
    pub provider: Arc<P>,
    pub max_results: u32,
    pub columns_hint: usize,
}

impl<P: EventProvider> AppState<P> {
    pub fn new(window: CalendarWindow, provider: P, max_results: u32, columns_hint: usize) -> Self {
        AppState {
            window: Arc::new(window),
            provider: Arc::new(provider),
            max_results,
            columns_hint,
        }
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::from_window(&self.window)
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        AppState {
            window: Arc::clone(&self.window),
            provider: Arc::clone(&self.provider),
            max_results: self.max_results,
            columns_hint: self.columns_hint,
        }
    }
}
