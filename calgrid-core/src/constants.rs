//! Layout and window defaults.

/// Height of one hour of calendar time, in layout units (rem).
pub const HOUR_HEIGHT: f64 = 5.0;

/// Number of columns the grid is designed around.
pub const DEFAULT_COLUMNS: usize = 3;

/// Extra gutter injected at each local midnight, as a multiple of the hour height.
pub const DAY_SEPARATION_FACTOR: f64 = 1.2;

/// Visual height of a date marker, in layout units.
pub const DATE_MARKER_HEIGHT: f64 = 2.5;

pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";
pub const DEFAULT_WINDOW_START: &str = "2025-12-18T12:00:00-08:00";
pub const DEFAULT_WINDOW_END: &str = "2025-12-21T19:00:00-08:00";

pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Color used when the provider gives none (or an unknown one).
pub const DEFAULT_EVENT_COLOR: &str = "#4285f4";

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 4096;

pub const MS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;
pub const MS_PER_MINUTE: f64 = 1000.0 * 60.0;
