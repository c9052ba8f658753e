//! calgrid configuration.
//!
//! Read from `~/.config/calgrid/config.toml` (platform config dir). Every
//! section is optional; a missing file means the built-in window and server
//! defaults. Google credentials can also come from the environment.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::constants::{
    DEFAULT_COLUMNS, DEFAULT_MAX_RESULTS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TIMEZONE, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START, HOUR_HEIGHT,
};
use crate::error::{CalGridError, CalGridResult};
use crate::window::CalendarWindow;

pub const API_KEY_ENV: &str = "CALGRID_GOOGLE_API_KEY";
pub const CALENDAR_ID_ENV: &str = "CALGRID_GOOGLE_CALENDAR_ID";

static DEFAULT_GOOGLE_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalGridConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub google: GoogleConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// `[window]`: the fixed range the calendar shows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// RFC3339, e.g. "2025-12-18T12:00:00-08:00"
    pub start: String,
    pub end: String,
    /// IANA zone id used for midnights and labels
    pub timezone: String,
    pub hour_height: f64,
    pub columns: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            start: DEFAULT_WINDOW_START.to_string(),
            end: DEFAULT_WINDOW_END.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            hour_height: HOUR_HEIGHT,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// `[google]`: Google Calendar API access.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoogleConfig {
    pub api_key: Option<String>,
    pub calendar_id: Option<String>,
    pub max_results: u32,
    pub base_url: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        GoogleConfig {
            api_key: None,
            calendar_id: None,
            max_results: DEFAULT_MAX_RESULTS,
            base_url: DEFAULT_GOOGLE_BASE_URL.to_string(),
        }
    }
}

/// `[server]`: where calgrid-server listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl CalGridConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path, then apply environment overrides.
    pub fn load() -> CalGridResult<Self> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> CalGridResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            CalGridError::Config(msg) => {
                CalGridError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml_str(contents: &str) -> CalGridResult<Self> {
        toml::from_str(contents).map_err(|e| CalGridError::Config(e.to_string()))
    }

    /// Non-empty values from `lookup` win over the file.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.google.api_key = Some(key);
        }
        if let Some(id) = lookup(CALENDAR_ID_ENV).filter(|v| !v.is_empty()) {
            self.google.calendar_id = Some(id);
        }
    }
}

impl WindowConfig {
    /// Parse and validate into a `CalendarWindow`.
    pub fn to_window(&self) -> CalGridResult<CalendarWindow> {
        let start = parse_instant("start", &self.start)?;
        let end = parse_instant("end", &self.end)?;
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|_| CalGridError::UnknownTimezone(self.timezone.clone()))?;

        CalendarWindow::new(start, end, timezone, self.hour_height)
    }
}

impl GoogleConfig {
    /// `(api_key, calendar_id)`, both required to fetch events.
    pub fn credentials(&self) -> CalGridResult<(&str, &str)> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CalGridError::Config(format!(
                "Missing Google API key. Set [google] api_key or {API_KEY_ENV}"
            ))
        })?;
        let calendar_id = self.calendar_id.as_deref().ok_or_else(|| {
            CalGridError::Config(format!(
                "Missing Google calendar id. Set [google] calendar_id or {CALENDAR_ID_ENV}"
            ))
        })?;
        Ok((api_key, calendar_id))
    }
}

fn parse_instant(field: &str, value: &str) -> CalGridResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            CalGridError::Config(format!(
                "Invalid window {field} '{value}': {e}. Expected RFC3339"
            ))
        })
}
