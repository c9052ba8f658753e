use std::future::Future;

use calgrid_core::config::GoogleConfig;
use calgrid_core::{CalGridError, CalGridResult, Event, EventProvider, TimeRange};
use chrono_tz::Tz;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::from_google::FromGoogle;
use crate::types::{GoogleErrorResponse, GoogleEventList};

/// A single Google calendar read with an API key.
#[derive(Debug, Clone)]
pub struct GoogleCalendar {
    client: Client,
    api_key: String,
    calendar_id: String,
    base_url: String,
    timezone: Tz,
}

impl GoogleCalendar {
    /// `timezone` anchors all-day events, normally the window's timezone.
    pub fn new(
        api_key: impl Into<String>,
        calendar_id: impl Into<String>,
        base_url: impl Into<String>,
        timezone: Tz,
    ) -> Self {
        GoogleCalendar {
            client: Client::new(),
            api_key: api_key.into(),
            calendar_id: calendar_id.into(),
            base_url: base_url.into(),
            timezone,
        }
    }

    pub fn from_config(config: &GoogleConfig, timezone: Tz) -> CalGridResult<Self> {
        let (api_key, calendar_id) = config.credentials()?;
        Ok(Self::new(api_key, calendar_id, &config.base_url, timezone))
    }

    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    /// `{base_url}/calendars/{calendar_id}/events`, with the id percent-encoded.
    fn events_url(&self) -> CalGridResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| CalGridError::Config(format!("Invalid Google base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| CalGridError::Config("Google base URL cannot have a path".into()))?
            .pop_if_empty()
            .extend(["calendars", self.calendar_id.as_str(), "events"]);

        Ok(url)
    }

    async fn list_events(&self, range: &TimeRange, max_results: u32) -> CalGridResult<Vec<Event>> {
        let url = self.events_url()?;

        debug!(
            calendar_id = %self.calendar_id,
            time_min = %range.from_rfc3339(),
            time_max = %range.to_rfc3339(),
            max_results,
            "fetching events"
        );

        let response = self
            .client
            .get(url)
            .query(&[
                ("key", self.api_key.clone()),
                ("timeMin", range.from_rfc3339()),
                ("timeMax", range.to_rfc3339()),
                ("maxResults", max_results.to_string()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .await
            .map_err(|e| CalGridError::Provider(format!("Failed to reach Google Calendar: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleErrorResponse>(&body)
                .map(|r| format!("{} {}", r.error.code, r.error.message))
                .unwrap_or(body);
            return Err(CalGridError::Provider(format!(
                "Google Calendar returned {status}: {message}"
            )));
        }

        let list: GoogleEventList = response
            .json()
            .await
            .map_err(|e| CalGridError::Provider(format!("Failed to parse events response: {e}")))?;

        let mut events = Vec::with_capacity(list.items.len());
        for item in list.items {
            match Event::from_google(item, &self.timezone) {
                Ok(event) => events.push(event),
                Err(e) => warn!(error = %e, "skipping event"),
            }
        }

        debug!(count = events.len(), "fetched events");
        Ok(events)
    }
}

impl EventProvider for GoogleCalendar {
    fn fetch_events(
        &self,
        range: &TimeRange,
        max_results: u32,
    ) -> impl Future<Output = CalGridResult<Vec<Event>>> + Send {
        self.list_events(range, max_results)
    }
}
