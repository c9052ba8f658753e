mod routes;
mod state;

use anyhow::{Context, Result};
use calgrid_core::config::CalGridConfig;
use calgrid_provider_google::GoogleCalendar;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CalGridConfig::load().context("Failed to load calgrid config")?;
    let window = config
        .window
        .to_window()
        .context("Invalid [window] configuration")?;
    let provider = GoogleCalendar::from_config(&config.google, window.timezone())
        .context("Invalid [google] configuration")?;

    info!(
        calendar_id = provider.calendar_id(),
        start = %window.start(),
        end = %window.end(),
        timezone = %window.timezone(),
        "serving calendar window"
    );

    let state = AppState::new(
        window,
        provider,
        config.google.max_results,
        config.window.columns,
    );
    let app = routes::app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;
    info!("calgrid-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
