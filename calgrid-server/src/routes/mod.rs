pub mod calendar;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calgrid_core::EventProvider;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::state::AppState;

/// Full application router.
pub fn app<P: EventProvider + 'static>(state: AppState<P>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(calendar::router::<P>())
        .with_state(state)
        .layer(cors)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert anyhow errors to HTTP responses.
///
/// Only the outermost context reaches the client; the full chain is logged.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %format!("{:#}", self.0), "request failed");

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
