//! HTTP API handlers.

use axum::{extract::State, response::Html, response::IntoResponse, Json};
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::inspection::{fetch_critical_violations, InspectionClient};
use crate::metrics;
use crate::render::{render_page, Theme};

/// Application state shared with handlers.
///
/// Holds no per-request data; every page request fetches afresh.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upstream inspection client.
    pub client: InspectionClient,
    /// Page theme.
    pub theme: Theme,
}

impl AppState {
    /// Create app state from config.
    pub fn new(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        Ok(Self {
            client: InspectionClient::new(config)?,
            theme: config.page_theme,
        })
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Page handler - fetches, shapes and renders critical Manhattan violations.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let records = fetch_critical_violations(&state.client).await?;
    let page = render_page(&records, state.theme);
    metrics::inc_pages_rendered();

    Ok(Html(page))
}
