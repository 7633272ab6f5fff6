use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::warn;

use crate::models::DeploymentInfo;
use crate::{system, views, AppState};

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let info = DeploymentInfo::load(&state.config.metadata_dir, state.started_at);
    views::home(&info)
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    let info = DeploymentInfo::load(&state.config.metadata_dir, state.started_at);
    views::about(&info)
}

/// Live metrics page. A collection failure is rendered into the page, not
/// surfaced as an HTTP error code; scrapers reading this page see 200
/// either way.
pub async fn status(State(state): State<AppState>) -> Html<String> {
    match system::sample_status_metrics(state.config.cpu_sample_window).await {
        Ok(metrics) => views::status(&metrics),
        Err(err) => {
            warn!("status page metric collection failed: {err}");
            views::error(&err.to_string())
        }
    }
}

/// Router fallback for every unmatched path.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, views::not_found())
}
