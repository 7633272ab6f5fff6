use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::models::{DeploymentInfo, HealthResponse};
use crate::AppState;

/// Liveness probe for monitoring. Always 200; the interesting part is the
/// build metadata riding along.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let info = DeploymentInfo::load(&state.config.metadata_dir, state.started_at);
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: info.version,
        build_number: info.build_number,
        deployment_date: info.deployment_date,
    })
}
