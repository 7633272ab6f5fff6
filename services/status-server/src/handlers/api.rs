use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{
    DeploymentInfo, EchoBodyResponse, EchoQueryResponse, HelloResponse, SystemInfo, TestData,
    TestResponse,
};
use crate::{system, AppState};

pub async fn system_info() -> Result<Json<SystemInfo>, ApiError> {
    Ok(Json(system::collect_system_info()?))
}

#[derive(Debug, Deserialize)]
pub struct HelloParams {
    name: Option<String>,
}

pub async fn hello(
    State(state): State<AppState>,
    Query(params): Query<HelloParams>,
) -> Json<HelloResponse> {
    let name = params.name.unwrap_or_else(|| "World".to_string());
    let info = DeploymentInfo::load(&state.config.metadata_dir, state.started_at);
    Json(HelloResponse {
        message: format!("Hello, {name}!"),
        timestamp: Utc::now().to_rfc3339(),
        version: info.version,
        build: info.build_number,
    })
}

pub async fn deployment(State(state): State<AppState>) -> Json<DeploymentInfo> {
    Json(DeploymentInfo::load(
        &state.config.metadata_dir,
        state.started_at,
    ))
}

/// Fixed diagnostic payload for smoke-testing a deployment.
pub async fn diagnostics(State(state): State<AppState>) -> Json<TestResponse> {
    Json(TestResponse {
        status: "success".to_string(),
        message: "Diagnostics endpoint is reachable".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        test_data: TestData {
            environment: state.config.environment.clone(),
            hostname: system::hostname(),
            runtime_version: system::RUST_VERSION.to_string(),
        },
    })
}

pub async fn echo_query(
    Query(params): Query<HashMap<String, String>>,
) -> Json<EchoQueryResponse> {
    Json(EchoQueryResponse {
        method: "GET".to_string(),
        query_params: params,
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Echoes a JSON request body. An absent or unparseable body comes back as
/// an empty object; a bad body never fails the request.
pub async fn echo_body(body: Bytes) -> Json<EchoBodyResponse> {
    let received_data = serde_json::from_slice::<Value>(&body).unwrap_or_else(|_| json!({}));
    Json(EchoBodyResponse {
        method: "POST".to_string(),
        received_data,
        timestamp: Utc::now().to_rfc3339(),
    })
}
