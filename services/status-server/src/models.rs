//! Response records for every endpoint. Each payload is an explicit struct
//! so field presence is checked at compile time; only the echo endpoint
//! carries caller-shaped data (`serde_json::Value`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata describing the currently running build. The three "unknown"
/// fields come from files written by the deployment pipeline; see
/// `deployment::DeploymentInfo::load`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentInfo {
    pub version: String,
    pub deployment_date: String,
    pub build_number: String,
    pub commit_hash: String,
    pub deployment_time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub build_number: String,
    pub deployment_date: String,
}

/// Snapshot of host facts for `/api/info`. Sizes are GiB, rounded to two
/// decimals.
#[derive(Debug, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub rust_version: String,
    pub cpu_count: usize,
    pub memory_total_gb: f64,
    pub memory_available_gb: f64,
    pub disk_usage: DiskUsage,
    pub uptime_seconds: u64,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiskUsage {
    pub total_gb: f64,
    pub free_gb: f64,
}

/// Instantaneous utilization figures for the status page. The CPU figure is
/// sampled over `Config::cpu_sample_window`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMetrics {
    pub cpu_usage: f32,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub memory_total_gb: f64,
    pub memory_available_gb: f64,
    pub disk_total_gb: f64,
    pub disk_free_gb: f64,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
    pub version: String,
    pub build: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub test_data: TestData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestData {
    pub environment: String,
    pub hostname: String,
    pub runtime_version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoQueryResponse {
    pub method: String,
    pub query_params: HashMap<String, String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoBodyResponse {
    pub method: String,
    pub received_data: serde_json::Value,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
