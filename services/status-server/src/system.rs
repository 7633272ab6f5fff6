//! Host metrics collaborator. Everything the service knows about the host
//! comes through here; no other module touches `sysinfo`.
//!
//! Readings are taken fresh on every call; nothing here is cached.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use sysinfo::{Disk, Disks, System};

use crate::error::ApiError;
use crate::models::{DiskUsage, StatusMetrics, SystemInfo};

pub const RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

const BYTES_PER_GIB: f64 = (1024u64 * 1024 * 1024) as f64;

/// Point-in-time host facts for `/api/info`.
pub fn collect_system_info() -> Result<SystemInfo, ApiError> {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.refresh_cpu_usage();

    let disks = Disks::new_with_refreshed_list();
    let root = root_disk(&disks)?;

    Ok(SystemInfo {
        hostname: hostname(),
        platform: platform_string(),
        rust_version: RUST_VERSION.to_string(),
        cpu_count: sys.cpus().len(),
        memory_total_gb: bytes_to_gib(sys.total_memory()),
        memory_available_gb: bytes_to_gib(sys.available_memory()),
        disk_usage: DiskUsage {
            total_gb: bytes_to_gib(root.total_space()),
            free_gb: bytes_to_gib(root.available_space()),
        },
        uptime_seconds: System::uptime(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Utilization snapshot for the status page. CPU usage is the delta between
/// two refreshes separated by `window`; the wait is the point of the
/// reading and blocks only the request that asked for it.
pub async fn sample_status_metrics(window: Duration) -> Result<StatusMetrics, ApiError> {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.refresh_cpu_usage();

    tokio::time::sleep(window).await;
    sys.refresh_cpu_usage();

    let disks = Disks::new_with_refreshed_list();
    let root = root_disk(&disks)?;
    let disk_total = root.total_space();
    let disk_free = root.available_space();
    let disk_used = disk_total.saturating_sub(disk_free);

    Ok(StatusMetrics {
        cpu_usage: sys.global_cpu_usage(),
        memory_usage: percent(sys.used_memory(), sys.total_memory()),
        disk_usage: percent(disk_used, disk_total),
        memory_total_gb: bytes_to_gib(sys.total_memory()),
        memory_available_gb: bytes_to_gib(sys.available_memory()),
        disk_total_gb: bytes_to_gib(disk_total),
        disk_free_gb: bytes_to_gib(disk_free),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub fn hostname() -> String {
    System::host_name().unwrap_or_else(|| "unknown".to_string())
}

fn platform_string() -> String {
    System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| "unknown".to_string())
}

/// The filesystem mounted at `/`, falling back to the first reported disk.
fn root_disk(disks: &Disks) -> Result<&Disk, ApiError> {
    disks
        .list()
        .iter()
        .find(|disk| disk.mount_point() == Path::new("/"))
        .or_else(|| disks.list().first())
        .ok_or_else(|| ApiError::Metrics("no disks reported for the root filesystem".to_string()))
}

/// Binary-unit GiB, rounded to two decimals.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_GIB)
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
