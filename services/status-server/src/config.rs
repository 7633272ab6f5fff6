use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Window over which the status endpoints sample CPU utilization. The
/// sampling request waits out the full window to get a meaningful
/// instantaneous reading.
pub const DEFAULT_CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Session-signing secret. Accepted for deployment parity; no endpoint
    /// currently signs anything with it.
    pub secret_key: String,
    /// Free-text deployment label surfaced by the diagnostics endpoint.
    pub environment: String,
    /// Directory holding the deployment metadata files written by the
    /// deployment pipeline (version.txt, commit.txt, deployment-info.txt).
    pub metadata_dir: PathBuf,
    pub cpu_sample_window: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("STATUS_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("STATUS_SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("STATUS_SERVER_PORT must be a valid port number"),
            secret_key: env::var("SECRET_KEY")
                .unwrap_or_else(|_| "dev-secret-change-me".to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "unknown".to_string()),
            metadata_dir: env::var("STATUS_SERVER_METADATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            cpu_sample_window: DEFAULT_CPU_SAMPLE_WINDOW,
        }
    }
}
