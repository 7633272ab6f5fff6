//! Deployment metadata, read fresh on every request from small text files
//! the deployment pipeline drops next to the binary. Missing or unreadable
//! files are normal: each field independently falls back to "unknown".

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::models::DeploymentInfo;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const UNKNOWN: &str = "unknown";
const COMMIT_HASH_LEN: usize = 8;

impl DeploymentInfo {
    /// Builds the deployment record from `version.txt` (build number),
    /// `commit.txt` (commit hash) and `deployment-info.txt` (deploy time)
    /// under `dir`. `started_at` is the process-start timestamp captured
    /// once in main.
    pub fn load(dir: &Path, started_at: DateTime<Utc>) -> Self {
        Self {
            version: VERSION.to_string(),
            deployment_date: started_at.to_rfc3339(),
            build_number: read_metadata_line(&dir.join("version.txt"))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            commit_hash: read_metadata_line(&dir.join("commit.txt"))
                .map(|hash| truncate_commit(&hash))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            deployment_time: read_metadata_line(&dir.join("deployment-info.txt"))
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// First non-blank line of a metadata file, or `None` on any failure.
/// Absence is a value here, never an error.
fn read_metadata_line(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let line = contents.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// Short form of a commit hash. Hashes shorter than the short form are
/// returned unchanged.
fn truncate_commit(hash: &str) -> String {
    hash.chars().take(COMMIT_HASH_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_full_commit_hash() {
        assert_eq!(truncate_commit("abcdef1234567890"), "abcdef12");
    }

    #[test]
    fn short_commit_hash_is_kept_as_is() {
        assert_eq!(truncate_commit("abc"), "abc");
        assert_eq!(truncate_commit(""), "");
    }

    #[test]
    fn missing_files_leave_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let info = DeploymentInfo::load(dir.path(), Utc::now());
        assert_eq!(info.version, VERSION);
        assert_eq!(info.build_number, "unknown");
        assert_eq!(info.commit_hash, "unknown");
        assert_eq!(info.deployment_time, "unknown");
    }

    #[test]
    fn reads_first_line_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("version.txt"), "  42 \nsecond line\n").unwrap();
        let info = DeploymentInfo::load(dir.path(), Utc::now());
        assert_eq!(info.build_number, "42");
    }

    #[test]
    fn blank_file_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("commit.txt"), "\n\n").unwrap();
        let info = DeploymentInfo::load(dir.path(), Utc::now());
        assert_eq!(info.commit_hash, "unknown");
    }
}
