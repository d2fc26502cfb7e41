//! Wire types for the Jenkins JSON API
//!
//! Shapes mirror the server's `api/json` payloads; only the fields the
//! watchers consume are modeled.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::status::BuildStatus;

/// One entry of the server's job listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEntry {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Top-level job listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default)]
    pub jobs: Vec<JobEntry>,
}

/// Queue item state as reported by `queue/item/{id}/api/json`
///
/// `executable` stays absent until the queue resolves the submission into
/// a running build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueItemState {
    #[serde(default)]
    pub executable: Option<QueueExecutable>,
    /// Human-readable reason the item is still waiting
    #[serde(default)]
    pub why: Option<String>,
}

/// The build a queue item resolved into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueExecutable {
    pub number: u64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Build state as reported by `{job}/{number}/api/json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub number: u64,
    #[serde(default)]
    pub building: bool,
    /// Terminal result string; absent while the build is in flight
    #[serde(default)]
    pub result: Option<String>,
    /// Milliseconds; the server reports -1 when it has no estimate yet
    #[serde(default)]
    pub estimated_duration: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

impl BuildInfo {
    /// Parsed status, if the server reported one
    pub fn status(&self) -> Option<BuildStatus> {
        self.result.as_deref().map(BuildStatus::parse)
    }

    /// Server's duration estimate, when it has one
    pub fn estimate(&self) -> Option<Duration> {
        match self.estimated_duration {
            Some(ms) if ms >= 0 => Some(Duration::from_millis(ms as u64)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_item_pending() {
        let state: QueueItemState =
            serde_json::from_str(r#"{"why": "Waiting for next available executor"}"#).unwrap();
        assert!(state.executable.is_none());
        assert_eq!(
            state.why.as_deref(),
            Some("Waiting for next available executor")
        );
    }

    #[test]
    fn test_queue_item_resolved() {
        let state: QueueItemState = serde_json::from_str(
            r#"{"executable": {"number": 42, "url": "https://ci.example.com/job/jobX/42/"}}"#,
        )
        .unwrap();
        assert_eq!(state.executable.unwrap().number, 42);
    }

    #[test]
    fn test_build_info_running() {
        let build: BuildInfo = serde_json::from_str(
            r#"{"number": 42, "building": true, "result": null, "estimatedDuration": 754000}"#,
        )
        .unwrap();
        assert!(build.building);
        assert!(build.status().is_none());
        assert_eq!(build.estimate(), Some(Duration::from_secs(754)));
    }

    #[test]
    fn test_build_info_finished() {
        let build: BuildInfo =
            serde_json::from_str(r#"{"number": 42, "building": false, "result": "SUCCESS"}"#)
                .unwrap();
        assert_eq!(build.status(), Some(BuildStatus::Success));
        assert_eq!(build.estimate(), None);
    }

    #[test]
    fn test_build_info_negative_estimate() {
        let build: BuildInfo =
            serde_json::from_str(r#"{"number": 1, "estimatedDuration": -1}"#).unwrap();
        assert_eq!(build.estimate(), None);
    }

    #[test]
    fn test_job_listing() {
        let listing: JobListing = serde_json::from_str(
            r#"{"jobs": [{"name": "build", "url": "https://ci.example.com/job/build/"}, {"name": "deploy"}]}"#,
        )
        .unwrap();
        assert_eq!(listing.jobs.len(), 2);
        assert_eq!(listing.jobs[0].name, "build");
        assert!(listing.jobs[1].url.is_none());
    }
}
