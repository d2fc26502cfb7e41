//! Build watcher
//!
//! Owns the transition from "build running" to "build finished". The
//! status is pull-based: each poll refreshes the build from the server
//! and classifies the result, until the terminal set or the overall
//! budget is reached.

use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::info;

use capstan_client::JenkinsClient;
use capstan_core::dto::BuildInfo;
use capstan_core::{BuildOutcome, BuildStatus, JobPath};

use super::{WatchConfig, WatchError};

/// Polls a started build until it reaches a terminal status
pub struct BuildWatcher<'a> {
    client: &'a JenkinsClient,
    config: WatchConfig,
}

impl<'a> BuildWatcher<'a> {
    pub fn new(client: &'a JenkinsClient, config: WatchConfig) -> Self {
        Self { client, config }
    }

    /// Poll `build` every `poll_interval` until it finishes.
    ///
    /// The overall budget is wall-clock, measured from this call and
    /// independent of time already spent waiting on the queue. Exhausting
    /// it yields [`BuildOutcome::TimedOut`] rather than an error; unlike
    /// the queue phase, a fetch failure here does propagate.
    pub async fn watch(
        &self,
        job: &JobPath,
        build: &BuildInfo,
        poll_interval: Duration,
    ) -> Result<BuildOutcome, WatchError> {
        let started = Instant::now();
        let number = build.number;

        loop {
            let current = self.client.fetch_build(job, number).await?;

            match current.status().as_ref().and_then(BuildStatus::outcome) {
                Some(BuildOutcome::Succeeded) => {
                    info!("Job: {} | Status: SUCCESS", job);
                    return Ok(BuildOutcome::Succeeded);
                }
                Some(outcome) => {
                    info!("Job: {} | Status: {}", job, outcome);
                    info!(
                        "View more details here: {}",
                        job.console_url(self.client.base_url(), number)
                    );
                    return Ok(outcome);
                }
                None => {
                    info!(
                        "Job: {} | Status: The job is still running. Polling again in {} secs",
                        job,
                        poll_interval.as_secs()
                    );
                }
            }

            if started.elapsed() > self.config.overall_max_timeout {
                info!(
                    "Overall timeout: no terminal status before timeout of {} secs",
                    self.config.overall_max_timeout.as_secs()
                );
                return Ok(BuildOutcome::TimedOut);
            }

            sleep(poll_interval).await;
        }
    }
}
