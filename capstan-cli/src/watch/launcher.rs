//! Launch orchestration
//!
//! Submits the job, hands the queue item to `QueueWatcher`, announces the
//! build's console URL and estimated duration, and optionally hands the
//! build to `BuildWatcher` for the terminal outcome.

use std::time::Duration;

use tracing::info;

use capstan_client::JenkinsClient;
use capstan_core::{BuildOutcome, BuildParameters, JobPath, format_hms};

use super::{BuildWatcher, QueueWatcher, WatchConfig, WatchError};

/// What one launch invocation resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Build started; the result was not awaited
    Submitted { build_number: u64 },
    /// Build watched to a terminal outcome
    Completed(BuildOutcome),
}

impl LaunchOutcome {
    /// Exit code for automation gating on this invocation
    pub fn exit_code(self) -> u8 {
        match self {
            LaunchOutcome::Submitted { .. } => 0,
            LaunchOutcome::Completed(outcome) => outcome.exit_code(),
        }
    }
}

/// Composes submission, queue watch, and build watch for one job
pub struct JobLauncher<'a> {
    client: &'a JenkinsClient,
    config: WatchConfig,
}

impl<'a> JobLauncher<'a> {
    pub fn new(client: &'a JenkinsClient, config: WatchConfig) -> Self {
        Self { client, config }
    }

    /// Run one build lifecycle: submit, wait out the queue, announce the
    /// build, and (unless `wait_for_result` is off) watch it to the end.
    pub async fn launch(
        &self,
        job: &JobPath,
        params: Option<&BuildParameters>,
        wait_for_result: bool,
        poll_interval: Duration,
    ) -> Result<LaunchOutcome, WatchError> {
        let item = self.client.invoke(job, params).await?;
        info!("Job entered queue. Please wait until the job starts.");

        let build = QueueWatcher::new(self.client, self.config)
            .wait_for_build(&item)
            .await?;
        info!("Job started building [Build no. {}]", build.number);

        info!(
            "View the build here: {}",
            job.console_url(self.client.base_url(), build.number)
        );
        if let Some(estimate) = build.estimate() {
            info!("Estimated duration -> {}", format_hms(estimate));
        }

        if !wait_for_result {
            return Ok(LaunchOutcome::Submitted {
                build_number: build.number,
            });
        }

        let outcome = BuildWatcher::new(self.client, self.config)
            .watch(job, &build, poll_interval)
            .await?;
        Ok(LaunchOutcome::Completed(outcome))
    }
}
