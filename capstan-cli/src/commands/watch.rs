//! Watch command
//!
//! Attaches the build watcher to a build that is already running, using
//! the configured default poll interval.

use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use capstan_client::JenkinsClient;
use capstan_core::JobPath;

use crate::config::Config;
use crate::watch::BuildWatcher;

/// Watch an existing build until it reaches a terminal status
pub async fn watch(
    client: &JenkinsClient,
    config: &Config,
    job: &str,
    build_number: u64,
) -> Result<ExitCode> {
    let job: JobPath = job.parse()?;

    let build = client.fetch_build(&job, build_number).await?;
    info!(
        "Watching build: {}",
        job.console_url(client.base_url(), build.number)
    );

    let watcher = BuildWatcher::new(client, config.watch_config());
    let outcome = watcher
        .watch(&job, &build, config.job_poll_interval)
        .await?;

    Ok(ExitCode::from(outcome.exit_code()))
}
