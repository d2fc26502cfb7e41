//! Launch command
//!
//! Validates the job path and parameters, then drives the launch
//! orchestration. Parameter validation happens here, before a client is
//! ever asked to send anything.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};

use capstan_client::JenkinsClient;
use capstan_core::{BuildParameters, JobPath};

use crate::config::Config;
use crate::watch::JobLauncher;

/// Trigger a job and optionally watch it to completion
pub async fn launch(
    client: &JenkinsClient,
    config: &Config,
    job: &str,
    pairs: Vec<(String, String)>,
    params_json: Option<String>,
    no_wait: bool,
    poll_interval: u64,
) -> Result<ExitCode> {
    let job: JobPath = job.parse()?;
    let params = build_parameters(pairs, params_json)?;

    let launcher = JobLauncher::new(client, config.watch_config());
    let outcome = launcher
        .launch(
            &job,
            params.as_ref(),
            !no_wait,
            Duration::from_secs(poll_interval),
        )
        .await?;

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Merge `--params` JSON and `-p` pairs into typed parameters
///
/// The JSON form goes through the mapping validation; a `-p` pair wins
/// over a JSON entry with the same key.
fn build_parameters(
    pairs: Vec<(String, String)>,
    params_json: Option<String>,
) -> Result<Option<BuildParameters>> {
    if pairs.is_empty() && params_json.is_none() {
        return Ok(None);
    }

    let mut params = match params_json {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("--params is not valid JSON")?;
            BuildParameters::from_value(value)?
        }
        None => BuildParameters::new(),
    };

    for (key, value) in pairs {
        params.insert(key, value);
    }

    Ok(Some(params))
}
