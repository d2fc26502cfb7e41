//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod jobs;
mod launch;
mod watch;

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use capstan_client::JenkinsClient;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the jobs known to the server
    Jobs,
    /// Trigger a job and, by default, wait for its result
    Launch {
        /// Job name, with an optional folder level (`job` or `folder/job`)
        job: String,

        /// Parameters as KEY=VALUE pairs (e.g. -p branch=main)
        #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
        param: Vec<(String, String)>,

        /// Parameters as a JSON object; -p pairs override its entries
        #[arg(long)]
        params: Option<String>,

        /// Return as soon as the build has started instead of waiting
        /// for its result
        #[arg(long)]
        no_wait: bool,

        /// Seconds between build-status checks for this launch
        #[arg(long, default_value_t = 20)]
        poll_interval: u64,
    },
    /// Watch an already-running build until it finishes
    Watch {
        /// Job name, with an optional folder level
        job: String,

        /// Build number to watch
        build_number: u64,
    },
}

/// Parse a single key=value pair
fn parse_key_val(s: &str) -> Result<(String, String)> {
    let pos = s
        .find('=')
        .ok_or_else(|| anyhow::anyhow!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module. The returned
/// exit code carries the build outcome for automation to gate on.
pub async fn handle_command(command: Commands, config: &Config) -> Result<ExitCode> {
    let client = JenkinsClient::new(config.base_url.clone(), config.credentials.clone());

    match command {
        Commands::Jobs => jobs::list_jobs(&client).await,
        Commands::Launch {
            job,
            param,
            params,
            no_wait,
            poll_interval,
        } => launch::launch(&client, config, &job, param, params, no_wait, poll_interval).await,
        Commands::Watch { job, build_number } => {
            watch::watch(&client, config, &job, build_number).await
        }
    }
}
