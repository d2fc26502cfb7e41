//! Capstan CLI
//!
//! Command-line tool that triggers Jenkins jobs and watches the resulting
//! builds to completion, mapping the terminal outcome to the process exit
//! code so downstream automation can gate on it.

mod commands;
mod config;
mod watch;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{Commands, handle_command};
use capstan_client::Credentials;
use config::Config;

#[derive(Parser)]
#[command(name = "capstan")]
#[command(about = "Trigger and watch Jenkins builds", long_about = None)]
struct Cli {
    /// Jenkins server root URL
    #[arg(long, env = "JENKINS_BASE_URL")]
    base_url: String,

    /// Username for basic auth
    #[arg(long, env = "JENKINS_USER")]
    user: Option<String>,

    /// Password or API token for basic auth
    #[arg(long, env = "JENKINS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Seconds between queue-status checks
    #[arg(long, env = "QUEUE_POLL_INTERVAL", default_value_t = 2)]
    queue_poll_interval: u64,

    /// Max seconds to wait for a queued job to start building
    #[arg(long, env = "QUEUE_MAX_TIMEOUT", default_value_t = 500)]
    queue_max_timeout: u64,

    /// Default seconds between build-status checks
    #[arg(long, env = "JOB_POLL_INTERVAL", default_value_t = 45)]
    job_poll_interval: u64,

    /// Max seconds to wait for a build to finish
    #[arg(long, env = "OVERALL_MAX_TIMEOUT", default_value_t = 3600)]
    overall_max_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "capstan_cli=info,capstan_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let credentials = cli.user.map(|username| Credentials {
        username,
        password: cli.password,
    });

    let config = Config {
        base_url: cli.base_url,
        credentials,
        queue_poll_interval: Duration::from_secs(cli.queue_poll_interval),
        queue_max_timeout: Duration::from_secs(cli.queue_max_timeout),
        job_poll_interval: Duration::from_secs(cli.job_poll_interval),
        overall_max_timeout: Duration::from_secs(cli.overall_max_timeout),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
