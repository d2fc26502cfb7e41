//! CLI configuration
//!
//! Resolved startup options: server root, credentials, and the four
//! polling budgets. Environment variables and flag defaults are handled
//! at the clap surface; this struct carries the final values.

use std::time::Duration;

use capstan_client::Credentials;

use crate::watch::WatchConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Jenkins server root URL
    pub base_url: String,

    /// Basic-auth credentials, when configured
    pub credentials: Option<Credentials>,

    /// How often to check a queue item for its build
    pub queue_poll_interval: Duration,

    /// How long a submission may sit in the queue before giving up
    pub queue_max_timeout: Duration,

    /// Default interval between build-status checks, used by commands
    /// that do not carry their own override
    pub job_poll_interval: Duration,

    /// How long a running build may take before the watch gives up
    pub overall_max_timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base URL must start with http:// or https://");
        }

        if self.queue_poll_interval.is_zero() {
            anyhow::bail!("queue poll interval must be greater than 0");
        }

        if self.job_poll_interval.is_zero() {
            anyhow::bail!("job poll interval must be greater than 0");
        }

        Ok(())
    }

    /// Budgets threaded into the watchers
    pub fn watch_config(&self) -> WatchConfig {
        WatchConfig {
            queue_poll_interval: self.queue_poll_interval,
            queue_max_timeout: self.queue_max_timeout,
            overall_max_timeout: self.overall_max_timeout,
        }
    }
}
