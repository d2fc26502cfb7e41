//! Queue watcher
//!
//! Owns the transition from "submitted to queue" to "build exists and is
//! running". The queue endpoint is flaky right after submission, so a
//! transport error and "not built yet" are handled identically: sleep one
//! extra interval and try again.

use tokio::time::sleep;
use tracing::{debug, info};

use capstan_client::{JenkinsClient, QueueItemHandle};
use capstan_core::dto::BuildInfo;

use super::{WatchConfig, WatchError};

/// Emit a "has not started yet" notice every this many poll ticks
const NOTICE_EVERY_TICKS: u32 = 10;

/// Polls a queue item until the queue resolves it into a running build
pub struct QueueWatcher<'a> {
    client: &'a JenkinsClient,
    config: WatchConfig,
}

impl<'a> QueueWatcher<'a> {
    pub fn new(client: &'a JenkinsClient, config: WatchConfig) -> Self {
        Self { client, config }
    }

    /// Block until the queue resolves into a build, or fail with
    /// [`WatchError::QueueTimeout`] once the queue budget is exhausted.
    ///
    /// Timeout accounting is tick-based: every outer iteration is worth
    /// one poll interval, and the extra sleep after a failed attempt is
    /// not charged against the budget.
    pub async fn wait_for_build(&self, item: &QueueItemHandle) -> Result<BuildInfo, WatchError> {
        let mut ticks: u32 = 0;

        loop {
            sleep(self.config.queue_poll_interval).await;
            ticks += 1;

            match self.try_fetch_build(item).await {
                Some(build) => return Ok(build),
                None => sleep(self.config.queue_poll_interval).await,
            }

            if ticks % NOTICE_EVERY_TICKS == 0 {
                info!("Job {} has not started yet.", item.job());
            }

            let elapsed = self.config.queue_poll_interval * ticks;
            if elapsed > self.config.queue_max_timeout {
                return Err(WatchError::QueueTimeout { waited: elapsed });
            }
        }
    }

    /// One poll attempt
    ///
    /// Returns `None` for everything transient: a queue item that does not
    /// yet carry an executable, or any client error from the queue or
    /// build endpoints.
    async fn try_fetch_build(&self, item: &QueueItemHandle) -> Option<BuildInfo> {
        let state = match self.client.queue_item(item).await {
            Ok(state) => state,
            Err(err) => {
                debug!("queue poll for {} failed: {}", item.job(), err);
                return None;
            }
        };

        let executable = state.executable?;

        match self.client.fetch_build(item.job(), executable.number).await {
            Ok(build) => Some(build),
            Err(err) => {
                debug!(
                    "build {} of {} not fetchable yet: {}",
                    executable.number,
                    item.job(),
                    err
                );
                None
            }
        }
    }
}
