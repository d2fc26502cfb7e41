//! Watch core
//!
//! The two state machines that carry a submission to a terminal outcome:
//! `QueueWatcher` (queue item → running build) and `BuildWatcher`
//! (running build → terminal status), composed by `JobLauncher`.
//!
//! Everything here is a single logical thread of control: waiting is a
//! plain sleep between polls, and the only ways out are a resolved build,
//! a terminal status, or one of the two timeout budgets.

mod build;
mod launcher;
mod queue;

pub use build::BuildWatcher;
pub use launcher::{JobLauncher, LaunchOutcome};
pub use queue::QueueWatcher;

use std::time::Duration;

use thiserror::Error;

use capstan_client::ClientError;

/// Timing budgets threaded into both watchers
#[derive(Debug, Clone, Copy)]
pub struct WatchConfig {
    /// Sleep between queue-status checks
    pub queue_poll_interval: Duration,

    /// Queue wait budget, accounted in poll-interval ticks
    pub queue_max_timeout: Duration,

    /// Wall-clock budget for the build itself, measured from watch start
    pub overall_max_timeout: Duration,
}

/// Errors that end a watch
///
/// Terminal build failures are not errors; they come back as
/// [`capstan_core::BuildOutcome`] values so the boundary can map them to
/// an exit code.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The queue did not resolve into a build within its budget
    #[error("max time out for queue reached after {}s", waited.as_secs())]
    QueueTimeout {
        /// Tick-accounted wait at the point of giving up
        waited: Duration,
    },

    /// A non-recoverable client failure outside the queue phase
    #[error(transparent)]
    Client(#[from] ClientError),
}
