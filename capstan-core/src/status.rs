//! Build status and invocation outcome
//!
//! `BuildStatus` is what the server reports for a build; `BuildOutcome` is
//! what one watched invocation resolves to, including the overall-timeout
//! case the server never reports.

use std::fmt;

/// Build status as reported by the server's `result` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Success,
    Failure,
    Aborted,
    Unstable,
    /// Any other status string; the build is treated as still running
    Other(String),
}

impl BuildStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "SUCCESS" => BuildStatus::Success,
            "FAILURE" => BuildStatus::Failure,
            "ABORTED" => BuildStatus::Aborted,
            "UNSTABLE" => BuildStatus::Unstable,
            other => BuildStatus::Other(other.to_string()),
        }
    }

    /// Terminal statuses never change again; anything else means the build
    /// is still in flight.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BuildStatus::Other(_))
    }

    /// Outcome this status resolves to, if terminal
    pub fn outcome(&self) -> Option<BuildOutcome> {
        match self {
            BuildStatus::Success => Some(BuildOutcome::Succeeded),
            BuildStatus::Failure => Some(BuildOutcome::Failed),
            BuildStatus::Aborted => Some(BuildOutcome::Aborted),
            BuildStatus::Unstable => Some(BuildOutcome::Unstable),
            BuildStatus::Other(_) => None,
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStatus::Success => write!(f, "SUCCESS"),
            BuildStatus::Failure => write!(f, "FAILURE"),
            BuildStatus::Aborted => write!(f, "ABORTED"),
            BuildStatus::Unstable => write!(f, "UNSTABLE"),
            BuildStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Final outcome of watching one build to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Succeeded,
    Failed,
    Aborted,
    Unstable,
    /// No terminal status before the overall timeout elapsed
    TimedOut,
}

impl BuildOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, BuildOutcome::Succeeded)
    }

    /// Exit code for automation gating on this invocation
    pub fn exit_code(self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildOutcome::Succeeded => write!(f, "SUCCESS"),
            BuildOutcome::Failed => write!(f, "FAILURE"),
            BuildOutcome::Aborted => write!(f, "ABORTED"),
            BuildOutcome::Unstable => write!(f, "UNSTABLE"),
            BuildOutcome::TimedOut => write!(f, "TIMED_OUT"),
        }
    }
}
