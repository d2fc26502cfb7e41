//! Capstan Core
//!
//! Domain types shared by the Jenkins client and the CLI:
//! - Job addressing: slash-delimited paths and derived console URLs
//! - Typed build parameters with boundary validation
//! - Build status classification and invocation outcomes
//! - Wire types for the server's JSON API

pub mod dto;
pub mod duration;
pub mod job;
pub mod params;
pub mod status;

pub use duration::format_hms;
pub use job::{JobPath, JobPathError};
pub use params::{BuildParameters, ParameterError};
pub use status::{BuildOutcome, BuildStatus};
