//! Job addressing
//!
//! Jenkins jobs are addressed by a slash-delimited path with at most one
//! folder level (`jobX` or `folder/jobX`). Deeper nesting is not supported.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Slash-delimited job path: `jobX` or `folder/jobX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPath {
    segments: Vec<String>,
}

/// Errors raised when parsing a job path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobPathError {
    /// Input was empty
    #[error("job path is empty")]
    Empty,

    /// A path segment between slashes was empty
    #[error("job path `{0}` contains an empty segment")]
    EmptySegment(String),

    /// More than one folder level
    #[error("job path `{0}` has more than two segments; only `job` or `folder/job` is supported")]
    TooDeep(String),
}

impl JobPath {
    /// Path segments, outermost first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Short name of the job itself, without the folder
    pub fn job_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Path prefix used by the Jenkins REST API: `job/A` or `job/A/job/B`
    pub fn api_path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str("job/");
            path.push_str(segment);
        }
        path
    }

    /// Traditional web-console URL for a build of this job
    ///
    /// `{base}/job/A/{n}/console`, with the folder level expanded to
    /// `job/A/job/B` when present.
    pub fn console_url(&self, base_url: &str, build_number: u64) -> String {
        format!(
            "{}/{}/{}/console",
            base_url.trim_end_matches('/'),
            self.api_path(),
            build_number
        )
    }
}

impl FromStr for JobPath {
    type Err = JobPathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(JobPathError::Empty);
        }

        let segments: Vec<String> = input.split('/').map(str::to_string).collect();

        if segments.iter().any(String::is_empty) {
            return Err(JobPathError::EmptySegment(input.to_string()));
        }
        if segments.len() > 2 {
            return Err(JobPathError::TooDeep(input.to_string()));
        }

        Ok(JobPath { segments })
    }
}

impl fmt::Display for JobPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_job() {
        let path: JobPath = "jobX".parse().unwrap();
        assert_eq!(path.segments(), ["jobX"]);
        assert_eq!(path.job_name(), "jobX");
        assert_eq!(path.to_string(), "jobX");
    }

    #[test]
    fn test_parse_job_in_folder() {
        let path: JobPath = "teamA/jobX".parse().unwrap();
        assert_eq!(path.segments(), ["teamA", "jobX"]);
        assert_eq!(path.job_name(), "jobX");
        assert_eq!(path.to_string(), "teamA/jobX");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<JobPath>(), Err(JobPathError::Empty));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert!(matches!(
            "teamA/".parse::<JobPath>(),
            Err(JobPathError::EmptySegment(_))
        ));
        assert!(matches!(
            "/jobX".parse::<JobPath>(),
            Err(JobPathError::EmptySegment(_))
        ));
    }

    #[test]
    fn test_parse_rejects_deep_nesting() {
        assert!(matches!(
            "a/b/c".parse::<JobPath>(),
            Err(JobPathError::TooDeep(_))
        ));
    }

    #[test]
    fn test_api_path() {
        let plain: JobPath = "jobX".parse().unwrap();
        assert_eq!(plain.api_path(), "job/jobX");

        let nested: JobPath = "teamA/jobX".parse().unwrap();
        assert_eq!(nested.api_path(), "job/teamA/job/jobX");
    }

    #[test]
    fn test_console_url_plain_job() {
        let path: JobPath = "jobX".parse().unwrap();
        assert_eq!(
            path.console_url("https://ci.example.com/", 42),
            "https://ci.example.com/job/jobX/42/console"
        );
    }

    #[test]
    fn test_console_url_job_in_folder() {
        let path: JobPath = "teamA/jobX".parse().unwrap();
        assert_eq!(
            path.console_url("https://ci.example.com/", 42),
            "https://ci.example.com/job/teamA/job/jobX/42/console"
        );
    }

    #[test]
    fn test_console_url_without_trailing_slash() {
        let path: JobPath = "jobX".parse().unwrap();
        assert_eq!(
            path.console_url("https://ci.example.com", 7),
            "https://ci.example.com/job/jobX/7/console"
        );
    }
}
