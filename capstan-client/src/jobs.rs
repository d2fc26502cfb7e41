//! Job-related API endpoints

use reqwest::header::LOCATION;
use tracing::debug;

use capstan_core::dto::{BuildInfo, JobEntry, JobListing, QueueItemState};
use capstan_core::{BuildParameters, JobPath};

use crate::error::{ClientError, Result};
use crate::JenkinsClient;

/// Handle for a submitted-but-not-yet-building job invocation
///
/// Lives only between submission and the queue resolving into a build;
/// the queue watcher polls it until an executable appears.
#[derive(Debug, Clone)]
pub struct QueueItemHandle {
    job: JobPath,
    queue_url: String,
}

impl QueueItemHandle {
    /// Job this queue item was submitted for
    pub fn job(&self) -> &JobPath {
        &self.job
    }

    /// Queue item URL as announced by the server
    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }
}

impl JenkinsClient {
    /// List the jobs known to the server
    pub async fn list_jobs(&self) -> Result<Vec<JobEntry>> {
        let url = format!("{}/api/json?tree=jobs[name,url]", self.base_url());
        let response = self.get(&url).send().await?;

        let listing: JobListing = self.handle_response(response).await?;
        Ok(listing.jobs)
    }

    /// Submit a job invocation, returning a handle to the queue item
    ///
    /// Parameterized invocations go through `buildWithParameters` with the
    /// parameters form-encoded; plain invocations through `build`. The
    /// server answers with a `Location` header naming the queue item.
    pub async fn invoke(
        &self,
        job: &JobPath,
        params: Option<&BuildParameters>,
    ) -> Result<QueueItemHandle> {
        let params = params.filter(|p| !p.is_empty());

        let url = match params {
            Some(_) => format!("{}/{}/buildWithParameters", self.base_url(), job.api_path()),
            None => format!("{}/{}/build", self.base_url(), job.api_path()),
        };
        debug!(job = %job, url = %url, "submitting job invocation");

        let mut request = self.post(&url);
        if let Some(params) = params {
            request = request.form(&params.iter().collect::<Vec<_>>());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let queue_url = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim_end_matches('/').to_string())
            .ok_or(ClientError::MissingQueueLocation)?;

        Ok(QueueItemHandle {
            job: job.clone(),
            queue_url,
        })
    }

    /// Fetch the current state of a queue item
    pub async fn queue_item(&self, item: &QueueItemHandle) -> Result<QueueItemState> {
        let url = format!("{}/api/json", item.queue_url());
        let response = self.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the current state of a build
    pub async fn fetch_build(&self, job: &JobPath, number: u64) -> Result<BuildInfo> {
        let url = format!("{}/{}/{}/api/json", self.base_url(), job.api_path(), number);
        let response = self.get(&url).send().await?;

        self.handle_response(response).await
    }
}
