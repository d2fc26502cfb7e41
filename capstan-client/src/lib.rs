//! Capstan Jenkins Client
//!
//! A typed HTTP client for the parts of the Jenkins JSON API that build
//! launching and watching need: job listing, job invocation, queue item
//! state, and build state.
//!
//! One `JenkinsClient` is created per process run and reused for every
//! poll; the underlying connection pool is never re-established mid-run.
//!
//! # Example
//!
//! ```no_run
//! use capstan_client::JenkinsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), capstan_client::ClientError> {
//!     let client = JenkinsClient::new("https://ci.example.com", None);
//!
//!     for job in client.list_jobs().await? {
//!         println!("{}", job.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;

pub use error::{ClientError, Result};
pub use jobs::QueueItemHandle;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Credentials for basic auth against the Jenkins server
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

/// HTTP client for the Jenkins JSON API
#[derive(Debug, Clone)]
pub struct JenkinsClient {
    /// Server root (e.g. "https://ci.example.com")
    base_url: String,
    /// HTTP client instance, shared across all polls
    client: Client,
    /// Applied as basic auth on every request when present
    credentials: Option<Credentials>,
}

impl JenkinsClient {
    /// Create a new client for the given server root
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self::with_client(base_url, credentials, Client::new())
    }

    /// Create a client with a custom reqwest client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        credentials: Option<Credentials>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
        }
    }

    /// Server root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.authenticated(self.client.get(url))
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.authenticated(self.client.post(url))
    }

    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(creds) => request.basic_auth(&creds.username, creds.password.as_deref()),
            None => request,
        }
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = JenkinsClient::new("https://ci.example.com", None);
        assert_eq!(client.base_url(), "https://ci.example.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = JenkinsClient::new("https://ci.example.com/", None);
        assert_eq!(client.base_url(), "https://ci.example.com");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = JenkinsClient::with_client("https://ci.example.com", None, http_client);
        assert_eq!(client.base_url(), "https://ci.example.com");
    }
}
