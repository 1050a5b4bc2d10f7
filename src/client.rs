//! REST client for the Suno generation API
//!
//! Wraps the three HTTP calls this library consumes (generation submission,
//! status query, audio fetch) using [`reqwest`]. Every API call carries the
//! configured credential as a bearer token and returns the service's
//! response envelope decoded into typed payloads.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::{GenerationRequest, RecordInfo, ResponseEnvelope, SubmitData, TaskId};
use tracing::{debug, error};

/// HTTP client for the Suno generation API
///
/// Holds a connection-pooled [`reqwest::Client`] plus the base URL and
/// credential. Cheap to clone; all clones share the connection pool.
#[derive(Clone, Debug)]
pub struct SunoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SunoClient {
    /// Create a new API client from endpoint configuration
    ///
    /// Builds a [`reqwest::Client`] with the configured request timeout so a
    /// hung call cannot stall the poll loop indefinitely.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for sharing a connection pool with other components)
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Submit a generation request
    ///
    /// Sends `POST /generate` with the request payload. Returns the
    /// server-assigned task id on envelope code 200; any other code fails
    /// with [`Error::Service`] carrying the service's message. Transport
    /// failures and unparsable bodies fail with [`Error::Transport`].
    /// Nothing is retried.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<TaskId> {
        debug!(
            custom_mode = request.custom_mode,
            instrumental = request.instrumental,
            model = %request.model,
            "submitting generation request"
        );

        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        // The service reports failures through the envelope code, not the
        // HTTP status, so the body is decoded unconditionally.
        let envelope: ResponseEnvelope<SubmitData> = response.json().await.map_err(|e| {
            error!(error = %e, "failed to decode generate response");
            e
        })?;

        let data = envelope.into_data("generate")?;
        debug!(task_id = %data.task_id, "generation request accepted");
        Ok(data.task_id)
    }

    /// Query the status of a generation task
    ///
    /// Sends `GET /generate/record-info?taskId=<id>`. Returns the decoded
    /// record on envelope code 200; any other code fails with
    /// [`Error::Service`]; a rejected status query is fatal, not transient.
    pub async fn record_info(&self, task_id: &TaskId) -> Result<RecordInfo> {
        let response = self
            .client
            .get(format!("{}/generate/record-info", self.base_url))
            .query(&[("taskId", task_id.as_str())])
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let envelope: ResponseEnvelope<RecordInfo> = response.json().await.map_err(|e| {
            error!(task_id = %task_id, error = %e, "failed to decode record-info response");
            e
        })?;

        envelope.into_data("record-info")
    }

    /// Fetch rendered audio content
    ///
    /// Plain `GET` against a track's audio URL. Audio URLs are pre-signed
    /// links on the service's CDN, so no bearer token is attached. Fails
    /// with [`Error::Transport`] on network errors or non-success HTTP
    /// statuses; the body is returned as-is with no checksum or size
    /// validation.
    pub async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>> {
        debug!(%url, "fetching audio content");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let content = response.bytes().await?;

        debug!(%url, bytes = content.len(), "fetched audio content");
        Ok(content.to_vec())
    }

    /// Base URL this client targets (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
