//! HTTP implementations of the collaborator seams.
//!
//! Each client wraps a `reqwest::Client` with a per-request timeout from
//! config. Timeouts, connection failures, and non-2xx responses map to the
//! collaborator-unavailable variants; no retry or backoff happens here.

use std::time::Duration;

use async_trait::async_trait;

use tagwarden_core::error::{Result, TagWardenError};
use tagwarden_core::policy::{ActionKind, TagMap};

use crate::config::CollaboratorsSection;

use super::{ActionExecutor, Classifier};

fn build_client(timeout_ms: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(|e| TagWardenError::Internal(format!("failed to build HTTP client: {e}")))
}

/// Client for the classification collaborator (`POST {base}/classify`).
pub struct HttpClassifier {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClassifier {
    pub fn new(cfg: &CollaboratorsSection) -> Result<Self> {
        Ok(Self {
            client: build_client(cfg.request_timeout_ms)?,
            base_url: cfg.classifier_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn fetch_tags(&self) -> Result<TagMap> {
        let url = format!("{}/classify", self.base_url);

        let resp = self.client.post(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                TagWardenError::ClassifierUnavailable(format!("timeout calling {url}"))
            } else {
                TagWardenError::ClassifierUnavailable(format!("request to {url} failed: {e}"))
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TagWardenError::ClassifierUnavailable(format!(
                "{url} returned {status}"
            )));
        }

        resp.json::<TagMap>().await.map_err(|e| {
            TagWardenError::ClassifierUnavailable(format!("invalid tag map from {url}: {e}"))
        })
    }
}

/// Client for the action-execution collaborator
/// (`POST {base}/action?name=..&do=..`).
pub struct HttpActionExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpActionExecutor {
    pub fn new(cfg: &CollaboratorsSection) -> Result<Self> {
        Ok(Self {
            client: build_client(cfg.request_timeout_ms)?,
            base_url: cfg.ingest_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ActionExecutor for HttpActionExecutor {
    async fn execute(&self, resource: &str, action: &ActionKind) -> Result<()> {
        let url = format!("{}/action", self.base_url);

        let resp = self
            .client
            .post(&url)
            .query(&[("name", resource), ("do", action.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TagWardenError::ExecutorUnavailable(format!("timeout calling {url}"))
                } else {
                    TagWardenError::ExecutorUnavailable(format!("request to {url} failed: {e}"))
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TagWardenError::ExecutorUnavailable(format!(
                "{url} returned {status}"
            )));
        }

        Ok(())
    }
}
