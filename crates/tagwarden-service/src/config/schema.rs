use serde::Deserialize;
use tagwarden_core::error::{Result, TagWardenError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub service: ServiceSection,

    #[serde(default)]
    pub collaborators: CollaboratorsSection,

    #[serde(default)]
    pub apply: ApplySection,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TagWardenError::Validation(
                "version must be 1".into(),
            ));
        }

        self.collaborators.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollaboratorsSection {
    /// Base URL of the classification collaborator (`POST {url}/classify`).
    #[serde(default = "default_collab_url")]
    pub classifier_url: String,

    /// Base URL of the action-execution collaborator (`POST {url}/action`).
    #[serde(default = "default_collab_url")]
    pub ingest_url: String,

    /// Per-request timeout for both collaborators.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for CollaboratorsSection {
    fn default() -> Self {
        Self {
            classifier_url: default_collab_url(),
            ingest_url: default_collab_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl CollaboratorsSection {
    pub fn validate(&self) -> Result<()> {
        if self.classifier_url.is_empty() {
            return Err(TagWardenError::Validation(
                "collaborators.classifier_url must not be empty".into(),
            ));
        }
        if self.ingest_url.is_empty() {
            return Err(TagWardenError::Validation(
                "collaborators.ingest_url must not be empty".into(),
            ));
        }
        if !(100..=60000).contains(&self.request_timeout_ms) {
            return Err(TagWardenError::Validation(
                "collaborators.request_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

/// Scope of the "already applied" dedup ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum DedupScope {
    /// Fresh ledger per apply pass; re-running apply re-triggers actions.
    #[serde(rename = "per-pass")]
    #[default]
    PerPass,
    /// Process-lifetime ledger; a triple that executed successfully once is
    /// skipped by later passes.
    #[serde(rename = "process")]
    Process,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ApplySection {
    #[serde(default)]
    pub dedup_scope: DedupScope,
}

fn default_listen() -> String {
    "0.0.0.0:8002".into()
}
fn default_collab_url() -> String {
    "http://localhost:8001".into()
}
fn default_request_timeout_ms() -> u64 {
    10000
}
