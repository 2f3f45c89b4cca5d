//! Shared error type across TagWarden crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / rejected before mutation.
    BadRequest,
    /// A collaborator was unreachable, timed out, or refused the call.
    UpstreamUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TagWardenError>;

/// Unified error type used by core and service.
#[derive(Debug, Error)]
pub enum TagWardenError {
    /// Store input rejected before any mutation (e.g. empty policy name).
    #[error("validation failed: {0}")]
    Validation(String),
    /// The classification collaborator could not produce a tag map.
    /// Aborts the whole apply pass; no action calls are attempted after it.
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),
    /// The action-execution collaborator was unreachable or refused.
    #[error("action executor unavailable: {0}")]
    ExecutorUnavailable(String),
    /// One action call failed mid-pass; names the triple so callers can see
    /// exactly where the fail-fast abort happened.
    #[error("action '{action}' on '{resource}' failed for policy '{policy}': {reason}")]
    ActionFailed {
        resource: String,
        action: String,
        policy: String,
        reason: String,
    },
    #[error("internal: {0}")]
    Internal(String),
}

impl TagWardenError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TagWardenError::Validation(_) => ClientCode::BadRequest,
            TagWardenError::ClassifierUnavailable(_) => ClientCode::UpstreamUnavailable,
            TagWardenError::ExecutorUnavailable(_) => ClientCode::UpstreamUnavailable,
            TagWardenError::ActionFailed { .. } => ClientCode::UpstreamUnavailable,
            TagWardenError::Internal(_) => ClientCode::Internal,
        }
    }
}
