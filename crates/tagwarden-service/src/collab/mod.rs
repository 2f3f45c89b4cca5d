//! Collaborator seams consumed by the apply engine.
//!
//! The engine only sees these traits; the HTTP clients in `http` are the
//! production implementations, and tests substitute their own.

pub mod http;

use async_trait::async_trait;

use tagwarden_core::error::Result;
use tagwarden_core::policy::{ActionKind, TagMap};

/// Classification collaborator: produces the current per-resource tag map.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Fetch tags for all known resources. Must fail with
    /// `ClassifierUnavailable` on unreachable/non-success responses.
    async fn fetch_tags(&self) -> Result<TagMap>;
}

/// Action-execution collaborator: performs the named side effect.
///
/// Idempotent execution is preferred but not guaranteed downstream, which is
/// why the engine dedups before calling.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    async fn execute(&self, resource: &str, action: &ActionKind) -> Result<()>;
}

pub use http::{HttpActionExecutor, HttpClassifier};
