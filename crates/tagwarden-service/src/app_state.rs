//! Shared application state for the TagWarden service.
//!
//! Owns the policy store, apply engine, collaborator clients, and metrics
//! behind one cheap-to-clone handle. Startup errors are explicit (Result
//! instead of panic).

use std::sync::Arc;

use tagwarden_core::error::Result;

use crate::collab::{ActionExecutor, Classifier, HttpActionExecutor, HttpClassifier};
use crate::config::ServiceConfig;
use crate::engine::ApplyEngine;
use crate::obs::ServiceMetrics;
use crate::store::{InMemoryPolicyStore, PolicyStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    store: Arc<InMemoryPolicyStore>,
    engine: ApplyEngine,
    metrics: Arc<ServiceMetrics>,
}

impl AppState {
    /// Build application state with the HTTP collaborator clients from config.
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        let classifier: Arc<dyn Classifier> = Arc::new(HttpClassifier::new(&cfg.collaborators)?);
        let executor: Arc<dyn ActionExecutor> =
            Arc::new(HttpActionExecutor::new(&cfg.collaborators)?);
        Self::with_collaborators(cfg, classifier, executor)
    }

    /// Build application state with injected collaborators (tests, embedding).
    pub fn with_collaborators(
        cfg: ServiceConfig,
        classifier: Arc<dyn Classifier>,
        executor: Arc<dyn ActionExecutor>,
    ) -> Result<Self> {
        let metrics = Arc::new(ServiceMetrics::default());
        let store = Arc::new(InMemoryPolicyStore::new());

        let engine = ApplyEngine::new(
            Arc::clone(&store) as Arc<dyn PolicyStore>,
            classifier,
            executor,
            cfg.apply.dedup_scope,
            Arc::clone(&metrics),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, store, engine, metrics }),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &InMemoryPolicyStore {
        &self.inner.store
    }

    pub fn engine(&self) -> &ApplyEngine {
        &self.inner.engine
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    /// Extra gauge lines appended to the metrics render.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("tagwarden_policies_current", self.inner.store.len() as u64)]
    }
}
