//! Policy evaluation & application engine.
//!
//! `apply()` is two-phase: a pure plan (match + dedup, no I/O) computed from
//! snapshots of the tag map and policy list, then sequential execution of the
//! plan against the action collaborator.
//!
//! Failure policy is fail-fast: the first failed action call aborts the pass
//! with the failing triple; no further matches are processed. Concurrent
//! passes may independently re-trigger the same triple (the ledger is not a
//! cross-pass lock), an accepted tradeoff.

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashSet;

use tagwarden_core::error::{Result, TagWardenError};
use tagwarden_core::policy::plan::{build_plan, dedup_key};
use tagwarden_core::policy::ActionRecord;

use crate::collab::{ActionExecutor, Classifier};
use crate::config::DedupScope;
use crate::obs::ServiceMetrics;
use crate::store::PolicyStore;

pub struct ApplyEngine {
    store: Arc<dyn PolicyStore>,
    classifier: Arc<dyn Classifier>,
    executor: Arc<dyn ActionExecutor>,
    scope: DedupScope,
    /// Process-scope ledger of successfully applied triples. Unused when the
    /// scope is per-pass. Entries are written only after a successful
    /// execution, so a failed pass never records actions it did not take.
    applied: DashSet<String>,
    metrics: Arc<ServiceMetrics>,
}

impl ApplyEngine {
    pub fn new(
        store: Arc<dyn PolicyStore>,
        classifier: Arc<dyn Classifier>,
        executor: Arc<dyn ActionExecutor>,
        scope: DedupScope,
        metrics: Arc<ServiceMetrics>,
    ) -> Self {
        Self {
            store,
            classifier,
            executor,
            scope,
            applied: DashSet::new(),
            metrics,
        }
    }

    /// Run one evaluation pass and return the ordered action records.
    ///
    /// Records are in discovery order (resource iteration x policy
    /// iteration), not completion order of the external calls.
    pub async fn apply(&self) -> Result<Vec<ActionRecord>> {
        self.metrics.apply_passes.inc();

        let tags = match self.classifier.fetch_tags().await {
            Ok(t) => t,
            Err(e) => {
                self.metrics.classifier_errors.inc();
                self.metrics.apply_failures.inc();
                tracing::warn!(error = %e, "apply aborted: tag fetch failed");
                return Err(e);
            }
        };

        // Policy snapshot taken once; policies added mid-pass are not
        // considered.
        let policies = self.store.list();

        let mut seen = HashSet::new();
        let mut plan = build_plan(&policies, &tags, &mut seen);

        if self.scope == DedupScope::Process {
            plan.retain(|rec| {
                !self
                    .applied
                    .contains(&dedup_key(&rec.resource, &rec.action, &rec.policy))
            });
        }

        self.metrics.actions_planned.add(plan.len() as u64);
        tracing::info!(
            resources = tags.len(),
            policies = policies.len(),
            planned = plan.len(),
            "apply pass planned"
        );

        for rec in &plan {
            if rec.action.is_destructive() {
                if let Err(e) = self.executor.execute(&rec.resource, &rec.action).await {
                    self.metrics.action_failures.inc();
                    self.metrics.apply_failures.inc();
                    tracing::warn!(
                        resource = %rec.resource,
                        action = %rec.action,
                        policy = %rec.policy,
                        error = %e,
                        "apply aborted: action call failed"
                    );
                    return Err(TagWardenError::ActionFailed {
                        resource: rec.resource.clone(),
                        action: rec.action.as_str().to_string(),
                        policy: rec.policy.clone(),
                        reason: e.to_string(),
                    });
                }
                self.metrics.actions_executed.inc();
            }

            if self.scope == DedupScope::Process {
                self.applied
                    .insert(dedup_key(&rec.resource, &rec.action, &rec.policy));
            }
        }

        tracing::info!(applied = plan.len(), "apply pass complete");
        Ok(plan)
    }
}
