//! Policy store: upsert-by-name mapping with process lifetime.
//!
//! One `DashMap` entry per policy name, so readers never observe a
//! half-updated policy. List order is by creation sequence, which is stable
//! within a process run because upserts keep the original token.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use tagwarden_core::error::{Result, TagWardenError};
use tagwarden_core::policy::{Policy, PolicyDraft};

pub trait PolicyStore: Send + Sync {
    /// Snapshot of all current policies, ordered by creation sequence.
    fn list(&self) -> Vec<Policy>;

    /// Insert or fully replace the policy under `draft.name`.
    /// Rejects empty names before any mutation.
    fn upsert(&self, draft: PolicyDraft) -> Result<Policy>;

    /// Remove all policies (test/demo reset).
    fn clear(&self);
}

pub struct InMemoryPolicyStore {
    policies: DashMap<String, Policy>,
    seq: AtomicU64,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self {
            policies: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl Default for InMemoryPolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyStore for InMemoryPolicyStore {
    fn list(&self) -> Vec<Policy> {
        let mut out: Vec<Policy> = self.policies.iter().map(|e| e.value().clone()).collect();
        out.sort_by_key(|p| p.created_at);
        out
    }

    fn upsert(&self, draft: PolicyDraft) -> Result<Policy> {
        if draft.name.trim().is_empty() {
            return Err(TagWardenError::Validation(
                "policy name must not be empty".into(),
            ));
        }

        // Entry API holds the shard lock across the read-modify-write, so
        // concurrent upserts of the same name cannot interleave. The
        // first-creation token is kept so list order stays stable across
        // upserts of the same name.
        let rule = draft.rule;
        let mut entry = self
            .policies
            .entry(draft.name.clone())
            .or_insert_with(|| Policy {
                name: draft.name,
                rule: rule.clone(),
                created_at: self.seq.fetch_add(1, Ordering::Relaxed),
            });
        entry.rule = rule;
        let stored = entry.clone();
        drop(entry);

        tracing::debug!(policy = %stored.name, created_at = stored.created_at, "policy upserted");
        Ok(stored)
    }

    fn clear(&self) {
        self.policies.clear();
        tracing::debug!("policy store cleared");
    }
}
