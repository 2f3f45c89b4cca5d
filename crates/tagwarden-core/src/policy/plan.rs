//! Pure match-and-dedup planning.
//!
//! Matching is a function of (tag map snapshot, policy snapshot) only; the
//! plan it produces is executed separately by the service's apply engine, so
//! everything here is testable without any collaborator.

use std::collections::HashSet;

use super::{ActionKind, ActionRecord, Policy, Rule, TagMap};

/// Dedup key for one `(resource, action, policy-name)` triple.
///
/// Scope is decided by the caller: a fresh set per pass, or a
/// process-lifetime ledger.
pub fn dedup_key(resource: &str, action: &ActionKind, policy_name: &str) -> String {
    format!("{resource}|{}|{policy_name}", action.as_str())
}

/// Whether a rule matches a resource's tag collection.
///
/// `if_tag` unset matches everything (including empty tag sets); otherwise
/// exact, case-sensitive membership.
pub fn rule_matches(rule: &Rule, tags: &[String]) -> bool {
    match &rule.if_tag {
        None => true,
        Some(want) => tags.iter().any(|t| t == want),
    }
}

/// Compute the ordered, deduplicated action plan for one pass.
///
/// Iterates resources (tag-map order) x policies (store order) and emits one
/// `ActionRecord` per match whose dedup key is not yet in `seen`. `seen` is
/// mutated so repeated triples within the pass (or across passes, if the
/// caller keeps the set alive) are skipped.
pub fn build_plan(policies: &[Policy], tags: &TagMap, seen: &mut HashSet<String>) -> Vec<ActionRecord> {
    let mut plan = Vec::new();

    for (resource, resource_tags) in tags {
        for p in policies {
            if !rule_matches(&p.rule, resource_tags) {
                continue;
            }

            let key = dedup_key(resource, &p.rule.action, &p.name);
            if !seen.insert(key) {
                continue;
            }

            plan.push(ActionRecord {
                resource: resource.clone(),
                action: p.rule.action.clone(),
                policy: p.name.clone(),
            });
        }
    }

    tracing::debug!(
        resources = tags.len(),
        policies = policies.len(),
        planned = plan.len(),
        "policy plan built"
    );

    plan
}
