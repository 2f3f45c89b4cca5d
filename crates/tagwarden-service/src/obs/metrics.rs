//! Counter metrics for the policy service.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter.
#[derive(Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, v: u64) {
        self.0.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let _ = writeln!(out, "{name} {}", self.get());
    }
}

#[derive(Default)]
pub struct ServiceMetrics {
    pub policy_upserts: Counter,
    pub policy_clears: Counter,
    pub apply_passes: Counter,
    pub apply_failures: Counter,
    pub actions_planned: Counter,
    pub actions_executed: Counter,
    pub action_failures: Counter,
    pub classifier_errors: Counter,
}

impl ServiceMetrics {
    /// Render all registered metrics plus any extra gauge lines provided by
    /// callers (e.g. current policy count).
    pub fn render(&self, extra: &[(&str, u64)]) -> String {
        let mut out = String::new();
        self.policy_upserts.render("tagwarden_policy_upserts_total", &mut out);
        self.policy_clears.render("tagwarden_policy_clears_total", &mut out);
        self.apply_passes.render("tagwarden_apply_passes_total", &mut out);
        self.apply_failures.render("tagwarden_apply_failures_total", &mut out);
        self.actions_planned.render("tagwarden_actions_planned_total", &mut out);
        self.actions_executed.render("tagwarden_actions_executed_total", &mut out);
        self.action_failures.render("tagwarden_action_failures_total", &mut out);
        self.classifier_errors.render("tagwarden_classifier_errors_total", &mut out);

        for (k, v) in extra {
            let _ = writeln!(out, "# TYPE {k} gauge");
            let _ = writeln!(out, "{k} {v}");
        }
        out
    }
}
