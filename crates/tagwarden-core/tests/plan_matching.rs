//! Pure matching/planning tests: no collaborator, no runtime.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use tagwarden_core::policy::plan::{build_plan, dedup_key, rule_matches};
use tagwarden_core::policy::{ActionKind, Policy, Rule, TagMap};

fn policy(name: &str, if_tag: Option<&str>, action: &str) -> Policy {
    Policy {
        name: name.to_string(),
        rule: Rule {
            if_tag: if_tag.map(str::to_string),
            action: ActionKind::from(action.to_string()),
        },
        created_at: 0,
    }
}

fn tag_map(entries: &[(&str, &[&str])]) -> TagMap {
    entries
        .iter()
        .map(|(r, tags)| (r.to_string(), tags.iter().map(|t| t.to_string()).collect()))
        .collect()
}

#[test]
fn unset_if_tag_matches_everything() {
    let rule = Rule { if_tag: None, action: ActionKind::Quarantine };
    assert!(rule_matches(&rule, &["Invoice".into()]));
    assert!(rule_matches(&rule, &[]));
}

#[test]
fn set_if_tag_requires_exact_member() {
    let rule = Rule { if_tag: Some("PII:SSN".into()), action: ActionKind::Delete };
    assert!(rule_matches(&rule, &["Invoice".into(), "PII:SSN".into()]));
    assert!(!rule_matches(&rule, &["Invoice".into()]));
    // case-sensitive, no prefix matching
    assert!(!rule_matches(&rule, &["pii:ssn".into()]));
    assert!(!rule_matches(&rule, &["PII:SSN-extra".into()]));
}

#[test]
fn quarantine_ssn_scenario() {
    let policies = vec![policy("QuarantineSSN", Some("PII:SSN"), "quarantine")];
    let tags = tag_map(&[("a.txt", &["PII:SSN"]), ("b.txt", &["Invoice"])]);

    let mut seen = HashSet::new();
    let plan = build_plan(&policies, &tags, &mut seen);

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].resource, "a.txt");
    assert_eq!(plan[0].action, ActionKind::Quarantine);
    assert_eq!(plan[0].policy, "QuarantineSSN");
}

#[test]
fn wildcard_policy_covers_empty_tag_sets() {
    let policies = vec![policy("AuditAll", None, "audit")];
    let tags = tag_map(&[("a.txt", &["PII:SSN"]), ("empty.txt", &[])]);

    let mut seen = HashSet::new();
    let plan = build_plan(&policies, &tags, &mut seen);

    let resources: Vec<&str> = plan.iter().map(|r| r.resource.as_str()).collect();
    assert_eq!(resources, vec!["a.txt", "empty.txt"]);
}

#[test]
fn plan_size_equals_unique_matching_triples() {
    // Two policies with the same action on the same resource are distinct
    // triples (distinct names), so both survive dedup.
    let policies = vec![
        policy("QuarantineSSN", Some("PII:SSN"), "quarantine"),
        policy("QuarantinePII", None, "quarantine"),
    ];
    let tags = tag_map(&[("a.txt", &["PII:SSN"])]);

    let mut seen = HashSet::new();
    let plan = build_plan(&policies, &tags, &mut seen);

    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0].policy, "QuarantineSSN");
    assert_eq!(plan[1].policy, "QuarantinePII");
}

#[test]
fn repeated_triples_are_skipped_within_a_pass() {
    // A key already marked in `seen` yields no second record.
    let policies = vec![policy("QuarantineSSN", Some("PII:SSN"), "quarantine")];
    let tags = tag_map(&[("a.txt", &["PII:SSN"])]);

    let mut seen = HashSet::new();
    seen.insert(dedup_key("a.txt", &ActionKind::Quarantine, "QuarantineSSN"));

    let plan = build_plan(&policies, &tags, &mut seen);
    assert!(plan.is_empty());
}

#[test]
fn ordering_is_resource_then_policy() {
    let policies = vec![
        policy("First", None, "audit"),
        policy("Second", None, "review"),
    ];
    let tags = tag_map(&[("b.txt", &[]), ("a.txt", &[])]);

    let mut seen = HashSet::new();
    let plan = build_plan(&policies, &tags, &mut seen);

    let pairs: Vec<(&str, &str)> = plan
        .iter()
        .map(|r| (r.resource.as_str(), r.policy.as_str()))
        .collect();
    // BTreeMap iterates resources in key order; policies in store order.
    assert_eq!(
        pairs,
        vec![
            ("a.txt", "First"),
            ("a.txt", "Second"),
            ("b.txt", "First"),
            ("b.txt", "Second"),
        ]
    );
}

#[test]
fn no_match_yields_no_record() {
    let policies = vec![policy("QuarantineSSN", Some("PII:SSN"), "quarantine")];
    let tags = tag_map(&[("b.txt", &["Invoice"])]);

    let mut seen = HashSet::new();
    assert!(build_plan(&policies, &tags, &mut seen).is_empty());
}
