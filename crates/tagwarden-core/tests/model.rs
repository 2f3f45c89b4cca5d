//! Wire-shape tests for the policy model.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tagwarden_core::policy::{ActionKind, ActionRecord, PolicyDraft};

#[test]
fn action_kind_from_string() {
    assert_eq!(ActionKind::from("quarantine".to_string()), ActionKind::Quarantine);
    assert_eq!(ActionKind::from("delete".to_string()), ActionKind::Delete);
    assert_eq!(
        ActionKind::from("audit".to_string()),
        ActionKind::Other("audit".to_string())
    );
    // Destructive kinds are exact-match; case variants are plain labels.
    assert_eq!(
        ActionKind::from("Quarantine".to_string()),
        ActionKind::Other("Quarantine".to_string())
    );
}

#[test]
fn only_quarantine_and_delete_are_destructive() {
    assert!(ActionKind::Quarantine.is_destructive());
    assert!(ActionKind::Delete.is_destructive());
    assert!(!ActionKind::Other("audit".into()).is_destructive());
}

#[test]
fn parse_draft_with_if_tag() {
    let s = r#"{"name":"QuarantineSSN","rule":{"ifTag":"PII:SSN","action":"quarantine"}}"#;
    let draft: PolicyDraft = serde_json::from_str(s).unwrap();
    assert_eq!(draft.name, "QuarantineSSN");
    assert_eq!(draft.rule.if_tag.as_deref(), Some("PII:SSN"));
    assert_eq!(draft.rule.action, ActionKind::Quarantine);
}

#[test]
fn parse_draft_without_if_tag() {
    let s = r#"{"name":"AuditAll","rule":{"action":"audit"}}"#;
    let draft: PolicyDraft = serde_json::from_str(s).unwrap();
    assert!(draft.rule.if_tag.is_none());
    assert_eq!(draft.rule.action, ActionKind::Other("audit".into()));
}

#[test]
fn draft_rejects_unknown_fields() {
    let s = r#"{"name":"X","rule":{"iftag":"typo","action":"audit"}}"#;
    assert!(serde_json::from_str::<PolicyDraft>(s).is_err());
}

#[test]
fn action_record_serializes_action_as_string() {
    let rec = ActionRecord {
        resource: "a.txt".into(),
        action: ActionKind::Quarantine,
        policy: "QuarantineSSN".into(),
    };
    let v = serde_json::to_value(&rec).unwrap();
    assert_eq!(v["resource"], "a.txt");
    assert_eq!(v["action"], "quarantine");
    assert_eq!(v["policy"], "QuarantineSSN");
}
