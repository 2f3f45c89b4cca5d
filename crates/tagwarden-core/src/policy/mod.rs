//! Policy model: named condition->action rules and their evaluation output.
//!
//! Wire field names follow the JSON surface (`ifTag`, `createdAt`); unknown
//! fields are rejected so malformed policies fail at the boundary.

pub mod plan;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-resource classification tags, keyed by resource identifier.
///
/// Ordered so a pass iterates resources deterministically. Supplied fresh on
/// every evaluation call; never cached across passes.
pub type TagMap = BTreeMap<String, Vec<String>>;

/// Action kind carried by a rule.
///
/// `Quarantine` and `Delete` are the destructive kinds that trigger an
/// external call; any other label is recorded without a side effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Quarantine,
    Delete,
    /// Informational / no-op action label.
    Other(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Quarantine => "quarantine",
            ActionKind::Delete => "delete",
            ActionKind::Other(s) => s,
        }
    }

    /// Whether applying this kind calls the action executor.
    pub fn is_destructive(&self) -> bool {
        matches!(self, ActionKind::Quarantine | ActionKind::Delete)
    }
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "quarantine" => ActionKind::Quarantine,
            "delete" => ActionKind::Delete,
            _ => ActionKind::Other(s),
        }
    }
}

impl From<ActionKind> for String {
    fn from(k: ActionKind) -> Self {
        k.as_str().to_string()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition->action pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    /// Required tag; `None` matches every resource.
    #[serde(rename = "ifTag", default, skip_serializing_if = "Option::is_none")]
    pub if_tag: Option<String>,
    pub action: ActionKind,
}

/// Upsert input: a policy as submitted by a caller, before the store assigns
/// its creation token.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyDraft {
    pub name: String,
    pub rule: Rule,
}

/// Stored policy. `created_at` is a store-assigned monotonic token, kept from
/// first creation across upserts (observability only, not an ordering
/// contract for callers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub name: String,
    pub rule: Rule,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
}

/// One applied (or recorded no-op) match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub resource: String,
    pub action: ActionKind,
    pub policy: String,
}
