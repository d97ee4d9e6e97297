//! Tolerant decoding of the persisted group snapshot.
//!
//! A snapshot may come from an older session or have been edited by hand, so
//! decoding never fails: anything that is not an array of group-shaped records
//! degrades to an empty collection, and individual malformed elements are
//! dropped. Every recovery is reported as a diagnostic for the caller to log.

use std::collections::HashSet;

use serde_json::Value;

use crate::group::Group;

/// Outcome of decoding raw snapshot text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSnapshot {
    /// Groups that survived validation, in stored order.
    pub groups: Vec<Group>,
    /// One message per recovery taken (empty on a clean decode).
    pub issues: Vec<String>,
}

impl DecodedSnapshot {
    fn empty(issue: String) -> Self {
        Self {
            groups: Vec::new(),
            issues: vec![issue],
        }
    }
}

/// Decode snapshot text into groups, dropping whatever does not fit.
///
/// Dropped elements are reported by index so diagnostics point back into the
/// stored document. Duplicate ids keep the first occurrence.
pub fn decode_snapshot(raw: &str) -> DecodedSnapshot {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => return DecodedSnapshot::empty(format!("snapshot is not valid JSON: {err}")),
    };
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return DecodedSnapshot::empty(format!(
                "snapshot is not an array (found {})",
                json_kind(&other)
            ));
        }
    };

    let mut groups: Vec<Group> = Vec::with_capacity(elements.len());
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();
    for (index, element) in elements.into_iter().enumerate() {
        let mut group: Group = match serde_json::from_value(element) {
            Ok(group) => group,
            Err(err) => {
                issues.push(format!("dropped element {index}: {err}"));
                continue;
            }
        };
        let trimmed = group.name.trim();
        if trimmed.is_empty() {
            issues.push(format!("dropped element {index}: name is blank"));
            continue;
        }
        if trimmed.len() != group.name.len() {
            group.name = trimmed.to_string();
        }
        if !seen_ids.insert(group.id) {
            issues.push(format!("dropped element {index}: duplicate id {}", group.id));
            continue;
        }
        groups.push(group);
    }

    DecodedSnapshot { groups, issues }
}

/// Serialize the full collection to the persisted representation:
/// pretty-printed JSON array with trailing newline.
pub fn encode_snapshot(groups: &[Group]) -> serde_json::Result<String> {
    let mut payload = serde_json::to_string_pretty(groups)?;
    payload.push('\n');
    Ok(payload)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
