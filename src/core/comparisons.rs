//! Comparison normalization and projection onto group indices.

use crate::domain::model::{group_id_from_value, BracketInterval, Comparison, GroupId, RawComparison};
use serde_json::{Map, Value};

const GROUP_A_KEYS: &[&str] = &["group_a", "groupA", "a", "group1", "left", "from"];
const GROUP_B_KEYS: &[&str] = &["group_b", "groupB", "b", "group2", "right", "to"];
const P_VALUE_KEYS: &[&str] = &["p_value", "pValue", "p", "pval"];

/// Map heterogeneous comparison records onto the canonical shape.
/// Malformed records are dropped.
pub fn normalize_comparisons(raw: &[RawComparison]) -> Vec<Comparison> {
    let comparisons: Vec<Comparison> = raw.iter().filter_map(normalize_one).collect();

    if comparisons.len() < raw.len() {
        tracing::debug!(
            "Dropped {} malformed comparison record(s)",
            raw.len() - comparisons.len()
        );
    }

    comparisons
}

fn normalize_one(raw: &RawComparison) -> Option<Comparison> {
    let obj = raw.0.as_object()?;

    let group_a = first_group(obj, GROUP_A_KEYS)?;
    let group_b = first_group(obj, GROUP_B_KEYS)?;
    if group_a == group_b {
        return None;
    }

    let p_value = P_VALUE_KEYS
        .iter()
        .find_map(|key| obj.get(*key))
        .and_then(p_value_from)?;

    Some(Comparison {
        group_a,
        group_b,
        p_value,
    })
}

fn first_group(obj: &Map<String, Value>, keys: &[&str]) -> Option<GroupId> {
    keys.iter()
        .find_map(|key| obj.get(*key))
        .and_then(group_id_from_value)
}

fn p_value_from(value: &Value) -> Option<f64> {
    let p = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Some(p)
    } else {
        None
    }
}

/// Project canonical comparisons onto 1-based indices of `groups`.
/// Comparisons naming a group absent from the ordering are dropped.
pub fn project_to_intervals(comparisons: &[Comparison], groups: &[GroupId]) -> Vec<BracketInterval> {
    let index_of = |group: &str| groups.iter().position(|g| g == group).map(|i| i + 1);

    let intervals: Vec<BracketInterval> = comparisons
        .iter()
        .filter_map(|c| {
            let a = index_of(&c.group_a)?;
            let b = index_of(&c.group_b)?;
            Some(BracketInterval::new(a.min(b), a.max(b), c.p_value))
        })
        .collect();

    if intervals.len() < comparisons.len() {
        tracing::debug!(
            "Dropped {} comparison(s) against groups outside the ordering",
            comparisons.len() - intervals.len()
        );
    }

    intervals
}
