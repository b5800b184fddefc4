//! Field-by-field normalization of the decoded JSON into a strict result.
//!
//! The asymmetry here is deliberate: `scope_status` drives a billing decision
//! and must match exactly, everything else is explanatory or numeric and
//! degrades gracefully. A malformed single task never invalidates the whole
//! result.

use super::error::EvalError;
use super::types::{Confidence, Evaluation, EvaluationRequest, ScopeStatus, TaskEstimate};
use serde_json::Value;

/// Validate and normalize the loosely-typed value into an [`Evaluation`].
///
/// Fails only on an absent or unrecognized `scope_status`; all other fields
/// are coerced to their defaults.
pub fn normalize(value: &Value, request: &EvaluationRequest) -> Result<Evaluation, EvalError> {
    let scope_status = normalize_status(value.get("scope_status"))?;

    Ok(Evaluation {
        scope_status,
        scope_reasoning: coerce_string(value.get("scope_reasoning")),
        missing_scope_items: coerce_string_list(value.get("missing_scope_items")),
        tasks: normalize_tasks(value.get("tasks")),
        total_hours: coerce_number(value.get("total_hours")).unwrap_or(0.0),
        hourly_rate: coerce_number(value.get("hourly_rate")).unwrap_or(request.hourly_rate),
        total_price: coerce_number(value.get("total_price")).unwrap_or(0.0),
        confidence: normalize_confidence(value.get("confidence")),
        assumptions: coerce_string_list(value.get("assumptions")),
    })
}

/// Exact, case-sensitive match on the three allowed literals. No coercion:
/// silently guessing a status is unsafe.
fn normalize_status(value: Option<&Value>) -> Result<ScopeStatus, EvalError> {
    match value.and_then(Value::as_str) {
        Some("in_scope") => Ok(ScopeStatus::InScope),
        Some("out_of_scope") => Ok(ScopeStatus::OutOfScope),
        Some("partial") => Ok(ScopeStatus::Partial),
        _ => Err(EvalError::InvalidStatus(render_offending(value))),
    }
}

fn normalize_confidence(value: Option<&Value>) -> Confidence {
    match value.and_then(Value::as_str) {
        Some("low") => Confidence::Low,
        Some("high") => Confidence::High,
        _ => Confidence::Medium,
    }
}

fn normalize_tasks(value: Option<&Value>) -> Vec<TaskEstimate> {
    match value {
        Some(Value::Array(items)) => items.iter().map(normalize_task).collect(),
        _ => Vec::new(),
    }
}

/// Each task entry is normalized independently.
fn normalize_task(value: &Value) -> TaskEstimate {
    TaskEstimate {
        name: coerce_string(value.get("name")),
        hours: coerce_number(value.get("hours")).unwrap_or(0.0).max(0.0),
        skills: coerce_string_list(value.get("skills")),
    }
}

/// Strings pass through; null/missing become empty; anything else is
/// stringified via its JSON representation.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Numbers pass through; numeric strings like "3" are parsed; anything else
/// is unparseable and the caller picks the default.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(|item| coerce_string(Some(item))).collect(),
        _ => Vec::new(),
    }
}

fn render_offending(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "missing".to_string(),
    }
}
