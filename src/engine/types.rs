//! Request and result types for scope evaluation.

use serde::{Deserialize, Serialize};

/// Input for one scope evaluation.
///
/// Built by the caller and never mutated afterwards. The engine treats an
/// empty scope as valid-but-low-information input; non-empty enforcement is
/// the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    /// Full contract/scope text.
    pub project_scope: String,
    /// The feature under evaluation.
    pub feature_description: String,
    /// Billing rate (EUR/hour) applied to any estimated work.
    pub hourly_rate: f64,
    /// Freelancer's declared skill tags; may be empty.
    pub skills: Vec<String>,
}

/// Classification of a feature request relative to the scope document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeStatus {
    InScope,
    OutOfScope,
    Partial,
}

/// Self-reported certainty of the classification, not independently verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

/// One itemized work item in the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEstimate {
    pub name: String,
    pub hours: f64,
    pub skills: Vec<String>,
}

/// Strictly typed outcome of one evaluation.
///
/// Serialized with the snake_case wire names the model is instructed to emit,
/// so callers can persist the result verbatim next to the request that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub scope_status: ScopeStatus,
    pub scope_reasoning: String,
    pub missing_scope_items: Vec<String>,
    pub tasks: Vec<TaskEstimate>,
    /// Sum-level estimate from the model, not recomputed from `tasks`.
    pub total_hours: f64,
    /// Echoes the request's rate unless the model supplied its own.
    pub hourly_rate: f64,
    pub total_price: f64,
    pub confidence: Confidence,
    pub assumptions: Vec<String>,
}
