//! Error types for the evaluation engine.

use thiserror::Error;

/// Errors that can occur during one scope evaluation.
///
/// Nothing is retried inside the engine; every variant propagates to the
/// caller, which owns retry and user-facing messaging. A blind internal retry
/// against a non-deterministic generator could silently flip a
/// billing-relevant decision.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Backend unreachable or returned a non-success response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend returned no usable text.
    #[error("Empty response from model")]
    EmptyResponse,

    /// Model output is not parseable as JSON after fence stripping.
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// `scope_status` absent or not one of the three allowed literals.
    #[error("Invalid scope_status: {0:?}")]
    InvalidStatus(String),
}
