//! Scope evaluation engine.
//!
//! Takes a scope document, a feature description, and freelancer attributes,
//! builds a constrained prompt, invokes a chat-completion backend once, and
//! deterministically parses/validates the output into a strict typed result.
//!
//! The engine is stateless and holds nothing between calls; it is safe to
//! invoke concurrently for independent requests. The same input can yield a
//! different result on each call because the generator is non-deterministic;
//! callers needing idempotence must cache results externally.

pub mod backend;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod types;

pub use backend::{CompletionBackend, OpenAiBackend};
pub use error::EvalError;
pub use types::{Confidence, Evaluation, EvaluationRequest, ScopeStatus, TaskEstimate};

use crate::config::BackendConfig;
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates one scope evaluation: prompt, model call, decode, normalize.
pub struct ScopeEngine {
    backend: Arc<dyn CompletionBackend>,
}

impl ScopeEngine {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Build an engine talking to the configured OpenAI-compatible backend.
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(Arc::new(OpenAiBackend::new(
            config.base_url.clone(),
            config.model.clone(),
            reqwest::Client::new(),
        )))
    }

    /// Evaluate one feature request against the project scope.
    ///
    /// Exactly one outbound model call per invocation; no retries and no
    /// caching. Every failure surfaces as a distinct [`EvalError`] kind.
    pub async fn evaluate_scope_and_estimate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<Evaluation, EvalError> {
        let user_message = prompt::build_user_message(request);
        debug!(
            scope_chars = request.project_scope.len(),
            feature_chars = request.feature_description.len(),
            "sending scope evaluation to model"
        );

        let raw = self
            .backend
            .complete(prompt::SYSTEM_PROMPT, &user_message)
            .await
            .inspect_err(|e| warn!(error = %e, "model invocation failed"))?;
        debug!(response_chars = raw.len(), "received model response");

        let value = decode::decode_response(&raw)
            .inspect_err(|e| warn!(error = %e, "model output did not decode"))?;

        normalize::normalize(&value, request)
    }
}
