//! Completion backend abstraction and the OpenAI-compatible implementation.
//!
//! The engine talks to the model through the narrow [`CompletionBackend`]
//! trait so tests can substitute a deterministic fake without a network
//! dependency. The production implementation posts one chat completion to an
//! OpenAI-compatible endpoint (Ollama's `/v1` by default).

use super::error::EvalError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Fixed low sampling temperature to bias toward schema-following output.
const SAMPLING_TEMPERATURE: f32 = 0.2;

/// One-shot chat completion capability.
///
/// Object-safe and designed to be used as `Arc<dyn CompletionBackend>`.
#[async_trait]
pub trait CompletionBackend: Send + Sync + 'static {
    /// Send a (system, user) message pair and return the first completion's
    /// raw text content.
    ///
    /// # Returns
    ///
    /// - `Ok(String)` with non-empty trimmed content
    /// - `Err(EvalError::Transport)` if the backend is unreachable or
    ///   returned a non-success response
    /// - `Err(EvalError::EmptyResponse)` if the completion carried no usable
    ///   text
    async fn complete(&self, system: &str, user: &str) -> Result<String, EvalError>;
}

/// Backend speaking the OpenAI chat-completions protocol.
///
/// Sends exactly one non-streaming request per call. No retry and no explicit
/// timeout of its own; bounded latency is the caller's concern (wrap the call
/// with an external timeout if needed).
pub struct OpenAiBackend {
    /// Base URL including the API prefix (e.g. "http://localhost:11434/v1").
    base_url: String,
    /// Model identifier passed through to the backend.
    model: String,
    client: Client,
}

impl OpenAiBackend {
    pub fn new(base_url: String, model: String, client: Client) -> Self {
        Self {
            base_url,
            model,
            client,
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, system: &str, user: &str) -> Result<String, EvalError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: SAMPLING_TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EvalError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EvalError::Transport(format!(
                "backend returned {}: {}",
                status.as_u16(),
                error_body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            EvalError::Transport(format!("failed to parse completion envelope: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let content = content.trim();
        if content.is_empty() {
            return Err(EvalError::EmptyResponse);
        }

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn test_backend(base_url: String) -> OpenAiBackend {
        OpenAiBackend::new(base_url, "llama3.2".to_string(), Client::new())
    }

    fn completion_body(content: &str) -> String {
        format!(
            r#"{{
                "id": "chatcmpl-123",
                "object": "chat.completion",
                "created": 1234567890,
                "model": "llama3.2",
                "choices": [
                    {{
                        "index": 0,
                        "message": {{"role": "assistant", "content": {}}},
                        "finish_reason": "stop"
                    }}
                ]
            }}"#,
            serde_json::to_string(content).unwrap()
        )
    }

    #[tokio::test]
    async fn test_complete_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(completion_body(r#"{"scope_status":"partial"}"#))
            .create_async()
            .await;

        let backend = test_backend(format!("{}/v1", server.url()));
        let raw = backend.complete("system", "user").await.unwrap();

        mock.assert_async().await;
        assert_eq!(raw, r#"{"scope_status":"partial"}"#);
    }

    #[tokio::test]
    async fn test_complete_sends_expected_request_shape() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(serde_json::json!({
                    "model": "llama3.2",
                    "temperature": 0.2,
                })),
                Matcher::PartialJson(serde_json::json!({
                    "messages": [
                        {"role": "system", "content": "directive"},
                        {"role": "user", "content": "payload"}
                    ]
                })),
            ]))
            .with_status(200)
            .with_body(completion_body("ok"))
            .create_async()
            .await;

        let backend = test_backend(format!("{}/v1", server.url()));
        backend.complete("directive", "payload").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_trailing_slash_in_base_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(completion_body("ok"))
            .create_async()
            .await;

        let backend = test_backend(format!("{}/v1/", server.url()));
        let raw = backend.complete("s", "u").await.unwrap();

        mock.assert_async().await;
        assert_eq!(raw, "ok");
    }

    #[tokio::test]
    async fn test_complete_upstream_error_is_transport() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_body("model not loaded")
            .create_async()
            .await;

        let backend = test_backend(format!("{}/v1", server.url()));
        let err = backend.complete("s", "u").await.unwrap_err();

        mock.assert_async().await;
        match err {
            EvalError::Transport(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("model not loaded"));
            }
            other => panic!("Expected Transport error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_network_error_is_transport() {
        let backend = test_backend("http://invalid-host-that-does-not-exist:9999/v1".to_string());
        let result = backend.complete("s", "u").await;

        assert!(matches!(result, Err(EvalError::Transport(_))));
    }

    #[tokio::test]
    async fn test_complete_empty_content_is_empty_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(completion_body(""))
            .create_async()
            .await;

        let backend = test_backend(format!("{}/v1", server.url()));
        let result = backend.complete("s", "u").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(EvalError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_complete_whitespace_content_is_empty_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(completion_body("  \n\t "))
            .create_async()
            .await;

        let backend = test_backend(format!("{}/v1", server.url()));
        let result = backend.complete("s", "u").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(EvalError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_complete_no_choices_is_empty_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"id":"1","object":"chat.completion","created":1,"model":"m","choices":[]}"#)
            .create_async()
            .await;

        let backend = test_backend(format!("{}/v1", server.url()));
        let result = backend.complete("s", "u").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(EvalError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_complete_invalid_envelope_is_transport() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let backend = test_backend(format!("{}/v1", server.url()));
        let result = backend.complete("s", "u").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(EvalError::Transport(_))));
    }
}
