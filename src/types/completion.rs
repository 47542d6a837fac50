use crate::Error;
use serde::{Deserialize, Serialize};

/// Request body for the `/v1/complete` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens_to_sample: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

impl CompletionRequest {
    /// Create a request with the three required fields.
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        max_tokens_to_sample: u32,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            max_tokens_to_sample,
            temperature: None,
            top_p: None,
            top_k: None,
            stop_sequences: None,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set nucleus sampling probability mass.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set top-k sampling cutoff.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set custom stop sequences.
    pub fn with_stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(stop_sequences);
        self
    }

    /// Check the request invariants before any network I/O.
    ///
    /// An empty prompt is rejected locally rather than forwarded to the
    /// service; `max_tokens_to_sample` must be at least 1.
    pub fn validate(&self) -> Result<(), Error> {
        if self.prompt.is_empty() {
            return Err(Error::invalid_request("prompt must not be empty"));
        }
        if self.model.is_empty() {
            return Err(Error::invalid_request("model must not be empty"));
        }
        if self.max_tokens_to_sample == 0 {
            return Err(Error::invalid_request(
                "max_tokens_to_sample must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Response from the `/v1/complete` endpoint.
///
/// The completion text is a top-level `completion` field in the wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub completion: String,
    #[serde(default)]
    pub stop_reason: Option<StopReason>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    StopSequence,
    MaxTokens,
    #[serde(other)]
    Other,
}

/// Structured error body returned by the service on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub r#type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_skips_unset_fields() {
        let request = CompletionRequest::new("claude-v1", "Hello", 100);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["prompt"], "Hello");
        assert_eq!(json["model"], "claude-v1");
        assert_eq!(json["max_tokens_to_sample"], 100);
        assert!(json.get("temperature").is_none());
        assert!(json.get("stop_sequences").is_none());
    }

    #[test]
    fn test_request_serialization_includes_sampling_fields() {
        let request = CompletionRequest::new("claude-v1", "Hello", 100)
            .with_temperature(0.5)
            .with_top_k(40);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["top_k"], 40);
        assert!(json.get("top_p").is_none());
    }

    #[test]
    fn test_validate_rejects_empty_prompt() {
        let request = CompletionRequest::new("claude-v1", "", 100);
        assert!(matches!(
            request.validate(),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_max_tokens() {
        let request = CompletionRequest::new("claude-v1", "Hello", 0);
        assert!(matches!(
            request.validate(),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_validate_accepts_minimal_request() {
        let request = CompletionRequest::new("claude-v1", "Hello", 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "completion": "Hello! I can help you with various tasks.",
            "stop_reason": "stop_sequence",
            "model": "claude-v1"
        }"#;

        let response: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.completion,
            "Hello! I can help you with various tasks."
        );
        assert_eq!(response.stop_reason, Some(StopReason::StopSequence));
        assert_eq!(response.model.as_deref(), Some("claude-v1"));
    }

    #[test]
    fn test_response_deserialization_tolerates_missing_optional_fields() {
        let body = r#"{"completion": "Hi there."}"#;

        let response: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.completion, "Hi there.");
        assert_eq!(response.stop_reason, None);
    }

    #[test]
    fn test_unknown_stop_reason_maps_to_other() {
        let body = r#"{"completion": "Hi.", "stop_reason": "tool_use"}"#;

        let response: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.stop_reason, Some(StopReason::Other));
    }

    #[test]
    fn test_error_body_deserialization() {
        let body = r#"{"error": {"type": "invalid_request_error", "message": "model not found"}}"#;

        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.r#type, "invalid_request_error");
        assert_eq!(parsed.error.message, "model not found");
    }
}
