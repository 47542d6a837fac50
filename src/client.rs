use crate::types::completion::ApiErrorBody;
use crate::types::{CompletionRequest, CompletionResponse};
use crate::Error;
use log::{debug, error};
use reqwest::StatusCode;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic text completions API.
///
/// Holds one authenticated handle for the lifetime of the process. Construct
/// it once and pass it by reference to whatever performs the request, so a
/// test double can be substituted via `new_with_base_url`.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Create a new client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a new client with a custom base URL.
    pub fn new_with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::config("API key must not be empty"));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Create a client from the `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            Error::config("ANTHROPIC_API_KEY environment variable is required")
        })?;
        Self::new(api_key)
    }

    /// Send one completion request and return the parsed response.
    ///
    /// The request is validated locally before anything goes on the wire.
    /// No retries: a failure surfaces directly to the caller.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, Error> {
        request.validate()?;
        debug!("sending completion request for model: {}", request.model);

        let response = self
            .http
            .post(format!("{}/v1/complete", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            // Prefer the message from the structured error body when present.
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            error!("completion request failed with status {status}");

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::auth(message),
                StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
                _ => Error::api(status.as_u16(), message),
            });
        }

        Ok(response.json::<CompletionResponse>().await?)
    }
}
