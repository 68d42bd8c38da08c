//! Google Gemini `generateContent` backend.
//!
//! Sends one non-streaming request per call with `systemInstruction`, a
//! single user content, and a `generationConfig` that pins the response to
//! `application/json` under the supplied schema.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};

use separator_core::Credential;

use crate::backend::{GenerationCall, GenerativeBackend};
use crate::error::{AnalysisError, BackendError};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default Gemini API base URL.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// API version path segment.
const GEMINI_API_VERSION: &str = "v1beta";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Connection settings for [`GeminiBackend`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL for the API (overridable for proxies and tests).
    pub base_url: String,
    /// HTTP-level timeout for one request.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: GEMINI_BASE_URL.to_owned(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl GeminiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(config: GeminiConfig) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalysisError::Unknown {
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { config, http })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{GEMINI_API_VERSION}/models/{model}:generateContent",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        call: &GenerationCall,
        credential: &Credential,
    ) -> Result<String, BackendError> {
        let url = self.endpoint(&call.model);
        let body = build_request_body(call);

        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(credential.expose())
                .map_err(|e| BackendError::transport(format!("invalid API key header: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(url = %url, model = %call.model, provider = "gemini", "sending generation request");

        let resp = self
            .http
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::transport(format!("error fetching from {url}: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| BackendError::transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "provider returned an error");
            return Err(BackendError::provider(
                status.as_u16(),
                describe_error(status, &text),
            ));
        }

        let v: Value = serde_json::from_str(&text)
            .map_err(|e| BackendError::transport(format!("invalid JSON envelope: {e}")))?;

        extract_text(&v)
    }
}

// ===========================================================================
// Wire format (free functions)
// ===========================================================================

/// Build the JSON body for `models/{model}:generateContent`.
pub fn build_request_body(call: &GenerationCall) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": call.system_instruction }],
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": call.prompt }],
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": call.response_schema,
        },
    })
}

/// Concatenate the text parts of the first candidate.
pub fn extract_text(v: &Value) -> Result<String, BackendError> {
    let Some(candidate) = v["candidates"].get(0) else {
        let reason = v["promptFeedback"]["blockReason"]
            .as_str()
            .unwrap_or("no candidates returned");
        return Err(BackendError::transport(format!(
            "response contained no candidates: {reason}"
        )));
    };

    let parts = candidate["content"]["parts"].as_array().ok_or_else(|| {
        let finish = candidate["finishReason"].as_str().unwrap_or("unknown");
        BackendError::transport(format!("candidate has no content (finishReason: {finish})"))
    })?;

    Ok(parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join(""))
}

/// Render a non-success reply as `[{code} {reason}] {message}`.
fn describe_error(status: reqwest::StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("");
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            let err = &v["error"];
            let msg = err["message"].as_str()?;
            Some(match err["status"].as_str() {
                Some(code) => format!("{msg} ({code})"),
                None => msg.to_owned(),
            })
        })
        .unwrap_or_else(|| body.trim().to_owned());

    format!("[{} {reason}] {message}", status.as_u16())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
