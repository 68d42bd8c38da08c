//! The seam between the analysis client and a concrete text-generation
//! provider.

use async_trait::async_trait;
use serde_json::Value;

use separator_core::Credential;

use crate::error::BackendError;

/// One schema-constrained generation call, provider-agnostic.
#[derive(Debug, Clone)]
pub struct GenerationCall {
    /// Provider model identifier (e.g. `gemini-2.5-flash`).
    pub model: String,
    /// Instruction text (system role).
    pub system_instruction: String,
    /// User message: context plus the enumerated tasks.
    pub prompt: String,
    /// JSON schema the response text must satisfy.
    pub response_schema: Value,
}

/// A provider capable of executing a [`GenerationCall`].
///
/// Implementations return the raw response text on success.  Failures keep
/// the provider's own wording in [`BackendError::message`].
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &str;

    /// Execute the call and return the raw generated text.
    async fn generate(
        &self,
        call: &GenerationCall,
        credential: &Credential,
    ) -> std::result::Result<String, BackendError>;
}
