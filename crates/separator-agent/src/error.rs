//! Analysis error types.
//!
//! Every failure of a submission surfaces as an [`AnalysisError`].  Provider
//! and transport failures first arrive as a [`BackendError`] and are then
//! sorted into the taxonomy by [`classify_failure`].

use separator_core::{Language, ValidationError, ValidationKind};

/// Raw failure signal from a [`crate::backend::GenerativeBackend`].
///
/// `message` is the provider or library diagnostic text.  Classification
/// matches on that text, so backends should keep the provider's wording.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
    /// HTTP status, when the failure came from a provider reply.
    pub status: Option<u16>,
}

impl BackendError {
    /// A failure with no HTTP status (connection, TLS, body read, ...).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// A non-success provider reply.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

/// Unified error type for an analysis submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    // -- Pre-flight ----------------------------------------------------------
    /// Rejected before any network activity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another analysis is still outstanding.
    #[error("an analysis is already in progress")]
    Busy,

    // -- Provider ------------------------------------------------------------
    /// The provider rejected the credential.
    #[error("the API key was rejected by the provider")]
    Authentication,

    /// The requested model is not served by the provider.
    #[error("model `{model}` was not found")]
    ModelNotFound { model: String },

    // -- Response ------------------------------------------------------------
    /// The response did not match the declared schema.
    #[error("response parse error: {detail}")]
    Parse { detail: String },

    // -- Generic -------------------------------------------------------------
    /// Anything else, with the provider diagnostic text.
    #[error("analysis failed: {detail}")]
    Unknown { detail: String },
}

/// Convenience alias used throughout the agent crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    /// The single user-visible message for this failure.
    pub fn user_message(&self, language: Language) -> String {
        match language {
            Language::Japanese => match self {
                Self::Validation(v) => match v.kind {
                    ValidationKind::MissingCredential => {
                        "Gemini APIキーを入力してください。".to_owned()
                    }
                    ValidationKind::NoTasks => {
                        "タスクを少なくとも1つ入力してください。".to_owned()
                    }
                },
                Self::Busy => "分析を実行中です。完了までお待ちください。".to_owned(),
                Self::Authentication => "APIキーが無効です。".to_owned(),
                Self::ModelNotFound { model } => {
                    format!("モデル ({model}) が見つかりません。")
                }
                Self::Parse { detail } => {
                    format!("分析結果の形式が不正です。 ({detail})")
                }
                Self::Unknown { detail } => {
                    format!("分析エラーが発生しました。 ({detail})")
                }
            },
            Language::English => match self {
                Self::Validation(v) => match v.kind {
                    ValidationKind::MissingCredential => {
                        "Please enter your Gemini API key.".to_owned()
                    }
                    ValidationKind::NoTasks => "Please enter at least one task.".to_owned(),
                },
                Self::Busy => "An analysis is already running. Please wait.".to_owned(),
                Self::Authentication => "The API key is invalid.".to_owned(),
                Self::ModelNotFound { model } => format!("Model ({model}) was not found."),
                Self::Parse { detail } => {
                    format!("The analysis result was malformed. ({detail})")
                }
                Self::Unknown { detail } => format!("An analysis error occurred. ({detail})"),
            },
        }
    }
}

/// Sort a backend failure into the taxonomy.
///
/// Matching is best-effort on the diagnostic text: credential wording maps to
/// [`AnalysisError::Authentication`], a 404 / `NOT_FOUND` to
/// [`AnalysisError::ModelNotFound`], anything else to
/// [`AnalysisError::Unknown`] carrying the text.
pub fn classify_failure(err: &BackendError, model: &str) -> AnalysisError {
    let text = err.message.as_str();

    if text.contains("API key") || text.contains("API_KEY_INVALID") {
        return AnalysisError::Authentication;
    }

    if err.status == Some(404) || text.contains("404") || text.contains("NOT_FOUND") {
        return AnalysisError::ModelNotFound {
            model: model.to_owned(),
        };
    }

    AnalysisError::Unknown {
        detail: text.to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_text_is_authentication() {
        let err = BackendError::provider(
            400,
            "[400 Bad Request] API key not valid. Please pass a valid API key.",
        );
        assert_eq!(classify_failure(&err, "m"), AnalysisError::Authentication);
    }

    #[test]
    fn not_found_is_model_not_found() {
        let err = BackendError::provider(
            404,
            "[404 Not Found] models/gemini-9 is not found for API version v1beta",
        );
        assert_eq!(
            classify_failure(&err, "gemini-9"),
            AnalysisError::ModelNotFound {
                model: "gemini-9".into()
            }
        );
    }

    #[test]
    fn other_failures_keep_diagnostic() {
        let err = BackendError::transport("error sending request: connection refused");
        match classify_failure(&err, "m") {
            AnalysisError::Unknown { detail } => assert!(detail.contains("connection refused")),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn model_not_found_message_names_model() {
        let err = AnalysisError::ModelNotFound {
            model: "gemini-x".into(),
        };
        assert!(err.user_message(Language::Japanese).contains("gemini-x"));
        assert!(err.user_message(Language::English).contains("gemini-x"));
    }

    #[test]
    fn validation_messages_are_localized() {
        let err = AnalysisError::from(ValidationError::missing_credential());
        assert_eq!(
            err.user_message(Language::Japanese),
            "Gemini APIキーを入力してください。"
        );
        assert_eq!(
            err.user_message(Language::English),
            "Please enter your Gemini API key."
        );
    }
}
