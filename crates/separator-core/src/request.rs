//! Request building.
//!
//! [`AnalysisRequest::build`] is a pure transformation from the current
//! session inputs to an immutable, provider-agnostic request.  Both
//! pre-flight checks run here, before anything touches the network.

use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::prompt;
use crate::types::{Credential, Language, TaskItem};

/// One submission's worth of input for the classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    context: Option<String>,
    tasks: Vec<String>,
    language: Language,
}

impl AnalysisRequest {
    /// Build a request from a task snapshot.
    ///
    /// Blank rows (after trimming) are dropped; the remaining rows keep their
    /// order.  A blank `context` is treated as absent.  Fails with
    /// `MissingCredential` before `NoTasks`.
    pub fn build(
        context: &str,
        snapshot: &[TaskItem],
        language: Language,
        credential: &Credential,
    ) -> Result<Self, ValidationError> {
        if credential.is_blank() {
            return Err(ValidationError::missing_credential());
        }

        let tasks: Vec<String> = snapshot
            .iter()
            .filter(|item| !item.is_blank())
            .map(|item| item.content.trim().to_owned())
            .collect();

        if tasks.is_empty() {
            return Err(ValidationError::no_tasks());
        }

        let context = Some(context.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_owned);

        debug!(
            tasks = tasks.len(),
            dropped = snapshot.len() - tasks.len(),
            has_context = context.is_some(),
            %language,
            "analysis request built"
        );

        Ok(Self {
            context,
            tasks,
            language,
        })
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Non-blank task texts in submission order.
    pub fn ordered_task_texts(&self) -> &[String] {
        &self.tasks
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The language-specific instruction (system) text.
    pub fn instruction_text(&self) -> String {
        prompt::instruction_text(self.language)
    }

    /// The user message: context plus the 1-based task enumeration.
    pub fn user_prompt(&self) -> String {
        prompt::user_prompt(self.context(), &self.tasks, self.language)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
