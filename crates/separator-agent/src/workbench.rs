//! The submit handler.
//!
//! A [`Workbench`] owns one editing session: its configuration, the context
//! text, the task list, and the outcome of the last submission.  It is the
//! boundary where every analysis failure is caught and turned into exactly
//! one user-visible message.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use separator_core::{
    AnalysisRequest, AnalysisResult, Credential, LabeledResult, Language, TaskItem, TaskListStore,
    map_results, sample_workload,
};

use crate::backend::GenerativeBackend;
use crate::client::AnalysisClient;
use crate::config::SessionConfig;
use crate::error::AnalysisError;

/// What the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Editing mode, no results.
    Editing,
    /// A complete, validated batch.
    Results(Vec<AnalysisResult>),
    /// The last submission failed with this message.
    Failed(String),
}

/// How a call to [`Workbench::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Results were stored; carries the record count.
    Completed(usize),
    /// An error message was stored.
    Failed,
    /// Another submission was outstanding; nothing changed.
    Rejected,
}

/// One editing session.
pub struct Workbench {
    config: RwLock<SessionConfig>,
    context: RwLock<String>,
    tasks: RwLock<TaskListStore>,
    outcome: RwLock<Outcome>,
    client: AnalysisClient,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Workbench {
    pub fn new(config: SessionConfig, backend: Arc<dyn GenerativeBackend>) -> Self {
        let client = AnalysisClient::new(backend, config.client_options());
        Self {
            config: RwLock::new(config),
            context: RwLock::new(String::new()),
            tasks: RwLock::new(TaskListStore::new()),
            outcome: RwLock::new(Outcome::Editing),
            client,
        }
    }

    // -----------------------------------------------------------------------
    // Session settings
    // -----------------------------------------------------------------------

    pub fn language(&self) -> Language {
        read(&self.config).language
    }

    /// Switch the language of prompts, result text, labels, and messages.
    pub fn set_language(&self, language: Language) {
        write(&self.config).language = language;
    }

    pub fn model_id(&self) -> String {
        read(&self.config).model_id.clone()
    }

    pub fn set_model(&self, model_id: impl Into<String>) {
        write(&self.config).model_id = model_id.into();
    }

    pub fn set_credential(&self, credential: Credential) {
        write(&self.config).credential = credential;
    }

    /// Forget the credential (e.g. on a shared machine).
    pub fn clear_credential(&self) {
        write(&self.config).credential = Credential::default();
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    pub fn context(&self) -> String {
        read(&self.context).clone()
    }

    pub fn set_context(&self, text: impl Into<String>) {
        *write(&self.context) = text.into();
    }

    /// Snapshot of the task rows.
    pub fn tasks(&self) -> Vec<TaskItem> {
        read(&self.tasks).items()
    }

    /// Run an edit against the task list.
    pub fn edit_tasks<R>(&self, f: impl FnOnce(&mut TaskListStore) -> R) -> R {
        f(&mut write(&self.tasks))
    }

    /// Replace context and tasks with the bundled sample for the current
    /// language.
    pub fn load_sample(&self) {
        let (context, store) = sample_workload(self.language());
        *write(&self.context) = context.to_owned();
        *write(&self.tasks) = store;
        debug!("sample workload loaded");
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    pub fn is_busy(&self) -> bool {
        self.client.is_busy()
    }

    /// Build a request from the current state and run the analysis.
    ///
    /// Never fails: the previous outcome is discarded, the new one is stored
    /// and summarized in the returned status.  A submission made while
    /// another is outstanding is rejected and leaves the stored outcome
    /// untouched.
    pub async fn submit(&self) -> SubmitStatus {
        if self.client.is_busy() {
            debug!("submit ignored: analysis in progress");
            return SubmitStatus::Rejected;
        }

        *write(&self.outcome) = Outcome::Editing;

        let config = read(&self.config).clone();
        let snapshot = self.tasks();
        let context = self.context();

        let result = match AnalysisRequest::build(
            &context,
            &snapshot,
            config.language,
            &config.credential,
        ) {
            Ok(request) => {
                self.client
                    .analyze(&request, &config.credential, &config.model_id)
                    .await
            }
            Err(e) => Err(AnalysisError::from(e)),
        };

        match result {
            Ok(results) => {
                let count = results.len();
                *write(&self.outcome) = Outcome::Results(results);
                SubmitStatus::Completed(count)
            }
            Err(AnalysisError::Busy) => SubmitStatus::Rejected,
            Err(e) => {
                let message = e.user_message(config.language);
                info!(error = %e, "submission failed");
                *write(&self.outcome) = Outcome::Failed(message);
                SubmitStatus::Failed
            }
        }
    }

    /// The stored outcome.
    pub fn outcome(&self) -> Outcome {
        read(&self.outcome).clone()
    }

    /// Stored results with labels in the current language.
    pub fn labeled_results(&self) -> Option<Vec<LabeledResult>> {
        match &*read(&self.outcome) {
            Outcome::Results(results) => Some(map_results(results, self.language())),
            _ => None,
        }
    }

    /// Discard results and any error and return to editing.
    pub fn edit_again(&self) {
        *write(&self.outcome) = Outcome::Editing;
    }
}
