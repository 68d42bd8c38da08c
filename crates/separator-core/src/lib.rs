//! Core model for Process Separator.
//!
//! This crate holds everything that does not talk to the network:
//!
//! - **Task list**: the ordered, id-addressed rows edited by the user, via
//!   [`store::TaskListStore`].
//! - **Request building**: blank filtering, pre-flight validation, and the
//!   localized instruction templates, via [`request::AnalysisRequest`].
//! - **Labels**: category → localized label resolution, via
//!   [`labels::map_category`].
//!
//! ## Modules
//!
//! - [`types`] -- Tasks, categories, results, language, credential.
//! - [`store`] -- The task list and its edit invariants.
//! - [`prompt`] -- Instruction and user prompt templates.
//! - [`request`] -- Immutable analysis request.
//! - [`labels`] -- Localized category labels and report helpers.
//! - [`samples`] -- Bundled sample workload.
//! - [`error`] -- Core error types.

pub mod error;
pub mod labels;
pub mod prompt;
pub mod request;
pub mod samples;
pub mod store;
pub mod types;

pub use error::{CoreError, StoreError, ValidationError, ValidationKind};
pub use labels::{CategoryLabel, LabeledResult, category_counts, map_category, map_results};
pub use request::AnalysisRequest;
pub use samples::sample_workload;
pub use store::{FocusHint, Insertion, TaskListStore};
pub use types::{AnalysisResult, Category, Credential, Language, TaskId, TaskItem};
