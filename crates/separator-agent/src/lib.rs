//! Analysis runtime for Process Separator.
//!
//! This crate turns an [`separator_core::AnalysisRequest`] into a validated
//! batch of classification records by calling a schema-constrained
//! text-generation provider.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌───────────────────┐
//! │  Workbench  │────>│ AnalysisClient │────>│ GenerativeBackend │
//! │  (submit)   │     │ (single-flight)│     │   (Gemini HTTP)   │
//! └─────────────┘     └───────┬────────┘     └───────────────────┘
//!                             │
//!                      ┌──────┴──────┐
//!                      │   schema    │
//!                      │ (validate)  │
//!                      └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`backend`] -- Provider seam and the generation call type.
//! - [`gemini`] -- Gemini `generateContent` backend.
//! - [`client`] -- Single-flight analysis client with a bounded timeout.
//! - [`schema`] -- Response schema and structured-output validation.
//! - [`workbench`] -- Session state and the submit handler.
//! - [`config`] -- Layered session configuration.
//! - [`models`] -- Model catalog.
//! - [`error`] -- Analysis error taxonomy.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod schema;
pub mod workbench;

// Re-export the most commonly used types at the crate root.
pub use backend::{GenerationCall, GenerativeBackend};
pub use client::{AnalysisClient, ClientOptions};
pub use config::SessionConfig;
pub use error::{AnalysisError, BackendError, Result, classify_failure};
pub use gemini::{GeminiBackend, GeminiConfig};
pub use models::{DEFAULT_MODEL, MODELS, ModelInfo, find_model};
pub use schema::{parse_results, response_schema};
pub use workbench::{Outcome, SubmitStatus, Workbench};
