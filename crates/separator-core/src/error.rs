//! Core error types.
//!
//! Pre-flight failures surface as [`ValidationError`]; store misuse surfaces
//! as [`StoreError`].  [`CoreError`] covers selector strings that fail to
//! parse.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a submission was refused before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// No credential was supplied (or it was blank).
    MissingCredential,
    /// Every task row was blank.
    NoTasks,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => f.write_str("missing credential"),
            Self::NoTasks => f.write_str("no non-blank tasks"),
        }
    }
}

/// A pre-flight validation failure.  Recoverable by editing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {kind}")]
pub struct ValidationError {
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn missing_credential() -> Self {
        Self {
            kind: ValidationKind::MissingCredential,
        }
    }

    pub fn no_tasks() -> Self {
        Self {
            kind: ValidationKind::NoTasks,
        }
    }
}

/// Errors raised by [`crate::store::TaskListStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The proposed order is not a permutation of the stored ids.
    #[error("reorder rejected: expected a permutation of {expected} ids, {reason}")]
    NotAPermutation { expected: usize, reason: String },

    /// A positional index fell outside the sequence.
    #[error("index {index} out of range for {len} tasks")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A selector string that does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A language selector string was not recognised.
    #[error("unknown language `{0}` (expected `ja` or `en`)")]
    UnknownLanguage(String),

    /// A category token was not one of the three literals.
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}
