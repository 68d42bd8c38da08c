//! Domain types shared by the task list, the request builder, and the
//! analysis client.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Opaque identifier of a task row.  Unique within a store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single row of the task list.
///
/// Order is positional within [`crate::store::TaskListStore`]; it is not a
/// stored field.  An empty `content` is an unfilled row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub content: String,
}

impl TaskItem {
    /// Whether the row is blank after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The classification outcome for a task.  Closed set of three literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI_OPTIMAL")]
    AiOptimal,
    #[serde(rename = "HYBRID")]
    Hybrid,
    #[serde(rename = "HUMAN_ESSENTIAL")]
    HumanEssential,
}

impl Category {
    /// All variants in badge order.
    pub const ALL: [Category; 3] = [Self::AiOptimal, Self::Hybrid, Self::HumanEssential];

    /// The wire literal.  Identical in every language.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AiOptimal => "AI_OPTIMAL",
            Self::Hybrid => "HYBRID",
            Self::HumanEssential => "HUMAN_ESSENTIAL",
        }
    }

    /// The wire literals, for schema `enum` constraints.
    pub fn literals() -> [&'static str; 3] {
        Self::ALL.map(Self::as_str)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Selects the instruction template language and the language of the
/// free-text result fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(Self::Japanese),
            "en" | "english" => Ok(Self::English),
            other => Err(CoreError::UnknownLanguage(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One classified task as returned by the generative service.
///
/// Unknown fields are rejected so that a response carrying anything other
/// than the four declared fields fails schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisResult {
    pub task: String,
    pub category: Category,
    pub reason: String,
    pub prescription: String,
}

// ---------------------------------------------------------------------------
// Credential
// ---------------------------------------------------------------------------

/// Secret key for the generative service.
///
/// Formatting never reveals the key, so a credential can sit inside structs
/// that derive `Debug` or appear in tracing fields without leaking.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Whether the key is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The raw key, for building the outbound request header only.
    pub fn expose(&self) -> &str {
        self.0.trim()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
