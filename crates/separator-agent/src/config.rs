//! Session configuration.
//!
//! Settings are layered: built-in defaults, then the `[separator]` section of
//! a TOML file, then environment variables.  The credential is only ever read
//! from the environment (or supplied by the caller); it is never written
//! anywhere.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use separator_core::{Credential, Language};

use crate::client::ClientOptions;
use crate::gemini::{GEMINI_BASE_URL, GeminiConfig};
use crate::models::DEFAULT_MODEL;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model id.
pub const ENV_MODEL: &str = "SEPARATOR_MODEL";
/// Environment variable overriding the language (`ja` / `en`).
pub const ENV_LANG: &str = "SEPARATOR_LANG";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "SEPARATOR_BASE_URL";

/// Everything a submission needs besides the task list and context.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub credential: Credential,
    pub model_id: String,
    pub language: Language,
    pub timeout: Duration,
    pub strict_count: bool,
    pub base_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credential: Credential::default(),
            model_id: DEFAULT_MODEL.to_owned(),
            language: Language::default(),
            timeout: Duration::from_secs(120),
            strict_count: false,
            base_url: GEMINI_BASE_URL.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Options for the analysis client.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout,
            strict_count: self.strict_count,
        }
    }

    /// Connection settings for the Gemini backend.
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }

    /// Apply the `[separator]` section of a TOML document.
    ///
    /// Missing or mistyped keys keep their current value.
    pub fn apply_toml(&mut self, content: &str) {
        let table: toml::Table = match content.parse() {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "ignoring unparsable config");
                return;
            }
        };

        let section = match table.get("separator") {
            Some(toml::Value::Table(s)) => s,
            _ => return,
        };

        if let Some(model) = section.get("model").and_then(|v| v.as_str()) {
            self.model_id = model.to_owned();
        }
        if let Some(lang) = section.get("language").and_then(|v| v.as_str()) {
            match lang.parse() {
                Ok(l) => self.language = l,
                Err(e) => warn!(error = %e, "ignoring configured language"),
            }
        }
        if let Some(secs) = section.get("timeout_secs").and_then(|v| v.as_integer()) {
            self.timeout = Duration::from_secs(secs.max(1) as u64);
        }
        if let Some(strict) = section.get("strict_count").and_then(|v| v.as_bool()) {
            self.strict_count = strict;
        }
        if let Some(url) = section.get("base_url").and_then(|v| v.as_str()) {
            self.base_url = url.to_owned();
        }
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production, a closure in tests).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.credential = Credential::new(key);
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            self.model_id = model.trim().to_owned();
        }
        if let Some(lang) = lookup(ENV_LANG) {
            match lang.parse() {
                Ok(l) => self.language = l,
                Err(e) => warn!(error = %e, "ignoring {ENV_LANG}"),
            }
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_owned();
        }
    }

    /// Defaults, then `path` if it exists, then the process environment.
    pub fn load(path: &Path) -> Self {
        let mut config = Self::default();

        match std::fs::read_to_string(path) {
            Ok(content) => {
                config.apply_toml(&content);
                debug!(path = %path.display(), "config file applied");
            }
            Err(_) => debug!(path = %path.display(), "no config file, using defaults"),
        }

        config.apply_env(|name| std::env::var(name).ok());
        config
    }
}
