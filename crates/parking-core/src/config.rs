//! Interpreter configuration
//!
//! Loaded from JSON (every field optional) and overridable from the CLI.

use std::path::Path;

use crate::{Error, Result};

/// What to do with an unparseable line once a lot exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidCommandPolicy {
    /// Print a rejection message and keep reading
    #[default]
    Reprompt,
    /// End the session without further output
    Terminate,
}

/// Interpreter settings
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub invalid_command: InvalidCommandPolicy,
    /// Keep a [`TransitionLog`](crate::TransitionLog) entry for every line
    pub record_log: bool,
}

impl InterpreterConfig {
    /// Decode a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::config)
    }

    /// Read and decode a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    pub fn with_policy(mut self, policy: InvalidCommandPolicy) -> Self {
        self.invalid_command = policy;
        self
    }

    pub fn with_record_log(mut self, record_log: bool) -> Self {
        self.record_log = record_log;
        self
    }
}
