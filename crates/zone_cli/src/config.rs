//! Session configuration
//!
//! Every field has a default, so an empty or partial YAML file is valid.
//!
//! ```yaml
//! map_extension: map
//! exit_command: exit
//! report_unmatched: false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MAP_EXTENSION: &str = "map";
pub const DEFAULT_EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Required map file extension, without the dot
    pub map_extension: String,
    /// Input line that ends the session
    pub exit_command: String,
    /// Banner printed before the first query
    pub prompt: String,
    /// Print `nothing found` for planes outside every zone
    pub report_unmatched: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            map_extension: DEFAULT_MAP_EXTENSION.to_string(),
            exit_command: DEFAULT_EXIT_COMMAND.to_string(),
            prompt: Self::default_prompt(DEFAULT_EXIT_COMMAND),
            report_unmatched: false,
        }
    }
}

impl SessionConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse session config YAML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Set the exit command, keeping the prompt in sync when it was the default.
    pub fn with_exit_command(mut self, exit_command: &str) -> Self {
        if self.prompt == Self::default_prompt(&self.exit_command) {
            self.prompt = Self::default_prompt(exit_command);
        }
        self.exit_command = exit_command.to_string();
        self
    }

    fn default_prompt(exit_command: &str) -> String {
        format!("Awaiting for input. Type \"{}\" to quit", exit_command)
    }
}
