use crate::error::Result;
use crate::paths::{self, expand_home};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// TodoConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Checklist file; a leading `~/` is expanded.
    #[serde(default = "default_todo_file")]
    pub todo_file: String,
    /// Record a memory note after each change.
    #[serde(default = "default_brain_log")]
    pub brain_log: bool,
    #[serde(default = "default_brain_store_path")]
    pub brain_store_path: String,
    #[serde(default = "default_max_list_items")]
    pub max_list_items: usize,
    /// New items go under the first line containing this text. A blank or
    /// whitespace-only value is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_header: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_todo_file() -> String {
    paths::DEFAULT_TODO_FILE.to_string()
}

fn default_brain_log() -> bool {
    true
}

fn default_brain_store_path() -> String {
    paths::DEFAULT_MEMORY_FILE.to_string()
}

fn default_max_list_items() -> usize {
    30
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            todo_file: default_todo_file(),
            brain_log: default_brain_log(),
            brain_store_path: default_brain_store_path(),
            max_list_items: default_max_list_items(),
            section_header: None,
        }
    }
}

impl TodoConfig {
    /// Load from `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        // An empty file deserializes to unit, not a mapping.
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&data)?)
    }

    pub fn todo_file_path(&self) -> PathBuf {
        expand_home(&self.todo_file)
    }

    pub fn brain_store_path(&self) -> PathBuf {
        expand_home(&self.brain_store_path)
    }

    /// Section header to insert under; blank values count as unset.
    pub fn section_header(&self) -> Option<&str> {
        self.section_header.as_deref().filter(|h| !h.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.todo_file.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "todo_file is empty".to_string(),
            });
        }

        if self.max_list_items == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "max_list_items is 0: 'list' will never show items".to_string(),
            });
        }

        if matches!(self.section_header.as_deref(), Some(h) if h.trim().is_empty()) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "section_header is blank and will be ignored".to_string(),
            });
        }

        if self.brain_log && self.brain_store_path.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "brain_log is on but brain_store_path is empty".to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
