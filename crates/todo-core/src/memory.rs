use crate::error::{Result, TodoError};
use crate::io;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// MemoryKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryKind {
    Note,
}

// ---------------------------------------------------------------------------
// MemoryItem
// ---------------------------------------------------------------------------

/// One line of the memory log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryItem {
    pub id: String,
    pub kind: MemoryKind,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl MemoryItem {
    /// A `todo`-tagged note; the text is prefixed with `TODO: `.
    pub fn todo_note(note: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: MemoryKind::Note,
            text: format!("TODO: {note}"),
            created_at: Utc::now(),
            tags: vec!["todo".to_string()],
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryLog
// ---------------------------------------------------------------------------

/// Append-only sink for notes about checklist changes.
///
/// Callers treat failures as non-fatal: the checklist write has already
/// happened by the time a note is recorded.
pub trait MemoryLog: Send + Sync {
    fn record(&self, note: &str) -> Result<()>;
}

/// Memory log stored as JSON lines, one [`MemoryItem`] per line.
#[derive(Debug, Clone)]
pub struct JsonlMemoryLog {
    path: PathBuf,
}

impl JsonlMemoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every entry back, oldest first. A missing file reads as empty.
    pub fn entries(&self) -> Result<Vec<MemoryItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        data.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str::<MemoryItem>(line).map_err(TodoError::from))
            .collect()
    }
}

impl MemoryLog for JsonlMemoryLog {
    fn record(&self, note: &str) -> Result<()> {
        let item = MemoryItem::todo_note(note);
        let mut line = serde_json::to_string(&item)?;
        line.push('\n');
        io::append_text(&self.path, &line)
    }
}

// ---------------------------------------------------------------------------
// Note text
// ---------------------------------------------------------------------------

pub fn added_note(text: &str) -> String {
    format!("added - {text}")
}

pub fn done_note(text: &str) -> String {
    format!("done - {text}")
}

pub fn edited_note(old: &str, new: &str) -> String {
    format!("edited - \"{old}\" -> \"{new}\"")
}

pub fn removed_note(text: &str) -> String {
    format!("removed - {text}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
