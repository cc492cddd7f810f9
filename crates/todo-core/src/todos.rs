//! Checklist commands: one fresh read, one mutation, one write per call.
//!
//! Items are addressed by their 1-based position among the *open* items of
//! the document as it is read at call time. A position with no open item
//! yields `Ok(None)` rather than an error.

use crate::checklist::{self, ChecklistItem};
use crate::config::TodoConfig;
use crate::error::{Result, TodoError};
use crate::memory::{self, JsonlMemoryLog, MemoryLog};
use crate::store::{FileStore, TodoStore};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_STATUS_LIMIT: usize = 50;
pub const MAX_STATUS_LIMIT: usize = 200;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct OpenList {
    /// Open items in the document, before the display cap.
    pub total: usize,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Edited {
    pub index: usize,
    pub old_text: String,
    pub new_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStatus {
    pub todo_file: PathBuf,
    pub open_count: usize,
    pub done_count: usize,
    pub open: Vec<String>,
}

/// The `index`-th (1-based) open item of `document`.
pub fn select_open(document: &str, index: usize) -> Option<ChecklistItem> {
    let pos = index.checked_sub(1)?;
    checklist::open_todos(document).into_iter().nth(pos)
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

pub struct Todos {
    store: Box<dyn TodoStore>,
    memory: Option<Box<dyn MemoryLog>>,
    section_header: Option<String>,
    max_list_items: usize,
}

impl Todos {
    pub fn new(store: Box<dyn TodoStore>) -> Self {
        Self {
            store,
            memory: None,
            section_header: None,
            max_list_items: usize::MAX,
        }
    }

    /// Build from config: a file store at `todo_file` and, with `brain_log`
    /// on, a JSONL memory log at `brain_store_path`.
    pub fn from_config(cfg: &TodoConfig) -> Result<Self> {
        if !cfg.enabled {
            return Err(TodoError::Disabled);
        }
        let mut todos = Self::new(Box::new(FileStore::new(cfg.todo_file_path())))
            .with_section_header(cfg.section_header().map(str::to_string))
            .with_max_list_items(cfg.max_list_items);
        if cfg.brain_log {
            todos = todos.with_memory(Box::new(JsonlMemoryLog::new(cfg.brain_store_path())));
        }
        Ok(todos)
    }

    pub fn with_memory(mut self, memory: Box<dyn MemoryLog>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_section_header(mut self, header: Option<String>) -> Self {
        self.section_header = header;
        self
    }

    pub fn with_max_list_items(mut self, max: usize) -> Self {
        self.max_list_items = max;
        self
    }

    pub fn location(&self) -> &Path {
        self.store.location()
    }

    pub fn ensure(&self) -> Result<bool> {
        self.store.ensure()
    }

    pub fn list(&self) -> Result<OpenList> {
        let open = checklist::open_todos(&self.store.read()?);
        Ok(OpenList {
            total: open.len(),
            items: open.into_iter().take(self.max_list_items).collect(),
        })
    }

    /// Add an open item and return the stored text.
    pub fn add(&self, text: &str) -> Result<String> {
        let text = non_empty(text)?;
        let md = self.store.read()?;
        let next = checklist::add_todo(&md, text, self.section_header.as_deref());
        self.store.write(&next)?;
        self.note(memory::added_note(text));
        Ok(text.to_string())
    }

    pub fn done(&self, index: usize) -> Result<Option<ChecklistItem>> {
        let md = self.store.read()?;
        let Some(item) = select_open(&md, index) else {
            return Ok(None);
        };
        self.store.write(&checklist::mark_done(&md, &item))?;
        self.note(memory::done_note(&item.text));
        Ok(Some(item))
    }

    pub fn edit(&self, index: usize, new_text: &str) -> Result<Option<Edited>> {
        let new_text = non_empty(new_text)?;
        let md = self.store.read()?;
        let Some(item) = select_open(&md, index) else {
            return Ok(None);
        };
        self.store.write(&checklist::edit_todo(&md, &item, new_text))?;
        self.note(memory::edited_note(&item.text, new_text));
        Ok(Some(Edited {
            index,
            old_text: item.text,
            new_text: new_text.to_string(),
        }))
    }

    pub fn remove(&self, index: usize) -> Result<Option<ChecklistItem>> {
        let md = self.store.read()?;
        let Some(item) = select_open(&md, index) else {
            return Ok(None);
        };
        self.store.write(&checklist::remove_todo(&md, &item))?;
        self.note(memory::removed_note(&item.text));
        Ok(Some(item))
    }

    /// Counts plus the first `limit` open item texts.
    pub fn status(&self, limit: usize) -> Result<TodoStatus> {
        if !(1..=MAX_STATUS_LIMIT).contains(&limit) {
            return Err(TodoError::LimitOutOfRange(limit));
        }
        let all = checklist::parse_todos(&self.store.read()?);
        let (open, done): (Vec<_>, Vec<_>) = all.into_iter().partition(|t| !t.done);
        Ok(TodoStatus {
            todo_file: self.location().to_path_buf(),
            open_count: open.len(),
            done_count: done.len(),
            open: open.into_iter().take(limit).map(|t| t.text).collect(),
        })
    }

    fn note(&self, note: String) {
        let Some(memory) = &self.memory else {
            return;
        };
        if let Err(e) = memory.record(&note) {
            tracing::warn!(error = %e, "failed to record memory note");
        }
    }
}

fn non_empty(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    struct MemStore {
        path: PathBuf,
        text: Mutex<String>,
    }

    impl MemStore {
        fn new(text: &str) -> Self {
            Self {
                path: PathBuf::from("mem://TODO.md"),
                text: Mutex::new(text.to_string()),
            }
        }
    }

    impl TodoStore for Arc<MemStore> {
        fn location(&self) -> &Path {
            &self.path
        }
        fn ensure(&self) -> Result<bool> {
            Ok(false)
        }
        fn read(&self) -> Result<String> {
            Ok(self.text.lock().unwrap().clone())
        }
        fn write(&self, text: &str) -> Result<()> {
            *self.text.lock().unwrap() = text.to_string();
            Ok(())
        }
    }

    #[derive(Default)]
    struct Notes(Mutex<Vec<String>>);

    impl MemoryLog for Arc<Notes> {
        fn record(&self, note: &str) -> Result<()> {
            self.0.lock().unwrap().push(note.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl MemoryLog for Broken {
        fn record(&self, _note: &str) -> Result<()> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    fn setup(md: &str) -> (Todos, Arc<MemStore>, Arc<Notes>) {
        let store = Arc::new(MemStore::new(md));
        let notes = Arc::new(Notes::default());
        let todos = Todos::new(Box::new(store.clone())).with_memory(Box::new(notes.clone()));
        (todos, store, notes)
    }

    fn text(store: &MemStore) -> String {
        store.text.lock().unwrap().clone()
    }

    fn notes(notes: &Notes) -> Vec<String> {
        notes.0.lock().unwrap().clone()
    }

    const DOC: &str = "# TODO\n\n- [x] Old\n- [ ] First\n- [ ] Second\n";

    #[test]
    fn select_open_is_one_based_over_open_items() {
        assert_eq!(select_open(DOC, 1).unwrap().text, "First");
        assert_eq!(select_open(DOC, 2).unwrap().text, "Second");
        assert!(select_open(DOC, 0).is_none());
        assert!(select_open(DOC, 3).is_none());
    }

    #[test]
    fn list_caps_items_but_counts_all() {
        let (todos, _, _) = setup(DOC);
        let todos = todos.with_max_list_items(1);
        let list = todos.list().unwrap();
        assert_eq!(list.total, 2);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "First");
    }

    #[test]
    fn add_trims_writes_and_notes() {
        let (todos, store, log) = setup(DOC);
        assert_eq!(todos.add("  Third  ").unwrap(), "Third");
        // The trailing blank line is skipped, so the bullet lands after it.
        assert_eq!(text(&store), "# TODO\n\n- [x] Old\n- [ ] First\n- [ ] Second\n\n- [ ] Third");
        assert_eq!(notes(&log), vec!["added - Third"]);
    }

    #[test]
    fn add_uses_section_header() {
        let (todos, store, _) = setup("# Inbox\n\n- [ ] a\n\n# Later\n- [ ] z");
        let todos = todos.with_section_header(Some("# inbox".to_string()));
        todos.add("new").unwrap();
        assert_eq!(text(&store), "# Inbox\n\n- [ ] new\n- [ ] a\n\n# Later\n- [ ] z");
    }

    #[test]
    fn add_rejects_blank_text() {
        let (todos, store, log) = setup(DOC);
        assert!(matches!(todos.add("   "), Err(TodoError::EmptyText)));
        assert_eq!(text(&store), DOC);
        assert!(notes(&log).is_empty());
    }

    #[test]
    fn done_marks_selected_open_item() {
        let (todos, store, log) = setup(DOC);
        let item = todos.done(2).unwrap().unwrap();
        assert_eq!(item.text, "Second");
        assert!(text(&store).contains("- [x] Second"));
        assert_eq!(notes(&log), vec!["done - Second"]);
    }

    #[test]
    fn out_of_range_index_is_not_found_and_writes_nothing() {
        let (todos, store, log) = setup(DOC);
        assert!(todos.done(3).unwrap().is_none());
        assert!(todos.edit(9, "x").unwrap().is_none());
        assert!(todos.remove(0).unwrap().is_none());
        assert_eq!(text(&store), DOC);
        assert!(notes(&log).is_empty());
    }

    #[test]
    fn edit_keeps_state_and_reports_old_text() {
        let (todos, store, log) = setup(DOC);
        let edited = todos.edit(1, " Renamed ").unwrap().unwrap();
        assert_eq!(edited.old_text, "First");
        assert_eq!(edited.new_text, "Renamed");
        assert!(text(&store).contains("- [ ] Renamed\n- [ ] Second"));
        assert_eq!(notes(&log), vec!["edited - \"First\" -> \"Renamed\""]);
    }

    #[test]
    fn remove_deletes_line() {
        let (todos, store, log) = setup(DOC);
        let item = todos.remove(1).unwrap().unwrap();
        assert_eq!(item.text, "First");
        assert_eq!(text(&store), "# TODO\n\n- [x] Old\n- [ ] Second\n");
        assert_eq!(notes(&log), vec!["removed - First"]);
    }

    #[test]
    fn status_counts_and_limits() {
        let (todos, _, _) = setup(DOC);
        let status = todos.status(1).unwrap();
        assert_eq!(status.open_count, 2);
        assert_eq!(status.done_count, 1);
        assert_eq!(status.open, vec!["First"]);
        assert_eq!(status.todo_file, PathBuf::from("mem://TODO.md"));

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["openCount"], 2);
        assert!(json.get("todoFile").is_some());
    }

    #[test]
    fn status_limit_is_bounded() {
        let (todos, _, _) = setup(DOC);
        assert!(matches!(todos.status(0), Err(TodoError::LimitOutOfRange(0))));
        assert!(todos.status(MAX_STATUS_LIMIT + 1).is_err());
        assert!(todos.status(MAX_STATUS_LIMIT).is_ok());
    }

    #[test]
    fn failing_memory_log_does_not_fail_mutation() {
        let store = Arc::new(MemStore::new(DOC));
        let todos = Todos::new(Box::new(store.clone())).with_memory(Box::new(Broken));
        assert!(todos.done(1).unwrap().is_some());
        assert!(text(&store).contains("- [x] First"));
    }

    #[test]
    fn from_config_respects_disabled() {
        let cfg = TodoConfig {
            enabled: false,
            ..TodoConfig::default()
        };
        assert!(matches!(Todos::from_config(&cfg), Err(TodoError::Disabled)));
    }

    #[test]
    fn from_config_wires_file_store_and_memory_log() {
        let dir = TempDir::new().unwrap();
        let cfg = TodoConfig {
            todo_file: dir.path().join("TODO.md").to_string_lossy().into_owned(),
            brain_store_path: dir.path().join("brain.jsonl").to_string_lossy().into_owned(),
            ..TodoConfig::default()
        };
        let todos = Todos::from_config(&cfg).unwrap();

        let list = todos.list().unwrap();
        assert_eq!(list.items[0].text, "My first task");

        todos.add("Second task").unwrap();
        todos.done(1).unwrap().unwrap();

        let md = std::fs::read_to_string(dir.path().join("TODO.md")).unwrap();
        assert_eq!(md, "# TODO\n\n- [x] My first task\n\n- [ ] Second task");

        let entries = JsonlMemoryLog::new(dir.path().join("brain.jsonl")).entries().unwrap();
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["TODO: added - Second task", "TODO: done - My first task"]);
    }

    #[test]
    fn from_config_without_brain_log_writes_no_memory() {
        let dir = TempDir::new().unwrap();
        let cfg = TodoConfig {
            todo_file: dir.path().join("TODO.md").to_string_lossy().into_owned(),
            brain_log: false,
            brain_store_path: dir.path().join("brain.jsonl").to_string_lossy().into_owned(),
            ..TodoConfig::default()
        };
        Todos::from_config(&cfg).unwrap().add("x").unwrap();
        assert!(!dir.path().join("brain.jsonl").exists());
    }
}
