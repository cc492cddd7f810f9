use crate::error::Result;
use crate::io;
use std::path::{Path, PathBuf};

/// Contents written when the checklist file does not exist yet.
pub const DEFAULT_TEMPLATE: &str = "# TODO\n\n- [ ] My first task\n";

/// Synchronous backing storage for the checklist document.
pub trait TodoStore: Send + Sync {
    /// Where the document lives, for display.
    fn location(&self) -> &Path;

    /// Create the document from [`DEFAULT_TEMPLATE`] if it is missing.
    /// Returns true if it was created.
    fn ensure(&self) -> Result<bool>;

    /// Read the whole document, creating it first if needed.
    fn read(&self) -> Result<String>;

    /// Replace the whole document.
    fn write(&self, text: &str) -> Result<()>;
}

/// A checklist stored as a markdown file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TodoStore for FileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn ensure(&self) -> Result<bool> {
        let created = io::write_if_missing(&self.path, DEFAULT_TEMPLATE.as_bytes())?;
        if created {
            tracing::debug!(path = %self.path.display(), "created todo file from template");
        }
        Ok(created)
    }

    fn read(&self) -> Result<String> {
        self.ensure()?;
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn write(&self, text: &str) -> Result<()> {
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "writing todo file");
        io::atomic_write(&self.path, text.as_bytes())
    }
}
