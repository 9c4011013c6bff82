use super::NoteStore;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory [`NoteStore`] for tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    failing: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
    checks: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `path` as already occupied.
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_string());
        self
    }

    /// Makes validation of `path` fail with a permission error.
    pub fn with_failing_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Makes writes to `path` fail with a permission error.
    pub fn with_read_only_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.read_only.insert(path.into());
        self
    }

    /// Number of `is_free` calls so far.
    pub fn checks(&self) -> usize {
        self.checks.get()
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl NoteStore for InMemoryStore {
    fn is_free(&self, path: &Path) -> io::Result<bool> {
        self.checks.set(self.checks.get() + 1);
        if self.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        Ok(!self.files.borrow().contains_key(path))
    }

    fn write_new(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.read_only.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        let mut files = self.files.borrow_mut();
        if files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "file exists",
            ));
        }
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
