//! # Storage Layer
//!
//! Note creation touches the filesystem in exactly two places: asking whether a
//! candidate path is free, and writing the finished note. Both go through the
//! [`NoteStore`] trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage on the real filesystem
//!   - A path is free when *no entry of any kind* exists there
//!   - Writes create missing parent directories and never replace an existing
//!     file (create-if-absent)
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - Records every validation so tests can count them
//!   - Paths can be pre-occupied or made to fail validation
//!
//! ## Check, Then Write
//!
//! Validation and writing are separate calls, so another process may take a
//! path in between. Because writes are create-if-absent, that race surfaces as
//! an `AlreadyExists` error from [`NoteStore::write_new`] rather than a lost
//! note.

use std::io;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait NoteStore {
    /// Returns true when nothing exists at `path`.
    fn is_free(&self, path: &Path) -> io::Result<bool>;

    /// Writes a new file, failing with `AlreadyExists` if `path` is taken.
    fn write_new(&self, path: &Path, content: &str) -> io::Result<()>;
}
