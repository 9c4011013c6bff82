//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for quill operations, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Owns the collaborators** commands need (notebook, store, clock, template loader)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never writes to stdout/stderr and holds no business logic.
//!
//! ## Generic Over Storage and Time
//!
//! `QuillApi<S: NoteStore, C: Clock>`:
//! - Production: `QuillApi<FileStore, SystemClock>`
//! - Testing: `QuillApi<InMemoryStore, FixedClock>`
//!
//! API tests check dispatch and return shapes; the note pipeline itself is
//! tested in `note/`.

use crate::clock::Clock;
use crate::commands;
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::NoteStore;
use crate::templates::StencilLoader;
use std::path::Path;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NewNoteOptions};

/// The main API facade for quill operations.
pub struct QuillApi<S: NoteStore, C: Clock> {
    notebook: Notebook,
    store: S,
    clock: C,
    loader: StencilLoader,
}

impl<S: NoteStore, C: Clock> QuillApi<S, C> {
    pub fn new(notebook: Notebook, store: S, clock: C) -> Self {
        Self {
            notebook,
            store,
            clock,
            loader: StencilLoader,
        }
    }

    pub fn new_note(&self, options: NewNoteOptions) -> Result<CmdResult> {
        commands::new::run(
            &self.notebook,
            &self.loader,
            &self.store,
            &self.clock,
            options,
        )
    }

    pub fn list_aliases(&self) -> Result<CmdResult> {
        commands::config::list_aliases(self.notebook.config())
    }
}

/// Creates a notebook at `root`. Needs no open notebook, so it lives outside
/// [`QuillApi`].
pub fn init(root: &Path) -> Result<CmdResult> {
    commands::init::run(root)
}
