//! # Quill Architecture
//!
//! Quill creates note files inside a *notebook* (a directory tree marked by a
//! `.quill/` directory) from configurable filename and body templates. Like
//! the rest of the code base, it is a library that happens to have a CLI
//! client, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns notebook, store, clock and template loader          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves options against the notebook configuration      │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Note Pipeline (note/) and Storage (store/)                 │
//! │  - Context, filename generation with retries, body          │
//! │  - NoteStore trait: FileStore, InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Creating a Note
//!
//! 1. The target directory is resolved to a [`model::Dir`] carrying the note
//!    settings of its group ([`notebook`], [`config`]).
//! 2. A [`note::RenderContext`] is built from the request, the current time
//!    ([`clock`]) and an environment snapshot.
//! 3. The filename template is rendered with fresh identifiers ([`id`]) until
//!    the resulting path is free, giving up after [`note::MAX_ATTEMPTS`].
//! 4. The body template (or the raw content) is rendered once, with the final
//!    filename in the context.
//! 5. The note is written with create-if-absent semantics, so a concurrent
//!    writer can never be overwritten.
//!
//! Templates are rendered by the `stencil` workspace crate.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process, and never assumes a terminal. Diagnostics go through `tracing`;
//! the binary decides where they end up.
//!
//! ## Testing Strategy
//!
//! - **Pipeline** (`note/`): deterministic unit tests using scripted ids,
//!   a fixed clock and `InMemoryStore`.
//! - **Commands/API**: tests against a temporary notebook (`test_utils`).
//! - **CLI**: rendering unit tests plus end-to-end tests in `tests/`.

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod note;
pub mod notebook;
pub mod store;
pub mod templates;
pub mod text;

#[cfg(test)]
pub(crate) mod test_utils;
