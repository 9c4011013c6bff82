//! # Note Creation Pipeline
//!
//! Turning a [`CreationRequest`](crate::model::CreationRequest) into a note
//! happens in three steps:
//!
//! 1. **Context** ([`context`]): collect the values templates may reference
//!    (title, content, directory, extra values, timestamp, environment).
//! 2. **Filename** ([`filename`]): render the filename template with fresh
//!    identifiers until a free path is found, at most
//!    [`MAX_ATTEMPTS`](filename::MAX_ATTEMPTS) times.
//! 3. **Body** ([`create`]): render the body template with the final context,
//!    which now includes `filename` and `filename_stem`.
//!
//! The result is a [`CreatedNote`](crate::model::CreatedNote) held in memory;
//! writing it is a separate step ([`create::write_note`]).
//!
//! Every collaborator with side effects (identifiers, clock, filesystem,
//! templates) is passed in, so the pipeline is deterministic under test.

pub mod context;
pub mod create;
pub mod filename;

pub use context::{env_snapshot, RenderContext};
pub use create::{assemble, new_note, write_note, CreateDeps};
pub use filename::{generate_path, MAX_ATTEMPTS};
