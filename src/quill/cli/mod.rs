//! # CLI Behavior
//!
//! This is **one possible UI client** for quill, not the application itself.
//!
//! ## Finding the Notebook
//!
//! `--notebook-dir` (or `QUILL_NOTEBOOK_DIR`) names the notebook root
//! explicitly. Without it the notebook is found by walking up from the
//! working directory. `quill init` is the only command that works outside a
//! notebook.
//!
//! ## Note Content
//!
//! `quill new` reads the note content from stdin when stdin is not a
//! terminal, so `echo "- milk" | quill new shopping` works. Interactive runs
//! start with empty content.
//!
//! ## Output Channels
//!
//! Command output goes to stdout; logs (`-v`, `QUILL_LOG`) go to stderr.
//! `--print-path` reduces the output of `new` to the created path, for use in
//! scripts such as `$EDITOR "$(quill new -p)"`.

mod commands;
mod pager;
mod render;
mod setup;
mod styles;

pub use commands::run;
