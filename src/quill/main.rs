//! # Quill CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! cli/setup.rs     clap argument definitions
//! cli/commands.rs  logging setup, notebook discovery, dispatch to the API
//! cli/render.rs    turning `CmdResult` values into terminal text
//! cli/pager.rs     piping long output through the user's pager
//! cli/styles.rs    terminal styles
//! ```
//!
//! Everything from the `quill` library's `api` inward is UI agnostic; all
//! user-facing concerns (argument parsing, stdin, exit codes, colors) stay
//! here.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
