use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("new note: {0}")]
    NewNote(#[from] CreateError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{}: not inside a notebook (run `quill init` first)", .0.display())]
    NotebookNotFound(PathBuf),

    #[error("Api Error: {0}")]
    Api(String),
}

impl QuillError {
    /// True when note creation gave up because every generated path was taken.
    pub fn is_note_exists(&self) -> bool {
        matches!(self, QuillError::NewNote(CreateError::NoteExists(_)))
    }
}

/// Failures of the note creation pipeline.
///
/// Only [`CreateError::NoteExists`] is the outcome of retrying; every other
/// variant aborts creation on first occurrence.
#[derive(Error, Debug)]
pub enum CreateError {
    #[error("{template}: cannot find template")]
    TemplateNotFound { template: String },

    #[error("{template}: {source}")]
    TemplateLoad {
        template: String,
        #[source]
        source: stencil::Error,
    },

    #[error("{0}")]
    Render(#[source] stencil::Error),

    #[error("{filename}: rendered filename leaves the note directory")]
    InvalidFilename { filename: String },

    #[error("{}: {source}", .path.display())]
    Validation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    NoteExists(#[from] NoteExists),

    #[error("{}: cannot write note: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Every candidate filename was already taken.
///
/// `name` is the notebook-relative name of the last candidate and `path` its
/// full path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: note already exists", .path.display())]
pub struct NoteExists {
    pub name: PathBuf,
    pub path: PathBuf,
}

pub type Result<T> = std::result::Result<T, QuillError>;
