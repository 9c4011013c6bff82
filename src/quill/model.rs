use crate::config::NoteConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A notebook directory that receives new notes, with the settings that apply
/// to it once groups have been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dir {
    /// Path relative to the notebook root, `""` for the root itself.
    pub name: String,
    pub path: PathBuf,
    pub note: NoteConfig,
    pub extra: BTreeMap<String, String>,
}

impl Dir {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, note: NoteConfig) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            note,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }
}

/// What the caller asks for when creating a note.
///
/// `title: None` means "use the directory's default title"; `Some("")` is an
/// explicit empty title and is kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationRequest {
    pub dir: Dir,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreationRequest {
    pub fn new(dir: Dir) -> Self {
        Self {
            dir,
            title: None,
            content: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// A fully rendered note that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedNote {
    pub path: PathBuf,
    pub content: String,
}

/// A named command shortcut from the notebook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub name: String,
    pub command: String,
}
