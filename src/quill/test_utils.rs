use crate::config::{NoteConfig, QuillConfig};
use crate::model::Dir;
use crate::notebook::Notebook;
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The instant every test clock is frozen at: 2024-03-09 14:05 local time.
pub fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 9, 14, 5, 0)
        .single()
        .expect("unambiguous local time")
}

/// A notebook-root directory with default note settings.
pub fn root_dir(path: impl Into<PathBuf>) -> Dir {
    Dir::new("", path, NoteConfig::default())
}

/// Yields the given ids in order, repeating the last one forever.
pub fn sequence_ids(ids: &[&str]) -> impl FnMut() -> String {
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let mut next = 0;
    move || {
        let id = ids[next.min(ids.len() - 1)].clone();
        next += 1;
        id
    }
}

pub struct TestNotebook {
    // Keeps the directory alive for the duration of the test
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestNotebook {
    fn default() -> Self {
        Self::new()
    }
}

impl TestNotebook {
    pub fn new() -> Self {
        Self::with_config(&QuillConfig::default())
    }

    pub fn with_config(config: &QuillConfig) -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("failed to resolve temp dir");
        config
            .save(root.join(".quill"))
            .expect("failed to write config");
        fs::create_dir_all(root.join(".quill").join("templates"))
            .expect("failed to create template dir");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn add_template(&self, name: &str, source: &str) -> &Self {
        let path = self.root.join(".quill").join("templates").join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create template dir");
        }
        fs::write(path, source).expect("failed to write template");
        self
    }

    pub fn add_note(&self, relative: impl AsRef<Path>, content: &str) -> &Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create note dir");
        }
        fs::write(path, content).expect("failed to write note");
        self
    }

    pub fn open(&self) -> Notebook {
        Notebook::open(&self.root).expect("failed to open notebook")
    }
}
