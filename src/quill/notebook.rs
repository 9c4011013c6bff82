//! # Notebooks
//!
//! A notebook is a directory tree containing a `.quill/` directory:
//!
//! ```text
//! <root>/.quill/config.json     settings (see `config`)
//! <root>/.quill/templates/      notebook templates
//! <root>/**                     notes
//! ```
//!
//! ## Discovery
//!
//! [`find_notebook_root`] walks up from the working directory until it finds a
//! directory holding `.quill/`. The walk stops at the user's home directory
//! or the filesystem root. The CLI lets `--notebook-dir` (or
//! `QUILL_NOTEBOOK_DIR`) bypass discovery entirely.
//!
//! ## Templates
//!
//! Relative body template paths are searched in the notebook's
//! `.quill/templates/` first, then in the user's global template directory
//! (`<config dir>/quill/templates`, resolved with the `directories` crate).
//!
//! ## Target directories
//!
//! [`Notebook::dir`] turns a notebook-relative path into a [`Dir`] carrying the
//! note settings of the group it belongs to. Paths are normalized lexically
//! and must stay inside the notebook.

use crate::config::QuillConfig;
use crate::error::{QuillError, Result};
use crate::model::Dir;
use crate::templates::{TemplateDirs, TemplateLocator};
use directories::{BaseDirs, ProjectDirs};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const NOTEBOOK_DIR: &str = ".quill";
const TEMPLATES_DIR: &str = "templates";

/// Find the notebook root by walking up from cwd looking for a `.quill`
/// directory. Returns None when none is found before reaching home or root.
pub fn find_notebook_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(NOTEBOOK_DIR).is_dir() {
            return Some(current);
        }

        // Check stop conditions: reached home dir or volume root
        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// The user-wide template directory, if the platform has a config dir.
pub fn global_template_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "quill").map(|dirs| dirs.config_dir().join(TEMPLATES_DIR))
}

/// Creates `.quill/config.json` and `.quill/templates/` under `root`.
pub fn init(root: &Path) -> Result<PathBuf> {
    let config_dir = root.join(NOTEBOOK_DIR);
    if config_dir.exists() {
        return Err(QuillError::Api(format!(
            "{}: notebook already initialized",
            root.display()
        )));
    }

    QuillConfig::default().save(&config_dir)?;
    fs::create_dir_all(config_dir.join(TEMPLATES_DIR))?;
    Ok(config_dir)
}

#[derive(Debug, Clone)]
pub struct Notebook {
    root: PathBuf,
    config: QuillConfig,
    templates: TemplateDirs,
}

impl Notebook {
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .map_err(|_| QuillError::NotebookNotFound(root.to_path_buf()))?;
        let config_dir = root.join(NOTEBOOK_DIR);
        if !config_dir.is_dir() {
            return Err(QuillError::NotebookNotFound(root));
        }

        let config = QuillConfig::load(&config_dir)?;
        let mut template_dirs = vec![config_dir.join(TEMPLATES_DIR)];
        template_dirs.extend(global_template_dir());
        debug!(root = %root.display(), "opened notebook");

        Ok(Self {
            root,
            config,
            templates: TemplateDirs(template_dirs),
        })
    }

    /// Opens the notebook enclosing `cwd`.
    pub fn find(cwd: &Path) -> Result<Self> {
        match find_notebook_root(cwd) {
            Some(root) => Self::open(root),
            None => Err(QuillError::NotebookNotFound(cwd.to_path_buf())),
        }
    }

    pub fn config(&self) -> &QuillConfig {
        &self.config
    }

    /// Resolves a target directory for new notes.
    ///
    /// `path` is relative to the notebook root (absolute paths must point
    /// inside it); `None` is the root itself. `group` forces a group instead
    /// of looking it up from the directory.
    pub fn dir(&self, path: Option<&Path>, group: Option<&str>) -> Result<Dir> {
        let full = match path {
            Some(path) => normalize(&self.root.join(path)),
            None => self.root.clone(),
        };
        let relative = full.strip_prefix(&self.root).map_err(|_| {
            QuillError::Api(format!("{}: not inside the notebook", full.display()))
        })?;

        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let (note, extra) = self.config.note_settings(group, &name)?;

        Ok(Dir::new(name, full, note).with_extra(extra))
    }
}

impl TemplateLocator for Notebook {
    fn locate_template(&self, path: &str) -> Option<PathBuf> {
        self.templates.locate_template(path)
    }
}

/// Resolves `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
