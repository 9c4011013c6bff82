use crate::error::{QuillError, Result};
use crate::id::IdOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILENAME_TEMPLATE: &str = "{{ id }}";
const DEFAULT_EXTENSION: &str = "md";
const DEFAULT_TITLE: &str = "Untitled";

/// Notebook configuration, stored in `.quill/config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuillConfig {
    /// Settings for notes created outside of any group
    #[serde(default)]
    pub note: NoteConfig,

    /// Free-form values exposed to templates as `extra`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,

    /// Named groups of directories sharing note settings
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<String, GroupConfig>,

    /// Command aliases, `name -> command`
    #[serde(default, rename = "alias", skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

/// How new notes are named and filled in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteConfig {
    /// Template rendered into the filename, without extension
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Extension appended to the rendered filename (e.g. "md")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Body template path, absolute or relative to a template directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Title used when none is given
    #[serde(default = "default_title")]
    pub default_title: String,

    #[serde(default)]
    pub id: IdOptions,
}

fn default_filename() -> String {
    DEFAULT_FILENAME_TEMPLATE.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            extension: default_extension(),
            template: None,
            default_title: default_title(),
            id: IdOptions::default(),
        }
    }
}

impl NoteConfig {
    /// Returns a copy with every field set in `overrides` replaced.
    pub fn merged(&self, overrides: &NoteOverrides) -> NoteConfig {
        NoteConfig {
            filename: overrides
                .filename
                .clone()
                .unwrap_or_else(|| self.filename.clone()),
            extension: overrides
                .extension
                .clone()
                .unwrap_or_else(|| self.extension.clone()),
            template: overrides.template.clone().or_else(|| self.template.clone()),
            default_title: overrides
                .default_title
                .clone()
                .unwrap_or_else(|| self.default_title.clone()),
            id: overrides.id.clone().unwrap_or_else(|| self.id.clone()),
        }
    }
}

/// Group-level note settings; unset fields fall back to the notebook's.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<IdOptions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupConfig {
    /// Notebook-relative directories that belong to this group
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub note: NoteOverrides,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl QuillConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuillError::Io)?;
        let config: QuillConfig =
            serde_json::from_str(&content).map_err(QuillError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuillError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuillError::Serialization)?;
        fs::write(config_path, content).map_err(QuillError::Io)?;
        Ok(())
    }

    /// Finds the group claiming a notebook-relative directory.
    ///
    /// Groups are checked in name order; the first match wins.
    pub fn group_for_dir(&self, dir_name: &str) -> Option<&str> {
        let dir_name = dir_name.trim_matches('/');
        self.groups
            .iter()
            .find(|(_, group)| {
                group
                    .paths
                    .iter()
                    .any(|path| path.trim_matches('/') == dir_name)
            })
            .map(|(name, _)| name.as_str())
    }

    /// Resolves the note settings and extra values for a directory.
    ///
    /// An explicit `group` must exist; otherwise the group is looked up from
    /// the directory name, falling back to the notebook-wide settings.
    pub fn note_settings(
        &self,
        group: Option<&str>,
        dir_name: &str,
    ) -> Result<(NoteConfig, BTreeMap<String, String>)> {
        let group_name = match group {
            Some(name) => Some(name),
            None => self.group_for_dir(dir_name),
        };

        let mut extra = self.extra.clone();
        let note = match group_name {
            None => self.note.clone(),
            Some(name) => {
                let group = self
                    .groups
                    .get(name)
                    .ok_or_else(|| QuillError::Config(format!("no group named {name:?}")))?;
                extra.extend(group.extra.clone());
                self.note.merged(&group.note)
            }
        };
        Ok((note, extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Charset;

    fn journal_config() -> QuillConfig {
        let json = r#"{
            "note": { "template": "default.md" },
            "extra": { "author": "Ada", "kind": "note" },
            "groups": {
                "journal": {
                    "paths": ["journal/daily", "journal/weekly/"],
                    "note": { "filename": "{{ now | date(\"%Y-%m-%d\") }}", "default_title": "Daily" },
                    "extra": { "kind": "daily" }
                }
            },
            "alias": { "daily": "quill new journal/daily" }
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = QuillConfig::default();
        assert_eq!(config.note.filename, "{{ id }}");
        assert_eq!(config.note.extension, "md");
        assert_eq!(config.note.template, None);
        assert_eq!(config.note.default_title, "Untitled");
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: QuillConfig =
            serde_json::from_str(r#"{ "note": { "extension": "txt" } }"#).unwrap();
        assert_eq!(config.note.extension, "txt");
        assert_eq!(config.note.filename, "{{ id }}");
        assert_eq!(config.note.id.charset, Charset::Alphanum);
    }

    #[test]
    fn test_group_for_dir() {
        let config = journal_config();
        assert_eq!(config.group_for_dir("journal/daily"), Some("journal"));
        assert_eq!(config.group_for_dir("journal/weekly"), Some("journal"));
        assert_eq!(config.group_for_dir("journal"), None);
        assert_eq!(config.group_for_dir(""), None);
    }

    #[test]
    fn test_note_settings_root() {
        let config = journal_config();
        let (note, extra) = config.note_settings(None, "").unwrap();
        assert_eq!(note, config.note);
        assert_eq!(extra.get("kind").map(String::as_str), Some("note"));
    }

    #[test]
    fn test_note_settings_group_overrides() {
        let config = journal_config();
        let (note, extra) = config.note_settings(None, "journal/daily").unwrap();

        assert_eq!(note.filename, "{{ now | date(\"%Y-%m-%d\") }}");
        assert_eq!(note.default_title, "Daily");
        // Inherited from the notebook settings
        assert_eq!(note.extension, "md");
        assert_eq!(note.template.as_deref(), Some("default.md"));

        assert_eq!(extra.get("kind").map(String::as_str), Some("daily"));
        assert_eq!(extra.get("author").map(String::as_str), Some("Ada"));
    }

    #[test]
    fn test_explicit_group_wins() {
        let config = journal_config();
        let (note, _) = config.note_settings(Some("journal"), "elsewhere").unwrap();
        assert_eq!(note.default_title, "Daily");
    }

    #[test]
    fn test_unknown_group_is_an_error() {
        let config = journal_config();
        let result = config.note_settings(Some("nope"), "");
        assert!(matches!(result, Err(QuillError::Config(_))));
    }

    #[test]
    fn test_aliases_parsed() {
        let config = journal_config();
        assert_eq!(
            config.aliases.get("daily").map(String::as_str),
            Some("quill new journal/daily")
        );
        assert_eq!(config.aliases.len(), 1);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = QuillConfig::load(temp_dir.path().join(".quill")).unwrap();
        assert_eq!(config, QuillConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join(".quill");

        let config = journal_config();
        config.save(&config_dir).unwrap();

        let loaded = QuillConfig::load(&config_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let result = QuillConfig::load(temp_dir.path());
        assert!(matches!(result, Err(QuillError::Serialization(_))));
    }
}
