use crate::model::CreationRequest;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Values that filename and body templates can reference.
///
/// `filename` and `filename_stem` stay empty while a path is being generated
/// and are filled in together once a path is accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    pub id: String,
    pub title: String,
    pub content: String,
    pub dir: String,
    pub filename: String,
    pub filename_stem: String,
    pub extra: BTreeMap<String, String>,
    pub now: DateTime<Local>,
    pub env: HashMap<String, String>,
}

impl RenderContext {
    /// Builds the initial context for a creation request.
    pub fn build(
        request: &CreationRequest,
        now: DateTime<Local>,
        env: HashMap<String, String>,
    ) -> Self {
        let title = request
            .title
            .clone()
            .unwrap_or_else(|| request.dir.note.default_title.clone());

        Self {
            id: String::new(),
            title,
            content: request.content.clone().unwrap_or_default(),
            dir: request.dir.name.clone(),
            filename: String::new(),
            filename_stem: String::new(),
            extra: request.dir.extra.clone(),
            now,
            env,
        }
    }

    /// A copy of this context for one generation attempt.
    pub(crate) fn with_id(&self, id: String) -> Self {
        Self {
            id,
            filename: String::new(),
            filename_stem: String::new(),
            ..self.clone()
        }
    }

    /// Records the accepted note path.
    pub(crate) fn accepted(mut self, path: &Path) -> Self {
        self.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.filename_stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        self
    }
}

/// Snapshot of the process environment, taken once per note.
///
/// Variables whose name or value is not valid Unicode are skipped.
pub fn env_snapshot() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
