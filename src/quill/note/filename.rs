use super::RenderContext;
use crate::error::{CreateError, NoteExists};
use crate::model::Dir;
use crate::store::NoteStore;
use crate::templates::Renderer;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// How many identifiers are tried before giving up on a free filename.
pub const MAX_ATTEMPTS: usize = 50;

/// Finds a free path for a new note in `dir`.
///
/// Each attempt renders the filename template with a fresh identifier. A
/// render or validation failure aborts immediately; only occupied paths are
/// retried. On success the returned context carries the identifier, filename
/// and filename stem of the accepted path. `base` is never modified.
pub fn generate_path(
    base: &RenderContext,
    dir: &Dir,
    template: &dyn Renderer,
    gen_id: &mut dyn FnMut() -> String,
    store: &dyn NoteStore,
) -> Result<(PathBuf, RenderContext), CreateError> {
    let mut last_attempt = (PathBuf::new(), PathBuf::new());

    for attempt in 1..=MAX_ATTEMPTS {
        let context = base.with_id(gen_id());
        let rendered = template.render(&context).map_err(CreateError::Render)?;
        let filename = with_extension(rendered, &dir.note.extension);
        if escapes_dir(&filename) {
            return Err(CreateError::InvalidFilename { filename });
        }
        let path = dir.path.join(&filename);
        debug!(attempt, path = %path.display(), "trying note path");

        let free = store
            .is_free(&path)
            .map_err(|source| CreateError::Validation {
                path: path.clone(),
                source,
            })?;
        if free {
            info!(path = %path.display(), attempts = attempt, "accepted note path");
            let context = context.accepted(&path);
            return Ok((path, context));
        }

        last_attempt = (Path::new(&dir.name).join(&filename), path);
    }

    let (name, path) = last_attempt;
    warn!(
        path = %path.display(),
        attempts = MAX_ATTEMPTS,
        "no free note path, giving up"
    );
    Err(NoteExists { name, path }.into())
}

/// True when joining `filename` onto a directory could leave that directory.
fn escapes_dir(filename: &str) -> bool {
    Path::new(filename).components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    })
}

fn with_extension(filename: String, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        filename
    } else {
        format!("{filename}.{extension}")
    }
}
