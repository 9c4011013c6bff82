use super::context::{env_snapshot, RenderContext};
use super::filename::generate_path;
use crate::clock::Clock;
use crate::error::{CreateError, NoteExists, Result};
use crate::id::IdGenerator;
use crate::model::{CreatedNote, CreationRequest, Dir};
use crate::store::NoteStore;
use crate::templates::{ContentRenderer, Renderer, TemplateLoader, TemplateLocator};
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Everything [`assemble`] needs besides the request itself.
pub struct CreateDeps<'a> {
    pub filename_template: &'a dyn Renderer,
    pub body_template: &'a dyn Renderer,
    pub gen_id: &'a mut dyn FnMut() -> String,
    pub store: &'a dyn NoteStore,
    pub now: DateTime<Local>,
    pub env: HashMap<String, String>,
}

/// Builds the note in memory: context, free path, then body.
pub fn assemble(
    request: &CreationRequest,
    deps: CreateDeps<'_>,
) -> std::result::Result<CreatedNote, CreateError> {
    let base = RenderContext::build(request, deps.now, deps.env);
    let (path, context) = generate_path(
        &base,
        &request.dir,
        deps.filename_template,
        deps.gen_id,
        deps.store,
    )?;

    let content = deps
        .body_template
        .render(&context)
        .map_err(CreateError::Render)?;

    Ok(CreatedNote { path, content })
}

/// Resolves the directory's templates and assembles a new note.
///
/// Nothing is written. Errors are reported as `QuillError::NewNote`.
pub fn new_note(
    request: &CreationRequest,
    locator: &dyn TemplateLocator,
    loader: &dyn TemplateLoader,
    store: &dyn NoteStore,
    clock: &dyn Clock,
) -> Result<CreatedNote> {
    let note = &request.dir.note;

    let filename_template =
        loader
            .load(&note.filename)
            .map_err(|source| CreateError::TemplateLoad {
                template: note.filename.clone(),
                source,
            })?;
    let body_template = load_body_template(note.template.as_deref(), locator, loader)?;

    let generator = IdGenerator::new(&note.id);
    let mut gen_id = || generator.generate();

    let created = assemble(
        request,
        CreateDeps {
            filename_template: &*filename_template,
            body_template: &*body_template,
            gen_id: &mut gen_id,
            store,
            now: clock.now(),
            env: env_snapshot(),
        },
    )?;
    Ok(created)
}

fn load_body_template(
    template: Option<&str>,
    locator: &dyn TemplateLocator,
    loader: &dyn TemplateLoader,
) -> std::result::Result<Box<dyn Renderer>, CreateError> {
    let template = match template {
        Some(template) if !template.is_empty() => template,
        _ => return Ok(Box::new(ContentRenderer)),
    };

    let path = locator
        .locate_template(template)
        .ok_or_else(|| CreateError::TemplateNotFound {
            template: template.to_string(),
        })?;
    debug!(template, path = %path.display(), "using body template");

    loader.load_file(&path).map_err(|source| match source {
        stencil::Error::NotFound(_) => CreateError::TemplateNotFound {
            template: template.to_string(),
        },
        source => CreateError::TemplateLoad {
            template: template.to_string(),
            source,
        },
    })
}

/// Writes a note produced by [`new_note`].
///
/// `dir` is the directory the note was created for. A path taken since it
/// was validated is reported as `NoteExists`; the existing file is left alone.
pub fn write_note(note: &CreatedNote, dir: &Dir, store: &dyn NoteStore) -> Result<()> {
    store
        .write_new(&note.path, &note.content)
        .map_err(|source| write_error(note, dir, source))?;
    info!(path = %note.path.display(), bytes = note.content.len(), "wrote note");
    Ok(())
}

fn write_error(note: &CreatedNote, dir: &Dir, source: io::Error) -> CreateError {
    let path = note.path.clone();
    if source.kind() == io::ErrorKind::AlreadyExists {
        let filename = note.path.strip_prefix(&dir.path).unwrap_or(&note.path);
        CreateError::NoteExists(NoteExists {
            name: Path::new(&dir.name).join(filename),
            path,
        })
    } else {
        CreateError::Write { path, source }
    }
}
