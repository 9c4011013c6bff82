use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CreationRequest;
use crate::note::{new_note, write_note};
use crate::notebook::Notebook;
use crate::store::NoteStore;
use crate::templates::TemplateLoader;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct NewNoteOptions {
    /// Target directory, relative to the notebook root
    pub dir: Option<PathBuf>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub group: Option<String>,
    /// Body template replacing the configured one
    pub template: Option<String>,
    /// Values merged over the configured `extra`
    pub extra: BTreeMap<String, String>,
    pub dry_run: bool,
}

pub fn run(
    notebook: &Notebook,
    loader: &dyn TemplateLoader,
    store: &dyn NoteStore,
    clock: &dyn Clock,
    options: NewNoteOptions,
) -> Result<CmdResult> {
    let mut dir = notebook.dir(options.dir.as_deref(), options.group.as_deref())?;
    dir.extra.extend(options.extra);
    if let Some(template) = options.template {
        dir.note.template = Some(template);
    }

    let request = CreationRequest {
        dir,
        title: options.title,
        content: options.content,
    };
    let note = new_note(&request, notebook, loader, store, clock)?;

    let mut result = CmdResult::default();
    if options.dry_run {
        result.add_message(CmdMessage::info(format!(
            "Dry run: {} was not written",
            note.path.display()
        )));
    } else {
        write_note(&note, &request.dir, store)?;
        result.add_message(CmdMessage::success(format!(
            "Created {}",
            note.path.display()
        )));
    }
    Ok(result.with_created(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::{NoteConfig, QuillConfig};
    use crate::id::{Charset, IdOptions};
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use crate::templates::StencilLoader;
    use crate::test_utils::{fixed_now, TestNotebook};

    fn config_with(note: NoteConfig) -> QuillConfig {
        QuillConfig {
            note,
            ..Default::default()
        }
    }

    fn run_new(env: &TestNotebook, store: &InMemoryStore, options: NewNoteOptions) -> Result<CmdResult> {
        run(
            &env.open(),
            &StencilLoader,
            store,
            &FixedClock(fixed_now()),
            options,
        )
    }

    #[test]
    fn test_new_writes_note() {
        let env = TestNotebook::new();
        let store = InMemoryStore::new();

        let result = run_new(
            &env,
            &store,
            NewNoteOptions {
                content: Some("hello\n".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let note = result.created.unwrap();
        assert_eq!(note.path.parent(), Some(env.root.as_path()));
        assert_eq!(store.read(&note.path).as_deref(), Some("hello\n"));
        assert_eq!(result.messages, [CmdMessage::success(format!("Created {}", note.path.display()))]);
    }

    #[test]
    fn test_new_dry_run_writes_nothing() {
        let env = TestNotebook::new();
        let store = InMemoryStore::new();

        let result = run_new(
            &env,
            &store,
            NewNoteOptions {
                dry_run: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert!(result.created.is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_new_in_subdirectory_with_template_and_extra() {
        let env = TestNotebook::with_config(&config_with(NoteConfig {
            filename: "{{ title | slug }}".into(),
            id: IdOptions {
                charset: Charset::Numbers,
                ..Default::default()
            },
            ..Default::default()
        }));
        env.add_template("meeting.md", "# {{ title }} ({{ extra.room }}) in {{ dir }}\n");
        let store = InMemoryStore::new();

        let mut extra = BTreeMap::new();
        extra.insert("room".to_string(), "B12".to_string());
        let result = run_new(
            &env,
            &store,
            NewNoteOptions {
                dir: Some("work/meetings".into()),
                title: Some("Weekly Sync".into()),
                template: Some("meeting.md".into()),
                extra,
                ..Default::default()
            },
        )
        .unwrap();

        let note = result.created.unwrap();
        assert_eq!(note.path, env.root.join("work").join("meetings").join("weekly-sync.md"));
        assert_eq!(note.content, "# Weekly Sync (B12) in work/meetings\n");
    }

    #[test]
    fn test_new_collision_is_reported() {
        let env = TestNotebook::with_config(&config_with(NoteConfig {
            filename: "inbox".into(),
            ..Default::default()
        }));
        let store = InMemoryStore::new().with_file(env.root.join("inbox.md"), "old");

        let err = run_new(&env, &store, NewNoteOptions::default()).unwrap_err();
        assert!(err.is_note_exists());
        assert_eq!(store.read(&env.root.join("inbox.md")).as_deref(), Some("old"));
    }

    #[test]
    fn test_new_on_disk_keeps_existing_note() {
        let env = TestNotebook::with_config(&config_with(NoteConfig {
            filename: "inbox".into(),
            ..Default::default()
        }));
        env.add_note("work/inbox.md", "old");

        let err = run(
            &env.open(),
            &StencilLoader,
            &FileStore::new(),
            &FixedClock(fixed_now()),
            NewNoteOptions {
                dir: Some("work".into()),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(err.is_note_exists());
        let kept = std::fs::read_to_string(env.root.join("work/inbox.md")).unwrap();
        assert_eq!(kept, "old");
    }

    #[test]
    fn test_new_uses_default_title() {
        let env = TestNotebook::with_config(&config_with(NoteConfig {
            filename: "{{ title }}".into(),
            default_title: "Inbox".into(),
            ..Default::default()
        }));
        let store = InMemoryStore::new();

        let result = run_new(&env, &store, NewNoteOptions::default()).unwrap();
        assert_eq!(result.created.unwrap().path, env.root.join("Inbox.md"));
    }
}
