use super::pager;
use super::render::{
    eprint_messages, print_messages, render_alias_list, AliasFormat, ListDecorations,
};
use super::setup::{Cli, Commands, ConfigCommands, ListArgs, NewArgs};
use clap::Parser;
use quill::api::{self, NewNoteOptions, QuillApi};
use quill::clock::SystemClock;
use quill::error::Result;
use quill::notebook::Notebook;
use quill::store::fs::FileStore;
use quill::text::pluralize;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Api = QuillApi<FileStore, SystemClock>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { dir } => handle_init(&cwd, dir),
        Commands::New(args) => {
            let api = init_api(&cwd, cli.notebook_dir)?;
            handle_new(&api, args)
        }
        Commands::Config(ConfigCommands::List(args)) => {
            let api = init_api(&cwd, cli.notebook_dir)?;
            handle_alias_list(&api, args)
        }
    }
}

/// Logs go to stderr. `QUILL_LOG` takes precedence over `RUST_LOG`; without
/// either, only warnings are shown unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "quill=debug" } else { "quill=warn" };
    let env_filter = std::env::var("QUILL_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false);

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init();
}

fn init_api(cwd: &Path, notebook_dir: Option<PathBuf>) -> Result<Api> {
    let notebook = match notebook_dir {
        Some(dir) => Notebook::open(cwd.join(dir))?,
        None => Notebook::find(cwd)?,
    };
    Ok(QuillApi::new(notebook, FileStore::new(), SystemClock))
}

fn handle_init(cwd: &Path, dir: Option<PathBuf>) -> Result<()> {
    let root = match dir {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };
    std::fs::create_dir_all(&root)?;

    let result = api::init(&root)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(api: &Api, args: NewArgs) -> Result<()> {
    let options = NewNoteOptions {
        dir: args.dir,
        // An empty title means "no title" on the command line
        title: args.title.filter(|title| !title.is_empty()),
        content: read_piped_stdin()?,
        group: args.group,
        template: args.template,
        extra: args.extra.into_iter().collect(),
        dry_run: args.dry_run,
    };

    let result = api.new_note(options)?;

    if let Some(note) = &result.created {
        if args.dry_run {
            print!("{}", note.content);
            eprint_messages(&result.messages);
            return Ok(());
        }
        if args.print_path {
            println!("{}", note.path.display());
            return Ok(());
        }
    }

    print_messages(&result.messages);
    Ok(())
}

/// Content piped into the command, if any.
fn read_piped_stdin() -> Result<Option<String>> {
    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(Some(buffer).filter(|content| !content.is_empty()))
}

fn handle_alias_list(api: &Api, args: ListArgs) -> Result<()> {
    let result = api.list_aliases()?;

    let format = AliasFormat::parse(&args.format);
    let output = render_alias_list(
        &result.aliases,
        &format,
        ListDecorations {
            header: args.header.as_deref(),
            footer: args.footer.as_deref(),
            delimiter: args.delimiter.as_deref(),
        },
    )?;
    pager::page(&output, !args.no_pager)?;

    if !args.quiet {
        eprintln!(
            "Found {}",
            pluralize(result.aliases.len(), "alias", "aliases")
        );
    }
    Ok(())
}
