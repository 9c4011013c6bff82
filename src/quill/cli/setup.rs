use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// "0.3.0" for releases, "0.3.0@abc1234 2024-01-15" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "quill", bin_name = "quill", version = get_version())]
#[command(about = "Create notes from templates inside a notebook", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Notebook root (skips searching parent directories)
    #[arg(long, global = true, env = "QUILL_NOTEBOOK_DIR", value_name = "DIR")]
    pub notebook_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(visible_alias = "n")]
    New(NewArgs),

    /// Create a notebook in DIR (default: current directory)
    Init {
        dir: Option<PathBuf>,
    },

    /// Inspect the notebook configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Directory for the note, relative to the notebook root
    pub dir: Option<PathBuf>,

    /// Note title (defaults to the configured default title)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Extra template value, may be repeated
    #[arg(long = "extra", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub extra: Vec<(String, String)>,

    /// Body template to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub template: Option<String>,

    /// Use this group's settings regardless of the directory
    #[arg(long, value_name = "NAME")]
    pub group: Option<String>,

    /// Print the note instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print only the path of the created note
    #[arg(short = 'p', long)]
    pub print_path: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// List command aliases
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// name, full, json, jsonl, or a template using {{ name }} and {{ command }}
    #[arg(short, long, default_value = "name")]
    pub format: String,

    /// Text printed before the list
    #[arg(long)]
    pub header: Option<String>,

    /// Text printed after the list [default: \n]
    #[arg(long)]
    pub footer: Option<String>,

    /// Text printed between entries [default: \n]
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Do not pipe the output through a pager
    #[arg(short = 'P', long)]
    pub no_pager: bool,

    /// Do not print the number of aliases found
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {raw:?}")),
    }
}
