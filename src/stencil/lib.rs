//! # Stencil - Strict Templates for Generated Notes
//!
//! A thin layer over [minijinja](https://docs.rs/minijinja) tuned for producing
//! the *text of files*: note filenames and note bodies.
//!
//! ## The Problem
//!
//! Template engines built for web pages are forgiving: a misspelled placeholder
//! quietly renders as an empty string. For generated files that is the wrong
//! default. A filename template with a typo would produce `.md` over and over,
//! and a body template would silently lose fields.
//!
//! ## The Solution
//!
//! Stencil configures minijinja so that:
//! - **Undefined placeholders are errors** (strict undefined behavior)
//! - **Trailing newlines are preserved**, so a body template ending in `\n`
//!   produces a file ending in `\n`
//! - **Note-oriented filters** are always available: `date`, `slug`, `prepend`
//!   and `tojson`
//!
//! ## Quick Example
//!
//! ```rust
//! use serde::Serialize;
//! use stencil::Template;
//!
//! #[derive(Serialize)]
//! struct Context {
//!     title: String,
//! }
//!
//! let template = Template::parse("# {{ title }}\n").unwrap();
//! let output = template.render(&Context { title: "Groceries".into() }).unwrap();
//! assert_eq!(output, "# Groceries\n");
//! ```
//!
//! ## Loading From Disk
//!
//! Body templates usually live in files. [`Template::from_file`] reads and
//! compiles them, reporting a missing file as [`Error::NotFound`] so callers can
//! tell "no such template" apart from "broken template".
//!
//! ## Filters
//!
//! ```jinja
//! {{ now | date("%Y-%m-%d") }}     {# strftime, or a named format #}
//! {{ title | slug }}               {# "Hello World!" -> "hello-world" #}
//! {{ content | prepend("> ") }}    {# quote every line #}
//! {{ extra | tojson }}
//! ```
//!
//! Named date formats: `short`, `medium`, `long`, `full`, `year`, `time`,
//! `timestamp` and `timestamp-unix`. Dates are expected as RFC 3339 strings,
//! which is how `chrono` serializes its `DateTime` values.

use chrono::DateTime;
use minijinja::{Environment, ErrorKind, UndefinedBehavior, Value};
use serde::Serialize;
use std::fmt::Write;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const TEMPLATE_NAME: &str = "_note";

/// Format used by the `date` filter when none is given.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Errors produced while loading or rendering a template.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: template not found", .0.display())]
    NotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid template: {0}")]
    Syntax(#[source] minijinja::Error),

    #[error("cannot render template: {0}")]
    Render(#[source] minijinja::Error),
}

impl Error {
    /// Returns true when rendering failed because a placeholder is not defined.
    pub fn is_undefined(&self) -> bool {
        match self {
            Error::Render(err) | Error::Syntax(err) => err.kind() == ErrorKind::UndefinedError,
            _ => false,
        }
    }
}

/// A compiled template, ready to be rendered any number of times.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use stencil::Template;
///
/// let template = Template::parse("{{ id }}-{{ title | slug }}").unwrap();
///
/// let mut context = HashMap::new();
/// context.insert("id", "x7k2");
/// context.insert("title", "Weekly Review");
/// assert_eq!(template.render(&context).unwrap(), "x7k2-weekly-review");
///
/// // Unknown placeholders fail instead of rendering as empty text.
/// let broken = Template::parse("{{ nope }}").unwrap();
/// assert!(broken.render(&context).unwrap_err().is_undefined());
/// ```
pub struct Template {
    env: Environment<'static>,
}

impl Template {
    /// Compiles a template from its source text.
    ///
    /// Syntax errors are reported here; undefined placeholders are only
    /// detected when rendering.
    pub fn parse(source: &str) -> Result<Self, Error> {
        let mut env = note_environment();
        env.add_template_owned(TEMPLATE_NAME.to_string(), source.to_string())
            .map_err(Error::Syntax)?;
        Ok(Self { env })
    }

    /// Reads and compiles a template file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::NotFound(path.to_path_buf())
            } else {
                Error::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse(&source)
    }

    /// Renders the template with any serializable context.
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(TEMPLATE_NAME).map_err(Error::Render)?;
        tmpl.render(data).map_err(Error::Render)
    }
}

/// Compiles and renders a one-off template.
pub fn render<T: Serialize>(template: &str, data: &T) -> Result<String, Error> {
    Template::parse(template)?.render(data)
}

/// Builds the environment shared by every note template.
fn note_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_filter("date", date_filter);
    env.add_filter("slug", slug_filter);
    env.add_filter("prepend", prepend_filter);
    env
}

fn date_filter(value: Value, format: Option<String>) -> Result<String, minijinja::Error> {
    let raw = value.to_string();
    let date = DateTime::parse_from_rfc3339(&raw).map_err(|err| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("date: cannot parse {raw:?}: {err}"),
        )
    })?;

    let format = match format.as_deref() {
        None => DEFAULT_DATE_FORMAT,
        Some(name) => named_date_format(name).unwrap_or(name),
    };

    // chrono reports invalid specifiers through fmt::Error rather than panicking
    // only when written through `write!`.
    let mut out = String::new();
    write!(out, "{}", date.format(format)).map_err(|_| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("date: invalid format {format:?}"),
        )
    })?;
    Ok(out)
}

fn named_date_format(name: &str) -> Option<&'static str> {
    let format = match name {
        "short" => "%m/%d/%Y",
        "medium" => "%b %d, %Y",
        "long" => "%B %d, %Y",
        "full" => "%A, %B %d, %Y",
        "year" => "%Y",
        "time" => "%H:%M",
        "timestamp" => "%Y%m%d%H%M",
        "timestamp-unix" => "%s",
        _ => return None,
    };
    Some(format)
}

fn slug_filter(value: Value) -> String {
    slugify(&value.to_string())
}

fn prepend_filter(value: Value, prefix: String) -> String {
    let text = value.to_string();
    text.split_inclusive('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect()
}

/// Lowercases `text` and joins its alphanumeric runs with dashes.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
