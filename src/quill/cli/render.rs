use super::styles;
use quill::api::{CmdMessage, MessageLevel};
use quill::error::{QuillError, Result};
use quill::model::Alias;
use quill::text::expand_whitespace_literals;

/// How `config list` prints each alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasFormat {
    Name,
    Full,
    Json,
    Jsonl,
    /// A template rendered once per alias with `name` and `command`.
    Custom(String),
}

impl AliasFormat {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "name" => AliasFormat::Name,
            "full" => AliasFormat::Full,
            "json" => AliasFormat::Json,
            "jsonl" => AliasFormat::Jsonl,
            other => AliasFormat::Custom(expand_whitespace_literals(other)),
        }
    }

    fn is_json(&self) -> bool {
        matches!(self, AliasFormat::Json | AliasFormat::Jsonl)
    }
}

/// User-supplied text around and between list entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListDecorations<'a> {
    pub header: Option<&'a str>,
    pub footer: Option<&'a str>,
    pub delimiter: Option<&'a str>,
}

pub fn render_alias_list(
    aliases: &[Alias],
    format: &AliasFormat,
    decorations: ListDecorations<'_>,
) -> Result<String> {
    let customized = decorations.header.is_some()
        || decorations.footer.is_some()
        || decorations.delimiter.is_some();
    if format.is_json() && customized {
        return Err(QuillError::Api(
            "--header, --footer and --delimiter cannot be used with JSON formats".into(),
        ));
    }

    let (header, delimiter, footer) = match format {
        AliasFormat::Json => ("[".to_string(), ",".to_string(), "]\n".to_string()),
        AliasFormat::Jsonl => (String::new(), "\n".to_string(), "\n".to_string()),
        _ => (
            decorations
                .header
                .map(expand_whitespace_literals)
                .unwrap_or_default(),
            decorations
                .delimiter
                .map_or_else(|| "\n".to_string(), expand_whitespace_literals),
            decorations
                .footer
                .map_or_else(|| "\n".to_string(), expand_whitespace_literals),
        ),
    };

    if aliases.is_empty() && *format != AliasFormat::Json {
        return Ok(String::new());
    }

    let entries = aliases
        .iter()
        .map(|alias| render_alias(alias, format))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("{}{}{}", header, entries.join(&delimiter), footer))
}

fn render_alias(alias: &Alias, format: &AliasFormat) -> Result<String> {
    match format {
        AliasFormat::Name => Ok(alias.name.clone()),
        AliasFormat::Full => Ok(format!(
            "{} {}",
            styles::ALIAS_NAME.apply_to(&alias.name),
            styles::ALIAS_COMMAND.apply_to(&alias.command)
        )),
        AliasFormat::Json | AliasFormat::Jsonl => Ok(serde_json::to_string(alias)?),
        AliasFormat::Custom(template) => stencil::render(template, alias)
            .map_err(|e| QuillError::Api(format!("invalid format: {e}"))),
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let style = match message.level {
                MessageLevel::Info => &*styles::INFO,
                MessageLevel::Success => &*styles::SUCCESS,
            };
            format!("{}\n", style.apply_to(&message.content))
        })
        .collect()
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Prints command messages to stderr, keeping stdout for command output.
pub fn eprint_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        eprint!("{}", output);
    }
}
