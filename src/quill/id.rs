//! # Note Identifiers
//!
//! Filename templates reference `{{ id }}` to keep generated filenames apart.
//! An [`IdGenerator`] produces a fresh random token on every call, shaped by
//! the notebook's [`IdOptions`]:
//!
//! ```json
//! "id": { "length": 4, "charset": "alphanum", "case": "lower" }
//! ```
//!
//! Charsets: `alphanum`, `hex`, `letters`, `numbers`, `uuid`, or any other
//! string, which is used verbatim as the alphabet. `uuid` ignores `length`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

const DEFAULT_ID_LENGTH: usize = 4;

const DIGITS: &str = "0123456789";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEX_LOWER: &str = "abcdef";
const HEX_UPPER: &str = "ABCDEF";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdOptions {
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default)]
    pub charset: Charset,
    #[serde(default)]
    pub case: Case,
}

fn default_length() -> usize {
    DEFAULT_ID_LENGTH
}

impl Default for IdOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_ID_LENGTH,
            charset: Charset::default(),
            case: Case::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Charset {
    #[default]
    Alphanum,
    Hex,
    Letters,
    Numbers,
    Uuid,
    Custom(String),
}

impl From<String> for Charset {
    fn from(value: String) -> Self {
        match value.as_str() {
            "alphanum" => Charset::Alphanum,
            "hex" => Charset::Hex,
            "letters" => Charset::Letters,
            "numbers" => Charset::Numbers,
            "uuid" => Charset::Uuid,
            _ => Charset::Custom(value),
        }
    }
}

impl From<Charset> for String {
    fn from(value: Charset) -> Self {
        match value {
            Charset::Alphanum => "alphanum".to_string(),
            Charset::Hex => "hex".to_string(),
            Charset::Letters => "letters".to_string(),
            Charset::Numbers => "numbers".to_string(),
            Charset::Uuid => "uuid".to_string(),
            Charset::Custom(alphabet) => alphabet,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Lower,
    Upper,
    Mixed,
}

/// Produces random identifiers according to [`IdOptions`].
#[derive(Debug, Clone)]
pub struct IdGenerator {
    kind: GeneratorKind,
}

#[derive(Debug, Clone)]
enum GeneratorKind {
    Uuid(Case),
    Alphabet { alphabet: Vec<char>, length: usize },
}

impl IdGenerator {
    pub fn new(options: &IdOptions) -> Self {
        let kind = match &options.charset {
            Charset::Uuid => GeneratorKind::Uuid(options.case),
            charset => {
                let mut alphabet = alphabet_for(charset, options.case);
                if alphabet.is_empty() {
                    warn!("empty id charset, falling back to alphanum");
                    alphabet = alphabet_for(&Charset::Alphanum, options.case);
                }
                GeneratorKind::Alphabet {
                    alphabet,
                    length: options.length,
                }
            }
        };
        Self { kind }
    }

    /// Returns a new identifier.
    pub fn generate(&self) -> String {
        match &self.kind {
            GeneratorKind::Uuid(Case::Upper) => Uuid::new_v4().to_string().to_uppercase(),
            GeneratorKind::Uuid(_) => Uuid::new_v4().to_string(),
            GeneratorKind::Alphabet { alphabet, length } => {
                let mut rng = rand::thread_rng();
                (0..*length)
                    .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                    .collect()
            }
        }
    }
}

fn alphabet_for(charset: &Charset, case: Case) -> Vec<char> {
    let letters = match case {
        Case::Lower => LOWER.to_string(),
        Case::Upper => UPPER.to_string(),
        Case::Mixed => format!("{LOWER}{UPPER}"),
    };
    let hex_letters = match case {
        Case::Lower => HEX_LOWER.to_string(),
        Case::Upper => HEX_UPPER.to_string(),
        Case::Mixed => format!("{HEX_LOWER}{HEX_UPPER}"),
    };

    let source = match charset {
        Charset::Alphanum => format!("{DIGITS}{letters}"),
        Charset::Hex => format!("{DIGITS}{hex_letters}"),
        Charset::Letters => letters,
        Charset::Numbers => DIGITS.to_string(),
        Charset::Custom(alphabet) => alphabet.clone(),
        Charset::Uuid => String::new(),
    };

    let mut alphabet: Vec<char> = Vec::with_capacity(source.len());
    for c in source.chars() {
        if !alphabet.contains(&c) {
            alphabet.push(c);
        }
    }
    alphabet
}
