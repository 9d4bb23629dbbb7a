//! Case converters.
//!
//! # Responsibilities
//! - Rebuild a tokenized identifier in a target casing style
//! - Expose the converter seam as a trait so hosts can plug in custom styles
//! - Map configured style names to converter instances
//!
//! # Design Decisions
//! - Converters are pure: no shared state, identical input → identical output
//! - Output capacity is precomputed so each conversion is a single allocation
//! - Empty/whitespace input yields an empty string, never an error
//! - Any `Fn(&str) -> String` is a converter (custom style injection)

use serde::{Deserialize, Serialize};

use crate::case::tokenizer::{tokenize, WordRange};

/// Capability for rewriting an identifier into a casing style.
pub trait CaseConverter: Send + Sync {
    /// Rewrite `identifier` in this converter's style.
    fn convert(&self, identifier: &str) -> String;
}

impl<F> CaseConverter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn convert(&self, identifier: &str) -> String {
        self(identifier)
    }
}

/// Configured casing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    Kebab,
    Snake,
    Camel,
    Pascal,
}

impl CaseStyle {
    /// The converter implementing this style.
    pub fn converter(self) -> &'static dyn CaseConverter {
        match self {
            CaseStyle::Kebab => &KebabCase,
            CaseStyle::Snake => &SnakeCase,
            CaseStyle::Camel => &CamelCase,
            CaseStyle::Pascal => &PascalCase,
        }
    }
}

impl std::str::FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kebab" => Ok(CaseStyle::Kebab),
            "snake" => Ok(CaseStyle::Snake),
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            other => Err(format!(
                "unknown case style '{}' (expected kebab, snake, camel, or pascal)",
                other
            )),
        }
    }
}

impl std::fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
        };
        f.write_str(name)
    }
}

/// `kebab-case`: lower-cased words joined with `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KebabCase;

/// `snake_case`: lower-cased words joined with `_`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCase;

/// `camelCase`: first word lower-cased, later words capitalized, no separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCase;

/// `PascalCase`: every word capitalized, no separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PascalCase;

impl CaseConverter for KebabCase {
    fn convert(&self, identifier: &str) -> String {
        delimited(identifier, '-')
    }
}

impl CaseConverter for SnakeCase {
    fn convert(&self, identifier: &str) -> String {
        delimited(identifier, '_')
    }
}

impl CaseConverter for CamelCase {
    fn convert(&self, identifier: &str) -> String {
        concatenated(identifier, false)
    }
}

impl CaseConverter for PascalCase {
    fn convert(&self, identifier: &str) -> String {
        concatenated(identifier, true)
    }
}

/// Lower-case every word and join with `separator`.
fn delimited(identifier: &str, separator: char) -> String {
    if identifier.trim().is_empty() {
        return String::new();
    }

    let words = tokenize(identifier);
    let mut out = String::with_capacity(capacity(&words, words.len().saturating_sub(1)));
    for (i, range) in words.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        for ch in range.slice(identifier).chars() {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Concatenate words, capitalizing each word's first character.
/// The first word is fully lower-cased unless `capitalize_first`.
fn concatenated(identifier: &str, capitalize_first: bool) -> String {
    if identifier.trim().is_empty() {
        return String::new();
    }

    let words = tokenize(identifier);
    let mut out = String::with_capacity(capacity(&words, 0));
    for (i, range) in words.iter().enumerate() {
        let word = range.slice(identifier);
        if i == 0 && !capitalize_first {
            for ch in word.chars() {
                out.extend(ch.to_lowercase());
            }
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
        }
        for ch in chars {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

fn capacity(words: &[WordRange], separators: usize) -> usize {
    words.iter().map(|r| r.len()).sum::<usize>() + separators
}
