//! Data model for extracted documentation — format-agnostic.
//!
//! Every record is built fresh per extraction and owns its strings, so it
//! outlives the parsed document it came from.

use indexmap::IndexSet;
use serde::Serialize;

/// Complete documentation for a single function page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentationRecord {
    /// Function name as requested (not the hyphenated alias)
    pub name: String,
    /// Parameters in signature order
    pub parameters: Vec<Parameter>,
    #[serde(rename = "return")]
    pub returns: ReturnInfo,
    /// One-line purpose
    pub short: String,
    pub examples: Vec<Example>,
}

impl DocumentationRecord {
    /// True when no landmark matched at all.
    ///
    /// An empty record is a valid result: the page may simply not follow
    /// the convention, or may document nothing.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
            && self.returns.ty.is_empty()
            && self.returns.values.is_empty()
            && self.short.is_empty()
            && self.examples.is_empty()
    }
}

/// Declared return type plus the literal values named in the prose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReturnInfo {
    #[serde(rename = "type")]
    pub ty: String,
    /// Deduplicated, first occurrence wins
    pub values: IndexSet<String>,
}

/// A single parameter from the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Display name including its sigil, e.g. `$string`
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Default expression with the leading `=` removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Parameter {
    /// Name without its leading sigil; the key descriptions are matched on.
    pub fn key(&self) -> &str {
        strip_sigil(&self.name)
    }
}

/// Worked example: caption plus cleaned body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Example {
    pub title: String,
    pub content: String,
}

/// Drop the first character of a parameter display name (`$needle` → `needle`).
pub(crate) fn strip_sigil(name: &str) -> &str {
    let mut chars = name.chars();
    chars.next();
    chars.as_str()
}
