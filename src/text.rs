//! Text cleanup — flatten inline markup into plain multi-line text.
//!
//! `clean_text` works on serialized markup: line breaks become `\n`, every
//! other tag is dropped, entities are decoded and the result is trimmed.
//! `reflow` then merges the cleaned lines back into paragraphs.

use regex::Regex;
use std::sync::LazyLock;

// Any <br> spelling: <br>, <br/>, <br />, <br >, <br/ >, <BR clear="all">
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<br\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).unwrap()
});

// Quoted attribute values may contain `>`
static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<(?:[^>"']|"[^"]*"|'[^']*')*>"#).unwrap());

/// Trim ASCII whitespace (space, tab, newlines, NUL, vertical tab) only.
///
/// Non-breaking spaces are content: code samples indent with them.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

/// Remove every tag, leaving text (and entities) untouched.
pub fn strip_tags(markup: &str) -> String {
    RE_TAG.replace_all(markup, "").into_owned()
}

/// Flatten a markup fragment to plain text.
pub fn clean_text(markup: &str) -> String {
    let text = RE_LINE_BREAK.replace_all(markup, "\n");
    let text = strip_tags(&text);
    trim_blank(&html_escape::decode_html_entities(&text)).to_string()
}

/// Line-by-line paragraph accumulator.
///
/// A non-empty line joins the accumulator with a single space, or starts it
/// if it is empty. A blank line appends `\n`, marking a paragraph break.
/// Blank lines before any text are dropped.
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    text: String,
}

impl ParagraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        if self.text.is_empty() {
            self.text.push_str(line);
        } else if line.is_empty() {
            self.text.push('\n');
        } else {
            self.text.push(' ');
            self.text.push_str(line);
        }
    }

    pub fn finish(self) -> String {
        self.text
    }
}

/// Trim every line of `text` and merge them with [`ParagraphBuilder`].
pub fn reflow(text: &str) -> String {
    let mut builder = ParagraphBuilder::new();
    for line in text.split('\n') {
        builder.push_line(trim_blank(line));
    }
    builder.finish()
}
