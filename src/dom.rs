//! Tree queries over a parsed page.
//!
//! The markup convention is addressed by an `id` landmark followed by a
//! short chain of child steps (`div > span.type`). Steps only ever look at
//! direct element children; text and comment nodes are skipped.

use scraper::{ElementRef, Html};

/// One child step: a tag name and optionally the exact `class` it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    tag: &'static str,
    class: Option<&'static str>,
}

impl Step {
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: None }
    }

    pub const fn classed(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class: Some(class),
        }
    }

    fn matches(&self, el: &ElementRef<'_>) -> bool {
        if !el.value().name().eq_ignore_ascii_case(self.tag) {
            return false;
        }
        match self.class {
            Some(class) => class_of(el) == Some(class),
            None => true,
        }
    }
}

/// First element in document order whose `id` equals `id`.
pub fn find_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().attr("id") == Some(id))
}

/// Direct element children, in order.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

/// Follow `path` from `from`, returning every match in document order.
pub fn select_path<'a>(from: ElementRef<'a>, path: &[Step]) -> Vec<ElementRef<'a>> {
    let mut current = vec![from];
    for step in path {
        current = current
            .into_iter()
            .flat_map(child_elements)
            .filter(|el| step.matches(el))
            .collect();
        if current.is_empty() {
            break;
        }
    }
    current
}

/// Look up a landmark by id and follow `path` below it.
pub fn select_under<'a>(document: &'a Html, id: &str, path: &[Step]) -> Vec<ElementRef<'a>> {
    match find_by_id(document, id) {
        Some(landmark) => select_path(landmark, path),
        None => {
            tracing::debug!(id, "landmark not found");
            Vec::new()
        }
    }
}

/// The raw `class` attribute, compared as a whole.
pub fn class_of<'a>(el: &ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("class")
}

/// Concatenated text of all descendant text nodes (entities already decoded).
pub fn text_content(el: &ElementRef<'_>) -> String {
    el.text().collect()
}
