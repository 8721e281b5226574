//! Literal return values called out in the return-values prose.

use crate::dom::{self, Step};
use crate::extract::FieldExtractor;
use crate::landmark::{Landmarks, Section};
use crate::text;
use indexmap::IndexSet;
use scraper::Html;

const PATH: &[Step] = &[Step::tag("p"), Step::tag("strong"), Step::tag("code")];

pub struct ReturnValueExtractor;

impl FieldExtractor for ReturnValueExtractor {
    type Output = IndexSet<String>;

    fn extract(&self, document: &Html, landmarks: &Landmarks) -> IndexSet<String> {
        dom::select_under(document, &landmarks.section(Section::ReturnValues), PATH)
            .iter()
            .map(|el| text::strip_tags(&dom::text_content(el)).trim().to_string())
            .collect()
    }
}
