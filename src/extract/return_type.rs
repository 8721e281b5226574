//! Declared return type from the signature rendering.

use crate::dom::{self, Step};
use crate::extract::FieldExtractor;
use crate::landmark::{Landmarks, Section};
use scraper::Html;

const PATH: &[Step] = &[Step::tag("div"), Step::classed("span", "type")];

pub struct ReturnTypeExtractor;

impl FieldExtractor for ReturnTypeExtractor {
    type Output = String;

    fn extract(&self, document: &Html, landmarks: &Landmarks) -> String {
        dom::select_under(document, &landmarks.section(Section::Description), PATH)
            .first()
            .map(dom::text_content)
            .unwrap_or_default()
    }
}
