//! One-line purpose text from the page heading.

use crate::dom::{self, Step};
use crate::extract::FieldExtractor;
use crate::landmark::Landmarks;
use scraper::Html;

const PATH: &[Step] = &[
    Step::classed("div", "refnamediv"),
    Step::classed("p", "refpurpose"),
    Step::classed("span", "dc-title"),
];

pub struct ShortDescriptionExtractor;

impl FieldExtractor for ShortDescriptionExtractor {
    type Output = String;

    fn extract(&self, document: &Html, landmarks: &Landmarks) -> String {
        dom::select_under(document, &landmarks.function(), PATH)
            .first()
            .map(|el| dom::text_content(el).trim().to_string())
            .unwrap_or_default()
    }
}
