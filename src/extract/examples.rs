//! Worked examples: caption plus code body per `div.example`.

use crate::dom::{self, Step};
use crate::extract::FieldExtractor;
use crate::landmark::{Landmarks, Section};
use crate::model::Example;
use crate::text;
use scraper::{ElementRef, Html};

const PATH: &[Step] = &[Step::classed("div", "example")];

pub struct ExampleExtractor;

impl FieldExtractor for ExampleExtractor {
    type Output = Vec<Example>;

    fn extract(&self, document: &Html, landmarks: &Landmarks) -> Vec<Example> {
        dom::select_under(document, &landmarks.section(Section::Examples), PATH)
            .into_iter()
            .filter_map(parse_example)
            .collect()
    }
}

/// First child is the title, second the content; anything after is ignored.
fn parse_example(container: ElementRef<'_>) -> Option<Example> {
    let mut children = dom::child_elements(container);
    let title = children.next()?;
    let Some(content) = children.next() else {
        tracing::debug!("dropping example without content");
        return None;
    };
    Some(Example {
        title: dom::text_content(&title).trim().to_string(),
        content: text::clean_text(&content.html()),
    })
}
