//! Field extractors — one per record field, each independent of the others.
//!
//! Every extractor reads the same parsed page through the same
//! [`Landmarks`] and returns its field's value, falling back to an empty
//! default whenever its landmark is missing.

pub mod examples;
pub mod parameters;
pub mod return_type;
pub mod return_values;
pub mod short;

pub use examples::ExampleExtractor;
pub use parameters::ParameterExtractor;
pub use return_type::ReturnTypeExtractor;
pub use return_values::ReturnValueExtractor;
pub use short::ShortDescriptionExtractor;

use crate::landmark::Landmarks;
use scraper::Html;

/// Pull one field out of a parsed page.
pub trait FieldExtractor {
    type Output;

    fn extract(&self, document: &Html, landmarks: &Landmarks) -> Self::Output;
}
