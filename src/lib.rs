//! phpdoc-extract — turn a manual-style HTML reference page into a
//! structured documentation record.
//!
//! A page documents one function. Its content is addressed through fixed
//! `id` landmarks built from the function name (`function.mb-strlen`,
//! `refsect1-function.mb-strlen-parameters`, ...) and a handful of class
//! annotations below them. Each record field is pulled by its own
//! [`FieldExtractor`]; a missing landmark leaves the field empty instead of
//! failing.
//!
//! ```
//! let html = r#"<div id="function.strlen"><div class="refnamediv">
//!   <p class="refpurpose"><span class="dc-title">Get string length</span></p>
//! </div></div>"#;
//! let record = phpdoc_extract::extract("strlen", html);
//! assert_eq!(record.short, "Get string length");
//! assert!(record.parameters.is_empty());
//! ```

pub mod dom;
pub mod extract;
pub mod landmark;
pub mod model;
pub mod text;

pub use extract::{
    ExampleExtractor, FieldExtractor, ParameterExtractor, ReturnTypeExtractor,
    ReturnValueExtractor, ShortDescriptionExtractor,
};
pub use landmark::{Landmarks, Section};
pub use model::{DocumentationRecord, Example, Parameter, ReturnInfo};

use anyhow::{Context, Result};
use scraper::Html;
use std::fs;
use std::path::Path;

/// Builds a [`DocumentationRecord`] from one function page.
///
/// Stateless; a single instance can be shared freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentationExtractor;

impl DocumentationExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse `html` permissively and extract the record for `function`.
    pub fn extract(&self, function: &str, html: &str) -> DocumentationRecord {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            tracing::debug!(
                function,
                errors = document.errors.len(),
                "tolerated html parse errors"
            );
        }
        self.extract_document(function, &document)
    }

    /// Extract from a page that is already parsed. The tree is only read.
    ///
    /// `scraper::Html` is not `Sync`, so one parsed tree can serve many
    /// extractions on the thread that owns it. Parallel callers parse their
    /// own copy through [`DocumentationExtractor::extract`].
    pub fn extract_document(&self, function: &str, document: &Html) -> DocumentationRecord {
        let landmarks = Landmarks::new(function);

        let record = DocumentationRecord {
            name: function.to_string(),
            parameters: ParameterExtractor.extract(document, &landmarks),
            returns: ReturnInfo {
                ty: ReturnTypeExtractor.extract(document, &landmarks),
                values: ReturnValueExtractor.extract(document, &landmarks),
            },
            short: ShortDescriptionExtractor.extract(document, &landmarks),
            examples: ExampleExtractor.extract(document, &landmarks),
        };

        tracing::debug!(
            function,
            alias = landmarks.alias(),
            parameters = record.parameters.len(),
            return_values = record.returns.values.len(),
            examples = record.examples.len(),
            "extracted documentation"
        );
        record
    }

    /// Read a page that was stored locally and extract from it.
    pub fn extract_file(&self, function: &str, path: &Path) -> Result<DocumentationRecord> {
        let html = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(self.extract(function, &html))
    }
}

/// Extract with the default extractor.
pub fn extract(function: &str, html: &str) -> DocumentationRecord {
    DocumentationExtractor.extract(function, html)
}
