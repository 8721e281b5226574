//! Landmark identifiers — the `id` attributes a manual page is addressed by.
//!
//! Every identifier is derived from the function's alias (underscores
//! rewritten to hyphens). The templates live here and nowhere else.

/// Rewrite a function name into the alias used inside landmark ids.
///
/// `mb_strlen` → `mb-strlen`. Case and other punctuation are left alone.
pub fn alias(function: &str) -> String {
    function.replace('_', "-")
}

/// A `refsect1` section of a function page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Description,
    Parameters,
    ReturnValues,
    Examples,
}

impl Section {
    fn suffix(self) -> &'static str {
        match self {
            Section::Description => "description",
            Section::Parameters => "parameters",
            Section::ReturnValues => "returnvalues",
            Section::Examples => "examples",
        }
    }
}

/// Identifier builder for one function page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landmarks {
    alias: String,
}

impl Landmarks {
    pub fn new(function: &str) -> Self {
        Self {
            alias: alias(function),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Top-level landmark: `function.{alias}`.
    pub fn function(&self) -> String {
        format!("function.{}", self.alias)
    }

    /// Section landmark: `refsect1-function.{alias}-{section}`.
    pub fn section(&self, section: Section) -> String {
        format!("refsect1-function.{}-{}", self.alias, section.suffix())
    }
}
