//! Parameter list — signature scan, then description attachment.
//!
//! The signature (`span.methodparam` under the description section) is the
//! only source of parameters and fixes their order. The `dl` under the
//! parameters section only ever adds descriptions to names the signature
//! already produced; without a signature the list is empty.

use crate::dom::{self, Step};
use crate::extract::FieldExtractor;
use crate::landmark::{Landmarks, Section};
use crate::model::{strip_sigil, Parameter};
use crate::text;
use indexmap::IndexMap;
use scraper::{ElementRef, Html};

const SIGNATURE_PATH: &[Step] = &[Step::tag("div"), Step::classed("span", "methodparam")];

const DESCRIPTION_LIST_PATH: &[Step] = &[Step::tag("dl")];

/// Parameters keyed by sigil-less name, in signature order.
type ParameterMap = IndexMap<String, Parameter>;

pub struct ParameterExtractor;

impl FieldExtractor for ParameterExtractor {
    type Output = Vec<Parameter>;

    fn extract(&self, document: &Html, landmarks: &Landmarks) -> Vec<Parameter> {
        let mut params = scan_signature(document, landmarks);
        if params.is_empty() {
            return Vec::new();
        }
        attach_descriptions(document, landmarks, &mut params);
        params.into_values().collect()
    }
}

// -- Pass 1: signature --------------------------------------------------------

/// Role a signature child plays, read from its `class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Parameter,
    Type,
    Initializer,
}

impl Role {
    fn from_class(class: &str) -> Option<Self> {
        match class {
            "parameter" => Some(Role::Parameter),
            "type" => Some(Role::Type),
            "initializer" => Some(Role::Initializer),
            _ => None,
        }
    }
}

#[derive(Default)]
struct PartialParameter {
    name: Option<String>,
    ty: Option<String>,
    default_value: Option<String>,
}

impl PartialParameter {
    fn apply(&mut self, role: Role, text: String) {
        match role {
            Role::Parameter => self.name = Some(text),
            Role::Type => self.ty = Some(text),
            Role::Initializer => self.default_value = Some(default_value(&text)),
        }
    }

    fn finish(self) -> Option<Parameter> {
        Some(Parameter {
            name: self.name?,
            ty: self.ty,
            default_value: self.default_value,
            description: None,
        })
    }
}

/// Initializer text is `= expr`; keep what follows the first `=`.
fn default_value(initializer: &str) -> String {
    match initializer.split_once('=') {
        Some((_, value)) => value.trim().to_string(),
        None => initializer.trim().to_string(),
    }
}

fn parse_marker(marker: ElementRef<'_>) -> Option<Parameter> {
    let mut partial = PartialParameter::default();
    for child in dom::child_elements(marker) {
        let Some(role) = dom::class_of(&child).and_then(Role::from_class) else {
            continue;
        };
        partial.apply(role, dom::text_content(&child));
    }
    partial.finish()
}

fn scan_signature(document: &Html, landmarks: &Landmarks) -> ParameterMap {
    let mut params = ParameterMap::new();
    let markers = dom::select_under(
        document,
        &landmarks.section(Section::Description),
        SIGNATURE_PATH,
    );
    for marker in markers {
        if let Some(param) = parse_marker(marker) {
            params.insert(strip_sigil(&param.name).to_string(), param);
        }
    }
    params
}

// -- Pass 2: description list -------------------------------------------------

fn attach_descriptions(document: &Html, landmarks: &Landmarks, params: &mut ParameterMap) {
    let lists = dom::select_under(
        document,
        &landmarks.section(Section::Parameters),
        DESCRIPTION_LIST_PATH,
    );
    let Some(list) = lists.first() else {
        return;
    };

    let mut current: Option<String> = None;
    for child in dom::child_elements(*list) {
        match child.value().name() {
            "dt" => {
                let term = dom::text_content(&child).trim().to_string();
                current = params.contains_key(&term).then_some(term);
            }
            "dd" => {
                if let Some(key) = current.take() {
                    if let Some(param) = params.get_mut(&key) {
                        tracing::trace!(parameter = %key, "attaching description");
                        param.description = Some(describe(child));
                    }
                }
            }
            _ => current = None,
        }
    }
}

/// Reflow each element child of a `dd` and join them as paragraphs.
fn describe(dd: ElementRef<'_>) -> String {
    dom::child_elements(dd)
        .map(|el| text::reflow(&text::clean_text(&el.html())))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(function: &str, html: &str) -> Vec<Parameter> {
        ParameterExtractor.extract(&Html::parse_document(html), &Landmarks::new(function))
    }

    const SIGNATURE: &str = r#"<div id="refsect1-function.str-pad-description"><div class="methodsynopsis">
<span class="type">string</span> <span class="methodname">str_pad</span>(
<span class="methodparam"><span class="type">string</span> <code class="parameter">$string</code></span>,
<span class="methodparam"><span class="type">int</span> <code class="parameter">$length</code></span>,
<span class="methodparam"><span class="type">string</span> <code class="parameter">$pad_string</code><span class="initializer"> = " "</span></span>,
<span class="methodparam"><span class="type">int</span> <code class="parameter">$pad_type</code><span class="initializer"> = <strong>STR_PAD_RIGHT</strong></span></span>
): <span class="type">string</span>
</div></div>"#;

    #[test]
    fn signature_roles() {
        let params = extract("str_pad", SIGNATURE);
        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["$string", "$length", "$pad_string", "$pad_type"]);
        assert_eq!(params[1].ty.as_deref(), Some("int"));
        assert_eq!(params[0].default_value, None);
        assert_eq!(params[2].default_value.as_deref(), Some("\" \""));
        assert_eq!(params[3].default_value.as_deref(), Some("STR_PAD_RIGHT"));
        assert!(params.iter().all(|p| p.description.is_none()));
    }

    #[test]
    fn descriptions_follow_signature_order() {
        let html = format!(
            r#"{SIGNATURE}
<div id="refsect1-function.str-pad-parameters"><dl>
  <dt><code class="parameter">pad_type</code></dt>
  <dd><p class="para">Optional, can be <strong>STR_PAD_RIGHT</strong> or
    <strong>STR_PAD_LEFT</strong>.</p></dd>
  <dt><code class="parameter">string</code></dt>
  <dd><p class="para">The input string.</p></dd>
</dl></div>"#
        );
        let params = extract("str_pad", &html);
        assert_eq!(params[0].name, "$string");
        assert_eq!(params[0].description.as_deref(), Some("The input string."));
        assert_eq!(params[1].description, None);
        assert_eq!(
            params[3].description.as_deref(),
            Some("Optional, can be STR_PAD_RIGHT or STR_PAD_LEFT.")
        );
    }

    #[test]
    fn multiple_paragraphs_join_with_blank_line() {
        let html = format!(
            r#"{SIGNATURE}
<div id="refsect1-function.str-pad-parameters"><dl>
  <dt>length</dt>
  <dd>
    <p class="para">If the value is negative
      no padding takes place.</p>
    <p class="para">Second<br>paragraph.</p>
  </dd>
</dl></div>"#
        );
        let params = extract("str_pad", &html);
        assert_eq!(
            params[1].description.as_deref(),
            Some("If the value is negative no padding takes place.\n\nSecond paragraph.")
        );
    }

    #[test]
    fn unmatched_term_clears_current() {
        let html = format!(
            r#"{SIGNATURE}
<div id="refsect1-function.str-pad-parameters"><dl>
  <dt>string</dt>
  <dt>unknown</dt>
  <dd><p>Orphan.</p></dd>
  <dt>length</dt>
  <dd><p>First.</p></dd>
  <dd><p>Ignored second body.</p></dd>
</dl></div>"#
        );
        let params = extract("str_pad", &html);
        assert_eq!(params[0].description, None);
        assert_eq!(params[1].description.as_deref(), Some("First."));
    }

    #[test]
    fn unexpected_element_clears_current() {
        let html = format!(
            r#"{SIGNATURE}
<div id="refsect1-function.str-pad-parameters"><dl>
  <dt>string</dt>
  <div>x</div>
  <dd><p>Desc</p></dd>
  <dt>length</dt>
  <dd><p>Kept.</p></dd>
</dl></div>"#
        );
        let params = extract("str_pad", &html);
        assert_eq!(params[0].description, None);
        assert_eq!(params[1].description.as_deref(), Some("Kept."));
    }

    #[test]
    fn only_first_list_is_read() {
        let html = format!(
            r#"{SIGNATURE}
<div id="refsect1-function.str-pad-parameters">
  <dl><dt>string</dt><dd><p>From first.</p></dd></dl>
  <dl><dt>length</dt><dd><p>From second.</p></dd></dl>
</div>"#
        );
        let params = extract("str_pad", &html);
        assert_eq!(params[0].description.as_deref(), Some("From first."));
        assert_eq!(params[1].description, None);
    }

    #[test]
    fn orphaned_description_list_yields_nothing() {
        let html = r#"<div id="refsect1-function.str-pad-description"><div><span class="type">string</span></div></div>
<div id="refsect1-function.str-pad-parameters"><dl>
  <dt>string</dt><dd><p>The input string.</p></dd>
</dl></div>"#;
        assert!(extract("str_pad", html).is_empty());
    }

    #[test]
    fn marker_without_name_is_skipped() {
        let html = r#"<div id="refsect1-function.f-description"><div>
<span class="methodparam"><span class="type">void</span></span>
<span class="methodparam"><span class="type">int</span> <code class="parameter">$n</code><em class="other">x</em></span>
</div></div>"#;
        let params = extract("f", html);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "$n");
        assert_eq!(params[0].ty.as_deref(), Some("int"));
    }

    #[test]
    fn repeated_name_keeps_first_position() {
        let html = r#"<div id="refsect1-function.f-description"><div>
<span class="methodparam"><code class="parameter">$a</code></span>
<span class="methodparam"><code class="parameter">$b</code></span>
<span class="methodparam"><span class="type">int</span><code class="parameter">$a</code></span>
</div></div>"#;
        let params = extract("f", html);
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "$a");
        assert_eq!(params[0].ty.as_deref(), Some("int"));
    }

    #[test]
    fn initializer_without_equals() {
        assert_eq!(default_value(" = null"), "null");
        assert_eq!(default_value("a = b = c"), "b = c");
        assert_eq!(default_value(" PHP_INT_MAX "), "PHP_INT_MAX");
    }
}
