//! Composer input location.
//!
//! An [`InputLocator`] walks a platform's ordered selector list and returns
//! the first element that can take typed text. When a candidate hosts a
//! shadow root the same selector list is re-applied inside it first, since
//! several composers wrap their real editor in one.

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ExtractError;
use crate::host::document::{
    PageDocument, attr, css, select_first_within, shadow_root, text_of,
};
use crate::host::target::{SnapshotTarget, TargetKind};

/// Maximum nesting of shadow roots followed.
const MAX_SHADOW_DEPTH: usize = 4;

/// `<input>` types that accept free text.
const TEXT_INPUT_TYPES: &[&str] = &["", "text", "search"];

// ============================================================================
// Located Input
// ============================================================================

/// The composer element found on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedInput {
    /// Selector that led to the element.
    pub selector: String,
    /// Tag name of the element.
    pub tag: String,
    /// Editable kind.
    pub kind: TargetKind,
    /// Whether the element lives inside a shadow root.
    pub in_shadow_root: bool,
    /// Text already in the element.
    pub current_text: String,
}

impl LocatedInput {
    /// Short human-readable description.
    pub fn description(&self) -> String {
        let scope = if self.in_shadow_root { " (shadow root)" } else { "" };
        format!("<{}> via `{}`{scope}", self.tag, self.selector)
    }

    /// Builds an in-process delivery target for this element.
    pub fn into_target(self) -> SnapshotTarget {
        let description = self.description();
        SnapshotTarget::new(self.kind, description).with_text(self.current_text)
    }
}

/// Classifies an element as editable, if it is.
///
/// Accepts `<textarea>`, text-like `<input>`, `contenteditable` elements
/// (`""`, `"true"`, `"plaintext-only"`) and `role="textbox"`.
pub fn editable_kind(el: ElementRef<'_>) -> Option<TargetKind> {
    let tag = el.value().name();
    if tag == "textarea" {
        return Some(TargetKind::TextArea);
    }
    if tag == "input" {
        let input_type = attr(el, "type").unwrap_or_default().to_ascii_lowercase();
        return TEXT_INPUT_TYPES
            .contains(&input_type.as_str())
            .then_some(TargetKind::TextInput);
    }
    if let Some(value) = attr(el, "contenteditable") {
        let value = value.trim().to_ascii_lowercase();
        if matches!(value.as_str(), "" | "true" | "plaintext-only") {
            return Some(TargetKind::ContentEditable);
        }
    }
    if attr(el, "role").is_some_and(|r| r.eq_ignore_ascii_case("textbox")) {
        return Some(TargetKind::TextBox);
    }
    None
}

// ============================================================================
// Input Locator
// ============================================================================

enum Scope<'a> {
    Document(&'a PageDocument),
    Shadow(ElementRef<'a>),
}

impl<'a> Scope<'a> {
    fn first(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        match self {
            Self::Document(doc) => doc.select_first(selector),
            Self::Shadow(root) => select_first_within(*root, selector),
        }
    }
}

struct Found<'a> {
    element: ElementRef<'a>,
    kind: TargetKind,
    selector: &'static str,
    depth: usize,
}

/// Finds a platform's composer input.
#[derive(Debug, Clone)]
pub struct InputLocator {
    selectors: Vec<&'static str>,
}

impl InputLocator {
    /// Creates a locator over an ordered selector list.
    pub fn new(selectors: &[&'static str]) -> Self {
        Self {
            selectors: selectors.to_vec(),
        }
    }

    /// The selector list in order.
    pub fn selectors(&self) -> &[&'static str] {
        &self.selectors
    }

    /// Locates the composer, returning `None` when nothing editable matches.
    #[instrument(skip(self, document), fields(selectors = self.selectors.len()))]
    pub fn locate(&self, document: &PageDocument) -> Result<Option<LocatedInput>, ExtractError> {
        let compiled = self
            .selectors
            .iter()
            .map(|raw| css(raw).map(|sel| (*raw, sel)))
            .collect::<Result<Vec<_>, _>>()?;

        let Some(found) = Self::search(&Scope::Document(document), &compiled, 0) else {
            debug!("No editable input matched");
            return Ok(None);
        };

        let current_text = if found.kind.is_form_field() {
            if found.element.value().name() == "input" {
                attr(found.element, "value").unwrap_or_default().to_string()
            } else {
                found.element.text().collect::<String>()
            }
        } else {
            text_of(found.element)
        };

        let located = LocatedInput {
            selector: found.selector.to_string(),
            tag: found.element.value().name().to_string(),
            kind: found.kind,
            in_shadow_root: found.depth > 0,
            current_text,
        };
        debug!(input = %located.description(), "Located input");
        Ok(Some(located))
    }

    /// Locates the composer or fails with [`ExtractError::InputNotFound`].
    pub fn require(&self, document: &PageDocument) -> Result<LocatedInput, ExtractError> {
        self.locate(document)?.ok_or(ExtractError::InputNotFound)
    }

    fn search<'a>(
        scope: &Scope<'a>,
        compiled: &[(&'static str, Selector)],
        depth: usize,
    ) -> Option<Found<'a>> {
        for &(raw, ref selector) in compiled {
            let Some(candidate) = scope.first(selector) else {
                continue;
            };

            if depth < MAX_SHADOW_DEPTH {
                if let Some(root) = shadow_root(candidate) {
                    if let Some(inner) = Self::search(&Scope::Shadow(root), compiled, depth + 1) {
                        return Some(inner);
                    }
                }
            }

            if let Some(kind) = editable_kind(candidate) {
                return Some(Found {
                    element: candidate,
                    kind,
                    selector: raw,
                    depth,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate(html: &str, selectors: &[&'static str]) -> Option<LocatedInput> {
        let doc = PageDocument::parse(html);
        InputLocator::new(selectors).locate(&doc).unwrap()
    }

    #[test]
    fn test_first_selector_wins() {
        let found = locate(
            r#"<html><body><div contenteditable="true">x</div><textarea></textarea></body></html>"#,
            &["textarea", "[contenteditable=\"true\"]"],
        )
        .unwrap();
        assert_eq!(found.kind, TargetKind::TextArea);
        assert_eq!(found.selector, "textarea");
    }

    #[test]
    fn test_non_editable_candidate_skipped() {
        let found = locate(
            r#"<html><body><div data-placeholder="Ask">hint</div><textarea>draft</textarea></body></html>"#,
            &["[data-placeholder]", "textarea"],
        )
        .unwrap();
        assert_eq!(found.tag, "textarea");
        assert_eq!(found.current_text, "draft");
    }

    #[test]
    fn test_descends_into_shadow_root() {
        let found = locate(
            r#"<html><body><rich-textarea>
                <template shadowrootmode="open"><div contenteditable="true"><p>hi</p></div></template>
            </rich-textarea></body></html>"#,
            &["rich-textarea", "[contenteditable=\"true\"]"],
        )
        .unwrap();
        assert!(found.in_shadow_root);
        assert_eq!(found.kind, TargetKind::ContentEditable);
        assert_eq!(found.current_text, "hi");
    }

    #[test]
    fn test_shadow_content_invisible_to_document_queries() {
        let found = locate(
            r#"<html><body><x-editor>
                <template shadowrootmode="open"><textarea></textarea></template>
            </x-editor></body></html>"#,
            &["textarea"],
        );
        assert!(found.is_none());
    }

    #[test]
    fn test_role_textbox_and_inputs() {
        let found = locate(
            r#"<html><body><div role="textbox"></div></body></html>"#,
            &["[role=\"textbox\"]"],
        )
        .unwrap();
        assert_eq!(found.kind, TargetKind::TextBox);

        let found = locate(
            r#"<html><body><input type="checkbox" placeholder="Ask"><input type="text" value="v"></body></html>"#,
            &["[placeholder*=\"Ask\"]", "input[type=\"text\"]"],
        )
        .unwrap();
        assert_eq!(found.kind, TargetKind::TextInput);
        assert_eq!(found.current_text, "v");
    }

    #[test]
    fn test_require_reports_input_not_found() {
        let doc = PageDocument::parse("<html><body><p>nothing</p></body></html>");
        let err = InputLocator::new(&["textarea"]).require(&doc).unwrap_err();
        assert!(matches!(err, ExtractError::InputNotFound));
    }

    #[test]
    fn test_into_target() {
        let found = locate(
            r#"<html><body><textarea>old</textarea></body></html>"#,
            &["textarea"],
        )
        .unwrap();
        let target = found.into_target();
        assert_eq!(target.text(), "old");
        assert!(target.description().contains("<textarea>"));
    }
}
