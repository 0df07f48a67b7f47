//! Parsed page snapshots.
//!
//! A [`PageDocument`] wraps a `scraper::Html` tree of a chat page. Queries
//! follow light-DOM semantics: anything inside `<template>` content is
//! invisible to document-level selection, the way `querySelectorAll` never
//! sees into shadow roots. Declarative shadow roots
//! (`<template shadowrootmode="open">`) are reached explicitly through
//! [`shadow_root`].

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

/// Compiles a CSS selector.
pub fn css(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Compiles a list of CSS selectors, failing on the first invalid one.
pub fn css_all(selectors: &[&str]) -> Result<Vec<Selector>, ExtractError> {
    selectors.iter().map(|s| css(s)).collect()
}

// ============================================================================
// Page Document
// ============================================================================

/// A parsed snapshot of a chat page.
pub struct PageDocument {
    html: Html,
    url: Option<String>,
}

impl PageDocument {
    /// Parses a full HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
            url: None,
        }
    }

    /// Attaches the URL the snapshot was taken from.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the page URL, if known.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the underlying tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Returns the `<html>` element.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// All light-DOM elements matching `selector`, in document order.
    pub fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        select_within(self.root(), selector)
    }

    /// First light-DOM element matching `selector`.
    pub fn select_first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        let root = self.root();
        self.html
            .select(selector)
            .find(|el| !crosses_template(el, root))
    }

    /// Returns the main content region.
    ///
    /// Tries `main`, then `[role="main"]`, then each of `extra` in order.
    pub fn main_region(&self, extra: &[&str]) -> Result<Option<ElementRef<'_>>, ExtractError> {
        for selector in ["main", "[role=\"main\"]"].iter().chain(extra) {
            if let Some(found) = self.select_first(&css(selector)?) {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

impl std::fmt::Debug for PageDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDocument")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Element Helpers
// ============================================================================

/// Descendants of `scope` matching `selector`, excluding `scope` itself and
/// anything inside a nested `<template>`.
pub fn select_within<'a>(scope: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    scope
        .select(selector)
        .filter(|el| el.id() != scope.id() && !crosses_template(el, scope))
        .collect()
}

/// First descendant of `scope` matching `selector`.
pub fn select_first_within<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope
        .select(selector)
        .find(|el| el.id() != scope.id() && !crosses_template(el, scope))
}

/// Returns true if a `<template>` sits between `el` and `scope`.
fn crosses_template(el: &ElementRef<'_>, scope: ElementRef<'_>) -> bool {
    for node in el.ancestors() {
        if node.id() == scope.id() {
            return false;
        }
        if node
            .value()
            .as_element()
            .is_some_and(|e| e.name() == "template")
        {
            return true;
        }
    }
    false
}

/// Returns true if `el` lives inside `<template>` content.
pub fn is_in_template(el: &ElementRef<'_>) -> bool {
    el.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|e| e.name() == "template")
    })
}

/// Nearest inclusive ancestor matching `selector`, stopping at a shadow boundary.
pub fn closest<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    if selector.matches(&el) {
        return Some(el);
    }
    for node in el.ancestors() {
        let Some(ancestor) = ElementRef::wrap(node) else {
            continue;
        };
        if ancestor.value().name() == "template" {
            return None;
        }
        if selector.matches(&ancestor) {
            return Some(ancestor);
        }
    }
    None
}

/// Parent element, if any.
pub fn parent_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Returns the attribute value, if present.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Returns true if the element carries class token `class`.
pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Returns the element's declarative shadow root, if it hosts one.
pub fn shadow_root<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap).find(|child| {
        child.value().name() == "template"
            && (child.value().attr("shadowrootmode").is_some()
                || child.value().attr("shadowroot").is_some())
    })
}

// ============================================================================
// Visible Text
// ============================================================================

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "tr", "ul",
];

const CELL_ELEMENTS: &[&str] = &["td", "th"];

const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea"];

const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript", "head"];

/// A stretch of collected text, either flowing or preformatted.
#[derive(Debug)]
enum TextRun {
    Flow(String),
    Preformatted(String),
}

/// Rendered text of an element, approximating `innerText`.
///
/// Block elements start new lines, whitespace within a line collapses,
/// blank lines are dropped, and template/script content is skipped.
/// Text under `<pre>` or `<textarea>` keeps its spacing and blank lines.
/// Table cells on one row are separated by a space.
pub fn text_of(el: ElementRef<'_>) -> String {
    let mut runs = Vec::new();
    push_text(el, false, &mut runs);

    let mut lines: Vec<String> = Vec::new();
    for run in runs {
        match run {
            TextRun::Flow(text) => lines.extend(
                text.lines()
                    .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
                    .filter(|line| !line.is_empty()),
            ),
            TextRun::Preformatted(text) => {
                let text = text.trim_start_matches(['\n', '\r']).trim_end();
                if !text.is_empty() {
                    lines.extend(text.lines().map(str::to_string));
                }
            }
        }
    }
    lines.join("\n")
}

fn push_run(runs: &mut Vec<TextRun>, preformatted: bool, text: &str) {
    match (runs.last_mut(), preformatted) {
        (Some(TextRun::Flow(last)), false) | (Some(TextRun::Preformatted(last)), true) => {
            last.push_str(text);
        }
        (_, false) => runs.push(TextRun::Flow(text.to_string())),
        (_, true) => runs.push(TextRun::Preformatted(text.to_string())),
    }
}

fn push_text(el: ElementRef<'_>, in_pre: bool, runs: &mut Vec<TextRun>) {
    let name = el.value().name();
    if HIDDEN_ELEMENTS.contains(&name) {
        return;
    }
    if name == "br" {
        push_run(runs, in_pre, "\n");
        return;
    }
    let block = !in_pre && BLOCK_ELEMENTS.contains(&name);
    if block {
        push_run(runs, false, "\n");
    }
    if !in_pre && CELL_ELEMENTS.contains(&name) {
        push_run(runs, false, " ");
    }
    let pre = in_pre || PREFORMATTED_ELEMENTS.contains(&name);
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            push_run(runs, pre, text);
        } else if let Some(child) = ElementRef::wrap(child) {
            push_text(child, pre, runs);
        }
    }
    if block {
        push_run(runs, false, "\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_dom_skips_templates() {
        let doc = PageDocument::parse(
            r#"<html><body>
                <p class="x">outside</p>
                <div><template shadowrootmode="open"><p class="x">inside</p></template></div>
            </body></html>"#,
        );
        let found = doc.select_all(&css("p.x").unwrap());
        assert_eq!(found.len(), 1);
        assert_eq!(text_of(found[0]), "outside");
    }

    #[test]
    fn test_shadow_root_and_scoped_select() {
        let doc = PageDocument::parse(
            r#"<html><body><rich-textarea id="host">
                <template shadowrootmode="open"><div contenteditable="true">edit</div></template>
            </rich-textarea></body></html>"#,
        );
        let host = doc.select_first(&css("#host").unwrap()).unwrap();
        let root = shadow_root(host).unwrap();
        let inner = select_first_within(root, &css("[contenteditable]").unwrap()).unwrap();
        assert_eq!(text_of(inner), "edit");
        assert!(is_in_template(&inner));
    }

    #[test]
    fn test_closest_is_inclusive() {
        let doc = PageDocument::parse(
            r#"<html><body><div data-is-user-message="true"><span id="s">hi</span></div></body></html>"#,
        );
        let span = doc.select_first(&css("#s").unwrap()).unwrap();
        let sel = css(r#"[data-is-user-message="true"]"#).unwrap();
        assert!(closest(span, &sel).is_some());
        let div = closest(span, &sel).unwrap();
        assert_eq!(closest(div, &sel).map(|e| e.id()), Some(div.id()));
    }

    #[test]
    fn test_text_of_blocks_and_whitespace() {
        let doc = PageDocument::parse(
            "<html><body><div id=\"m\"><p>first   line</p><p>second <b>bold</b></p><script>var x;</script></div></body></html>",
        );
        let div = doc.select_first(&css("#m").unwrap()).unwrap();
        assert_eq!(text_of(div), "first line\nsecond bold");
    }

    #[test]
    fn test_text_of_keeps_preformatted_text() {
        let doc = PageDocument::parse(
            "<html><body><div id=\"m\"><p>Try   this:</p><pre><code>def f(x):\n    if x:\n\n        return 1\n    return 0\n</code></pre><p>Done.</p></div></body></html>",
        );
        let div = doc.select_first(&css("#m").unwrap()).unwrap();
        assert_eq!(
            text_of(div),
            "Try this:\ndef f(x):\n    if x:\n\n        return 1\n    return 0\nDone."
        );
    }

    #[test]
    fn test_text_of_table_cells() {
        let doc = PageDocument::parse(
            "<html><body><table id=\"t\"><tr><th>a</th><th>b</th></tr><tr><td>1</td><td>2</td></tr></table></body></html>",
        );
        let table = doc.select_first(&css("#t").unwrap()).unwrap();
        assert_eq!(text_of(table), "a b\n1 2");
    }

    #[test]
    fn test_main_region_order() {
        let doc = PageDocument::parse(
            r#"<html><body><div role="main" id="r">x</div><div class="conversation">y</div></body></html>"#,
        );
        let region = doc.main_region(&[".conversation"]).unwrap().unwrap();
        assert_eq!(attr(region, "id"), Some("r"));
    }

    #[test]
    fn test_invalid_selector() {
        let err = css("div[").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector { .. }));
    }
}
