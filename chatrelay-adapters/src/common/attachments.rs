//! Attachment discovery inside a turn.

use chatrelay_core::Attachment;
use chatrelay_dom::ExtractError;
use chatrelay_dom::host::document::{attr, closest, css, parent_element, select_within, text_of};
use scraper::ElementRef;

/// Images that count as attachments.
pub const IMAGE_SELECTOR: &str = "img[src]";

/// Links that count as file attachments.
pub const FILE_LINK_SELECTOR: &str = r#"a[href*="blob"], a[href*="download"], a[download]"#;

/// Name used when a file link has neither a `download` value nor text.
pub const DEFAULT_FILE_NAME: &str = "file";

/// Which element attachments are collected from, relative to a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentScope {
    /// The turn element itself.
    #[default]
    Container,
    /// The nearest `div` at or above the turn element.
    ClosestDiv,
    /// The turn element's parent.
    Parent,
}

impl AttachmentScope {
    /// Returns the element to search for `turn`.
    pub fn resolve<'a>(self, turn: ElementRef<'a>) -> Result<ElementRef<'a>, ExtractError> {
        Ok(match self {
            Self::Container => turn,
            Self::ClosestDiv => closest(turn, &css("div")?).unwrap_or(turn),
            Self::Parent => parent_element(turn).unwrap_or(turn),
        })
    }
}

/// Collects image and file attachments found under `scope`.
///
/// Images come first, then file links, each in document order. Empty
/// `src`/`href` values are ignored.
pub fn collect_attachments(scope: ElementRef<'_>) -> Result<Vec<Attachment>, ExtractError> {
    let mut attachments = Vec::new();

    for img in select_within(scope, &css(IMAGE_SELECTOR)?) {
        let src = attr(img, "src").unwrap_or_default().trim();
        if !src.is_empty() {
            attachments.push(Attachment::image(src));
        }
    }

    for link in select_within(scope, &css(FILE_LINK_SELECTOR)?) {
        let href = attr(link, "href").unwrap_or_default().trim();
        if href.is_empty() {
            continue;
        }
        let text = text_of(link);
        let name = [attr(link, "download").unwrap_or_default(), text.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME);
        attachments.push(Attachment::file(href, name));
    }

    Ok(attachments)
}
