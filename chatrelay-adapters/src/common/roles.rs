//! Author role resolution for turn containers.
//!
//! Sites mark authorship in different ways. A [`RoleResolver`] checks, in
//! order:
//!
//! 1. An explicit author attribute on the container or its first
//!    descendant carrying it (folded with [`Role::fold`])
//! 2. A boolean is-user attribute set to `"true"` on the container, a
//!    descendant, or an ancestor
//! 3. Platform-specific [`UserCue`]s
//!
//! Anything else is the assistant.

use chatrelay_core::Role;
use chatrelay_dom::ExtractError;
use chatrelay_dom::host::document::{attr, closest, css, has_class, select_first_within};
use scraper::ElementRef;

// ============================================================================
// User Cues
// ============================================================================

/// A structural hint that a container holds a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCue {
    /// The container carries this class token.
    ClassToken(&'static str),
    /// The named attribute of the container contains this substring.
    AttrContains(&'static str, &'static str),
    /// The container has a descendant matching this selector.
    Descendant(&'static str),
    /// The container or one of its ancestors matches this selector.
    Ancestor(&'static str),
}

impl UserCue {
    fn matches(self, el: ElementRef<'_>) -> Result<bool, ExtractError> {
        Ok(match self {
            Self::ClassToken(class) => has_class(el, class),
            Self::AttrContains(name, needle) => attr(el, name).is_some_and(|v| v.contains(needle)),
            Self::Descendant(selector) => select_first_within(el, &css(selector)?).is_some(),
            Self::Ancestor(selector) => closest(el, &css(selector)?).is_some(),
        })
    }
}

// ============================================================================
// Role Resolver
// ============================================================================

/// Decides the author role of a turn container.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleResolver {
    author_attrs: &'static [&'static str],
    user_flag: Option<&'static str>,
    cues: &'static [UserCue],
}

impl RoleResolver {
    /// A resolver that only knows the default (assistant).
    pub const fn new() -> Self {
        Self {
            author_attrs: &[],
            user_flag: None,
            cues: &[],
        }
    }

    /// Attributes whose value names the author (`data-message-author-role`).
    #[must_use]
    pub const fn author_attrs(mut self, attrs: &'static [&'static str]) -> Self {
        self.author_attrs = attrs;
        self
    }

    /// Boolean attribute that is `"true"` on user turns (`data-is-user-message`).
    #[must_use]
    pub const fn user_flag(mut self, name: &'static str) -> Self {
        self.user_flag = Some(name);
        self
    }

    /// Class and structure heuristics, any of which marks a user turn.
    #[must_use]
    pub const fn cues(mut self, cues: &'static [UserCue]) -> Self {
        self.cues = cues;
        self
    }

    /// Resolves the role of `container`.
    pub fn resolve(&self, container: ElementRef<'_>) -> Result<Role, ExtractError> {
        for name in self.author_attrs {
            if let Some(value) = Self::author_value(container, name)? {
                return Ok(Role::fold(value));
            }
        }

        if let Some(flag) = self.user_flag {
            let selector = css(&format!("[{flag}=\"true\"]"))?;
            if closest(container, &selector).is_some()
                || select_first_within(container, &selector).is_some()
            {
                return Ok(Role::User);
            }
        }

        for cue in self.cues {
            if cue.matches(container)? {
                return Ok(Role::User);
            }
        }

        Ok(Role::Assistant)
    }

    fn author_value<'a>(
        container: ElementRef<'a>,
        name: &str,
    ) -> Result<Option<&'a str>, ExtractError> {
        if let Some(value) = attr(container, name) {
            return Ok(Some(value));
        }
        let selector = css(&format!("[{name}]"))?;
        Ok(select_first_within(container, &selector).and_then(|el| attr(el, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrelay_dom::PageDocument;

    fn role_of(html: &str, resolver: RoleResolver) -> Role {
        let doc = PageDocument::parse(html);
        let turn = doc.select_first(&css(".turn").unwrap()).unwrap();
        resolver.resolve(turn).unwrap()
    }

    #[test]
    fn test_author_attribute_on_descendant() {
        let resolver = RoleResolver::new().author_attrs(&["data-message-author-role"]);
        let html = r#"<div class="turn"><div data-message-author-role="user">hi</div></div>"#;
        assert_eq!(role_of(html, resolver), Role::User);

        let html = r#"<div class="turn" data-message-author-role="system">hi</div>"#;
        assert_eq!(role_of(html, resolver), Role::Assistant);
    }

    #[test]
    fn test_user_flag_on_ancestor() {
        let resolver = RoleResolver::new().user_flag("data-is-user-message");
        let html = r#"<div data-is-user-message="true"><p class="turn">q</p></div>"#;
        assert_eq!(role_of(html, resolver), Role::User);

        let html = r#"<div data-is-user-message="false"><p class="turn">q</p></div>"#;
        assert_eq!(role_of(html, resolver), Role::Assistant);
    }

    #[test]
    fn test_author_attribute_beats_cues() {
        let resolver = RoleResolver::new()
            .author_attrs(&["data-role"])
            .cues(&[UserCue::ClassToken("turn")]);
        let html = r#"<div class="turn" data-role="bot">x</div>"#;
        assert_eq!(role_of(html, resolver), Role::Assistant);
    }

    #[test]
    fn test_cues() {
        let token = RoleResolver::new().cues(&[UserCue::ClassToken("human")]);
        assert_eq!(role_of(r#"<div class="turn human">x</div>"#, token), Role::User);
        assert_eq!(role_of(r#"<div class="turn humanoid">x</div>"#, token), Role::Assistant);

        let testid = RoleResolver::new().cues(&[UserCue::AttrContains("data-testid", "user")]);
        assert_eq!(
            role_of(r#"<div class="turn" data-testid="turn-user-1">x</div>"#, testid),
            Role::User
        );

        let nested = RoleResolver::new().cues(&[UserCue::Descendant("[class*=\"user\"]")]);
        assert_eq!(
            role_of(r#"<div class="turn"><span class="is-user-avatar"></span>x</div>"#, nested),
            Role::User
        );
    }

    #[test]
    fn test_default_is_assistant() {
        assert_eq!(role_of(r#"<div class="turn">x</div>"#, RoleResolver::new()), Role::Assistant);
    }
}
