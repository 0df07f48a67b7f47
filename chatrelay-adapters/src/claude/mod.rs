//! Claude (Anthropic) adapter.
//!
//! ## Extract Strategies
//!
//! 1. **Render-count turns** (priority 100): `[data-test-render-count]`
//!    - User turns carry `data-is-user-message="true"` on the turn or inside it
//!    - Text from `.font-claude-message` or a `prose` block when present
//!
//! 2. **Message bodies** (priority 60): `.font-claude-message`
//!    - User when an enclosing element has `data-is-user-message="true"`
//!    - Attachments from the nearest enclosing `div`
//!
//! 3. **Prose probe** (priority 0): if `main` still has text, the layout
//!    changed under us and extraction fails with `UnrecognizedLayout`
//!    instead of reporting an empty conversation.
//!
//! ## Composer
//!
//! A ProseMirror `div[contenteditable="true"]`, with `textarea` and
//! `role="textbox"` as fallbacks.

// Modules
mod descriptor;
mod strategies;

// Re-exports
pub use descriptor::{INPUT_SELECTORS, claude_descriptor};
pub use strategies::{body_strategy, probe_strategy, render_count_strategy};
