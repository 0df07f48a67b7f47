//! Gemini (Google) adapter.
//!
//! ## Extract Strategies
//!
//! 1. **Message blocks** (priority 100): `.message-content, [class*="message"]`
//!    - User when the block sits under a `user`-classed element or a
//!      `data-test-id` mentioning `user`, or contains a `user`-classed element
//!
//! 2. **Query/response elements** (priority 60): `user-query, model-response`
//!
//! 3. **Paragraph scan** (priority 20): message/response `div`s inside
//!    `main`, `[role="main"]` or `.conversation` longer than 10 characters,
//!    roles alternating from the user
//!
//! ## Composer
//!
//! Gemini wraps its editor in a `rich-textarea` custom element that may
//! host a shadow root; the locator descends into it before trying plain
//! editables and the Quill `.ql-editor`.

// Modules
mod descriptor;
mod strategies;

// Re-exports
pub use descriptor::{INPUT_SELECTORS, gemini_descriptor};
pub use strategies::{message_strategy, paragraph_strategy, query_response_strategy};
