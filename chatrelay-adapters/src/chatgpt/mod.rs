//! ChatGPT (OpenAI) adapter.
//!
//! ## Extract Strategies
//!
//! 1. **Conversation turns** (priority 100): `article[data-testid^="conversation-turn"]`
//!    - Role from the first `[data-message-author-role]` inside the turn,
//!      else a `data-testid` containing `user`
//!    - Text from `.markdown` or a `prose` block when present
//!
//! 2. **Articles** (priority 60): every `article`
//!    - Role from `data-message-author-role` inside the article
//!
//! There is no generic fallback: ChatGPT has always rendered turns as
//! articles, so a page without them has no conversation.
//!
//! ## Composer
//!
//! The composer has moved between a `textarea` and a ProseMirror
//! `contenteditable` over time; both are in the selector list, followed by
//! placeholder-based guesses.

// Modules
mod descriptor;
mod strategies;

// Re-exports
pub use descriptor::{INPUT_SELECTORS, chatgpt_descriptor};
pub use strategies::{article_strategy, turn_strategy};
