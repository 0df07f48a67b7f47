//! Poe (Quora) adapter.
//!
//! ## Extract Strategies
//!
//! 1. **Message containers** (priority 100):
//!    `[class*="message"], [class*="Message"], [data-role]`
//! 2. **Chat/bot/human blocks** (priority 60):
//!    `[class*="chat"], [class*="bot"], [class*="human"], article`
//! 3. **Paragraph scan** (priority 20): message, bubble, `p` and content
//!    blocks in `main`, alternating roles; attachments from the nearest `div`
//!
//! A container is a user turn when `data-role` says so, when it carries the
//! `human` or `user` class token, or when it contains a `human`/`user`
//! classed element.

// Modules
mod descriptor;
mod strategies;

// Re-exports
pub use descriptor::{INPUT_SELECTORS, poe_descriptor};
pub use strategies::{block_strategy, container_strategy, paragraph_strategy};
