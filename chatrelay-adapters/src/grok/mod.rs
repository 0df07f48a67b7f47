//! Grok (xAI) adapter.
//!
//! ## Extract Strategies
//!
//! 1. **Message containers** (priority 100):
//!    `[class*="message"], [class*="Message"], [data-role]`
//! 2. **Role-classed elements** (priority 60):
//!    `[class*="user"], [class*="assistant"], [class*="human"]`, at least
//!    two characters of text
//! 3. **Paragraph scan** (priority 20): `p`, content and text blocks in
//!    `main`, alternating roles; attachments come from the block's parent
//!
//! Roles come from `data-role`, else the `user` / `human` class tokens.
//! Grok's class names are generated, so the looser patterns match nested
//! wrappers too; every match becomes its own message.

// Modules
mod descriptor;
mod strategies;

// Re-exports
pub use descriptor::{INPUT_SELECTORS, grok_descriptor};
pub use strategies::{container_strategy, paragraph_strategy, role_class_strategy};
