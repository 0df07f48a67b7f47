//! Generic adapter for routed platforms without site-specific selectors.
//!
//! Perplexity, Copilot, Meta AI and You.com are recognized by URL but have
//! no dedicated markup knowledge. They share one chain built from the
//! conventions the other sites use:
//!
//! 1. **Author attributes** (priority 100):
//!    `[data-message-author-role], [data-role]`
//! 2. **Message classes** (priority 60): `[class*="message"]`, user when
//!    the class list has `user` or `human`
//! 3. **Paragraph scan** (priority 20): `p` in `main`, alternating roles

// Modules
mod descriptor;

// Re-exports
pub use descriptor::{
    INPUT_SELECTORS, copilot_descriptor, generic_pipeline, meta_descriptor,
    perplexity_descriptor, you_descriptor,
};
