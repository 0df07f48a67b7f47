// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # ChatRelay Adapters
//!
//! Platform adapters for every chat product ChatRelay understands.
//!
//! ## Supported Platforms
//!
//! | Platform | Hosts | Chain |
//! |----------|-------|-------|
//! | Claude | claude.ai | render-count, message body, prose probe |
//! | ChatGPT | chatgpt.com, chat.openai.com | conversation turns, articles |
//! | Gemini | gemini.google.com | message blocks, query/response, paragraphs |
//! | Grok | grok.com | containers, role classes, paragraphs |
//! | Poe | poe.com | containers, chat blocks, paragraphs |
//! | Perplexity | perplexity.ai | generic |
//! | Copilot | copilot.microsoft.com, bing.com | generic |
//! | Meta AI | meta.ai | generic |
//! | You.com | you.com | generic |
//!
//! ## Architecture
//!
//! Each platform has a module with:
//! - `descriptor.rs` - The adapter descriptor (hosts, pipeline, composer selectors)
//! - `strategies.rs` - Extract strategies built from [`common`] pieces
//!
//! ## Usage
//!
//! ```ignore
//! use chatrelay_adapters::{AdapterRegistry, PlatformAdapter};
//!
//! let adapter = AdapterRegistry::for_url("https://claude.ai/chat/1").unwrap();
//! let conversation = adapter.extract_messages(&page, &settings)?;
//! ```

pub mod adapter;
pub mod common;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod registry;

// Platforms
pub mod chatgpt;
pub mod claude;
pub mod gemini;
pub mod generic;
pub mod grok;
pub mod poe;

#[cfg(test)]
mod extraction_edge_tests;

pub use adapter::PlatformAdapter;
pub use descriptor::{
    AdapterDescriptor, AdapterDescriptorBuilder, AdapterMetadata, AdapterSummary, ExtractPlan,
    InputPlan, RouteConfig,
};
pub use dispatch::{DispatchContext, Handled, handle_json, handle_request, import_text};
pub use error::AdapterError;
pub use registry::AdapterRegistry;
