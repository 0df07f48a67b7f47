// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # ChatRelay DOM
//!
//! Page access for ChatRelay: reading conversations out of chat pages and
//! pushing text back into their composers.
//!
//! ## Host APIs
//!
//! - [`host::document`] - Parsed page snapshots with light-DOM queries
//! - [`host::target`] - Editable targets and synthetic events
//! - [`host::clipboard`] - System clipboard (`pbcopy`, `wl-copy`, `xclip`, `xsel`)
//! - [`host::process`] - Subprocess execution
//!
//! ## Extraction
//!
//! - [`strategy::ExtractStrategy`] - One way of reading turns from a page
//! - [`pipeline::ExtractPipeline`] - Runs strategies in priority order
//!
//! ## Injection
//!
//! - [`locator::InputLocator`] - Finds the composer, descending into shadow roots
//! - [`delivery::DeliveryPipeline`] - Applies every delivery technique in order
//!
//! ## Example
//!
//! ```ignore
//! use chatrelay_dom::{ExtractContext, ExtractPipeline, PageDocument};
//!
//! let doc = PageDocument::parse(&html);
//! let ctx = ExtractContext::new(&doc, PlatformKind::Claude);
//! let outcome = pipeline.execute(&ctx);
//! ```

pub mod context;
pub mod delivery;
pub mod error;
pub mod host;
pub mod locator;
pub mod pipeline;
pub mod strategy;

// Errors
pub use error::{ClipboardError, DeliveryError, ExtractError, ProcessError};

// Host APIs
pub use host::{
    clipboard::{ClipboardApi, MemoryClipboard, SystemClipboard},
    document::PageDocument,
    process::{ProcessOutput, ProcessRunner},
    target::{EditableTarget, KeyPhase, PasteModifier, SnapshotTarget, SyntheticEvent, TargetKind},
};

// Extraction
pub use context::{
    DeliveryContext, DeliveryContextBuilder, DeliverySettings, ExtractContext, ExtractSettings,
};
pub use pipeline::{ExtractAttempt, ExtractOutcome, ExtractPipeline};
pub use strategy::{ExtractResult, ExtractStrategy, StrategyInfo, StrategyKind};

// Injection
pub use delivery::{
    DeliveryPipeline, DeliveryReport, DeliveryTechnique, StepAttempt, StepStatus,
};
pub use locator::{InputLocator, LocatedInput, editable_kind};
