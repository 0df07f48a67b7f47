//! Building blocks shared by platform adapters.
//!
//! - [`roles`] - Author role resolution
//! - [`attachments`] - Image and file discovery inside a turn
//! - [`selector`] - One message per container match
//! - [`alternation`] - Generic paragraph scan with alternating roles
//! - [`probe`] - Unsegmented-prose detection

pub mod alternation;
pub mod attachments;
pub mod probe;
pub mod roles;
pub mod selector;

pub use alternation::AlternationStrategy;
pub use attachments::{AttachmentScope, collect_attachments};
pub use probe::ProseProbeStrategy;
pub use roles::{RoleResolver, UserCue};
pub use selector::SelectorStrategy;
