//! Output formatting for CLI.

mod json;
mod text;

pub use json::{ExportOutput, JsonFormatter};
pub use text::TextFormatter;
pub(crate) use text::{GREEN, YELLOW, paint};
#[cfg(test)]
mod tests;
