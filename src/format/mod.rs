//! Word formatting: turns dictated words into code identifiers.
//!
//! This module provides:
//! * [`FormatMode`] / [`normalize`]: upper / lower / natural case applied
//!   before formatting, plus removal of host tags and hyphens.
//! * [`FormatStyle`]: the naming conventions and their pure formatters.
//! * [`FormatterTable`]: style → formatter lookup built at start-up.
//! * [`FormatRule`]: interprets a whole `[upper | natural] <style> <words>`
//!   utterance.
//!
//! # Quick start
//!
//! ```
//! use multi_edit::format::{normalize, FormatMode, FormatStyle};
//!
//! let words = normalize(&["Parse", "Config", "File"], FormatMode::Lower);
//! assert_eq!(FormatStyle::Snakeword.apply(&words), "Parse_config_file");
//! ```

pub mod mode;
pub mod rule;
pub mod style;

pub use mode::{normalize, FormatMode, TAG_SEPARATOR};
pub use rule::{FormatRequest, FormatRule};
pub use style::{FormatStyle, Formatter, FormatterTable};

use thiserror::Error;

// ---------------------------------------------------------------------------
// FormatError
// ---------------------------------------------------------------------------

/// Errors raised while resolving a format utterance.
///
/// All of them indicate a mismatch between the grammar and this crate; the
/// grammar only ever offers the enumerated styles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The style word is not one of the known naming conventions.
    #[error("unknown format style: {0:?}")]
    UnknownStyle(String),

    /// The style is known but the active formatter table does not include it.
    #[error("format style {0} is not enabled")]
    UnsupportedStyle(FormatStyle),

    /// The utterance contained no style word.
    #[error("format utterance has no style word")]
    MissingStyle,
}
