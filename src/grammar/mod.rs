//! Grammar lifecycle and recognition dispatch.
//!
//! # Lifecycle
//!
//! ```text
//! initialize(&config) ──▶ GrammarHandle ──dispatch(..)*──▶ shutdown(handle)
//! ```
//!
//! [`initialize`] builds everything the grammar needs (formatter table,
//! command table, context matcher) once; the returned [`GrammarHandle`] is
//! immutable and is passed explicitly to every call.  [`shutdown`] consumes
//! it.  There is no process-wide grammar state.
//!
//! # Usage
//!
//! ```
//! use multi_edit::config::AppConfig;
//! use multi_edit::context::EditorContext;
//! use multi_edit::execute::RecordingExecutor;
//! use multi_edit::grammar::{initialize, shutdown, Element, Recognition};
//!
//! let handle = initialize(&AppConfig::default()).unwrap();
//! let mut exec = RecordingExecutor::new();
//!
//! let rec = Recognition::new(vec![
//!     Element::command("deaf"),
//!     Element::format(&["snakeword", "parse", "args"]),
//!     Element::command("circle"),
//! ]);
//! handle.dispatch(&rec, EditorContext::Normal, &mut exec).unwrap();
//! assert_eq!(exec.typed_text(), "def Parse_args()");
//!
//! shutdown(handle);
//! ```

pub mod handle;
pub mod recognition;

pub use handle::{initialize, shutdown, GrammarHandle, Limits};
pub use recognition::{Element, Recognition, Tail};

use thiserror::Error;

use crate::action::ActionError;
use crate::commands::TableError;
use crate::execute::ExecuteError;
use crate::format::FormatError;

// ---------------------------------------------------------------------------
// GrammarError
// ---------------------------------------------------------------------------

/// All errors that can surface while loading the grammar or dispatching a
/// recognition.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A format utterance or style list is invalid.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The command table could not be built.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A template could not be bound to the recognised extras.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// The executor failed.
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    /// The VIM window pattern does not compile.
    #[error("invalid VIM window pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A configured limit is zero.
    #[error("grammar limit {0} must be at least 1")]
    InvalidLimit(&'static str),

    /// The phrase is not in the command table.
    #[error("unknown command phrase: {0:?}")]
    UnknownPhrase(String),

    /// The command sequence is empty or longer than allowed.
    #[error("command sequence has {len} elements, expected 1..={max}")]
    SequenceLength { len: usize, max: usize },

    /// A repeat count or `<n>` is outside `1..=max`.
    #[error("count {value} out of range 1..={max}")]
    CountOutOfRange { value: u32, max: u32 },

    /// A count was given for a phrase that does not take one.
    #[error("command {0:?} does not take a count")]
    UnexpectedCount(String),

    /// The spelled finish is empty or longer than allowed.
    #[error("spelled finish has {len} items, expected 1..={max}")]
    SpellLength { len: usize, max: usize },

    /// A spelled item is not in the chosen alphabet.
    #[error("{word:?} is not in the {alphabet} alphabet")]
    UnknownSpelling { alphabet: String, word: String },
}
