//! Editor context: which template column applies.
//!
//! The recognition host decides whether the foreground window is the modal
//! editor; this crate only needs the answer.  [`ContextMatcher`] evaluates
//! the configured window-title pattern for hosts that hand over a title
//! instead of a flag.

use regex::Regex;

/// Default pattern for VIM window titles.
pub const DEFAULT_VIM_PATTERN: &str = ".*VIM.*";

/// Which column of the command table is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorContext {
    #[default]
    Normal,
    Vim,
}

impl EditorContext {
    /// Context from the host's "window matches the VIM pattern" predicate.
    pub fn from_flag(is_vim: bool) -> Self {
        if is_vim {
            Self::Vim
        } else {
            Self::Normal
        }
    }
}

// ---------------------------------------------------------------------------
// ContextMatcher
// ---------------------------------------------------------------------------

/// Classifies window titles with a regular expression.
///
/// The pattern must match at the start of the title, like the host's
/// application-context filter.
#[derive(Debug, Clone)]
pub struct ContextMatcher {
    pattern: Regex,
}

impl Default for ContextMatcher {
    fn default() -> Self {
        Self {
            pattern: anchored(DEFAULT_VIM_PATTERN).expect("default VIM pattern is valid"),
        }
    }
}

impl ContextMatcher {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the [`regex::Error`] for an invalid pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: anchored(pattern)?,
        })
    }

    pub fn is_vim(&self, window_title: &str) -> bool {
        self.pattern.is_match(window_title)
    }

    /// ```
    /// use multi_edit::context::{ContextMatcher, EditorContext};
    ///
    /// let matcher = ContextMatcher::default();
    /// assert_eq!(matcher.classify("main.rs (~/src) - GVIM"), EditorContext::Vim);
    /// assert_eq!(matcher.classify("Untitled - Notepad"), EditorContext::Normal);
    /// ```
    pub fn classify(&self, window_title: &str) -> EditorContext {
        EditorContext::from_flag(self.is_vim(window_title))
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
