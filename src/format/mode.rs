//! Case normalisation applied to dictated words before formatting.
//!
//! The recognition host may attach a disambiguation tag to a word after a
//! backslash (`"read\\verb"`), and dictation of compound words can carry
//! hyphens.  [`normalize`] forces the requested case and strips both.

use std::fmt;

/// Separator the recognition host places between a word and its tag.
pub const TAG_SEPARATOR: char = '\\';

// ---------------------------------------------------------------------------
// FormatMode
// ---------------------------------------------------------------------------

/// Case applied to every word before a formatter runs.
///
/// | Variant | Spoken prefix | Effect |
/// |---------|---------------|--------|
/// | Lower   | *(none)*      | every word lowercased |
/// | Upper   | `upper`       | every word uppercased |
/// | Natural | `natural`     | casing left as dictated |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatMode {
    Upper,
    Lower,
    Natural,
}

impl Default for FormatMode {
    fn default() -> Self {
        Self::Lower
    }
}

impl FormatMode {
    /// Mode selected by the first word of a format utterance.
    ///
    /// Only the keywords `upper` and `natural` select a mode; anything else
    /// (usually the style name itself) means the default, [`FormatMode::Lower`].
    ///
    /// ```
    /// use multi_edit::format::FormatMode;
    ///
    /// assert_eq!(FormatMode::from_prefix("upper"), FormatMode::Upper);
    /// assert_eq!(FormatMode::from_prefix("natural"), FormatMode::Natural);
    /// assert_eq!(FormatMode::from_prefix("camel"), FormatMode::Lower);
    /// ```
    pub fn from_prefix(word: &str) -> Self {
        match word {
            "upper" => Self::Upper,
            "natural" => Self::Natural,
            _ => Self::Lower,
        }
    }

    /// The spoken keyword for this mode, `None` for the implicit default.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Upper => Some("upper"),
            Self::Natural => Some("natural"),
            Self::Lower => None,
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Natural => "natural",
        })
    }
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

/// Apply `mode` to every word, then strip host tags and hyphens.
///
/// Never fails; an empty slice yields an empty vector.
///
/// ```
/// use multi_edit::format::{normalize, FormatMode};
///
/// let words = vec!["Hello".to_string(), "read\\verb".to_string(), "e-mail".to_string()];
/// assert_eq!(normalize(&words, FormatMode::Upper), ["HELLO", "READ", "EMAIL"]);
/// assert_eq!(normalize(&words, FormatMode::Natural), ["Hello", "read", "email"]);
/// ```
pub fn normalize<S: AsRef<str>>(words: &[S], mode: FormatMode) -> Vec<String> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            let cased = match mode {
                FormatMode::Lower => word.to_lowercase(),
                FormatMode::Upper => word.to_uppercase(),
                FormatMode::Natural => word.to_string(),
            };
            strip_word(&cased)
        })
        .collect()
}

/// Drop the host tag (everything from the first separator on) and hyphens.
fn strip_word(word: &str) -> String {
    let bare = match word.split_once(TAG_SEPARATOR) {
        Some((head, _tag)) => head,
        None => word,
    };
    bare.replace('-', "")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn upper_lower_natural() {
        let w = words(&["Hello"]);
        assert_eq!(normalize(&w, FormatMode::Upper), ["HELLO"]);
        assert_eq!(normalize(&w, FormatMode::Lower), ["hello"]);
        assert_eq!(normalize(&w, FormatMode::Natural), ["Hello"]);
    }

    #[test]
    fn empty_sequence_passes_through() {
        let w: Vec<String> = Vec::new();
        for mode in [FormatMode::Upper, FormatMode::Lower, FormatMode::Natural] {
            assert!(normalize(&w, mode).is_empty());
        }
    }

    #[test]
    fn strips_tag_after_separator() {
        let w = words(&["two\\number", "to\\\\preposition"]);
        assert_eq!(normalize(&w, FormatMode::Lower), ["two", "to"]);
    }

    #[test]
    fn removes_every_hyphen() {
        let w = words(&["scope-resolve", "-a-b-"]);
        assert_eq!(normalize(&w, FormatMode::Natural), ["scoperesolve", "ab"]);
    }

    #[test]
    fn hyphen_inside_tag_is_dropped_with_tag() {
        let w = words(&["x\\tag-with-hyphen"]);
        assert_eq!(normalize(&w, FormatMode::Lower), ["x"]);
    }

    #[test]
    fn idempotent_for_every_mode() {
        let w = words(&["MiXeD", "read\\verb", "e-mail", ""]);
        for mode in [FormatMode::Upper, FormatMode::Lower, FormatMode::Natural] {
            let once = normalize(&w, mode);
            assert_eq!(normalize(&once, mode), once, "mode {mode}");
        }
    }

    #[test]
    fn prefix_selection() {
        assert_eq!(FormatMode::from_prefix("upper"), FormatMode::Upper);
        assert_eq!(FormatMode::from_prefix("natural"), FormatMode::Natural);
        assert_eq!(FormatMode::from_prefix("proper"), FormatMode::Lower);
        assert_eq!(FormatMode::Lower.keyword(), None);
    }

}
