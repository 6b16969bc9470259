//! Interpretation of a complete format utterance.
//!
//! The grammar offers
//!
//! ```text
//! [upper | natural] ( proper | camel | rel-path | abs-path | score |
//!                     scope-resolve | jumble | dotword | dashword |
//!                     natword | snakeword ) [<dictation>]
//! ```
//!
//! and hands over the recognised words verbatim.  [`FormatRule`] picks the
//! mode from the first word, normalises every word (keywords included), drops
//! the mode keyword and formats the remaining dictation with the named style.

use super::{normalize, FormatError, FormatMode, FormatStyle, FormatterTable};

/// Spoken keywords that may introduce a format utterance.
pub const MODE_KEYWORDS: [&str; 2] = ["upper", "natural"];

/// A format utterance after the style word has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    pub mode: FormatMode,
    pub style: FormatStyle,
    /// Normalised dictation words (keywords removed).
    pub words: Vec<String>,
}

impl FormatRequest {
    /// Split a recognised utterance into mode, style and dictation.
    ///
    /// # Errors
    ///
    /// - [`FormatError::MissingStyle`] when no style word follows the mode.
    /// - [`FormatError::UnknownStyle`] when the style word is not a style.
    pub fn parse<S: AsRef<str>>(utterance: &[S]) -> Result<Self, FormatError> {
        let mode = utterance
            .first()
            .map(|w| FormatMode::from_prefix(w.as_ref()))
            .unwrap_or_default();

        let mut words = normalize(utterance, mode);
        if words
            .first()
            .is_some_and(|w| MODE_KEYWORDS.contains(&w.to_lowercase().as_str()))
        {
            words.remove(0);
        }

        if words.is_empty() {
            return Err(FormatError::MissingStyle);
        }
        let style: FormatStyle = words.remove(0).parse()?;

        Ok(Self { mode, style, words })
    }
}

// ---------------------------------------------------------------------------
// FormatRule
// ---------------------------------------------------------------------------

/// Resolves format utterances against a [`FormatterTable`].
#[derive(Debug, Clone, Default)]
pub struct FormatRule {
    table: FormatterTable,
}

impl FormatRule {
    pub fn new(table: FormatterTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &FormatterTable {
        &self.table
    }

    /// The text a format utterance produces.
    ///
    /// ```
    /// use multi_edit::format::FormatRule;
    ///
    /// let rule = FormatRule::default();
    /// assert_eq!(rule.value(&["camel", "Get", "Value"]).unwrap(), "getValue");
    /// assert_eq!(rule.value(&["upper", "score", "max", "size"]).unwrap(), "MAX_SIZE");
    /// assert_eq!(rule.value(&["natural", "natword", "Hello", "there"]).unwrap(), "Hello there");
    /// ```
    pub fn value<S: AsRef<str>>(&self, utterance: &[S]) -> Result<String, FormatError> {
        let request = FormatRequest::parse(utterance)?;
        let text = self.table.format(request.style, &request.words)?;
        log::debug!(
            "format: {} {} ({} words) -> {:?}",
            request.mode,
            request.style,
            request.words.len(),
            text
        );
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_lowercases() {
        let rule = FormatRule::default();
        assert_eq!(rule.value(&["proper", "HELLO", "world"]).unwrap(), "HelloWorld");
        assert_eq!(rule.value(&["score", "Foo", "BAR"]).unwrap(), "foo_bar");
    }

    #[test]
    fn upper_mode() {
        let rule = FormatRule::default();
        assert_eq!(rule.value(&["upper", "dotword", "a", "b"]).unwrap(), "A.B");
        // camel keeps the first word as-is, so everything stays uppercase.
        assert_eq!(rule.value(&["upper", "camel", "x", "y"]).unwrap(), "XY");
    }

    #[test]
    fn natural_mode_preserves_case() {
        let rule = FormatRule::default();
        assert_eq!(
            rule.value(&["natural", "camel", "HTTP", "request"]).unwrap(),
            "HTTPRequest"
        );
    }

    #[test]
    fn hyphenated_style_names() {
        let rule = FormatRule::default();
        assert_eq!(rule.value(&["rel-path", "src", "lib"]).unwrap(), "src/lib");
        assert_eq!(rule.value(&["abs-path", "etc", "hosts"]).unwrap(), "/etc/hosts");
        assert_eq!(
            rule.value(&["scope-resolve", "std", "io"]).unwrap(),
            "std::io"
        );
    }

    #[test]
    fn dictation_tags_are_stripped() {
        let rule = FormatRule::default();
        assert_eq!(
            rule.value(&["snakeword", "read\\verb", "e-mail"]).unwrap(),
            "Read_email"
        );
    }

    #[test]
    fn style_without_dictation() {
        let rule = FormatRule::default();
        assert_eq!(rule.value(&["jumble"]).unwrap(), "");
        assert_eq!(rule.value(&["upper", "natword"]).unwrap(), "");
    }

    #[test]
    fn missing_style_is_an_error() {
        let rule = FormatRule::default();
        let empty: [&str; 0] = [];
        assert!(matches!(rule.value(&empty), Err(FormatError::MissingStyle)));
        assert!(matches!(rule.value(&["upper"]), Err(FormatError::MissingStyle)));
    }

    #[test]
    fn unknown_style_is_an_error() {
        let rule = FormatRule::default();
        assert!(matches!(
            rule.value(&["kebab", "a"]),
            Err(FormatError::UnknownStyle(_))
        ));
    }

    #[test]
    fn request_exposes_parts() {
        let req = FormatRequest::parse(&["natural", "dashword", "Foo", "Bar"]).unwrap();
        assert_eq!(req.mode, FormatMode::Natural);
        assert_eq!(req.style, FormatStyle::Dashword);
        assert_eq!(req.words, ["Foo", "Bar"]);
    }
}
