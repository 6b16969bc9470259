//! Naming-convention formatters.
//!
//! Each [`FormatStyle`] maps to a pure function from a word sequence to a
//! single string.  All of them are total: an empty sequence (or empty words
//! inside the sequence) never panics.
//!
//! | Style         | `["hello", "world"]` |
//! |---------------|----------------------|
//! | proper        | `HelloWorld`         |
//! | camel         | `helloWorld`         |
//! | snakeword     | `Hello_world`        |
//! | score         | `hello_world`        |
//! | rel-path      | `hello/world`        |
//! | abs-path      | `/hello/world`       |
//! | scope-resolve | `hello::world`       |
//! | jumble        | `helloworld`         |
//! | dotword       | `hello.world`        |
//! | dashword      | `hello-world`        |
//! | natword       | `hello world`        |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::FormatError;

/// Signature shared by every formatter.
pub type Formatter = fn(&[String]) -> String;

// ---------------------------------------------------------------------------
// FormatStyle
// ---------------------------------------------------------------------------

/// The naming conventions a format utterance can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    Proper,
    Camel,
    Snakeword,
    Score,
    RelPath,
    AbsPath,
    ScopeResolve,
    Jumble,
    Dotword,
    Dashword,
    Natword,
}

impl FormatStyle {
    /// Every style, in the order the grammar lists them.
    pub const ALL: [FormatStyle; 11] = [
        FormatStyle::Proper,
        FormatStyle::Camel,
        FormatStyle::RelPath,
        FormatStyle::AbsPath,
        FormatStyle::Score,
        FormatStyle::ScopeResolve,
        FormatStyle::Jumble,
        FormatStyle::Dotword,
        FormatStyle::Dashword,
        FormatStyle::Natword,
        FormatStyle::Snakeword,
    ];

    /// The spoken name of the style as it appears in the grammar.
    pub fn spoken(self) -> &'static str {
        match self {
            Self::Proper => "proper",
            Self::Camel => "camel",
            Self::Snakeword => "snakeword",
            Self::Score => "score",
            Self::RelPath => "rel-path",
            Self::AbsPath => "abs-path",
            Self::ScopeResolve => "scope-resolve",
            Self::Jumble => "jumble",
            Self::Dotword => "dotword",
            Self::Dashword => "dashword",
            Self::Natword => "natword",
        }
    }

    /// The function implementing this style.
    pub fn formatter(self) -> Formatter {
        match self {
            Self::Proper => format_proper,
            Self::Camel => format_camel,
            Self::Snakeword => format_snakeword,
            Self::Score => format_score,
            Self::RelPath => format_relpath,
            Self::AbsPath => format_abspath,
            Self::ScopeResolve => format_scoperesolve,
            Self::Jumble => format_jumble,
            Self::Dotword => format_dotword,
            Self::Dashword => format_dashword,
            Self::Natword => format_natword,
        }
    }

    /// Format `words` with this style.
    ///
    /// ```
    /// use multi_edit::format::FormatStyle;
    ///
    /// let words = ["hello".to_string(), "world".to_string(), "foo".to_string()];
    /// assert_eq!(FormatStyle::Camel.apply(&words), "helloWorldFoo");
    /// assert_eq!(FormatStyle::ScopeResolve.apply(&words), "hello::world::foo");
    /// ```
    pub fn apply(self, words: &[String]) -> String {
        (self.formatter())(words)
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spoken())
    }
}

impl FromStr for FormatStyle {
    type Err = FormatError;

    /// Accepts the spoken name case-insensitively, with or without hyphens
    /// (normalisation removes them before the style word is looked up).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase().replace('-', "");
        match key.as_str() {
            "proper" => Ok(Self::Proper),
            "camel" => Ok(Self::Camel),
            "snakeword" => Ok(Self::Snakeword),
            "score" => Ok(Self::Score),
            "relpath" => Ok(Self::RelPath),
            "abspath" => Ok(Self::AbsPath),
            "scoperesolve" => Ok(Self::ScopeResolve),
            "jumble" => Ok(Self::Jumble),
            "dotword" => Ok(Self::Dotword),
            "dashword" => Ok(Self::Dashword),
            "natword" => Ok(Self::Natword),
            _ => Err(FormatError::UnknownStyle(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// FormatterTable
// ---------------------------------------------------------------------------

/// Style → formatter lookup, resolved once when the grammar is initialised.
#[derive(Clone)]
pub struct FormatterTable {
    formatters: HashMap<FormatStyle, Formatter>,
}

impl fmt::Debug for FormatterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.formatters.keys()).finish()
    }
}

impl Default for FormatterTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterTable {
    /// Table containing every [`FormatStyle`].
    pub fn new() -> Self {
        Self {
            formatters: FormatStyle::ALL
                .iter()
                .map(|&style| (style, style.formatter()))
                .collect(),
        }
    }

    /// Table restricted to the named styles.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnknownStyle`] for the first name that is not a style.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, FormatError> {
        let mut formatters = HashMap::with_capacity(names.len());
        for name in names {
            let style: FormatStyle = name.as_ref().parse()?;
            formatters.insert(style, style.formatter());
        }
        Ok(Self { formatters })
    }

    /// Returns `true` when `style` is available in this table.
    pub fn contains(&self, style: FormatStyle) -> bool {
        self.formatters.contains_key(&style)
    }

    /// Number of styles in the table.
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Returns `true` when the table holds no styles.
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    /// Format `words` with `style`.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnsupportedStyle`] when the table was built without
    /// `style`.
    pub fn format(&self, style: FormatStyle, words: &[String]) -> Result<String, FormatError> {
        let formatter = self
            .formatters
            .get(&style)
            .ok_or(FormatError::UnsupportedStyle(style))?;
        Ok(formatter(words))
    }

    /// Look up a style by name and format `words` with it.
    pub fn format_named(&self, name: &str, words: &[String]) -> Result<String, FormatError> {
        self.format(name.parse()?, words)
    }
}

// ---------------------------------------------------------------------------
// Formatters
// ---------------------------------------------------------------------------

/// `HelloWorld`: every word capitalised (rest of the word lowercased).
pub fn format_proper(words: &[String]) -> String {
    words.iter().map(|w| capitalize(w)).collect()
}

/// `helloWorld`: first word untouched, later words get an uppercase initial.
pub fn format_camel(words: &[String]) -> String {
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let mut out = first.clone();
    for word in rest {
        out.push_str(&upper_first(word));
    }
    out
}

/// `Hello_world`: uppercase initial on the first word only, then underscores.
pub fn format_snakeword(words: &[String]) -> String {
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let mut out = upper_first(first);
    if !rest.is_empty() {
        out.push('_');
        out.push_str(&format_score(rest));
    }
    out
}

/// `hello_world`
pub fn format_score(words: &[String]) -> String {
    words.join("_")
}

/// `hello/world`
pub fn format_relpath(words: &[String]) -> String {
    words.join("/")
}

/// `/hello/world`
pub fn format_abspath(words: &[String]) -> String {
    format!("/{}", format_relpath(words))
}

/// `hello::world`
pub fn format_scoperesolve(words: &[String]) -> String {
    words.join("::")
}

/// `helloworld`
pub fn format_jumble(words: &[String]) -> String {
    words.concat()
}

/// `hello.world`
pub fn format_dotword(words: &[String]) -> String {
    words.join(".")
}

/// `hello-world`
pub fn format_dashword(words: &[String]) -> String {
    words.join("-")
}

/// `hello world`
pub fn format_natword(words: &[String]) -> String {
    words.join(" ")
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// First character uppercased, the remainder unchanged.
fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character uppercased, the remainder lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
