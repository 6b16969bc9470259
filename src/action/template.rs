//! `%(name)d` / `%(name)s` placeholder templates.
//!
//! Command templates are written in the recognition host's notation: `%(n)d`
//! is the recognised repeat count, `%(text)s` / `%(text2)s` are dictated
//! text, and `%%` is a literal percent sign.  A [`Template`] is parsed once
//! when the command table is built and rendered against [`Bindings`] at
//! execution time.

use std::fmt;

use super::{ActionError, Bindings};

// ---------------------------------------------------------------------------
// Param
// ---------------------------------------------------------------------------

/// The extras a template may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// `n`: integer repeat count.
    Count,
    /// `text`: first dictation.
    Text,
    /// `text2`: second dictation.
    Text2,
}

impl Param {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "n" => Some(Self::Count),
            "text" => Some(Self::Text),
            "text2" => Some(Self::Text2),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Count => "n",
            Self::Text => "text",
            Self::Text2 => "text2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(Param),
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// A parsed text template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source`.
    ///
    /// # Errors
    ///
    /// - [`ActionError::BadPlaceholder`] for a `%` that does not start `%%`
    ///   or a complete `%(name)d` / `%(name)s`.
    /// - [`ActionError::UnknownParameter`] for a name other than `n`,
    ///   `text` or `text2`.
    pub fn parse(source: &str) -> Result<Self, ActionError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            match chars.next() {
                Some('%') => literal.push('%'),
                Some('(') => {
                    let rest = chars.as_str();
                    let close = rest
                        .find(')')
                        .ok_or_else(|| ActionError::BadPlaceholder(source.to_string()))?;
                    let name = &rest[..close];
                    let param = Param::from_name(name)
                        .ok_or_else(|| ActionError::UnknownParameter(name.to_string()))?;
                    chars = rest[close + 1..].chars();
                    match chars.next() {
                        Some('d') | Some('s') => {}
                        _ => return Err(ActionError::BadPlaceholder(source.to_string())),
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Param(param));
                }
                _ => return Err(ActionError::BadPlaceholder(source.to_string())),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Template holding `text` verbatim (no placeholder interpretation).
    pub fn literal(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Literal(text.to_string())]
        };
        Self {
            source: text.replace('%', "%%"),
            segments,
        }
    }

    /// The template as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The template is exactly one placeholder and nothing else.
    pub fn single_param(&self) -> Option<Param> {
        match self.segments.as_slice() {
            [Segment::Param(p)] => Some(*p),
            _ => None,
        }
    }

    /// Substitute `bindings` into the template.
    ///
    /// # Errors
    ///
    /// [`ActionError::MissingBinding`] when the template needs dictation
    /// that was not recognised.
    ///
    /// ```
    /// use multi_edit::action::{Bindings, Template};
    ///
    /// let t = Template::parse("%(n)dwwi").unwrap();
    /// assert_eq!(t.render(&Bindings::count(3)).unwrap(), "3wwi");
    /// assert_eq!(Template::parse("%%= ").unwrap().render(&Bindings::default()).unwrap(), "%= ");
    /// ```
    pub fn render(&self, bindings: &Bindings) -> Result<String, ActionError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(param) => out.push_str(&bindings.value(*param)?),
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
