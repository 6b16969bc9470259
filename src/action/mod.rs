//! Action templates: what a spoken command does once recognised.
//!
//! # Overview
//!
//! An [`Action`] is a parameterised description of keystrokes and typed
//! text.  It never touches the OS: [`Action::bind`] substitutes the
//! recognised extras ([`Bindings`]) and returns a flat list of [`Step`]s for
//! an [`ActionExecutor`](crate::execute::ActionExecutor) to carry out.
//!
//! ```text
//! Action::key("Left:%(n)d")  ──bind(n = 3)──▶  [Press { Left, times: 3 }]
//! Action::nested("()")       ──bind(..)─────▶  [Type "()", Press { Left, times: 1 }]
//! ```

pub mod key;
pub mod template;

pub use key::{Count, Direction, KeyElement, KeySpec, Modifier};
pub use template::{Param, Template};

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ActionError
// ---------------------------------------------------------------------------

/// Errors raised while parsing or binding action templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// An element of a key spec is empty or names an invalid key.
    #[error("invalid key element: {0:?}")]
    InvalidKey(String),

    /// A key repeat is neither a number nor `%(n)d`.
    #[error("invalid key repeat count: {0:?}")]
    InvalidCount(String),

    /// A `[` in a key spec has no matching `]` (or the reverse).
    #[error("unbalanced brackets in key spec: {0:?}")]
    UnclosedBracket(String),

    /// A `%` that is neither `%%` nor a complete placeholder.
    #[error("malformed placeholder in template: {0:?}")]
    BadPlaceholder(String),

    /// A placeholder names an extra that does not exist.
    #[error("unknown template parameter: {0:?}")]
    UnknownParameter(String),

    /// The template needs an extra that was not recognised.
    #[error("no value recognised for {0:?}")]
    MissingBinding(&'static str),
}

// ---------------------------------------------------------------------------
// Bindings
// ---------------------------------------------------------------------------

/// Extras recognised alongside a command phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    /// Repeat count (`n`), 1 when not spoken.
    pub n: u32,
    pub text: Option<String>,
    pub text2: Option<String>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            n: 1,
            text: None,
            text2: None,
        }
    }
}

impl Bindings {
    /// Bindings carrying only a repeat count.
    pub fn count(n: u32) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// String value of `param`.
    pub fn value(&self, param: Param) -> Result<String, ActionError> {
        match param {
            Param::Count => Ok(self.n.to_string()),
            Param::Text => self
                .text
                .clone()
                .ok_or(ActionError::MissingBinding(param.name())),
            Param::Text2 => self
                .text2
                .clone()
                .ok_or(ActionError::MissingBinding(param.name())),
        }
    }

    /// Integer value of `param`; only the count is numeric.
    pub fn count_value(&self, param: Param) -> Result<u32, ActionError> {
        match param {
            Param::Count => Ok(self.n),
            other => Err(ActionError::InvalidCount(other.name().to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// A fully resolved unit of work for the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Press (and release) `key` `times` times with `modifiers` held.
    Press {
        key: String,
        modifiers: Vec<Modifier>,
        times: u32,
    },
    /// Press or release `key` without the matching half.
    Hold { key: String, direction: Direction },
    /// Insert `text` as typed characters.
    Type { text: String },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Press {
                key,
                modifiers,
                times,
            } => {
                for m in modifiers {
                    write!(f, "{m}")?;
                }
                if !modifiers.is_empty() {
                    f.write_str("-")?;
                }
                write!(f, "{key}")?;
                if *times != 1 {
                    write!(f, ":{times}")?;
                }
                Ok(())
            }
            Step::Hold { key, direction } => match direction {
                Direction::Down => write!(f, "{key}:down"),
                Direction::Up => write!(f, "{key}:up"),
            },
            Step::Type { text } => write!(f, "{text:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A command template: keystrokes, typed text, or a sequence of both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key(KeySpec),
    Text(Template),
    Sequence(Vec<Action>),
}

impl Action {
    /// Keystrokes from a key spec (see [`KeySpec`]).
    ///
    /// ```
    /// use multi_edit::action::{Action, Bindings, Step};
    ///
    /// let action = Action::key("Up:%(n)d").unwrap();
    /// let steps = action.bind(&Bindings::count(4)).unwrap();
    /// assert_eq!(steps, [Step::Press { key: "Up".into(), modifiers: vec![], times: 4 }]);
    /// ```
    pub fn key(spec: &str) -> Result<Self, ActionError> {
        Ok(Self::Key(KeySpec::parse(spec)?))
    }

    /// Typed text; `%%` and `%(name)d` / `%(name)s` are interpreted.
    pub fn text(template: &str) -> Result<Self, ActionError> {
        Ok(Self::Text(Template::parse(template)?))
    }

    /// Type a pair of delimiters and move the cursor between them.
    ///
    /// The cursor moves left by half the character count, so `"()"` leaves
    /// it inside the parentheses and `"''''''"` inside the triple quotes.
    ///
    /// ```
    /// use multi_edit::action::{Action, Bindings, Step};
    ///
    /// let steps = Action::nested("[]").unwrap().bind(&Bindings::default()).unwrap();
    /// assert_eq!(steps[0], Step::Type { text: "[]".into() });
    /// assert_eq!(steps[1], Step::Press { key: "Left".into(), modifiers: vec![], times: 1 });
    /// ```
    pub fn nested(delimiters: &str) -> Result<Self, ActionError> {
        let back = (delimiters.chars().count() / 2) as u32;
        Ok(Self::text(delimiters)? + Self::Key(KeySpec::press("Left", back)))
    }

    /// Resolve the template into executable steps.
    pub fn bind(&self, bindings: &Bindings) -> Result<Vec<Step>, ActionError> {
        match self {
            Action::Key(spec) => spec.bind(bindings),
            Action::Text(template) => {
                let text = template.render(bindings)?;
                Ok(if text.is_empty() {
                    Vec::new()
                } else {
                    vec![Step::Type { text }]
                })
            }
            Action::Sequence(actions) => {
                let mut steps = Vec::new();
                for action in actions {
                    steps.extend(action.bind(bindings)?);
                }
                Ok(steps)
            }
        }
    }
}

impl Add for Action {
    type Output = Action;

    /// Chain two actions; sequences are flattened.
    fn add(self, rhs: Action) -> Action {
        let mut actions = match self {
            Action::Sequence(actions) => actions,
            single => vec![single],
        };
        match rhs {
            Action::Sequence(more) => actions.extend(more),
            single => actions.push(single),
        }
        Action::Sequence(actions)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Key(spec) => write!(f, "Key({:?})", spec.source()),
            Action::Text(template) => write!(f, "Text({:?})", template.source()),
            Action::Sequence(actions) => {
                for (i, action) in actions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" + ")?;
                    }
                    write!(f, "{action}")?;
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
