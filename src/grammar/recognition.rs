//! What the recognition engine hands over after matching an utterance.
//!
//! The top-level utterance shape is
//!
//! ```text
//! <sequence> [ ( literal <format> ) | <spelled finish> ] [ repeat <n> times ]
//! ```
//!
//! where `<sequence>` chains commands and format utterances.  Matching is the
//! engine's job; a [`Recognition`] is the already-segmented result.

use crate::action::Bindings;
use crate::commands::Alphabet;

/// One element of the chained sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A command-table phrase with its recognised extras.
    Command { phrase: String, bindings: Bindings },
    /// A format utterance: `[upper | natural] <style> [<dictation>]`.
    Format(Vec<String>),
}

impl Element {
    /// A command spoken without a count.
    pub fn command(phrase: &str) -> Self {
        Self::Command {
            phrase: phrase.to_string(),
            bindings: Bindings::default(),
        }
    }

    /// A command spoken with a count, e.g. `"up 3"`.
    pub fn command_n(phrase: &str, n: u32) -> Self {
        Self::Command {
            phrase: phrase.to_string(),
            bindings: Bindings::count(n),
        }
    }

    pub fn format<S: AsRef<str>>(words: &[S]) -> Self {
        Self::Format(words.iter().map(|w| w.as_ref().to_string()).collect())
    }
}

/// Optional last part of an utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail {
    /// `literal <format>`: a format utterance that may contain command words.
    Literal(Vec<String>),
    /// `letters | digits | alphanumeric` followed by spelled items.
    Spell {
        alphabet: Alphabet,
        words: Vec<String>,
    },
}

impl Tail {
    pub fn literal<S: AsRef<str>>(words: &[S]) -> Self {
        Self::Literal(words.iter().map(|w| w.as_ref().to_string()).collect())
    }

    pub fn spell<S: AsRef<str>>(alphabet: Alphabet, words: &[S]) -> Self {
        Self::Spell {
            alphabet,
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }
}

/// A matched utterance ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    pub sequence: Vec<Element>,
    pub tail: Option<Tail>,
    /// `repeat <n> times`, 1 when not spoken.
    pub repeat: u32,
}

impl Recognition {
    pub fn new(sequence: Vec<Element>) -> Self {
        Self {
            sequence,
            tail: None,
            repeat: 1,
        }
    }

    pub fn with_tail(mut self, tail: Tail) -> Self {
        self.tail = Some(tail);
        self
    }

    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }
}
