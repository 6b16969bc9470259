//! Spoken alphabets used to finish an utterance with spelled characters.
//!
//! | Keyword        | Vocabulary                         |
//! |----------------|------------------------------------|
//! | `letters`      | `alpha` … `zulu` → `a` … `z`       |
//! | `digits`       | `zero` … `nine` → `0` … `9`        |
//! | `alphanumeric` | both of the above                  |

use std::fmt;

/// Spoken word → character, lowercase letters.
pub const LETTERS: &[(&str, char)] = &[
    ("alpha", 'a'),
    ("bravo", 'b'),
    ("charlie", 'c'),
    ("delta", 'd'),
    ("echo", 'e'),
    ("foxtrot", 'f'),
    ("golf", 'g'),
    ("hotel", 'h'),
    ("india", 'i'),
    ("juliet", 'j'),
    ("kilo", 'k'),
    ("lima", 'l'),
    ("mike", 'm'),
    ("november", 'n'),
    ("oscar", 'o'),
    ("papa", 'p'),
    ("quebec", 'q'),
    ("romeo", 'r'),
    ("sierra", 's'),
    ("tango", 't'),
    ("uniform", 'u'),
    ("victor", 'v'),
    ("whiskey", 'w'),
    ("xray", 'x'),
    ("yankee", 'y'),
    ("zulu", 'z'),
];

/// Spoken word → character, decimal digits.
pub const DIGITS: &[(&str, char)] = &[
    ("zero", '0'),
    ("one", '1'),
    ("two", '2'),
    ("three", '3'),
    ("four", '4'),
    ("five", '5'),
    ("six", '6'),
    ("seven", '7'),
    ("eight", '8'),
    ("nine", '9'),
];

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// Which vocabulary a spelled finish draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    Letters,
    Digits,
    Alphanumeric,
}

impl Alphabet {
    /// The alphabet introduced by `keyword`, if any.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "letters" => Some(Self::Letters),
            "digits" => Some(Self::Digits),
            "alphanumeric" => Some(Self::Alphanumeric),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Digits => "digits",
            Self::Alphanumeric => "alphanumeric",
        }
    }

    /// Character for one spoken item.
    ///
    /// ```
    /// use multi_edit::commands::Alphabet;
    ///
    /// assert_eq!(Alphabet::Letters.lookup("kilo"), Some('k'));
    /// assert_eq!(Alphabet::Letters.lookup("seven"), None);
    /// assert_eq!(Alphabet::Alphanumeric.lookup("seven"), Some('7'));
    /// ```
    pub fn lookup(self, word: &str) -> Option<char> {
        let find = |table: &[(&str, char)]| {
            table
                .iter()
                .find(|(spoken, _)| *spoken == word)
                .map(|&(_, c)| c)
        };
        match self {
            Self::Letters => find(LETTERS),
            Self::Digits => find(DIGITS),
            Self::Alphanumeric => find(LETTERS).or_else(|| find(DIGITS)),
        }
    }

    /// Spell out `words`; returns the first unknown word on failure.
    pub fn spell<'a, S: AsRef<str>>(self, words: &'a [S]) -> Result<String, &'a str> {
        words
            .iter()
            .map(|w| {
                let w = w.as_ref();
                self.lookup(w).ok_or(w)
            })
            .collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_are_complete() {
        assert_eq!(LETTERS.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        let letters: String = LETTERS.iter().map(|&(_, c)| c).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn spoken_words_do_not_overlap() {
        for (letter, _) in LETTERS {
            assert!(DIGITS.iter().all(|(digit, _)| digit != letter));
        }
    }

    #[test]
    fn spell_sequences() {
        assert_eq!(Alphabet::Letters.spell(&["hotel", "india"]), Ok("hi".to_string()));
        assert_eq!(Alphabet::Digits.spell(&["four", "two"]), Ok("42".to_string()));
        assert_eq!(
            Alphabet::Alphanumeric.spell(&["xray", "one"]),
            Ok("x1".to_string())
        );
    }

    #[test]
    fn spell_reports_unknown_word() {
        assert_eq!(Alphabet::Digits.spell(&["one", "alpha"]), Err("alpha"));
    }

    #[test]
    fn keywords_round_trip() {
        for a in [Alphabet::Letters, Alphabet::Digits, Alphabet::Alphanumeric] {
            assert_eq!(Alphabet::from_keyword(a.keyword()), Some(a));
        }
        assert_eq!(Alphabet::from_keyword("symbols"), None);
    }
}
