//! Keystroke specifications.
//!
//! A key spec is a comma-separated list of elements:
//!
//! | Element            | Meaning                                     |
//! |--------------------|---------------------------------------------|
//! | `Up`               | press Up once                               |
//! | `Left:3`           | press Left three times                      |
//! | `Down:%(n)d`       | press Down `n` times                        |
//! | `cs-Right`         | press Right with Control + Shift held       |
//! | `Shift_L:down`     | hold Shift_L down                           |
//! | `Shift_L:up`       | release Shift_L                             |
//! | `[ %(n)dwwi ]`     | type the bracketed text (after binding)     |
//!
//! Modifier prefixes are `c` (Control), `s` (Shift), `a` (Alt) and
//! `w` (Super), joined to the key name by `-`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::template::{Param, Template};
use super::{ActionError, Bindings, Step};

// ---------------------------------------------------------------------------
// Modifier / Direction
// ---------------------------------------------------------------------------

/// A modifier held for the duration of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Control,
    Shift,
    Alt,
    Super,
}

impl Modifier {
    fn from_code(code: char) -> Option<Self> {
        match code {
            'c' => Some(Self::Control),
            's' => Some(Self::Shift),
            'a' => Some(Self::Alt),
            'w' => Some(Self::Super),
            _ => None,
        }
    }

    fn code(self) -> char {
        match self {
            Self::Control => 'c',
            Self::Shift => 's',
            Self::Alt => 'a',
            Self::Super => 'w',
        }
    }
}

/// Whether a held key goes down or comes back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
}

// ---------------------------------------------------------------------------
// KeyElement
// ---------------------------------------------------------------------------

/// How many times a key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Fixed(u32),
    Param(Param),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyElement {
    Press {
        modifiers: Vec<Modifier>,
        key: String,
        count: Count,
    },
    Hold {
        key: String,
        direction: Direction,
    },
    Type(Template),
}

impl KeyElement {
    fn parse(element: &str) -> Result<Self, ActionError> {
        let element = element.trim();
        if element.is_empty() {
            return Err(ActionError::InvalidKey(element.to_string()));
        }

        if let Some(inner) = element.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .ok_or_else(|| ActionError::UnclosedBracket(element.to_string()))?;
            return Ok(Self::Type(Template::parse(inner.trim())?));
        }

        let (modifiers, rest) = split_modifiers(element);
        let (key, suffix) = match rest.split_once(':') {
            Some((key, suffix)) => (key.trim(), Some(suffix.trim())),
            None => (rest.trim(), None),
        };
        if !is_key_name(key) {
            return Err(ActionError::InvalidKey(element.to_string()));
        }

        match suffix {
            Some("down") | Some("up") if !modifiers.is_empty() => {
                Err(ActionError::InvalidKey(element.to_string()))
            }
            Some("down") => Ok(Self::Hold {
                key: key.to_string(),
                direction: Direction::Down,
            }),
            Some("up") => Ok(Self::Hold {
                key: key.to_string(),
                direction: Direction::Up,
            }),
            Some(count) => Ok(Self::Press {
                modifiers,
                key: key.to_string(),
                count: parse_count(count)?,
            }),
            None => Ok(Self::Press {
                modifiers,
                key: key.to_string(),
                count: Count::Fixed(1),
            }),
        }
    }

    fn bind(&self, bindings: &Bindings) -> Result<Option<Step>, ActionError> {
        let step = match self {
            Self::Press {
                modifiers,
                key,
                count,
            } => {
                let times = match count {
                    Count::Fixed(times) => *times,
                    Count::Param(param) => bindings.count_value(*param)?,
                };
                if times == 0 {
                    return Ok(None);
                }
                Step::Press {
                    key: key.clone(),
                    modifiers: modifiers.clone(),
                    times,
                }
            }
            Self::Hold { key, direction } => Step::Hold {
                key: key.clone(),
                direction: *direction,
            },
            Self::Type(template) => {
                let text = template.render(bindings)?;
                if text.is_empty() {
                    return Ok(None);
                }
                Step::Type { text }
            }
        };
        Ok(Some(step))
    }
}

// ---------------------------------------------------------------------------
// KeySpec
// ---------------------------------------------------------------------------

/// A parsed key spec; see the module docs for the notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    source: String,
    elements: Vec<KeyElement>,
}

impl KeySpec {
    /// Parse a comma-separated key spec.
    ///
    /// # Errors
    ///
    /// - [`ActionError::InvalidKey`] for an empty element or bad key name.
    /// - [`ActionError::InvalidCount`] for a repeat that is neither a number
    ///   nor `%(n)d`.
    /// - [`ActionError::UnclosedBracket`] for a `[` without its `]`.
    pub fn parse(source: &str) -> Result<Self, ActionError> {
        let elements = split_elements(source)?
            .into_iter()
            .map(KeyElement::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            source: source.to_string(),
            elements,
        })
    }

    /// A single key pressed `times` times.
    pub fn press(key: &str, times: u32) -> Self {
        Self {
            source: format!("{key}:{times}"),
            elements: vec![KeyElement::Press {
                modifiers: Vec::new(),
                key: key.to_string(),
                count: Count::Fixed(times),
            }],
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn elements(&self) -> &[KeyElement] {
        &self.elements
    }

    /// Resolve every element against `bindings`.
    ///
    /// Presses with a zero count and empty typed text produce no step.
    pub fn bind(&self, bindings: &Bindings) -> Result<Vec<Step>, ActionError> {
        let mut steps = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            if let Some(step) = element.bind(bindings)? {
                steps.push(step);
            }
        }
        Ok(steps)
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Split at commas that are not inside `[ ... ]`.
fn split_elements(source: &str) -> Result<Vec<&str>, ActionError> {
    let mut elements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in source.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ActionError::UnclosedBracket(source.to_string()))?;
            }
            ',' if depth == 0 => {
                elements.push(&source[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ActionError::UnclosedBracket(source.to_string()));
    }
    elements.push(&source[start..]);
    Ok(elements)
}

/// `cs-Right` → (`[Control, Shift]`, `Right`).  Anything that does not look
/// like a modifier prefix is returned untouched.
fn split_modifiers(element: &str) -> (Vec<Modifier>, &str) {
    if let Some((prefix, rest)) = element.split_once('-') {
        if !prefix.is_empty() && !rest.is_empty() {
            let modifiers: Option<Vec<Modifier>> = prefix.chars().map(Modifier::from_code).collect();
            if let Some(modifiers) = modifiers {
                return (modifiers, rest);
            }
        }
    }
    (Vec::new(), element)
}

fn parse_count(count: &str) -> Result<Count, ActionError> {
    if let Ok(times) = count.parse::<u32>() {
        return Ok(Count::Fixed(times));
    }
    let template =
        Template::parse(count).map_err(|_| ActionError::InvalidCount(count.to_string()))?;
    match template.single_param() {
        Some(Param::Count) => Ok(Count::Param(Param::Count)),
        _ => Err(ActionError::InvalidCount(count.to_string())),
    }
}

fn is_key_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str, modifiers: &[Modifier], times: u32) -> Step {
        Step::Press {
            key: key.into(),
            modifiers: modifiers.to_vec(),
            times,
        }
    }

    #[test]
    fn single_key() {
        let spec = KeySpec::parse("Home").unwrap();
        assert_eq!(spec.bind(&Bindings::default()).unwrap(), [press("Home", &[], 1)]);
    }

    #[test]
    fn count_from_binding() {
        let spec = KeySpec::parse("Left:%(n)d").unwrap();
        assert_eq!(spec.bind(&Bindings::count(3)).unwrap(), [press("Left", &[], 3)]);
    }

    #[test]
    fn modifiers_and_fixed_counts() {
        let spec = KeySpec::parse("Right:2, c-Left, cs-Right:%(n)d, Delete:2").unwrap();
        assert_eq!(
            spec.bind(&Bindings::count(5)).unwrap(),
            [
                press("Right", &[], 2),
                press("Left", &[Modifier::Control], 1),
                press("Right", &[Modifier::Control, Modifier::Shift], 5),
                press("Delete", &[], 2),
            ]
        );
    }

    #[test]
    fn hold_and_release() {
        let spec = KeySpec::parse("Shift_L:down, End, Shift_L:up").unwrap();
        let steps = spec.bind(&Bindings::default()).unwrap();
        assert_eq!(
            steps[0],
            Step::Hold {
                key: "Shift_L".into(),
                direction: Direction::Down
            }
        );
        assert_eq!(
            steps[2],
            Step::Hold {
                key: "Shift_L".into(),
                direction: Direction::Up
            }
        );
    }

    #[test]
    fn bracketed_text_is_typed() {
        let spec = KeySpec::parse("Escape, [ %(n)dwwi ]").unwrap();
        assert_eq!(
            spec.bind(&Bindings::count(2)).unwrap(),
            [
                press("Escape", &[], 1),
                Step::Type {
                    text: "2wwi".into()
                }
            ]
        );
    }

    #[test]
    fn commas_inside_brackets_do_not_split() {
        let spec = KeySpec::parse("[a, b], Tab").unwrap();
        assert_eq!(spec.elements().len(), 2);
    }

    #[test]
    fn keys_that_look_like_modifiers() {
        // "s-g" is Shift+g, but plain "a" and "1" are keys.
        let spec = KeySpec::parse("Escape, 1, s-g, a").unwrap();
        assert_eq!(
            spec.bind(&Bindings::default()).unwrap(),
            [
                press("Escape", &[], 1),
                press("1", &[], 1),
                press("g", &[Modifier::Shift], 1),
                press("a", &[], 1),
            ]
        );
    }

    #[test]
    fn zero_count_emits_nothing() {
        let spec = KeySpec::press("Left", 0);
        assert!(spec.bind(&Bindings::default()).unwrap().is_empty());
    }

    #[test]
    fn invalid_specs() {
        assert!(matches!(KeySpec::parse(""), Err(ActionError::InvalidKey(_))));
        assert!(matches!(KeySpec::parse("Up,"), Err(ActionError::InvalidKey(_))));
        assert!(matches!(KeySpec::parse("Up:many"), Err(ActionError::InvalidCount(_))));
        assert!(matches!(KeySpec::parse("Up:%(text)s"), Err(ActionError::InvalidCount(_))));
        assert!(matches!(KeySpec::parse("[ abc"), Err(ActionError::UnclosedBracket(_))));
        assert!(matches!(KeySpec::parse("abc ]"), Err(ActionError::UnclosedBracket(_))));
        assert!(matches!(KeySpec::parse("c-Shift_L:down"), Err(ActionError::InvalidKey(_))));
        assert!(matches!(KeySpec::parse("Page Up"), Err(ActionError::InvalidKey(_))));
    }
}
