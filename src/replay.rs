//! Text form of already-matched recognitions, used by the `multi-edit`
//! binary to replay utterances without a recognition engine.
//!
//! One line is one recognition; parts are separated by `;`:
//!
//! | Part                          | Meaning                               |
//! |-------------------------------|---------------------------------------|
//! | `up 3`                        | command phrase with a count           |
//! | `line down`                   | command phrase without a count        |
//! | `say camel get value`         | format utterance in the sequence      |
//! | `literal score max size`      | literal tail (last before `repeat`)   |
//! | `letters alpha bravo`         | spelled tail (`digits`, `alphanumeric`) |
//! | `repeat 2` / `repeat 2 times` | repeat the whole recognition          |
//!
//! A line that is only `literal ...` replays the stand-alone literal rule.

use thiserror::Error;

use crate::commands::Alphabet;
use crate::grammar::{Element, Recognition, Tail};

/// Errors in the replay notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("empty part in replay line")]
    EmptyPart,

    #[error("{0:?} must be the last part before `repeat`")]
    TailNotLast(String),

    #[error("`repeat` needs a number, got {0:?}")]
    BadRepeat(String),
}

/// A parsed replay line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replay {
    Recognition(Recognition),
    /// `literal <format>` on its own.
    Literal(Vec<String>),
}

/// Parse one replay line; blank lines and `#` comments yield `None`.
///
/// ```
/// use multi_edit::grammar::{Element, Recognition};
/// use multi_edit::replay::{parse_line, Replay};
///
/// let parsed = parse_line("up 3; say camel foo bar; repeat 2").unwrap();
/// let expected = Recognition::new(vec![
///     Element::command_n("up", 3),
///     Element::format(&["camel", "foo", "bar"]),
/// ])
/// .with_repeat(2);
/// assert_eq!(parsed, Some(Replay::Recognition(expected)));
/// ```
pub fn parse_line(line: &str) -> Result<Option<Replay>, ReplayError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts: Vec<Vec<&str>> = line
        .split(';')
        .map(|part| part.split_whitespace().collect())
        .collect();
    if parts.iter().any(Vec::is_empty) {
        return Err(ReplayError::EmptyPart);
    }

    let mut repeat = 1;
    if let Some(last) = parts.last() {
        if last[0] == "repeat" {
            repeat = match last.as_slice() {
                [_, n] | [_, n, "times"] => n
                    .parse()
                    .map_err(|_| ReplayError::BadRepeat(n.to_string()))?,
                _ => return Err(ReplayError::BadRepeat(last[1..].join(" "))),
            };
            parts.pop();
        }
    }

    let mut sequence = Vec::new();
    let mut tail = None;
    let count = parts.len();
    for (i, part) in parts.into_iter().enumerate() {
        let head = part[0];
        let is_tail = head == "literal" || Alphabet::from_keyword(head).is_some();
        if is_tail && i + 1 != count {
            return Err(ReplayError::TailNotLast(head.to_string()));
        }

        if head == "literal" {
            tail = Some(Tail::literal(&part[1..]));
        } else if let Some(alphabet) = Alphabet::from_keyword(head) {
            tail = Some(Tail::spell(alphabet, &part[1..]));
        } else if head == "say" {
            sequence.push(Element::format(&part[1..]));
        } else {
            sequence.push(command_element(&part));
        }
    }

    if sequence.is_empty() && repeat == 1 {
        if let Some(Tail::Literal(words)) = tail {
            return Ok(Some(Replay::Literal(words)));
        }
    }

    let mut recognition = Recognition::new(sequence).with_repeat(repeat);
    recognition.tail = tail;
    Ok(Some(Replay::Recognition(recognition)))
}

/// `["line", "down", "3"]` → `line down` with n = 3.
fn command_element(words: &[&str]) -> Element {
    match words.split_last() {
        Some((last, phrase)) if !phrase.is_empty() => match last.parse::<u32>() {
            Ok(n) => Element::command_n(&phrase.join(" "), n),
            Err(_) => Element::command(&words.join(" ")),
        },
        _ => Element::command(&words.join(" ")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn recognition(line: &str) -> Recognition {
        match parse_line(line).unwrap() {
            Some(Replay::Recognition(r)) => r,
            other => panic!("expected a recognition, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# up 3"), Ok(None));
    }

    #[test]
    fn commands_with_and_without_counts() {
        let r = recognition("line down 4; care; 7");
        assert_eq!(
            r.sequence,
            [
                Element::command_n("line down", 4),
                Element::command("care"),
                Element::command("7"),
            ]
        );
        assert_eq!(r.repeat, 1);
        assert!(r.tail.is_none());
    }

    #[test]
    fn tails() {
        let r = recognition("dot; letters papa yankee");
        assert_eq!(r.tail, Some(Tail::spell(Alphabet::Letters, &["papa", "yankee"])));

        let r = recognition("deaf; literal snakeword up down; repeat 3");
        assert_eq!(r.tail, Some(Tail::literal(&["snakeword", "up", "down"])));
        assert_eq!(r.repeat, 3);
    }

    #[test]
    fn repeat_accepts_spoken_times() {
        let r = recognition("left 2; repeat 4 times");
        assert_eq!(r.sequence, [Element::command_n("left", 2)]);
        assert_eq!(r.repeat, 4);
    }

    #[test]
    fn standalone_literal() {
        assert_eq!(
            parse_line("literal camel left right"),
            Ok(Some(Replay::Literal(vec![
                "camel".into(),
                "left".into(),
                "right".into()
            ])))
        );
    }

    #[test]
    fn malformed_lines() {
        assert_eq!(parse_line("up;;down"), Err(ReplayError::EmptyPart));
        assert_eq!(
            parse_line("literal camel x; up"),
            Err(ReplayError::TailNotLast("literal".into()))
        );
        assert!(matches!(parse_line("up; repeat many"), Err(ReplayError::BadRepeat(_))));
        assert!(matches!(parse_line("up; repeat"), Err(ReplayError::BadRepeat(_))));
        assert!(matches!(
            parse_line("up; repeat 2 laps"),
            Err(ReplayError::BadRepeat(_))
        ));
    }
}
