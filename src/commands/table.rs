//! The immutable command table.
//!
//! [`build_command_table`] parses every raw row once, fills in missing VIM
//! overrides with the normal template and refuses duplicate phrases.  The
//! resulting [`CommandTable`] is never mutated; share it freely.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::general::GENERAL_COMMANDS;
use super::python::PYTHON_COMMANDS;
use super::raw::{RawAction, RawEntry};
use crate::action::{Action, ActionError};
use crate::context::EditorContext;

/// Grammar notation marking a phrase that accepts a repeat count.
const COUNT_SUFFIX: &str = "[<n>]";

// ---------------------------------------------------------------------------
// TableError
// ---------------------------------------------------------------------------

/// Inconsistencies found while building the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two rows share the same phrase; only one could ever be reached.
    #[error("duplicate command phrase: {0:?}")]
    DuplicatePhrase(String),

    /// The spoken form is not lowercase words with an optional `[<n>]`.
    #[error("malformed spoken form: {0:?}")]
    BadSpokenForm(String),

    /// A template failed to parse.
    #[error("bad template for {phrase:?}: {source}")]
    Template {
        phrase: String,
        #[source]
        source: ActionError,
    },
}

// ---------------------------------------------------------------------------
// CommandGroup
// ---------------------------------------------------------------------------

/// Sets of commands that can be switched on independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandGroup {
    /// Cursor movement, keys, symbols, delimiters, line and word editing.
    General,
    /// Python keywords, builtins and operators.
    Python,
}

impl CommandGroup {
    pub fn raw_entries(self) -> &'static [RawEntry] {
        match self {
            Self::General => GENERAL_COMMANDS,
            Self::Python => PYTHON_COMMANDS,
        }
    }
}

// ---------------------------------------------------------------------------
// CommandEntry
// ---------------------------------------------------------------------------

/// A parsed table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Spoken words without grammar notation, e.g. `"line down"`.
    pub phrase: String,
    /// Whether the phrase may be followed by a repeat count.
    pub takes_count: bool,
    pub group: CommandGroup,
    pub normal: Action,
    /// Equal to `normal` when the row had no override.
    pub vim: Action,
}

impl CommandEntry {
    /// The action to run in `context`.
    pub fn action(&self, context: EditorContext) -> &Action {
        match context {
            EditorContext::Normal => &self.normal,
            EditorContext::Vim => &self.vim,
        }
    }

    /// Returns `true` when VIM uses a different template.
    pub fn has_vim_override(&self) -> bool {
        self.normal != self.vim
    }
}

// ---------------------------------------------------------------------------
// CommandTable
// ---------------------------------------------------------------------------

/// Phrase → (normal, VIM) actions.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: BTreeMap<String, CommandEntry>,
}

impl CommandTable {
    /// Table built from the static rows of `groups`.
    pub fn standard(groups: &[CommandGroup]) -> Result<Self, TableError> {
        let sources: Vec<(CommandGroup, &[RawEntry])> =
            groups.iter().map(|&g| (g, g.raw_entries())).collect();
        build_command_table(&sources)
    }

    /// Look up the action for `phrase` in `context`.
    ///
    /// Whitespace and case in `phrase` are not significant.
    pub fn lookup(&self, phrase: &str, context: EditorContext) -> Option<&Action> {
        self.entry(phrase).map(|e| e.action(context))
    }

    pub fn entry(&self, phrase: &str) -> Option<&CommandEntry> {
        self.entries.get(&canonical_phrase(phrase))
    }

    /// Entries in phrase order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// build_command_table
// ---------------------------------------------------------------------------

/// Parse raw rows into an immutable [`CommandTable`].
///
/// # Errors
///
/// - [`TableError::BadSpokenForm`] for a spoken form outside the notation.
/// - [`TableError::DuplicatePhrase`] when a phrase appears twice, within
///   or across groups.
/// - [`TableError::Template`] when a template does not parse.
///
/// ```
/// use multi_edit::commands::{build_command_table, key, CommandGroup, RawEntry};
/// use multi_edit::context::EditorContext;
///
/// let rows = [
///     RawEntry::new("care", key("Home"), None),
///     RawEntry::new("file top", key("c-Home"), Some(key("Escape, 1, s-g, i"))),
/// ];
/// let table = build_command_table(&[(CommandGroup::General, &rows[..])]).unwrap();
/// assert_eq!(
///     table.lookup("care", EditorContext::Vim),
///     table.lookup("care", EditorContext::Normal),
/// );
/// assert_ne!(
///     table.lookup("file top", EditorContext::Vim),
///     table.lookup("file top", EditorContext::Normal),
/// );
/// ```
pub fn build_command_table(
    sources: &[(CommandGroup, &[RawEntry])],
) -> Result<CommandTable, TableError> {
    let mut entries = BTreeMap::new();

    for &(group, rows) in sources {
        for row in rows {
            let (phrase, takes_count) = parse_spoken(row.spoken)?;
            if entries.contains_key(&phrase) {
                return Err(TableError::DuplicatePhrase(phrase));
            }

            let compile = |raw: RawAction| {
                compile_action(raw).map_err(|source| TableError::Template {
                    phrase: phrase.clone(),
                    source,
                })
            };
            let normal = compile(row.normal)?;
            let vim = match row.vim {
                Some(raw) => compile(raw)?,
                None => normal.clone(),
            };

            entries.insert(
                phrase.clone(),
                CommandEntry {
                    phrase,
                    takes_count,
                    group,
                    normal,
                    vim,
                },
            );
        }
    }

    let table = CommandTable { entries };
    log::debug!(
        "command table built: {} phrases, {} with VIM overrides",
        table.len(),
        table.iter().filter(|e| e.has_vim_override()).count()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn compile_action(raw: RawAction) -> Result<Action, ActionError> {
    match raw {
        RawAction::Key(spec) => Action::key(spec),
        RawAction::Text(template) => Action::text(template),
        RawAction::Nested(delimiters) => Action::nested(delimiters),
    }
}

/// `"up [<n>]"` → (`"up"`, true).
fn parse_spoken(spoken: &str) -> Result<(String, bool), TableError> {
    let trimmed = spoken.trim();
    let (words, takes_count) = match trimmed.strip_suffix(COUNT_SUFFIX) {
        Some(head) => (head, true),
        None => (trimmed, false),
    };
    let phrase = canonical_phrase(words);
    let well_formed = !phrase.is_empty()
        && phrase
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' ');
    if !well_formed || words.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(TableError::BadSpokenForm(spoken.to_string()));
    }
    Ok((phrase, takes_count))
}

fn canonical_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Bindings, Step};
    use crate::commands::raw::{key, nested, text};

    fn full_table() -> CommandTable {
        CommandTable::standard(&[CommandGroup::General, CommandGroup::Python]).unwrap()
    }

    #[test]
    fn static_tables_build() {
        let table = full_table();
        assert_eq!(
            table.len(),
            GENERAL_COMMANDS.len() + PYTHON_COMMANDS.len()
        );
    }

    #[test]
    fn unset_override_equals_normal() {
        let table = full_table();
        let all_rows = GENERAL_COMMANDS.iter().chain(PYTHON_COMMANDS);
        for row in all_rows.filter(|r| r.vim.is_none()) {
            let (phrase, _) = parse_spoken(row.spoken).unwrap();
            let entry = table.entry(&phrase).unwrap();
            assert_eq!(
                entry.action(EditorContext::Vim),
                entry.action(EditorContext::Normal),
                "{phrase}"
            );
            assert!(!entry.has_vim_override());
        }
    }

    #[test]
    fn vim_override_is_used_in_vim() {
        let table = full_table();
        let steps = table
            .lookup("yope", EditorContext::Vim)
            .unwrap()
            .bind(&Bindings::count(2))
            .unwrap();
        assert_eq!(steps.last(), Some(&Step::Type { text: "2wwi".into() }));

        let steps = table
            .lookup("yope", EditorContext::Normal)
            .unwrap()
            .bind(&Bindings::count(2))
            .unwrap();
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn spoken_forms_are_parsed() {
        let table = full_table();
        let up = table.entry("up").unwrap();
        assert!(up.takes_count);
        assert_eq!(up.group, CommandGroup::General);

        let care = table.entry("care").unwrap();
        assert!(!care.takes_count);

        assert!(table.entry("line down").unwrap().takes_count);
        assert_eq!(table.entry("mod equal").unwrap().group, CommandGroup::Python);
    }

    #[test]
    fn lookup_ignores_case_and_spacing() {
        let table = full_table();
        assert!(table.lookup("  Line   DOWN ", EditorContext::Normal).is_some());
        assert!(table.lookup("nonsense", EditorContext::Normal).is_none());
    }

    #[test]
    fn none_true_false_are_distinct_phrases() {
        let table = full_table();
        let typed = |phrase: &str| {
            table
                .lookup(phrase, EditorContext::Normal)
                .unwrap()
                .bind(&Bindings::default())
                .unwrap()
        };
        assert_eq!(typed("none"), [Step::Type { text: "None".into() }]);
        assert_eq!(typed("true"), [Step::Type { text: "True".into() }]);
        assert_eq!(typed("false"), [Step::Type { text: "False".into() }]);
    }

    #[test]
    fn groups_can_be_left_out() {
        let table = CommandTable::standard(&[CommandGroup::General]).unwrap();
        assert!(table.entry("lambda").is_none());
        assert!(table.entry("wipe").is_some());
    }

    #[test]
    fn duplicate_phrase_is_rejected() {
        let rows = [
            RawEntry::new("none", text("None"), None),
            RawEntry::new("none", text("True"), None),
        ];
        let err = build_command_table(&[(CommandGroup::Python, &rows[..])]).unwrap_err();
        assert_eq!(err, TableError::DuplicatePhrase("none".into()));
    }

    #[test]
    fn duplicate_across_groups_is_rejected() {
        let a = [RawEntry::new("box", nested("[]"), None)];
        let b = [RawEntry::new("box", nested("{}"), None)];
        assert!(matches!(
            build_command_table(&[(CommandGroup::General, &a[..]), (CommandGroup::Python, &b[..])]),
            Err(TableError::DuplicatePhrase(_))
        ));
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let bad_spoken = [RawEntry::new("up <n>", key("Up"), None)];
        assert!(matches!(
            build_command_table(&[(CommandGroup::General, &bad_spoken[..])]),
            Err(TableError::BadSpokenForm(_))
        ));

        let bad_template = [RawEntry::new("up", key("Up:lots"), None)];
        assert!(matches!(
            build_command_table(&[(CommandGroup::General, &bad_template[..])]),
            Err(TableError::Template { ref phrase, .. }) if phrase == "up"
        ));
    }
}
