//! [`GrammarHandle`]: the loaded grammar.

use crate::action::{Bindings, Step};
use crate::commands::{CommandGroup, CommandTable};
use crate::config::{AppConfig, GrammarConfig};
use crate::context::{ContextMatcher, EditorContext};
use crate::execute::ActionExecutor;
use crate::format::{FormatRule, FormatterTable};

use super::{Element, GrammarError, Recognition, Tail};

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Bounds a recognition must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_sequence_len: usize,
    pub max_repeat: u32,
    pub max_spelled_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::from_config(&GrammarConfig::default())
    }
}

impl Limits {
    fn from_config(config: &GrammarConfig) -> Self {
        Self {
            max_sequence_len: config.max_sequence_len,
            max_repeat: config.max_repeat,
            max_spelled_len: config.max_spelled_len,
        }
    }

    fn validate(&self) -> Result<(), GrammarError> {
        if self.max_sequence_len == 0 {
            return Err(GrammarError::InvalidLimit("max_sequence_len"));
        }
        if self.max_repeat == 0 {
            return Err(GrammarError::InvalidLimit("max_repeat"));
        }
        if self.max_spelled_len == 0 {
            return Err(GrammarError::InvalidLimit("max_spelled_len"));
        }
        Ok(())
    }

    fn check_count(&self, value: u32) -> Result<(), GrammarError> {
        if (1..=self.max_repeat).contains(&value) {
            Ok(())
        } else {
            Err(GrammarError::CountOutOfRange {
                value,
                max: self.max_repeat,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Build the grammar described by `config`.
///
/// # Errors
///
/// - [`GrammarError::Format`]: a configured style name is unknown.
/// - [`GrammarError::Table`]: the command table is inconsistent.
/// - [`GrammarError::Pattern`]: the VIM window pattern does not compile.
/// - [`GrammarError::InvalidLimit`]: a limit is zero.
pub fn initialize(config: &AppConfig) -> Result<GrammarHandle, GrammarError> {
    let grammar = &config.grammar;

    let limits = Limits::from_config(grammar);
    limits.validate()?;

    let formatters = if grammar.format_styles.is_empty() {
        FormatterTable::new()
    } else {
        FormatterTable::from_names(grammar.format_styles.as_slice())?
    };
    let commands = CommandTable::standard(&grammar.command_groups)?;
    let matcher = ContextMatcher::new(&grammar.vim_window_pattern)?;

    log::info!(
        "grammar loaded: {} commands ({:?}), {} format styles, VIM pattern {:?}",
        commands.len(),
        grammar.command_groups,
        formatters.len(),
        grammar.vim_window_pattern
    );

    Ok(GrammarHandle {
        format_rule: FormatRule::new(formatters),
        commands,
        matcher,
        limits,
        groups: grammar.command_groups.clone(),
    })
}

/// Unload the grammar.
pub fn shutdown(handle: GrammarHandle) {
    log::info!(
        "grammar unloaded ({} commands released)",
        handle.commands.len()
    );
    drop(handle);
}

// ---------------------------------------------------------------------------
// GrammarHandle
// ---------------------------------------------------------------------------

/// A loaded grammar.  Immutable; `Send + Sync`.
#[derive(Debug, Clone)]
pub struct GrammarHandle {
    format_rule: FormatRule,
    commands: CommandTable,
    matcher: ContextMatcher,
    limits: Limits,
    groups: Vec<CommandGroup>,
}

impl GrammarHandle {
    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn groups(&self) -> &[CommandGroup] {
        &self.groups
    }

    /// Context for a foreground window title.
    pub fn context_for(&self, window_title: &str) -> EditorContext {
        self.matcher.classify(window_title)
    }

    /// Text produced by a format utterance.
    pub fn format<S: AsRef<str>>(&self, utterance: &[S]) -> Result<String, GrammarError> {
        Ok(self.format_rule.value(utterance)?)
    }

    /// Resolve one pass of `recognition` into steps, without executing.
    ///
    /// Every element is resolved before anything runs, so an invalid
    /// recognition has no partial effect.
    pub fn resolve(
        &self,
        recognition: &Recognition,
        context: EditorContext,
    ) -> Result<Vec<Step>, GrammarError> {
        let len = recognition.sequence.len();
        if len == 0 || len > self.limits.max_sequence_len {
            return Err(GrammarError::SequenceLength {
                len,
                max: self.limits.max_sequence_len,
            });
        }
        self.limits.check_count(recognition.repeat)?;

        let mut steps = Vec::new();
        for element in &recognition.sequence {
            steps.extend(self.resolve_element(element, context)?);
        }
        if let Some(tail) = &recognition.tail {
            steps.extend(self.resolve_tail(tail)?);
        }
        Ok(steps)
    }

    /// Execute `recognition` in `context`, `repeat` times over.
    ///
    /// Each pass runs the sequence, then the literal tail, then the spelled
    /// finish.  The first executor error aborts the remaining steps.
    pub fn dispatch(
        &self,
        recognition: &Recognition,
        context: EditorContext,
        executor: &mut dyn ActionExecutor,
    ) -> Result<(), GrammarError> {
        let steps = self.resolve(recognition, context)?;
        log::debug!(
            "dispatch: {} elements, {} steps x{} ({:?})",
            recognition.sequence.len(),
            steps.len(),
            recognition.repeat,
            context
        );
        for _ in 0..recognition.repeat {
            executor.execute_all(&steps)?;
        }
        Ok(())
    }

    /// [`dispatch`](Self::dispatch) with the context taken from a window title.
    pub fn dispatch_for_window(
        &self,
        recognition: &Recognition,
        window_title: &str,
        executor: &mut dyn ActionExecutor,
    ) -> Result<(), GrammarError> {
        self.dispatch(recognition, self.context_for(window_title), executor)
    }

    /// `literal <format>` spoken on its own.
    pub fn dispatch_literal<S: AsRef<str>>(
        &self,
        utterance: &[S],
        executor: &mut dyn ActionExecutor,
    ) -> Result<(), GrammarError> {
        let text = self.format(utterance)?;
        executor.execute_all(&typed(text))?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn resolve_element(
        &self,
        element: &Element,
        context: EditorContext,
    ) -> Result<Vec<Step>, GrammarError> {
        match element {
            Element::Command { phrase, bindings } => self.resolve_command(phrase, bindings, context),
            Element::Format(words) => Ok(typed(self.format(words.as_slice())?)),
        }
    }

    fn resolve_command(
        &self,
        phrase: &str,
        bindings: &Bindings,
        context: EditorContext,
    ) -> Result<Vec<Step>, GrammarError> {
        let entry = self
            .commands
            .entry(phrase)
            .ok_or_else(|| GrammarError::UnknownPhrase(phrase.to_string()))?;
        if entry.takes_count {
            self.limits.check_count(bindings.n)?;
        } else if bindings.n != 1 {
            return Err(GrammarError::UnexpectedCount(entry.phrase.clone()));
        }
        Ok(entry.action(context).bind(bindings)?)
    }

    fn resolve_tail(&self, tail: &Tail) -> Result<Vec<Step>, GrammarError> {
        match tail {
            Tail::Literal(words) => Ok(typed(self.format(words.as_slice())?)),
            Tail::Spell { alphabet, words } => {
                let len = words.len();
                if len == 0 || len > self.limits.max_spelled_len {
                    return Err(GrammarError::SpellLength {
                        len,
                        max: self.limits.max_spelled_len,
                    });
                }
                words
                    .iter()
                    .map(|word| {
                        alphabet
                            .lookup(word)
                            .map(|c| Step::Type {
                                text: c.to_string(),
                            })
                            .ok_or_else(|| GrammarError::UnknownSpelling {
                                alphabet: alphabet.to_string(),
                                word: word.clone(),
                            })
                    })
                    .collect()
            }
        }
    }
}

/// A single typing step, or nothing for empty text.
fn typed(text: String) -> Vec<Step> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Step::Type { text }]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Modifier;
    use crate::commands::Alphabet;
    use crate::execute::{ExecuteError, RecordingExecutor};
    use crate::format::FormatError;

    fn handle() -> GrammarHandle {
        initialize(&AppConfig::default()).expect("default grammar loads")
    }

    fn press(key: &str, times: u32) -> Step {
        Step::Press {
            key: key.into(),
            modifiers: Vec::new(),
            times,
        }
    }

    // --- Lifecycle -----------------------------------------------------------

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GrammarHandle>();
    }

    #[test]
    fn initialize_rejects_unknown_style() {
        let mut config = AppConfig::default();
        config.grammar.format_styles = vec!["camel".into(), "kebab".into()];
        assert!(matches!(
            initialize(&config),
            Err(GrammarError::Format(FormatError::UnknownStyle(_)))
        ));
    }

    #[test]
    fn initialize_rejects_bad_pattern_and_limits() {
        let mut config = AppConfig::default();
        config.grammar.vim_window_pattern = "(".into();
        assert!(matches!(initialize(&config), Err(GrammarError::Pattern(_))));

        let mut config = AppConfig::default();
        config.grammar.max_repeat = 0;
        assert!(matches!(
            initialize(&config),
            Err(GrammarError::InvalidLimit("max_repeat"))
        ));
    }

    #[test]
    fn restricted_styles_reject_others() {
        let mut config = AppConfig::default();
        config.grammar.format_styles = vec!["camel".into()];
        let handle = initialize(&config).unwrap();
        assert_eq!(handle.format(&["camel", "a", "b"]).unwrap(), "aB");
        assert!(matches!(
            handle.format(&["score", "a", "b"]),
            Err(GrammarError::Format(FormatError::UnsupportedStyle(_)))
        ));
    }

    #[test]
    fn command_groups_follow_config() {
        let mut config = AppConfig::default();
        config.grammar.command_groups = vec![CommandGroup::General];
        let handle = initialize(&config).unwrap();
        assert_eq!(handle.groups(), [CommandGroup::General]);
        let mut exec = RecordingExecutor::new();
        let rec = Recognition::new(vec![Element::command("lambda")]);
        assert!(matches!(
            handle.dispatch(&rec, EditorContext::Normal, &mut exec),
            Err(GrammarError::UnknownPhrase(_))
        ));
    }

    #[test]
    fn shutdown_consumes_handle() {
        shutdown(handle());
    }

    // --- Dispatch ------------------------------------------------------------

    #[test]
    fn sequence_executes_in_order() {
        let handle = handle();
        let mut exec = RecordingExecutor::new();
        let rec = Recognition::new(vec![
            Element::command_n("up", 3),
            Element::command("doll"),
            Element::command("slap"),
        ]);
        handle.dispatch(&rec, EditorContext::Normal, &mut exec).unwrap();
        assert_eq!(
            exec.steps(),
            [press("Up", 3), press("End", 1), press("Return", 1)]
        );
    }

    #[test]
    fn context_selects_vim_template() {
        let handle = handle();
        let rec = Recognition::new(vec![Element::command("file top")]);

        let mut normal = RecordingExecutor::new();
        handle.dispatch(&rec, EditorContext::Normal, &mut normal).unwrap();
        assert_eq!(
            normal.steps(),
            [Step::Press {
                key: "Home".into(),
                modifiers: vec![Modifier::Control],
                times: 1
            }]
        );

        let mut vim = RecordingExecutor::new();
        handle
            .dispatch_for_window(&rec, "notes.txt - GVIM", &mut vim)
            .unwrap();
        assert_eq!(vim.steps().len(), 4);
        assert_eq!(vim.steps()[0], press("Escape", 1));
    }

    #[test]
    fn repeat_runs_whole_pass_including_tail() {
        let handle = handle();
        let mut exec = RecordingExecutor::new();
        let rec = Recognition::new(vec![Element::command("drip")])
            .with_tail(Tail::literal(&["natword", "x"]))
            .with_repeat(2);
        handle.dispatch(&rec, EditorContext::Normal, &mut exec).unwrap();
        assert_eq!(
            exec.steps(),
            [
                press("comma", 1),
                Step::Type { text: "x".into() },
                press("comma", 1),
                Step::Type { text: "x".into() },
            ]
        );
    }

    #[test]
    fn spelled_finish() {
        let handle = handle();
        let mut exec = RecordingExecutor::new();
        let rec = Recognition::new(vec![Element::command("dot")])
            .with_tail(Tail::spell(Alphabet::Alphanumeric, &["papa", "yankee", "three"]));
        handle.dispatch(&rec, EditorContext::Normal, &mut exec).unwrap();
        assert_eq!(exec.typed_text(), "py3");
    }

    #[test]
    fn literal_on_its_own() {
        let handle = handle();
        let mut exec = RecordingExecutor::new();
        handle
            .dispatch_literal(&["upper", "score", "left", "right"], &mut exec)
            .unwrap();
        assert_eq!(exec.typed_text(), "LEFT_RIGHT");
    }

    #[test]
    fn empty_format_types_nothing() {
        let handle = handle();
        let mut exec = RecordingExecutor::new();
        let rec = Recognition::new(vec![Element::format(&["camel"])]);
        handle.dispatch(&rec, EditorContext::Normal, &mut exec).unwrap();
        assert!(exec.steps().is_empty());
    }

    // --- Validation ----------------------------------------------------------

    #[test]
    fn invalid_recognition_executes_nothing() {
        let handle = handle();
        let mut exec = RecordingExecutor::new();
        let rec = Recognition::new(vec![Element::command("care"), Element::command("bogus")]);
        assert!(matches!(
            handle.dispatch(&rec, EditorContext::Normal, &mut exec),
            Err(GrammarError::UnknownPhrase(ref p)) if p == "bogus"
        ));
        assert!(exec.steps().is_empty());
    }

    #[test]
    fn sequence_length_limits() {
        let handle = handle();
        let mut exec = RecordingExecutor::new();
        let empty = Recognition::new(Vec::new());
        assert!(matches!(
            handle.dispatch(&empty, EditorContext::Normal, &mut exec),
            Err(GrammarError::SequenceLength { len: 0, max: 15 })
        ));
        let long = Recognition::new(vec![Element::command("care"); 16]);
        assert!(matches!(
            handle.dispatch(&long, EditorContext::Normal, &mut exec),
            Err(GrammarError::SequenceLength { len: 16, max: 15 })
        ));
        assert!(exec.steps().is_empty());
        let max = Recognition::new(vec![Element::command("care"); 15]);
        assert!(handle.dispatch(&max, EditorContext::Normal, &mut exec).is_ok());
    }

    #[test]
    fn count_limits() {
        let handle = handle();
        let mut exec = RecordingExecutor::new();
        for (n, ok) in [(0, false), (1, true), (99, true), (100, false)] {
            let rec = Recognition::new(vec![Element::command_n("left", n)]);
            assert_eq!(
                handle.resolve(&rec, EditorContext::Normal).is_ok(),
                ok,
                "n = {n}"
            );
        }
        let rec = Recognition::new(vec![Element::command("care")]).with_repeat(0);
        assert!(matches!(
            handle.dispatch(&rec, EditorContext::Normal, &mut exec),
            Err(GrammarError::CountOutOfRange { value: 0, max: 99 })
        ));
        let rec = Recognition::new(vec![Element::command("care")]).with_repeat(100);
        assert!(matches!(
            handle.resolve(&rec, EditorContext::Normal),
            Err(GrammarError::CountOutOfRange { value: 100, max: 99 })
        ));
        let rec = Recognition::new(vec![Element::command("care")]).with_repeat(99);
        assert!(handle.resolve(&rec, EditorContext::Normal).is_ok());
    }

    #[test]
    fn count_on_countless_phrase_is_rejected() {
        let handle = handle();
        let rec = Recognition::new(vec![Element::command_n("care", 2)]);
        assert!(matches!(
            handle.resolve(&rec, EditorContext::Normal),
            Err(GrammarError::UnexpectedCount(_))
        ));
    }

    #[test]
    fn spelled_finish_limits() {
        let handle = handle();
        let seq = vec![Element::command("ace")];

        let empty = Recognition::new(seq.clone()).with_tail(Tail::spell::<&str>(Alphabet::Letters, &[]));
        assert!(matches!(
            handle.resolve(&empty, EditorContext::Normal),
            Err(GrammarError::SpellLength { len: 0, .. })
        ));

        let long = Recognition::new(seq.clone()).with_tail(Tail::spell(Alphabet::Digits, &["one"; 20]));
        assert!(matches!(
            handle.resolve(&long, EditorContext::Normal),
            Err(GrammarError::SpellLength { len: 20, max: 19 })
        ));

        let max = Recognition::new(seq.clone()).with_tail(Tail::spell(Alphabet::Digits, &["one"; 19]));
        assert!(handle.resolve(&max, EditorContext::Normal).is_ok());

        let wrong = Recognition::new(seq).with_tail(Tail::spell(Alphabet::Digits, &["alpha"]));
        assert!(matches!(
            handle.resolve(&wrong, EditorContext::Normal),
            Err(GrammarError::UnknownSpelling { ref word, .. }) if word == "alpha"
        ));
    }

    #[test]
    fn executor_error_stops_dispatch() {
        let handle = handle();
        let mut exec = RecordingExecutor::failing_after(2);
        let rec = Recognition::new(vec![Element::command("care")]).with_repeat(5);
        assert!(matches!(
            handle.dispatch(&rec, EditorContext::Normal, &mut exec),
            Err(GrammarError::Execute(ExecuteError::Rejected(_)))
        ));
        assert_eq!(exec.steps().len(), 2);
    }
}
