//! Executor that records steps instead of performing them.

use super::{ActionExecutor, ExecuteError};
use crate::action::Step;

/// Collects every step it is given.
///
/// Optionally fails after a fixed number of steps, which lets callers check
/// that a recognition stops at the first executor error.
#[derive(Debug, Default, Clone)]
pub struct RecordingExecutor {
    steps: Vec<Step>,
    fail_after: Option<usize>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder that rejects every step after the first `n`.
    pub fn failing_after(n: usize) -> Self {
        Self {
            steps: Vec::new(),
            fail_after: Some(n),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Take the recorded steps, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<Step> {
        std::mem::take(&mut self.steps)
    }

    /// Concatenation of all typed text.
    pub fn typed_text(&self) -> String {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Type { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The recorded steps as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.steps)
    }
}

impl ActionExecutor for RecordingExecutor {
    fn execute(&mut self, step: &Step) -> Result<(), ExecuteError> {
        if self.fail_after.is_some_and(|n| self.steps.len() >= n) {
            return Err(ExecuteError::Rejected(step.to_string()));
        }
        self.steps.push(step.clone());
        Ok(())
    }
}
