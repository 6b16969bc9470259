//! Dry-run executor that only logs.

use super::{ActionExecutor, ExecuteError};
use crate::action::Step;

/// Logs every step at `info` level and counts them.
#[derive(Debug, Default)]
pub struct LogExecutor {
    executed: usize,
}

impl LogExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps seen so far.
    pub fn executed(&self) -> usize {
        self.executed
    }
}

impl ActionExecutor for LogExecutor {
    fn execute(&mut self, step: &Step) -> Result<(), ExecuteError> {
        self.executed += 1;
        log::info!("execute #{}: {step}", self.executed);
        Ok(())
    }
}
