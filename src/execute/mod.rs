//! Output boundary: hands resolved steps to whoever performs them.
//!
//! # Overview
//!
//! Keystroke injection belongs to the host's OS-automation layer.  This
//! crate resolves templates into [`Step`]s and passes them, one by one, to
//! an [`ActionExecutor`]:
//!
//! 1. The grammar resolves every action of a recognition up front.
//! 2. Each [`Step`] is passed to [`ActionExecutor::execute`] in order.
//! 3. The first error stops the recognition; nothing is retried.
//!
//! Two executors ship with the crate:
//!
//! | Executor              | Effect                                          |
//! |-----------------------|-------------------------------------------------|
//! | [`LogExecutor`]       | logs each step at `info` level (dry run)        |
//! | [`RecordingExecutor`] | collects steps for inspection or JSON transcript |

pub mod log_sink;
pub mod recorder;

pub use log_sink::LogExecutor;
pub use recorder::RecordingExecutor;

use thiserror::Error;

use crate::action::Step;

// ---------------------------------------------------------------------------
// ExecuteError
// ---------------------------------------------------------------------------

/// Errors reported by an executor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    /// The executor refused the step (e.g. unknown key name for its backend).
    #[error("step rejected: {0}")]
    Rejected(String),
}

// ---------------------------------------------------------------------------
// ActionExecutor trait
// ---------------------------------------------------------------------------

/// Performs resolved steps.
///
/// Object-safe, so the grammar can take `&mut dyn ActionExecutor`.
pub trait ActionExecutor {
    /// Perform a single step.
    fn execute(&mut self, step: &Step) -> Result<(), ExecuteError>;

    /// Perform `steps` in order, stopping at the first error.
    fn execute_all(&mut self, steps: &[Step]) -> Result<(), ExecuteError> {
        for step in steps {
            self.execute(step)?;
        }
        Ok(())
    }
}

// Compile-time assertion: Box<dyn ActionExecutor> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn ActionExecutor>) {}
};
