//! Spoken command phrases and their keystroke templates.
//!
//! This module provides:
//! * [`RawEntry`] / [`RawAction`]: the declarative table rows.
//! * [`GENERAL_COMMANDS`] / [`PYTHON_COMMANDS`]: the static rows.
//! * [`build_command_table`] / [`CommandTable`]: the parsed, immutable table.
//! * [`Alphabet`]: spelled-out letters and digits.

pub mod alphabet;
pub mod general;
pub mod python;
pub mod raw;
pub mod table;

pub use alphabet::{Alphabet, DIGITS, LETTERS};
pub use general::GENERAL_COMMANDS;
pub use python::PYTHON_COMMANDS;
pub use raw::{key, nested, text, RawAction, RawEntry};
pub use table::{build_command_table, CommandEntry, CommandGroup, CommandTable, TableError};
