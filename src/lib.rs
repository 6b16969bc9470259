//! Voice-driven multi-edit grammar.
//!
//! Spoken utterances, already matched by a recognition engine, become
//! keystrokes and typed text:
//!
//! * [`format`]: dictated words to identifiers (`camel`, `score`, `relpath`, ...).
//! * [`action`]: key and text templates with `%(n)d` / `%(text)s` parameters.
//! * [`commands`]: the general and Python command tables.
//! * [`context`]: normal editor vs. VIM, decided from the window title.
//! * [`grammar`]: lifecycle ([`grammar::initialize`] / [`grammar::shutdown`])
//!   and recognition dispatch.
//! * [`execute`]: the output boundary that performs resolved steps.
//! * [`config`]: on-disk settings.

pub mod action;
pub mod commands;
pub mod config;
pub mod context;
pub mod execute;
pub mod format;
pub mod grammar;
pub mod replay;
