//! Declarative rows of the command table, before parsing.

/// An action template as written in the table source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawAction {
    /// Key spec, see [`KeySpec`](crate::action::KeySpec).
    Key(&'static str),
    /// Text template, see [`Template`](crate::action::Template).
    Text(&'static str),
    /// Delimiter pair typed with the cursor left between them.
    Nested(&'static str),
}

pub const fn key(spec: &'static str) -> RawAction {
    RawAction::Key(spec)
}

pub const fn text(template: &'static str) -> RawAction {
    RawAction::Text(template)
}

pub const fn nested(delimiters: &'static str) -> RawAction {
    RawAction::Nested(delimiters)
}

/// One row: spoken form, normal template, optional VIM override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry {
    /// Grammar notation, e.g. `"up [<n>]"`.
    pub spoken: &'static str,
    pub normal: RawAction,
    pub vim: Option<RawAction>,
}

impl RawEntry {
    pub const fn new(spoken: &'static str, normal: RawAction, vim: Option<RawAction>) -> Self {
        Self {
            spoken,
            normal,
            vim,
        }
    }
}
