//! Editing commands available in every editor.
//!
//! Columns: spoken form, normal template, VIM override (`None` when the
//! normal template works in VIM's insert mode too).

use super::raw::{key, nested, RawEntry};

#[rustfmt::skip]
pub const GENERAL_COMMANDS: &[RawEntry] = &[
    // Spoken form          normal                                 VIM override

    // Cursor manipulation
    RawEntry::new("up [<n>]",      key("Up:%(n)d"),               None),
    RawEntry::new("down [<n>]",    key("Down:%(n)d"),             None),
    RawEntry::new("left [<n>]",    key("Left:%(n)d"),             None),
    RawEntry::new("right [<n>]",   key("Right:%(n)d"),            None),
    RawEntry::new("gope [<n>]",    key("Prior:%(n)d"),            None),
    RawEntry::new("drop [<n>]",    key("Next:%(n)d"),             None),
    RawEntry::new("port [<n>]",    key("c-Left:%(n)d"),           Some(key("Escape, [ %(n)dbi ]"))),
    RawEntry::new("yope [<n>]",    key("c-Right:%(n)d"),          Some(key("Escape, [ %(n)dwwi ]"))),
    RawEntry::new("care",          key("Home"),                   None),
    RawEntry::new("doll",          key("End"),                    None),
    RawEntry::new("file top",      key("c-Home"),                 Some(key("Escape, 1, s-g, i"))),
    RawEntry::new("file toe",      key("c-End"),                  Some(key("Escape, s-g, i"))),

    // Various keys
    RawEntry::new("ace [<n>]",     key("space:%(n)d"),            None),
    RawEntry::new("tab [<n>]",     key("Tab:%(n)d"),              None),
    RawEntry::new("slap [<n>]",    key("Return:%(n)d"),           None),
    RawEntry::new("chuck [<n>]",   key("Delete:%(n)d"),           None),
    RawEntry::new("scratch [<n>]", key("BackSpace:%(n)d"),        None),
    RawEntry::new("act",           key("Escape"),                 None),

    // Symbols
    RawEntry::new("amp [<n>]",     key("ampersand:%(n)d"),        None),
    RawEntry::new("star [<n>]",    key("asterisk:%(n)d"),         None),
    RawEntry::new("at sign [<n>]", key("at:%(n)d"),               None),
    RawEntry::new("back ash [<n>]", key("backslash:%(n)d"),       None),
    RawEntry::new("backtick [<n>]", key("grave:%(n)d"),           None),
    RawEntry::new("bar [<n>]",     key("bar:%(n)d"),              None),
    RawEntry::new("hat [<n>]",     key("asciicircum:%(n)d"),      None),
    RawEntry::new("yeah [<n>]",    key("colon:%(n)d"),            None),
    RawEntry::new("drip [<n>]",    key("comma:%(n)d"),            None),
    RawEntry::new("dollar [<n>]",  key("dollar:%(n)d"),           None),
    RawEntry::new("dot [<n>]",     key("period:%(n)d"),           None),
    RawEntry::new("quote [<n>]",   key("quotedbl:%(n)d"),         None),
    RawEntry::new("eek [<n>]",     key("equal:%(n)d"),            None),
    RawEntry::new("bang [<n>]",    key("exclam:%(n)d"),           None),
    RawEntry::new("pound [<n>]",   key("numbersign:%(n)d"),       None),
    RawEntry::new("hyph [<n>]",    key("minus:%(n)d"),            None),
    RawEntry::new("percent [<n>]", key("percent:%(n)d"),          None),
    RawEntry::new("cross [<n>]",   key("plus:%(n)d"),             None),
    RawEntry::new("quest [<n>]",   key("question:%(n)d"),         None),
    RawEntry::new("ash [<n>]",     key("slash:%(n)d"),            None),
    RawEntry::new("smote [<n>]",   key("apostrophe:%(n)d"),       None),
    RawEntry::new("tilde [<n>]",   key("asciitilde:%(n)d"),       None),
    RawEntry::new("rail [<n>]",    key("underscore:%(n)d"),       None),
    RawEntry::new("push [<n>]",    key("parenleft:%(n)d"),        None),
    RawEntry::new("pop [<n>]",     key("parenright:%(n)d"),       None),

    // Nested delimiters
    RawEntry::new("circle",        nested("()"),                  None),
    RawEntry::new("square",        nested("[]"),                  None),
    RawEntry::new("box",           nested("[]"),                  None),
    RawEntry::new("diamond",       nested("<>"),                  None),
    RawEntry::new("hexy",          nested("{}"),                  None),
    RawEntry::new("nest quote",    nested("\"\""),                None),
    RawEntry::new("nest smote",    nested("''"),                  None),

    // Legacy symbols
    RawEntry::new("oop [<n>]",        key("period:%(n)d"),        None),
    RawEntry::new("dub quote [<n>]",  key("quotedbl:%(n)d"),      None),
    RawEntry::new("sing quote [<n>]", key("apostrophe:%(n)d"),    None),

    // Lines
    RawEntry::new("wipe [<n>]",
        key("Home, Shift_L:down, Down:%(n)d, Up, End, Delete, Shift_L:up, BackSpace"),
        Some(key("Escape, [ d%(n)ddi ]"))),
    RawEntry::new("strip",
        key("s-End, Delete"),
        Some(key("Escape, l, d, dollar, a"))),
    RawEntry::new("striss",
        key("s-Home, Delete"),
        Some(key("Escape, l, d, asciicircum, i"))),
    RawEntry::new("nab [<n>]",
        key("Home, Shift_L:down, Down:%(n)d, Up, End, Shift_L:up, c-j, End"),
        Some(key("Escape, [ y%(n)dyi ]"))),
    RawEntry::new("trance [<n>]",
        key("Home, Shift_L:down, Down:%(n)d, Up:2, End, Shift_L:up, c-j, End, Return, c-k"),
        Some(key("Escape, [ y%(n)dy%(n)djpi ]"))),
    RawEntry::new("lineup [<n>]",
        key("Home, Shift_L:down, End, Shift_L:up, c-q, Delete, Up:%(n)d, Home, Return, Up, c-k"),
        Some(key("Escape, [ dd%(n)dk ], Home, [ 1P ], i"))),
    RawEntry::new("line down [<n>]",
        key("Home, Shift_L:down, End, Shift_L:up, c-q, Delete, Down:%(n)d, Home, Return, Up, c-k"),
        Some(key("Escape, [ dd%(n)dj ], Home, [ 1P ], i"))),

    // Words
    RawEntry::new("bump [<n>]",
        key("Right:2, c-Left, cs-Right:%(n)d, Delete:2"),
        Some(key("Escape, [ lwbd%(n)dwi ]"))),
    RawEntry::new("whack [<n>]",
        key("Left, c-Right, cs-Left:%(n)d, Delete:2"),
        Some(key("Escape, [ lw%(n)dbd%(n)dwi ]"))),
];
