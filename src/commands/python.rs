//! Python keywords, builtins and operators.

use super::raw::{nested, text, RawEntry};

#[rustfmt::skip]
pub const PYTHON_COMMANDS: &[RawEntry] = &[
    RawEntry::new("private",         nested("____"),    None),
    RawEntry::new("dub dock string", nested("\"\"\"\"\"\""), None),
    RawEntry::new("dock string",     nested("''''''"),  None),
    RawEntry::new("square sing",     nested("['']"),    None),
    RawEntry::new("box sing",        nested("['']"),    None),
    RawEntry::new("square dub",      nested("[\"\"]"),  None),
    RawEntry::new("box dub",         nested("[\"\"]"),  None),
    RawEntry::new("int",             text("int"),       None),
    RawEntry::new("float",           text("float"),     None),
    RawEntry::new("stir",            text("str"),       None),
    RawEntry::new("list",            text("list"),      None),
    RawEntry::new("dictionary",      text("dict"),      None),
    RawEntry::new("set",             text("set"),       None),
    RawEntry::new("tuple",           text("tuple"),     None),
    RawEntry::new("lazy range",      text("xrange"),    None),
    RawEntry::new("range",           text("range"),     None),
    RawEntry::new("is instance",     text("isinstance"), None),
    RawEntry::new("iter",            text("iter"),      None),
    RawEntry::new("items",           text("items"),     None),
    RawEntry::new("keys",            text("keys"),      None),
    RawEntry::new("values",          text("values"),    None),
    RawEntry::new("get atter",       text("getattr"),   None),
    RawEntry::new("set atter",       text("setattr"),   None),
    RawEntry::new("has atter",       text("hasattr"),   None),
    RawEntry::new("print",           text("print"),     None),
    RawEntry::new("if test",         text("if "),       None),
    RawEntry::new("elif",            text("elif "),     None),
    RawEntry::new("else",            text("else"),      None),
    RawEntry::new("in it",           text("init"),      None),
    RawEntry::new("repper",          text("repr"),      None),
    RawEntry::new("deaf",            text("def "),      None),
    RawEntry::new("log and",         text("and "),      None),
    RawEntry::new("log or",          text("or "),       None),
    RawEntry::new("log not",         text("not "),      None),
    RawEntry::new("for loop",        text("for "),      None),
    RawEntry::new("bit ore",         text("| "),        None),
    RawEntry::new("bit and",         text("& "),        None),
    RawEntry::new("bit ex or",       text("^ "),        None),
    RawEntry::new("times",           text("* "),        None),
    RawEntry::new("divided",         text("/ "),        None),
    RawEntry::new("plus",            text("+ "),        None),
    RawEntry::new("minus",           text("- "),        None),
    RawEntry::new("plus equal",      text("+= "),       None),
    RawEntry::new("minus equal",     text("-= "),       None),
    RawEntry::new("times equal",     text("*= "),       None),
    RawEntry::new("divided equal",   text("/= "),       None),
    RawEntry::new("mod equal",       text("%%= "),      None),
    RawEntry::new("as name",         text("as "),       None),
    RawEntry::new("in",              text("in "),       None),
    RawEntry::new("while",           text("while "),    None),
    RawEntry::new("class",           text("class "),    None),
    RawEntry::new("with context",    text("with "),     None),
    RawEntry::new("import",          text("import "),   None),
    RawEntry::new("from",            text("from "),     None),
    RawEntry::new("raise",           text("raise "),    None),
    RawEntry::new("return",          text("return "),   None),
    RawEntry::new("none",            text("None"),      None),
    RawEntry::new("true",            text("True"),      None),
    RawEntry::new("false",           text("False"),     None),
    RawEntry::new("try",             text("try"),       None),
    RawEntry::new("except",          text("except"),    None),
    RawEntry::new("lambda",          text("lambda "),   None),
    RawEntry::new("assert",          text("assert "),   None),
    RawEntry::new("self",            text("self"),      None),
    RawEntry::new("self dot",        text("self."),     None),
    RawEntry::new("pass",            text("pass"),      None),
    RawEntry::new("delete",          text("del "),      None),
];
