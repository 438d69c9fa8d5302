//! Token kinds for the tylua dialect.
//!
//! Logos derives token recognition. Keywords are listed before `Ident` so the
//! literal `#[token]` patterns win over the identifier regex on equal length.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    /// `..` string concatenation.
    #[token("..")]
    DotDot,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("==")]
    EqEq,

    /// `~=` (Lua spelling) and `!=` are interchangeable.
    #[token("~=")]
    #[token("!=")]
    NotEq,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEq,

    #[token(">")]
    Greater,

    #[token(">=")]
    GreaterEq,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    /// Length operator.
    #[token("#")]
    Hash,

    /// Return type arrow in function declarations and annotations.
    #[token("->")]
    Arrow,

    /// Union separator in annotations.
    #[token("|")]
    Pipe,

    #[token("local")]
    KwLocal,

    #[token("function")]
    KwFunction,

    #[token("end")]
    KwEnd,

    #[token("return")]
    KwReturn,

    #[token("if")]
    KwIf,

    #[token("then")]
    KwThen,

    #[token("else")]
    KwElse,

    #[token("elseif")]
    KwElseif,

    #[token("do")]
    KwDo,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("nil")]
    KwNil,

    #[token("not")]
    KwNot,

    #[token("and")]
    KwAnd,

    #[token("or")]
    KwOr,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    Str,

    #[regex(r"[ \t\f]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    LineComment,

    /// Coalesced unrecognized characters.
    Garbage,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwLocal as u16..=KwOr as u16).contains(&(self as u16))
    }

    /// Human readable form used in "expected X, found Y" messages.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Comma => "`,`",
            Dot => "`.`",
            DotDot => "`..`",
            Colon => "`:`",
            Equals => "`=`",
            EqEq => "`==`",
            NotEq => "`~=`",
            Less => "`<`",
            LessEq => "`<=`",
            Greater => "`>`",
            GreaterEq => "`>=`",
            Plus => "`+`",
            Minus => "`-`",
            Star => "`*`",
            Slash => "`/`",
            Hash => "`#`",
            Arrow => "`->`",
            Pipe => "`|`",
            KwLocal => "`local`",
            KwFunction => "`function`",
            KwEnd => "`end`",
            KwReturn => "`return`",
            KwIf => "`if`",
            KwThen => "`then`",
            KwElse => "`else`",
            KwElseif => "`elseif`",
            KwDo => "`do`",
            KwTrue => "`true`",
            KwFalse => "`false`",
            KwNil => "`nil`",
            KwNot => "`not`",
            KwAnd => "`and`",
            KwOr => "`or`",
            Ident => "identifier",
            Number => "number",
            Str => "string",
            Whitespace => "whitespace",
            Newline => "newline",
            LineComment => "comment",
            Garbage => "unrecognized input",
        }
    }
}
