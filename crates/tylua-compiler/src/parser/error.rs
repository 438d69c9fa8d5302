use rowan::TextRange;

/// What went wrong while parsing. The message carries the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnexpectedToken,
    UnexpectedCharacter,
    InvalidNumber,
    InvalidEscape,
    InvalidAssignmentTarget,
    UnusedExpression,
    ValueCountMismatch,
    RecursionLimitExceeded,
}

impl ParseErrorKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",
            Self::UnexpectedCharacter => "unexpected character",
            Self::InvalidNumber => "invalid number literal",
            Self::InvalidEscape => "invalid escape sequence",
            Self::InvalidAssignmentTarget => "invalid assignment target",
            Self::UnusedExpression => "expression is not a statement",
            Self::ValueCountMismatch => "value count mismatch",
            Self::RecursionLimitExceeded => "recursion limit exceeded",
        }
    }
}

/// The first syntax error in a chunk. Parsing stops there.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: TextRange,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
