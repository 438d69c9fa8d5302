//! Parser state machine and low-level operations.

use rowan::{TextRange, TextSize};

use super::ast::Chunk;
use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{Token, token_text};
use super::syntax_kind::SyntaxKind;

/// Fail-fast parser over the significant tokens of one chunk.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) depth: u32,
    last_end: TextSize,
    recursion_fuel_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    /// Trivia tokens are dropped here; the grammar never looks at them.
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens: tokens
                .into_iter()
                .filter(|token| !token.kind.is_trivia())
                .collect(),
            pos: 0,
            depth: 0,
            last_end: TextSize::from(0),
            recursion_fuel_limit: None,
        }
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse_chunk(mut self) -> ParseResult<Chunk> {
        let mut stmts = Vec::new();
        while !self.eof() {
            stmts.push(self.parse_statement()?);
        }
        Ok(Chunk { stmts })
    }

    pub(super) fn current(&self) -> Option<SyntaxKind> {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + lookahead).map(|t| t.kind)
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == Some(kind)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// Consumes the current token. Callers check `eof()` first.
    pub(super) fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        self.last_end = token.span.end();
        token
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> ParseResult<Token> {
        match self.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(what)),
        }
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    /// Span from `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: TextRange) -> TextRange {
        let end = self.last_end.max(start.end());
        TextRange::new(start.start(), end)
    }

    /// Error for the current token, which did not match `what`.
    pub(super) fn unexpected(&self, what: &str) -> ParseError {
        let span = self.current_span();
        match self.tokens.get(self.pos) {
            None => ParseError::new(
                ParseErrorKind::UnexpectedToken,
                format!("expected {what}, found end of input"),
                span,
            ),
            Some(token) if token.kind == SyntaxKind::Garbage => ParseError::new(
                ParseErrorKind::UnexpectedCharacter,
                format!("unexpected character `{}`", self.text(token)),
                span,
            ),
            Some(token) => ParseError::new(
                ParseErrorKind::UnexpectedToken,
                format!("expected {what}, found {}", token.kind.describe()),
                span,
            ),
        }
    }

    pub(super) fn error(
        &self,
        kind: ParseErrorKind,
        message: impl Into<String>,
        span: TextRange,
    ) -> ParseError {
        ParseError::new(kind, message, span)
    }

    pub(super) fn enter_recursion(&mut self) -> ParseResult<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(self.error(
                ParseErrorKind::RecursionLimitExceeded,
                format!("input is nested more than {limit} levels deep"),
                self.current_span(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
