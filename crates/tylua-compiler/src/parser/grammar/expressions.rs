//! Expression productions.
//!
//! Binary operators use precedence climbing over [`BinaryOp::precedence`].
//! Unary operators bind tighter than every binary operator, postfix
//! operators (`.field`, `[index]`, `(args)`) bind tightest.

use crate::parser::Parser;
use crate::parser::ast::{BinaryOp, Expr, ExprKind, Name, TableEntry, UNARY_PRECEDENCE, UnaryOp};
use crate::parser::error::{ParseErrorKind, ParseResult};
use crate::parser::lexer::Token;
use crate::parser::syntax_kind::SyntaxKind::{self, *};

fn unary_op(kind: SyntaxKind) -> Option<UnaryOp> {
    match kind {
        Minus => Some(UnaryOp::Neg),
        KwNot => Some(UnaryOp::Not),
        Hash => Some(UnaryOp::Len),
        _ => None,
    }
}

fn binary_op(kind: SyntaxKind) -> Option<BinaryOp> {
    let op = match kind {
        Plus => BinaryOp::Add,
        Minus => BinaryOp::Sub,
        Star => BinaryOp::Mul,
        Slash => BinaryOp::Div,
        EqEq => BinaryOp::Eq,
        NotEq => BinaryOp::NotEq,
        Less => BinaryOp::Less,
        LessEq => BinaryOp::LessEq,
        Greater => BinaryOp::Greater,
        GreaterEq => BinaryOp::GreaterEq,
        KwAnd => BinaryOp::And,
        KwOr => BinaryOp::Or,
        DotDot => BinaryOp::Concat,
        _ => return None,
    };
    Some(op)
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_expr_bp(0)
    }

    /// Parses an expression whose binary operators all have precedence >= `min_prec`.
    fn parse_expr_bp(&mut self, min_prec: u8) -> ParseResult<Expr> {
        self.enter_recursion()?;
        let result = self.parse_expr_bp_inner(min_prec);
        self.exit_recursion();
        result
    }

    fn parse_expr_bp_inner(&mut self, min_prec: u8) -> ParseResult<Expr> {
        let lhs = match self.current().and_then(unary_op) {
            Some(op) => {
                let start = self.bump().span;
                let operand = self.parse_expr_bp(UNARY_PRECEDENCE)?;
                let span = start.cover(operand.span);
                Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                )
            }
            None => self.parse_suffixed()?,
        };

        let mut wrapped = 0;
        let result = self.parse_binary_tail(lhs, min_prec, &mut wrapped);
        for _ in 0..wrapped {
            self.exit_recursion();
        }
        result
    }

    /// Folds `op rhs` pairs onto `lhs`. Each new `Binary` node costs one unit
    /// of recursion fuel, counted in `wrapped` for the caller to release.
    fn parse_binary_tail(
        &mut self,
        mut lhs: Expr,
        min_prec: u8,
        wrapped: &mut u32,
    ) -> ParseResult<Expr> {
        while let Some(op) = self.current().and_then(binary_op) {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.bump();
            self.enter_recursion()?;
            *wrapped += 1;

            let next_min = if op.is_right_assoc() { prec } else { prec + 1 };
            let rhs = self.parse_expr_bp(next_min)?;
            let span = lhs.span.cover(rhs.span);
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(lhs)
    }

    /// Primary expression followed by any number of `.name`, `[expr]`, `(args)`.
    fn parse_suffixed(&mut self) -> ParseResult<Expr> {
        let primary = self.parse_primary()?;
        let mut wrapped = 0;
        let result = self.parse_suffixes(primary, &mut wrapped);
        for _ in 0..wrapped {
            self.exit_recursion();
        }
        result
    }

    /// Like [`Self::parse_binary_tail`], each suffix adds a level of nesting.
    fn parse_suffixes(&mut self, mut expr: Expr, wrapped: &mut u32) -> ParseResult<Expr> {
        loop {
            let current = self.current();
            if matches!(current, Some(Dot | BracketOpen | ParenOpen)) {
                self.enter_recursion()?;
                *wrapped += 1;
            }
            match current {
                Some(Dot) => {
                    self.bump();
                    let token = self.expect(Ident, "field name")?;
                    let field = Name::new(self.text(&token), token.span);
                    let span = expr.span.cover(field.span);
                    expr = Expr::new(
                        ExprKind::Member {
                            object: Box::new(expr),
                            field,
                        },
                        span,
                    );
                }
                Some(BracketOpen) => {
                    self.bump();
                    let index = self.parse_expr()?;
                    let close = self.expect(BracketClose, "`]`")?;
                    let span = expr.span.cover(close.span);
                    expr = Expr::new(
                        ExprKind::Index {
                            object: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                Some(ParenOpen) => {
                    self.bump();
                    let args = if self.at(ParenClose) {
                        Vec::new()
                    } else {
                        self.parse_expr_list()?
                    };
                    let close = self.expect(ParenClose, "`)`")?;
                    let span = expr.span.cover(close.span);
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let Some(kind) = self.current() else {
            return Err(self.unexpected("expression"));
        };

        let kind = match kind {
            KwNil => ExprKind::Nil,
            KwTrue => ExprKind::Bool(true),
            KwFalse => ExprKind::Bool(false),
            Number => {
                let token = self.bump();
                return self.number_literal(token);
            }
            Str => {
                let token = self.bump();
                return self.string_literal(token);
            }
            Ident => ExprKind::Var(self.text(&self.tokens[self.pos]).to_owned()),
            ParenOpen => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(ParenClose, "`)`")?;
                return Ok(inner);
            }
            BraceOpen => return self.parse_table(),
            _ => return Err(self.unexpected("expression")),
        };

        let token = self.bump();
        Ok(Expr::new(kind, token.span))
    }

    fn number_literal(&self, token: Token) -> ParseResult<Expr> {
        let text = self.text(&token);
        let value: f64 = text.parse().map_err(|_| {
            self.error(
                ParseErrorKind::InvalidNumber,
                format!("`{text}` is not a valid number"),
                token.span,
            )
        })?;
        Ok(Expr::new(ExprKind::Number(value), token.span))
    }

    fn string_literal(&self, token: Token) -> ParseResult<Expr> {
        let text = self.text(&token);
        let body = &text[1..text.len() - 1];

        let mut value = String::with_capacity(body.len());
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                value.push(c);
                continue;
            }
            let unescaped = match chars.next() {
                Some('n') => '\n',
                Some('t') => '\t',
                Some('r') => '\r',
                Some('0') => '\0',
                Some(c @ ('\\' | '"' | '\'')) => c,
                Some(other) => {
                    return Err(self.error(
                        ParseErrorKind::InvalidEscape,
                        format!("unknown escape sequence `\\{other}`"),
                        token.span,
                    ));
                }
                None => {
                    return Err(self.error(
                        ParseErrorKind::InvalidEscape,
                        "string ends with a lone `\\`",
                        token.span,
                    ));
                }
            };
            value.push(unescaped);
        }

        Ok(Expr::new(ExprKind::Str(value), token.span))
    }

    /// `{ a, b }` or `{ x = a, y = b }`; mixing is rejected by the checker.
    fn parse_table(&mut self) -> ParseResult<Expr> {
        let start = self.bump().span;
        let mut entries = Vec::new();

        while !self.at(BraceClose) {
            if self.at(Ident) && self.nth(1) == Some(Equals) {
                let token = self.bump();
                let key = Name::new(self.text(&token), token.span);
                self.bump();
                let value = self.parse_expr()?;
                entries.push(TableEntry::Keyed { key, value });
            } else {
                entries.push(TableEntry::Positional(self.parse_expr()?));
            }

            if self.eat(Comma).is_none() {
                break;
            }
        }

        let close = self.expect(BraceClose, "`}`")?;
        Ok(Expr::new(ExprKind::Table(entries), start.cover(close.span)))
    }
}
