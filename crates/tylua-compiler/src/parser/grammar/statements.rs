//! Statement productions: declarations, control flow, assignments.

use rowan::TextRange;

use crate::parser::Parser;
use crate::parser::ast::{
    AssignStmt, Block, ElseBranch, Expr, ExprKind, FunctionDecl, IfStmt, LocalStmt, Name, Param,
    ReturnStmt, Stmt, VarDecl,
};
use crate::parser::error::{ParseErrorKind, ParseResult};
use crate::parser::syntax_kind::SyntaxKind::{self, *};

/// Tokens that close a block.
const BLOCK_END: &[SyntaxKind] = &[KwEnd, KwElse, KwElseif];

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        self.enter_recursion()?;
        let result = self.parse_statement_inner();
        self.exit_recursion();
        result
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Stmt> {
        match self.current() {
            Some(KwLocal) if self.nth(1) == Some(KwFunction) => {
                self.parse_function(true).map(Stmt::Function)
            }
            Some(KwLocal) => self.parse_local().map(Stmt::Local),
            Some(KwFunction) => self.parse_function(false).map(Stmt::Function),
            Some(KwReturn) => self.parse_return().map(Stmt::Return),
            Some(KwIf) => self.parse_if().map(Stmt::If),
            Some(KwDo) => {
                self.bump();
                let block = self.parse_block(&[KwEnd], "`end`")?;
                self.expect(KwEnd, "`end`")?;
                Ok(Stmt::Do(block))
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// Statements up to (not including) one of `terminators`.
    pub(super) fn parse_block(
        &mut self,
        terminators: &[SyntaxKind],
        what: &str,
    ) -> ParseResult<Block> {
        let start = self.current_span();
        let mut stmts = Vec::new();
        loop {
            match self.current() {
                Some(kind) if terminators.contains(&kind) => break,
                None => return Err(self.unexpected(what)),
                Some(_) => stmts.push(self.parse_statement()?),
            }
        }
        let span = if stmts.is_empty() {
            TextRange::empty(start.start())
        } else {
            self.span_from(start)
        };
        Ok(Block { stmts, span })
    }

    fn parse_name(&mut self, what: &str) -> ParseResult<Name> {
        let token = self.expect(Ident, what)?;
        Ok(Name::new(self.text(&token), token.span))
    }

    /// `local a[: T], b[: T] = x, y`
    fn parse_local(&mut self) -> ParseResult<LocalStmt> {
        let start = self.bump().span;

        let mut targets = Vec::new();
        loop {
            let name = self.parse_name("variable name")?;
            let annotation = if self.eat(Colon).is_some() {
                Some(self.parse_annotation()?)
            } else {
                None
            };
            targets.push((name, annotation));
            if self.eat(Comma).is_none() {
                break;
            }
        }

        self.expect(Equals, "`=`")?;
        let values = self.parse_expr_list()?;

        let span = self.span_from(start);
        if values.len() != targets.len() {
            return Err(self.error(
                ParseErrorKind::ValueCountMismatch,
                format!(
                    "{} declared with {}",
                    plural(targets.len(), "variable"),
                    plural(values.len(), "value")
                ),
                span,
            ));
        }

        let decls = targets
            .into_iter()
            .zip(values)
            .map(|((name, annotation), init)| VarDecl {
                name,
                annotation,
                init,
                ty: None,
            })
            .collect();

        Ok(LocalStmt { decls, span })
    }

    /// `[local] function name(a[: T], ...) [-> T] body end`
    fn parse_function(&mut self, is_local: bool) -> ParseResult<FunctionDecl> {
        let start = self.current_span();
        if is_local {
            self.bump();
        }
        self.expect(KwFunction, "`function`")?;
        let name = self.parse_name("function name")?;

        self.expect(ParenOpen, "`(`")?;
        let mut params = Vec::new();
        if !self.at(ParenClose) {
            loop {
                let name = self.parse_name("parameter name")?;
                let annotation = if self.eat(Colon).is_some() {
                    Some(self.parse_annotation()?)
                } else {
                    None
                };
                params.push(Param { name, annotation });
                if self.eat(Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(ParenClose, "`)`")?;

        let return_annotation = if self.eat(Arrow).is_some() {
            Some(self.parse_annotation()?)
        } else {
            None
        };

        let body = self.parse_block(&[KwEnd], "`end`")?;
        self.expect(KwEnd, "`end`")?;

        Ok(FunctionDecl {
            name,
            is_local,
            params,
            return_annotation,
            body,
            ty: None,
            span: self.span_from(start),
        })
    }

    /// `return [e, ...]`, which must close its block.
    fn parse_return(&mut self) -> ParseResult<ReturnStmt> {
        let start = self.bump().span;
        let values = match self.current() {
            None => Vec::new(),
            Some(kind) if BLOCK_END.contains(&kind) => Vec::new(),
            Some(_) => self.parse_expr_list()?,
        };

        match self.current() {
            None => {}
            Some(kind) if BLOCK_END.contains(&kind) => {}
            Some(_) => return Err(self.unexpected("end of block after `return`")),
        }

        Ok(ReturnStmt {
            values,
            span: self.span_from(start),
        })
    }

    /// `if c then ... {elseif c then ...} [else ...] end`, entered at `if` or `elseif`.
    fn parse_if(&mut self) -> ParseResult<IfStmt> {
        let start = self.bump().span;
        let cond = self.parse_expr()?;
        self.expect(KwThen, "`then`")?;
        let then_block = self.parse_block(BLOCK_END, "`end`")?;

        let else_branch = match self.current() {
            Some(KwElseif) => {
                self.enter_recursion()?;
                let nested = self.parse_if();
                self.exit_recursion();
                Some(ElseBranch::ElseIf(Box::new(nested?)))
            }
            Some(KwElse) => {
                self.bump();
                let block = self.parse_block(&[KwEnd], "`end`")?;
                self.expect(KwEnd, "`end`")?;
                Some(ElseBranch::Else(block))
            }
            _ => {
                self.expect(KwEnd, "`end`")?;
                None
            }
        };

        Ok(IfStmt {
            cond,
            then_block,
            else_branch,
            span: self.span_from(start),
        })
    }

    /// Either `target = value` or a bare call.
    fn parse_expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.parse_expr()?;

        if self.eat(Equals).is_some() {
            if !expr.is_place() {
                return Err(self.error(
                    ParseErrorKind::InvalidAssignmentTarget,
                    "only variables, fields and indexed elements can be assigned",
                    expr.span,
                ));
            }
            let value = self.parse_expr()?;
            let span = expr.span.cover(value.span);
            return Ok(Stmt::Assign(AssignStmt {
                target: expr,
                value,
                span,
            }));
        }

        if matches!(expr.kind, ExprKind::Call { .. }) {
            return Ok(Stmt::Call(expr));
        }

        Err(self.error(
            ParseErrorKind::UnusedExpression,
            "expected a function call or an assignment",
            expr.span,
        ))
    }

    pub(super) fn parse_expr_list(&mut self) -> ParseResult<Vec<Expr>> {
        let mut values = vec![self.parse_expr()?];
        while self.eat(Comma).is_some() {
            values.push(self.parse_expr()?);
        }
        Ok(values)
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
