//! S-expression dump of a chunk, one top-level statement per line.
//!
//! With an arena attached the dump becomes typed: every expression is
//! followed by its inferred type in angle brackets and declarations show
//! their bound type.

use std::fmt::Write;

use crate::analyze::type_check::{TypeArena, TypeId};
use crate::emit::escape::{format_number, quote_string};

use super::ast::{
    Block, Chunk, ElseBranch, Expr, ExprKind, FunctionDecl, IfStmt, Param, Stmt, TableEntry,
    TypeAnnotation, VarDecl,
};

pub struct AstPrinter<'a> {
    chunk: &'a Chunk,
    arena: Option<&'a TypeArena>,
    spans: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(chunk: &'a Chunk) -> Self {
        Self {
            chunk,
            arena: None,
            spans: false,
        }
    }

    /// Render inferred types from `arena`.
    pub fn with_types(mut self, arena: &'a TypeArena) -> Self {
        self.arena = Some(arena);
        self
    }

    /// Suffix each top-level statement with its byte range.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for stmt in &self.chunk.stmts {
            self.format_stmt(stmt, w)?;
            if self.spans {
                let span = stmt.span();
                write!(w, " @{}..{}", u32::from(span.start()), u32::from(span.end()))?;
            }
            w.write_char('\n')?;
        }
        Ok(())
    }

    fn format_type(&self, ty: Option<TypeId>, w: &mut impl Write) -> std::fmt::Result {
        let Some(arena) = self.arena else {
            return Ok(());
        };
        match ty {
            Some(ty) => write!(w, " <{}>", arena.display(ty)),
            None => w.write_str(" <?>"),
        }
    }

    fn format_stmt(&self, stmt: &Stmt, w: &mut impl Write) -> std::fmt::Result {
        match stmt {
            Stmt::Local(local) => {
                w.write_str("(local")?;
                if let [decl] = local.decls.as_slice() {
                    w.write_char(' ')?;
                    self.format_decl(decl, w)?;
                } else {
                    for decl in &local.decls {
                        w.write_str(" (")?;
                        self.format_decl(decl, w)?;
                        w.write_char(')')?;
                    }
                }
                w.write_char(')')
            }
            Stmt::Function(func) => self.format_function(func, w),
            Stmt::Return(ret) => {
                w.write_str("(return")?;
                for value in &ret.values {
                    w.write_char(' ')?;
                    self.format_expr(value, w)?;
                }
                w.write_char(')')
            }
            Stmt::If(if_stmt) => self.format_if("if", if_stmt, w),
            Stmt::Do(block) => {
                w.write_str("(do")?;
                self.format_stmts(block, w)?;
                w.write_char(')')
            }
            Stmt::Call(call) => self.format_expr(call, w),
            Stmt::Assign(assign) => {
                w.write_str("(= ")?;
                self.format_expr(&assign.target, w)?;
                w.write_char(' ')?;
                self.format_expr(&assign.value, w)?;
                w.write_char(')')
            }
        }
    }

    fn format_decl(&self, decl: &VarDecl, w: &mut impl Write) -> std::fmt::Result {
        w.write_str(&decl.name.text)?;
        format_annotation(decl.annotation.as_ref(), w)?;
        self.format_type(decl.ty, w)?;
        w.write_char(' ')?;
        self.format_expr(&decl.init, w)
    }

    fn format_function(&self, func: &FunctionDecl, w: &mut impl Write) -> std::fmt::Result {
        let head = if func.is_local {
            "local-function"
        } else {
            "function"
        };
        write!(w, "({head} {}", func.name.text)?;
        self.format_type(func.ty, w)?;

        w.write_str(" (params")?;
        for Param { name, annotation } in &func.params {
            write!(w, " {}", name.text)?;
            format_annotation(annotation.as_ref(), w)?;
        }
        w.write_char(')')?;

        if let Some(ret) = &func.return_annotation {
            write!(w, " -> {ret}")?;
        }

        self.format_stmts(&func.body, w)?;
        w.write_char(')')
    }

    fn format_if(&self, head: &str, if_stmt: &IfStmt, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "({head} ")?;
        self.format_expr(&if_stmt.cond, w)?;
        w.write_str(" (then")?;
        self.format_stmts(&if_stmt.then_block, w)?;
        w.write_char(')')?;
        match &if_stmt.else_branch {
            Some(ElseBranch::ElseIf(nested)) => {
                w.write_char(' ')?;
                self.format_if("elseif", nested, w)?;
            }
            Some(ElseBranch::Else(block)) => {
                w.write_str(" (else")?;
                self.format_stmts(block, w)?;
                w.write_char(')')?;
            }
            None => {}
        }
        w.write_char(')')
    }

    fn format_stmts(&self, block: &Block, w: &mut impl Write) -> std::fmt::Result {
        for stmt in &block.stmts {
            w.write_char(' ')?;
            self.format_stmt(stmt, w)?;
        }
        Ok(())
    }

    fn format_expr(&self, expr: &Expr, w: &mut impl Write) -> std::fmt::Result {
        match &expr.kind {
            ExprKind::Nil => w.write_str("nil")?,
            ExprKind::Bool(value) => write!(w, "{value}")?,
            ExprKind::Number(value) => w.write_str(&format_number(*value))?,
            ExprKind::Str(value) => w.write_str(&quote_string(value))?,
            ExprKind::Var(name) => w.write_str(name)?,
            ExprKind::Unary { op, operand } => {
                write!(w, "({}", op.symbol())?;
                self.format_type(expr.ty, w)?;
                w.write_char(' ')?;
                self.format_expr(operand, w)?;
                return w.write_char(')');
            }
            ExprKind::Binary { op, lhs, rhs } => {
                write!(w, "({}", op.symbol())?;
                self.format_type(expr.ty, w)?;
                w.write_char(' ')?;
                self.format_expr(lhs, w)?;
                w.write_char(' ')?;
                self.format_expr(rhs, w)?;
                return w.write_char(')');
            }
            ExprKind::Member { object, field } => {
                w.write_str("(.")?;
                self.format_type(expr.ty, w)?;
                w.write_char(' ')?;
                self.format_expr(object, w)?;
                write!(w, " {})", field.text)?;
                return Ok(());
            }
            ExprKind::Index { object, index } => {
                w.write_str("(index")?;
                self.format_type(expr.ty, w)?;
                w.write_char(' ')?;
                self.format_expr(object, w)?;
                w.write_char(' ')?;
                self.format_expr(index, w)?;
                return w.write_char(')');
            }
            ExprKind::Call { callee, args } => {
                w.write_str("(call")?;
                self.format_type(expr.ty, w)?;
                w.write_char(' ')?;
                self.format_expr(callee, w)?;
                for arg in args {
                    w.write_char(' ')?;
                    self.format_expr(arg, w)?;
                }
                return w.write_char(')');
            }
            ExprKind::Table(entries) => {
                w.write_str("(table")?;
                self.format_type(expr.ty, w)?;
                for entry in entries {
                    w.write_char(' ')?;
                    match entry {
                        TableEntry::Positional(value) => self.format_expr(value, w)?,
                        TableEntry::Keyed { key, value } => {
                            write!(w, "({} ", key.text)?;
                            self.format_expr(value, w)?;
                            w.write_char(')')?;
                        }
                    }
                }
                return w.write_char(')');
            }
        }
        // Atoms carry their type after the value.
        self.format_type(expr.ty, w)
    }
}

fn format_annotation(annotation: Option<&TypeAnnotation>, w: &mut impl Write) -> std::fmt::Result {
    match annotation {
        Some(annotation) => write!(w, ":{annotation}"),
        None => Ok(()),
    }
}
