//! Plain Lua output.
//!
//! Annotations are erased; everything else maps one-to-one onto Lua syntax.
//! Parentheses are reinserted only where precedence requires them, so the
//! output may differ from the input in grouping but never in meaning.

use std::fmt::Write;

use crate::parser::ast::{
    Block, Chunk, ElseBranch, Expr, ExprKind, FunctionDecl, IfStmt, Stmt, TableEntry,
    UNARY_PRECEDENCE, UnaryOp,
};

use super::escape::{format_number, quote_string};

/// Precedence of atoms and postfix expressions.
const ATOM_PRECEDENCE: u8 = u8::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// One indentation level.
    pub indent: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_owned(),
        }
    }
}

impl EmitConfig {
    /// Indent with `width` spaces.
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }
}

pub struct LuaEmitter<'a> {
    chunk: &'a Chunk,
    config: &'a EmitConfig,
}

impl<'a> LuaEmitter<'a> {
    pub fn new(chunk: &'a Chunk, config: &'a EmitConfig) -> Self {
        Self { chunk, config }
    }

    pub fn emit(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// Statements separated by newlines, without a trailing newline.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, stmt) in self.chunk.stmts.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            self.format_stmt(stmt, 0, w)?;
        }
        Ok(())
    }

    fn write_indent(&self, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        for _ in 0..depth {
            w.write_str(&self.config.indent)?;
        }
        Ok(())
    }

    fn format_stmt(&self, stmt: &Stmt, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        self.write_indent(depth, w)?;
        match stmt {
            Stmt::Local(local) => {
                w.write_str("local ")?;
                for (i, decl) in local.decls.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    w.write_str(&decl.name.text)?;
                }
                w.write_str(" = ")?;
                for (i, decl) in local.decls.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    self.format_expr(&decl.init, w)?;
                }
                Ok(())
            }
            Stmt::Function(func) => self.format_function(func, depth, w),
            Stmt::Return(ret) => {
                w.write_str("return")?;
                for (i, value) in ret.values.iter().enumerate() {
                    w.write_str(if i == 0 { " " } else { ", " })?;
                    self.format_expr(value, w)?;
                }
                Ok(())
            }
            Stmt::If(if_stmt) => {
                w.write_str("if ")?;
                self.format_if(if_stmt, depth, w)
            }
            Stmt::Do(block) => {
                w.write_str("do")?;
                self.format_block(block, depth, w)?;
                self.write_indent(depth, w)?;
                w.write_str("end")
            }
            Stmt::Call(call) => self.format_expr(call, w),
            Stmt::Assign(assign) => {
                self.format_expr(&assign.target, w)?;
                w.write_str(" = ")?;
                self.format_expr(&assign.value, w)
            }
        }
    }

    fn format_function(
        &self,
        func: &FunctionDecl,
        depth: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        if func.is_local {
            w.write_str("local ")?;
        }
        write!(w, "function {}(", func.name.text)?;
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            w.write_str(&param.name.text)?;
        }
        w.write_char(')')?;
        self.format_block(&func.body, depth, w)?;
        self.write_indent(depth, w)?;
        w.write_str("end")
    }

    /// Everything after the leading `if ` or `elseif `.
    fn format_if(&self, if_stmt: &IfStmt, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        self.format_expr(&if_stmt.cond, w)?;
        w.write_str(" then")?;
        self.format_block(&if_stmt.then_block, depth, w)?;
        self.write_indent(depth, w)?;
        match &if_stmt.else_branch {
            Some(ElseBranch::ElseIf(nested)) => {
                w.write_str("elseif ")?;
                self.format_if(nested, depth, w)
            }
            Some(ElseBranch::Else(block)) => {
                w.write_str("else")?;
                self.format_block(block, depth, w)?;
                self.write_indent(depth, w)?;
                w.write_str("end")
            }
            None => w.write_str("end"),
        }
    }

    /// Writes a newline, then each statement on its own line one level deeper.
    /// Leaves the writer at the start of a fresh line.
    fn format_block(&self, block: &Block, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        w.write_char('\n')?;
        for stmt in &block.stmts {
            self.format_stmt(stmt, depth + 1, w)?;
            w.write_char('\n')?;
        }
        Ok(())
    }

    fn format_expr(&self, expr: &Expr, w: &mut impl Write) -> std::fmt::Result {
        match &expr.kind {
            ExprKind::Nil => w.write_str("nil"),
            ExprKind::Bool(value) => write!(w, "{value}"),
            ExprKind::Number(value) => w.write_str(&format_number(*value)),
            ExprKind::Str(value) => w.write_str(&quote_string(value)),
            ExprKind::Var(name) => w.write_str(name),
            ExprKind::Unary { op, operand } => {
                w.write_str(op.symbol())?;
                // `- -x` must not collapse into a comment.
                let spaced = match op {
                    UnaryOp::Not => true,
                    UnaryOp::Neg => matches!(
                        operand.kind,
                        ExprKind::Unary {
                            op: UnaryOp::Neg,
                            ..
                        }
                    ),
                    UnaryOp::Len => false,
                };
                if spaced {
                    w.write_char(' ')?;
                }
                self.format_operand(operand, precedence(operand) < UNARY_PRECEDENCE, w)
            }
            ExprKind::Binary { op, lhs, rhs } => {
                let prec = op.precedence();
                let (lhs_parens, rhs_parens) = if op.is_right_assoc() {
                    (precedence(lhs) <= prec, precedence(rhs) < prec)
                } else {
                    (precedence(lhs) < prec, precedence(rhs) <= prec)
                };
                self.format_operand(lhs, lhs_parens, w)?;
                write!(w, " {} ", op.symbol())?;
                self.format_operand(rhs, rhs_parens, w)
            }
            ExprKind::Member { object, field } => {
                self.format_prefix(object, w)?;
                write!(w, ".{}", field.text)
            }
            ExprKind::Index { object, index } => {
                self.format_prefix(object, w)?;
                w.write_char('[')?;
                self.format_expr(index, w)?;
                w.write_char(']')
            }
            ExprKind::Call { callee, args } => {
                self.format_prefix(callee, w)?;
                w.write_char('(')?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    self.format_expr(arg, w)?;
                }
                w.write_char(')')
            }
            ExprKind::Table(entries) => {
                w.write_char('{')?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    match entry {
                        TableEntry::Positional(value) => self.format_expr(value, w)?,
                        TableEntry::Keyed { key, value } => {
                            write!(w, "{} = ", key.text)?;
                            self.format_expr(value, w)?;
                        }
                    }
                }
                w.write_char('}')
            }
        }
    }

    fn format_operand(&self, expr: &Expr, parens: bool, w: &mut impl Write) -> std::fmt::Result {
        if parens {
            w.write_char('(')?;
            self.format_expr(expr, w)?;
            w.write_char(')')
        } else {
            self.format_expr(expr, w)
        }
    }

    /// Lua only accepts names, calls and accesses before `.`, `[` and `(`.
    fn format_prefix(&self, expr: &Expr, w: &mut impl Write) -> std::fmt::Result {
        let bare = matches!(
            expr.kind,
            ExprKind::Var(_)
                | ExprKind::Call { .. }
                | ExprKind::Member { .. }
                | ExprKind::Index { .. }
        );
        self.format_operand(expr, !bare, w)
    }
}

fn precedence(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::Binary { op, .. } => op.precedence(),
        ExprKind::Unary { .. } => UNARY_PRECEDENCE,
        _ => ATOM_PRECEDENCE,
    }
}

/// Renders `chunk` as Lua source.
pub fn emit_lua(chunk: &Chunk, config: &EmitConfig) -> String {
    LuaEmitter::new(chunk, config).emit()
}
