//! Expression inference.
//!
//! Every expression is visited exactly once, children before parents, and
//! its inferred type is written into `Expr::ty`. `any` satisfies every
//! operand check.

use std::collections::BTreeMap;

use rowan::TextRange;

use crate::parser::ast::{BinaryOp, Expr, ExprKind, Name, TableEntry, UnaryOp};

use super::checker::TypeChecker;
use super::error::{CheckResult, TypeCheckError, TypeErrorKind};
use super::types::{
    TYPE_ANY, TYPE_BOOLEAN, TYPE_NIL, TYPE_NUMBER, TYPE_STRING, TypeId, TypeKind, TypeShape,
};
use super::unify::unify_types;

impl TypeChecker {
    pub fn infer_expr(&mut self, expr: &mut Expr) -> CheckResult<TypeId> {
        debug_assert!(expr.ty.is_none(), "expression inferred twice");
        let ty = self.infer_kind(&mut expr.kind, expr.span)?;
        expr.ty = Some(ty);
        Ok(ty)
    }

    fn infer_kind(&mut self, kind: &mut ExprKind, span: TextRange) -> CheckResult<TypeId> {
        match kind {
            ExprKind::Nil => Ok(TYPE_NIL),
            ExprKind::Bool(_) => Ok(TYPE_BOOLEAN),
            ExprKind::Number(_) => Ok(TYPE_NUMBER),
            ExprKind::Str(_) => Ok(TYPE_STRING),
            // Unbound names are dynamic, not errors.
            ExprKind::Var(name) => Ok(self.env.lookup(name).unwrap_or(TYPE_ANY)),
            ExprKind::Unary { op, operand } => self.infer_unary(*op, operand),
            ExprKind::Binary { op, lhs, rhs } => self.infer_binary(*op, lhs, rhs, span),
            ExprKind::Member { object, field } => self.infer_member(object, field),
            ExprKind::Index { object, index } => self.infer_index(object, index),
            ExprKind::Call { callee, args } => self.infer_call(callee, args, span),
            ExprKind::Table(entries) => self.infer_table(entries, span),
        }
    }

    fn infer_unary(&mut self, op: UnaryOp, operand: &mut Expr) -> CheckResult<TypeId> {
        let ty = self.infer_expr(operand)?;
        match op {
            UnaryOp::Not => Ok(TYPE_BOOLEAN),
            UnaryOp::Neg if ty.is_number_or_any() => Ok(ty),
            UnaryOp::Neg => Err(self.operand_error(
                format!("unary `-` expects a number, found `{}`", self.arena.display(ty)),
                operand.span,
            )),
            UnaryOp::Len => match self.arena.kind(ty) {
                TypeKind::Array | TypeKind::Any => Ok(TYPE_NUMBER),
                _ => Err(self.operand_error(
                    format!("`#` expects an array, found `{}`", self.arena.display(ty)),
                    operand.span,
                )),
            },
        }
    }

    fn infer_binary(
        &mut self,
        op: BinaryOp,
        lhs: &mut Expr,
        rhs: &mut Expr,
        span: TextRange,
    ) -> CheckResult<TypeId> {
        let l = self.infer_expr(lhs)?;
        let r = self.infer_expr(rhs)?;

        match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                if l.is_number_or_any() && r.is_number_or_any() {
                    return Ok(TYPE_NUMBER);
                }
                let at = if l.is_number_or_any() { rhs.span } else { lhs.span };
                Err(self.operand_error(
                    format!(
                        "arithmetic operator `{}` expects numbers, found `{}` and `{}`",
                        op.symbol(),
                        self.arena.display(l),
                        self.arena.display(r)
                    ),
                    at,
                ))
            }

            BinaryOp::Eq | BinaryOp::NotEq => Ok(TYPE_BOOLEAN),

            BinaryOp::Less | BinaryOp::LessEq | BinaryOp::Greater | BinaryOp::GreaterEq => {
                let numbers = l.is_number_or_any() && r.is_number_or_any();
                let strings = l.is_string_or_any() && r.is_string_or_any();
                if numbers || strings {
                    return Ok(TYPE_BOOLEAN);
                }
                Err(self.operand_error(
                    format!(
                        "comparison `{}` expects two numbers or two strings, found `{}` and `{}`",
                        op.symbol(),
                        self.arena.display(l),
                        self.arena.display(r)
                    ),
                    span,
                ))
            }

            BinaryOp::And | BinaryOp::Or => Ok(unify_types(&mut self.arena, &[l, r])),

            BinaryOp::Concat => {
                if l.is_string_or_any() && r.is_string_or_any() {
                    return Ok(TYPE_STRING);
                }
                let at = if l.is_string_or_any() { rhs.span } else { lhs.span };
                Err(self.operand_error(
                    format!(
                        "`..` expects strings, found `{}` and `{}`",
                        self.arena.display(l),
                        self.arena.display(r)
                    ),
                    at,
                ))
            }
        }
    }

    fn infer_member(&mut self, object: &mut Expr, field: &Name) -> CheckResult<TypeId> {
        let ty = self.infer_expr(object)?;
        match self.arena.shape(ty) {
            TypeShape::Any => Ok(TYPE_ANY),
            TypeShape::Table(fields) => fields.get(field.as_str()).copied().ok_or_else(|| {
                TypeCheckError::new(
                    TypeErrorKind::MissingField,
                    format!(
                        "type `{}` has no field `{}`",
                        self.arena.display(ty),
                        field.text
                    ),
                    field.span,
                )
            }),
            _ => Err(TypeCheckError::new(
                TypeErrorKind::NotIndexable,
                format!(
                    "cannot access field `{}` on a value of type `{}`",
                    field.text,
                    self.arena.display(ty)
                ),
                object.span,
            )),
        }
    }

    fn infer_index(&mut self, object: &mut Expr, index: &mut Expr) -> CheckResult<TypeId> {
        let object_ty = self.infer_expr(object)?;
        let index_ty = self.infer_expr(index)?;

        match self.arena.shape(object_ty) {
            TypeShape::Any => Ok(TYPE_ANY),
            TypeShape::Array(element) if index_ty.is_number_or_any() => Ok(*element),
            TypeShape::Array(_) => Err(self.operand_error(
                format!(
                    "array index must be a number, found `{}`",
                    self.arena.display(index_ty)
                ),
                index.span,
            )),
            // Dynamic keys on a closed table are not tracked.
            TypeShape::Table(_) => Ok(TYPE_ANY),
            _ => Err(TypeCheckError::new(
                TypeErrorKind::NotIndexable,
                format!(
                    "cannot index a value of type `{}`",
                    self.arena.display(object_ty)
                ),
                object.span,
            )),
        }
    }

    fn infer_call(
        &mut self,
        callee: &mut Expr,
        args: &mut [Expr],
        span: TextRange,
    ) -> CheckResult<TypeId> {
        let callee_ty = self.infer_expr(callee)?;

        let signature = match self.arena.shape(callee_ty) {
            TypeShape::Any => None,
            TypeShape::Function { params, ret } => Some((params.clone(), *ret)),
            _ => {
                return Err(TypeCheckError::new(
                    TypeErrorKind::NotCallable,
                    format!(
                        "cannot call a value of type `{}`",
                        self.arena.display(callee_ty)
                    ),
                    callee.span,
                ));
            }
        };

        let Some((params, ret)) = signature else {
            for arg in args.iter_mut() {
                self.infer_expr(arg)?;
            }
            return Ok(TYPE_ANY);
        };

        if args.len() != params.len() {
            return Err(TypeCheckError::new(
                TypeErrorKind::ArityMismatch,
                format!(
                    "function of type `{}` takes {} but {} supplied",
                    self.arena.display(callee_ty),
                    count(params.len(), "argument"),
                    if args.len() == 1 {
                        "1 was".to_owned()
                    } else {
                        format!("{} were", args.len())
                    }
                ),
                span,
            ));
        }

        for (position, (arg, param)) in args.iter_mut().zip(params).enumerate() {
            let arg_ty = self.infer_expr(arg)?;
            if !self.arena.is_subtype(arg_ty, param) {
                return Err(TypeCheckError::new(
                    TypeErrorKind::ArgumentMismatch,
                    format!(
                        "argument {} expects `{}`, found `{}`",
                        position + 1,
                        self.arena.display(param),
                        self.arena.display(arg_ty)
                    ),
                    arg.span,
                ));
            }
        }

        Ok(ret)
    }

    fn infer_table(&mut self, entries: &mut [TableEntry], span: TextRange) -> CheckResult<TypeId> {
        if entries.is_empty() {
            return Ok(self.arena.empty_table());
        }

        let keyed = entries
            .iter()
            .filter(|e| matches!(e, TableEntry::Keyed { .. }))
            .count();
        if keyed != 0 && keyed != entries.len() {
            return Err(TypeCheckError::new(
                TypeErrorKind::MixedTable,
                "mixed table literals are not allowed",
                span,
            ));
        }

        if keyed == 0 {
            let mut elements = Vec::with_capacity(entries.len());
            for entry in entries.iter_mut() {
                if let TableEntry::Positional(value) = entry {
                    elements.push(self.infer_expr(value)?);
                }
            }
            let element = unify_types(&mut self.arena, &elements);
            return Ok(self.arena.array(element));
        }

        // A repeated key keeps its last value, as at runtime.
        let mut fields = BTreeMap::new();
        for entry in entries.iter_mut() {
            if let TableEntry::Keyed { key, value } = entry {
                let ty = self.infer_expr(value)?;
                fields.insert(key.text.clone(), ty);
            }
        }
        Ok(self.arena.table(fields))
    }

    fn operand_error(&self, message: String, span: TextRange) -> TypeCheckError {
        TypeCheckError::new(TypeErrorKind::OperandMismatch, message, span)
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
