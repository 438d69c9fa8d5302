//! Statement checking and run-scoped checker state.
//!
//! One `TypeChecker` checks one chunk. It owns the arena and the environment
//! for that run; expression inference lives in `infer.rs`.

use log::{debug, trace};

use crate::parser::ast::{
    AssignStmt, Block, Chunk, ElseBranch, FunctionDecl, IfStmt, LocalStmt, ReturnStmt, Stmt,
};

use super::annotation::resolve_annotation;
use super::arena::TypeArena;
use super::env::Environment;
use super::error::{CheckResult, TypeCheckError, TypeErrorKind};
use super::types::{TYPE_ANY, TypeId};

#[derive(Debug)]
pub struct TypeChecker {
    pub(super) arena: TypeArena,
    pub(super) env: Environment,
    /// Declared return type of the function whose body is being checked.
    return_type: Option<TypeId>,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    /// Fresh arena, environment with an empty global scope.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.push_scope();
        Self {
            arena: TypeArena::new(),
            env,
            return_type: None,
        }
    }

    pub fn arena(&self) -> &TypeArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut TypeArena {
        &mut self.arena
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_parts(self) -> (TypeArena, Environment) {
        (self.arena, self.env)
    }

    /// Checks every statement in the global scope, stopping at the first error.
    pub fn check_chunk(&mut self, chunk: &mut Chunk) -> CheckResult<()> {
        debug!("type checking chunk of {} statements", chunk.stmts.len());
        self.check_stmts(&mut chunk.stmts)
    }

    fn check_stmts(&mut self, stmts: &mut [Stmt]) -> CheckResult<()> {
        for stmt in stmts {
            self.check_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn check_stmt(&mut self, stmt: &mut Stmt) -> CheckResult<()> {
        match stmt {
            Stmt::Local(local) => self.check_local(local),
            Stmt::Function(func) => self.check_function(func),
            Stmt::Return(ret) => self.check_return(ret),
            Stmt::If(if_stmt) => self.check_if(if_stmt),
            Stmt::Do(block) => self.check_block(block),
            Stmt::Call(call) => self.infer_expr(call).map(|_| ()),
            Stmt::Assign(assign) => self.check_assign(assign),
        }
    }

    /// All initializers are inferred before any name is bound.
    fn check_local(&mut self, local: &mut LocalStmt) -> CheckResult<()> {
        let mut init_types = Vec::with_capacity(local.decls.len());
        for decl in &mut local.decls {
            init_types.push(self.infer_expr(&mut decl.init)?);
        }

        for (decl, init_ty) in local.decls.iter_mut().zip(init_types) {
            let bound = match &decl.annotation {
                Some(annotation) => {
                    let declared = resolve_annotation(annotation)?;
                    if !self.arena.is_subtype(init_ty, declared) {
                        return Err(TypeCheckError::new(
                            TypeErrorKind::TypeMismatch,
                            format!(
                                "`{}` is declared as `{}` but initialized with `{}`",
                                decl.name.text,
                                self.arena.display(declared),
                                self.arena.display(init_ty)
                            ),
                            decl.init.span,
                        ));
                    }
                    declared
                }
                None => init_ty,
            };

            trace!("local `{}`: {}", decl.name.text, self.arena.display(bound));
            decl.ty = Some(bound);
            self.env.define(decl.name.text.clone(), bound);
        }

        Ok(())
    }

    fn check_function(&mut self, func: &mut FunctionDecl) -> CheckResult<()> {
        let mut params = Vec::with_capacity(func.params.len());
        for param in &func.params {
            params.push(match &param.annotation {
                Some(annotation) => resolve_annotation(annotation)?,
                None => TYPE_ANY,
            });
        }
        let ret = match &func.return_annotation {
            Some(annotation) => resolve_annotation(annotation)?,
            None => TYPE_ANY,
        };

        let fn_ty = self.arena.function(params.clone(), ret);
        trace!("function `{}`: {}", func.name.text, self.arena.display(fn_ty));
        func.ty = Some(fn_ty);
        // Bound before the body so the function can call itself.
        self.env.define(func.name.text.clone(), fn_ty);

        self.env.push_scope();
        for (param, ty) in func.params.iter().zip(params) {
            self.env.define(param.name.text.clone(), ty);
        }
        let saved = self.return_type.replace(ret);
        let result = self.check_stmts(&mut func.body.stmts);
        self.return_type = saved;
        self.env.pop_scope();

        result
    }

    /// Only single-value returns are checked against the declared type.
    fn check_return(&mut self, ret: &mut ReturnStmt) -> CheckResult<()> {
        let mut types = Vec::with_capacity(ret.values.len());
        for value in &mut ret.values {
            types.push(self.infer_expr(value)?);
        }

        let Some(expected) = self.return_type else {
            return Ok(());
        };
        if expected.is_any() {
            return Ok(());
        }

        if let ([value], [actual]) = (ret.values.as_slice(), types.as_slice())
            && !self.arena.is_subtype(*actual, expected)
        {
            return Err(TypeCheckError::new(
                TypeErrorKind::ReturnMismatch,
                format!(
                    "function returns `{}` but `{}` is returned here",
                    self.arena.display(expected),
                    self.arena.display(*actual)
                ),
                value.span,
            ));
        }

        Ok(())
    }

    fn check_if(&mut self, if_stmt: &mut IfStmt) -> CheckResult<()> {
        self.infer_expr(&mut if_stmt.cond)?;
        self.check_block(&mut if_stmt.then_block)?;
        match &mut if_stmt.else_branch {
            Some(ElseBranch::ElseIf(nested)) => self.check_if(nested),
            Some(ElseBranch::Else(block)) => self.check_block(block),
            None => Ok(()),
        }
    }

    fn check_block(&mut self, block: &mut Block) -> CheckResult<()> {
        self.env.push_scope();
        let result = self.check_stmts(&mut block.stmts);
        self.env.pop_scope();
        result
    }

    /// Both sides are inferred; compatibility is not enforced.
    fn check_assign(&mut self, assign: &mut AssignStmt) -> CheckResult<()> {
        let target = self.infer_expr(&mut assign.target)?;
        let value = self.infer_expr(&mut assign.value)?;
        if !self.arena.is_subtype(value, target) {
            debug!(
                "unchecked assignment of `{}` to a target of type `{}` at {:?}",
                self.arena.display(value),
                self.arena.display(target),
                assign.span
            );
        }
        Ok(())
    }
}

/// Checks `chunk` with a fresh checker and returns the arena its types live in.
pub fn check_chunk(chunk: &mut Chunk) -> CheckResult<TypeArena> {
    let mut checker = TypeChecker::new();
    checker.check_chunk(chunk)?;
    Ok(checker.arena)
}
