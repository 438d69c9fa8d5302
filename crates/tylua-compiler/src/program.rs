//! Staged pipeline over one source text: parse, then check, then emit.

use log::debug;

use crate::analyze::type_check::{Environment, TypeArena, TypeChecker, TypeId};
use crate::emit::{EmitConfig, emit_lua};
use crate::parser::{AstPrinter, Chunk, DEFAULT_RECURSION_FUEL, Parser, lexer::lex};

pub struct ProgramConfig {
    /// Maximum nesting depth. `None` disables the limit.
    pub recursion_fuel: Option<u32>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

pub struct ProgramBuilder<'p> {
    pub src: &'p str,
    config: ProgramConfig,
}

impl<'p> ProgramBuilder<'p> {
    pub fn new(src: &'p str) -> Self {
        Self {
            src,
            config: ProgramConfig::default(),
        }
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.config.recursion_fuel = limit;
        self
    }

    pub fn parse(self) -> crate::Result<ParsedProgram<'p>> {
        let tokens = lex(self.src);
        debug!("lexed {} tokens", tokens.len());

        let chunk = Parser::new(self.src, tokens)
            .with_recursion_fuel(self.config.recursion_fuel)
            .parse_chunk()?;
        debug!("parsed {} top-level statements", chunk.stmts.len());

        Ok(ParsedProgram {
            src: self.src,
            chunk,
        })
    }
}

/// Syntactically valid program, not yet type checked.
#[derive(Debug)]
pub struct ParsedProgram<'p> {
    src: &'p str,
    chunk: Chunk,
}

impl<'p> ParsedProgram<'p> {
    pub fn source(&self) -> &'p str {
        self.src
    }

    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    pub fn dump_ast(&self) -> String {
        AstPrinter::new(&self.chunk).dump()
    }

    /// Lua output without checking types first.
    pub fn emit_lua(&self, config: &EmitConfig) -> String {
        emit_lua(&self.chunk, config)
    }

    pub fn check(mut self) -> crate::Result<CheckedProgram<'p>> {
        let mut checker = TypeChecker::new();
        checker.check_chunk(&mut self.chunk)?;
        let (arena, env) = checker.into_parts();
        debug!("type check passed, {} types interned", arena.len());

        Ok(CheckedProgram {
            src: self.src,
            chunk: self.chunk,
            arena,
            env,
        })
    }
}

/// Program whose every expression carries an inferred type.
#[derive(Debug)]
pub struct CheckedProgram<'p> {
    src: &'p str,
    chunk: Chunk,
    arena: TypeArena,
    env: Environment,
}

impl<'p> CheckedProgram<'p> {
    pub fn source(&self) -> &'p str {
        self.src
    }

    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    pub fn arena(&self) -> &TypeArena {
        &self.arena
    }

    /// Type bound to a top-level name.
    pub fn global(&self, name: &str) -> Option<TypeId> {
        self.env.lookup(name)
    }

    /// Top-level bindings in declaration order.
    pub fn globals(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.env.globals()
    }

    pub fn type_name(&self, id: TypeId) -> String {
        self.arena.type_name(id)
    }

    pub fn dump_typed(&self) -> String {
        AstPrinter::new(&self.chunk).with_types(&self.arena).dump()
    }

    pub fn emit_lua(&self, config: &EmitConfig) -> String {
        emit_lua(&self.chunk, config)
    }
}
