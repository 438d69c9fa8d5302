//! Parser infrastructure for the tylua dialect.
//!
//! # Architecture
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only when building AST nodes
//! - Recursive descent for statements, precedence climbing for expressions
//! - Fail-fast: the first syntax error aborts the parse and is returned as [`ParseError`]
//! - Recursion fuel bounds nesting depth so hostile input cannot overflow the stack

pub mod ast;
pub mod error;
pub mod lexer;
pub mod printer;
pub mod syntax_kind;

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use ast::{
    AnnotationKind, AssignStmt, BinaryOp, Block, Chunk, ElseBranch, Expr, ExprKind, FunctionDecl,
    IfStmt, LocalStmt, Name, Param, PrimitiveName, ReturnStmt, Stmt, TableEntry, TypeAnnotation,
    UnaryOp, VarDecl,
};
pub use core::Parser;
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use printer::AstPrinter;
pub use syntax_kind::SyntaxKind;

use lexer::lex;

/// Default nesting limit for statements, expressions and annotations.
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Parses a whole chunk with the default recursion limit.
pub fn parse(source: &str) -> ParseResult<Chunk> {
    Parser::new(source, lex(source))
        .with_recursion_fuel(Some(DEFAULT_RECURSION_FUEL))
        .parse_chunk()
}
