//! tylua: a gradually typed Lua dialect.
//!
//! Source is parsed into a typed AST, checked in a single fail-fast pass and
//! emitted back as plain Lua with annotations erased.
//!
//! # Example
//!
//! ```
//! use tylua_compiler::{EmitConfig, ProgramBuilder};
//!
//! let source = "local x: number = 1 + 2";
//!
//! let program = ProgramBuilder::new(source)
//!     .parse()
//!     .and_then(|parsed| parsed.check())
//!     .expect("valid program");
//!
//! let x = program.global("x").expect("x is declared");
//! assert_eq!(program.type_name(x), "number");
//! assert_eq!(program.emit_lua(&EmitConfig::default()), "local x = 1 + 2");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod emit;
pub mod parser;
pub mod program;

#[cfg(test)]
mod program_tests;

use rowan::TextRange;

pub use analyze::type_check::{TypeArena, TypeCheckError, TypeErrorKind, TypeId};
pub use diagnostics::ErrorPrinter;
pub use emit::EmitConfig;
pub use parser::{ParseError, ParseErrorKind};
pub use program::{CheckedProgram, ParsedProgram, ProgramBuilder};

/// First error reported by any stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    TypeCheck(#[from] TypeCheckError),
}

impl Error {
    pub fn span(&self) -> TextRange {
        match self {
            Error::Parse(e) => e.span,
            Error::TypeCheck(e) => e.span,
        }
    }

    /// Short category name, e.g. `type mismatch`.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Parse(e) => e.kind.title(),
            Error::TypeCheck(e) => e.kind.title(),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
