//! Grammar productions, split by syntactic category.
//!
//! Each file extends [`Parser`](super::Parser) with the productions it owns.

mod annotations;
mod expressions;
mod statements;
