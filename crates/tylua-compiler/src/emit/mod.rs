//! Code generation back to plain Lua.

pub mod escape;
pub mod lua;


pub use lua::{EmitConfig, LuaEmitter, emit_lua};
