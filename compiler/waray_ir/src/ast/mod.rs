//! AST node types.
//!
//! - `expr`: expression nodes, identifiers and literals
//! - `stmt`: statement nodes and function declarations
//! - `operators`: binary/unary operators and their token tables

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, Identifier, Literal};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{FunctionDecl, Stmt};
