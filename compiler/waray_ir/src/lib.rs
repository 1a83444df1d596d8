//! Waray IR - syntax tree types consumed by the evaluator.
//!
//! This crate contains the data structures an external scanner and parser
//! hand to the evaluator:
//! - Names for interned identifiers
//! - Tokens carrying an operator kind and its source line
//! - AST nodes (`Expr`, `Stmt`, `FunctionDecl`)
//! - Binary and unary operator tables keyed by token kind
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: names are `Name(u32)`, compared in O(1)
//! - **Trust the shape**: nodes are built by the parser and never validated here
//! - **Operators as data**: `BinaryOp::from_token` / `UnaryOp::from_token` are
//!   the dispatch tables; a token without an entry is an unsupported operator

pub mod ast;
mod interner;
mod name;
mod token;

pub use ast::{BinaryOp, Expr, FunctionDecl, Identifier, Literal, Stmt, UnaryOp};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use token::{Token, TokenKind};
