//! Expression Types
//!
//! Expression nodes as built by the parser. Nodes own their children and are
//! never mutated after construction.

use crate::{Name, Token};

/// An identifier occurrence: the interned name plus where it was written.
///
/// Used as a variable read, as the target of an assignment, and for function
/// and parameter names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: Name,
    pub line: u32,
}

impl Identifier {
    #[inline]
    pub const fn new(name: Name, line: u32) -> Self {
        Identifier { name, line }
    }
}

/// Literal values written directly in source.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),
    /// A variable read; evaluates to an unresolved reference.
    Variable(Identifier),
    /// A parenthesized expression.
    Group(Box<Expr>),
    /// `left op right`, including assignment (`=`).
    Binary {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },
    /// `op operand`.
    Unary { op: Token, operand: Box<Expr> },
    /// `callee(args...)`; arguments are evaluated by the callee.
    Call { callee: Identifier, args: Vec<Expr> },
    /// `[elements...]`.
    List(Vec<Expr>),
}

// Construction helpers for parsers and tests.
impl Expr {
    pub fn number(n: f64) -> Self {
        Expr::Literal(Literal::Number(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::Literal(Literal::Str(s.into()))
    }

    pub fn bool(b: bool) -> Self {
        Expr::Literal(Literal::Bool(b))
    }

    pub fn nil() -> Self {
        Expr::Literal(Literal::Nil)
    }

    pub fn variable(ident: Identifier) -> Self {
        Expr::Variable(ident)
    }

    pub fn group(inner: Expr) -> Self {
        Expr::Group(Box::new(inner))
    }

    pub fn binary(left: Expr, op: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn unary(op: Token, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn call(callee: Identifier, args: Vec<Expr>) -> Self {
        Expr::Call { callee, args }
    }

    pub fn list(elements: Vec<Expr>) -> Self {
        Expr::List(elements)
    }
}
