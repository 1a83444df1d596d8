//! Statement Types

use std::sync::Arc;

use super::expr::{Expr, Identifier};

/// A function declaration.
///
/// Shared behind an `Arc` so the callable bound at declaration time can keep
/// the body without copying it.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: Vec<Stmt>,
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    /// Evaluate and write the formatted value to the output channel.
    Print(Expr),
    /// Evaluate for effect (calls, assignments).
    Expression(Expr),
    /// Conditional with an optional else block.
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    /// Bind a callable under the function's name.
    Function(Arc<FunctionDecl>),
    /// Yield a formatted value to the enclosing function or block.
    Return(Expr),
}

impl Stmt {
    pub fn function(name: Identifier, params: Vec<Identifier>, body: Vec<Stmt>) -> Self {
        Stmt::Function(Arc::new(FunctionDecl { name, params, body }))
    }

    pub fn if_else(
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    ) -> Self {
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        }
    }

    /// Whether this is a `Return` statement.
    #[inline]
    pub fn is_return(&self) -> bool {
        matches!(self, Stmt::Return(_))
    }
}
