//! Binary and Unary Operators
//!
//! Operator enums plus the token → operator tables the evaluator dispatches
//! through. Several token kinds can map to one operator (`**` and `^` are both
//! `Pow`); tokens without an entry are rejected by the evaluator as
//! unsupported operators.

use crate::TokenKind;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Binding
    Assign,

    // Higher-order
    Pipe,
    Map,
    Reduce,
    Filter,
}

impl BinaryOp {
    /// Look up the binary operator for a token kind.
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Modulo => Self::Mod,
            TokenKind::StarStar | TokenKind::Caret => Self::Pow,
            TokenKind::EqualEqual => Self::Eq,
            TokenKind::BangEqual => Self::NotEq,
            TokenKind::Less => Self::Lt,
            TokenKind::LessEqual => Self::LtEq,
            TokenKind::Greater => Self::Gt,
            TokenKind::GreaterEqual => Self::GtEq,
            TokenKind::And => Self::And,
            TokenKind::Or => Self::Or,
            TokenKind::Equal => Self::Assign,
            TokenKind::Pipe => Self::Pipe,
            TokenKind::Map => Self::Map,
            TokenKind::Reduce => Self::Reduce,
            TokenKind::Filter => Self::Filter,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "and",
            Self::Or => "or",
            Self::Assign => "=",
            Self::Pipe => "|>",
            Self::Map => "map",
            Self::Reduce => "reduce",
            Self::Filter => "filter",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical not (`not`).
    Not,
    /// Numeric negation (`-`).
    Neg,
}

impl UnaryOp {
    /// Look up the unary operator for a token kind.
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Not => Some(Self::Not),
            TokenKind::Minus => Some(Self::Neg),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Neg => "-",
        }
    }
}
