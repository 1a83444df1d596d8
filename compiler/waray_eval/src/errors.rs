//! Evaluation errors and their constructors.
//!
//! `EvalErrorKind` carries the structured data of each failure and renders an
//! English message for logs. The message a user sees comes from
//! [`EvalError::localized`], which picks the diagnostic language and wraps the
//! message once per source line the error passed through.
//!
//! Construct errors through the factory functions at the bottom of this
//! module rather than building kinds by hand.

use waray_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::call_stack::CallFrame;
use crate::lang::Lang;

/// Result of evaluation.
pub type EvalResult<T = crate::value::Value> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    /// An operator's type guard rejected its operands.
    #[error("cannot apply `{}` to {left} and {right}", .op.as_symbol())]
    BinaryOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("cannot apply `{}` to {operand}", .op.as_symbol())]
    UnaryOperand { op: UnaryOp, operand: &'static str },

    /// Assignment to a name that is already bound.
    #[error("`{name}` is already bound")]
    AlreadyBound { name: String },

    #[error("function `{name}` is already declared")]
    FunctionAlreadyDeclared { name: String },

    #[error("no binding named `{name}`")]
    UndefinedCallee { name: String },

    #[error("`{name}` is not a function")]
    NotCallable { name: String },

    #[error("`{}` is not a binary operator", .token.lexeme())]
    UnsupportedBinaryOperator { token: TokenKind },

    #[error("`{}` is not a unary operator", .token.lexeme())]
    UnsupportedUnaryOperator { token: TokenKind },

    /// The left side of `=` was not an identifier.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    #[error("reduce of an empty list")]
    EmptyReduce,

    #[error("invalid repeat count {count}")]
    InvalidRepeatCount { count: f64 },

    #[error("maximum call depth of {depth} exceeded calling `{function}` at line {line}")]
    RecursionLimit {
        depth: usize,
        function: String,
        line: u32,
    },
}

/// An evaluation failure.
///
/// `lines` records the operator lines of every `Binary`/`Unary` node the error
/// propagated through, innermost first.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    lines: Vec<u32>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            lines: Vec::new(),
        }
    }

    /// Attach the line of the node the error is propagating through.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.lines.push(line);
        self
    }

    /// Lines attached so far, innermost first.
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// The user-facing message in `lang`.
    pub fn localized(&self, lang: Lang) -> String {
        self.lines
            .iter()
            .fold(lang.message(&self.kind), |msg, &line| lang.at_line(line, &msg))
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Operator Errors

/// Binary operator type guard failure.
#[cold]
pub fn binary_operands(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryOperands { op, left, right })
}

/// Unary operator type guard failure.
#[cold]
pub fn unary_operand(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnaryOperand { op, operand })
}

#[cold]
pub fn unsupported_binary_operator(token: TokenKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedBinaryOperator { token })
}

#[cold]
pub fn unsupported_unary_operator(token: TokenKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedUnaryOperator { token })
}

#[cold]
pub fn invalid_repeat_count(count: f64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidRepeatCount { count })
}

#[cold]
pub fn empty_reduce() -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyReduce)
}

// Binding Errors

#[cold]
pub fn already_bound(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AlreadyBound {
        name: name.to_string(),
    })
}

#[cold]
pub fn function_already_declared(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionAlreadyDeclared {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_assignment_target() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignmentTarget)
}

// Call Errors

#[cold]
pub fn undefined_callee(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedCallee {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        name: name.to_string(),
    })
}

/// Maximum call depth exceeded by the call in `frame`.
#[cold]
pub fn recursion_limit_exceeded(depth: usize, frame: &CallFrame) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit {
        depth,
        function: frame.name.to_string(),
        line: frame.line,
    })
}
