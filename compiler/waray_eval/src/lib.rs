//! Waray Eval - tree-walking evaluator for the Waray scripting language.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: flat single-assignment bindings, copied per call
//! - `evaluate_binary`: enum-based binary operator dispatch
//! - `evaluate_unary`: enum-based unary operator dispatch
//! - `Interpreter`: expression and statement evaluation plus the callable protocol
//! - `PrintHandler`: where `Print` output and run diagnostics go
//!
//! Errors carry structured kinds; [`EvalError::localized`] renders the
//! message a user sees in the selected [`Lang`].

mod call_stack;
mod environment;
pub mod errors;
mod eval_mode;
pub mod format;
pub mod interpreter;
mod lang;
mod operators;
mod print_handler;
mod stack;
mod unary_operators;
mod value;

pub use call_stack::{CallFrame, CallStack};
pub use environment::{BindError, Environment};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use eval_mode::{EvalMode, UnknownMode};
pub use interpreter::{CallArg, Interpreter, InterpreterBuilder, Operand};
pub use lang::{Lang, UnknownLang};
pub use operators::{evaluate_binary, strict_equals};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, Heap, Value};

#[cfg(test)]
mod tests;
