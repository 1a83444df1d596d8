//! Tree-walking interpreter for Waray programs.
//!
//! # Architecture
//!
//! - `expr.rs` - expression dispatch, assignment, operator application
//! - `stmt.rs` - statement dispatch, `If` blocks, function declarations
//! - `function_call.rs` - the callable protocol
//! - `higher_order.rs` - `|>`, `map`, `reduce` and `filter`
//!
//! # Environment Threading
//!
//! Every evaluation method takes the active environment explicitly. The
//! interpreter owns the program-level environment; a call builds a fresh
//! environment from a copy of the caller's, so callees see the caller's
//! bindings at call time (dynamic scoping) and can never modify them.

mod builder;
mod expr;
mod function_call;
mod higher_order;
mod operand;
mod stmt;

pub use builder::InterpreterBuilder;
pub use function_call::CallArg;
pub use operand::Operand;

use waray_ir::{Stmt, StringInterner};

use crate::call_stack::CallStack;
use crate::environment::Environment;
use crate::errors::EvalError;
use crate::eval_mode::EvalMode;
use crate::lang::Lang;
use crate::print_handler::SharedPrintHandler;

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    /// Program-level bindings; populated by top-level declarations and
    /// assignments.
    env: Environment,
    mode: EvalMode,
    lang: Lang,
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default settings (stdout, Waray diagnostics).
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn builder(interner: &'a StringInterner) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(interner)
    }

    /// Execute top-level statements in order against the program
    /// environment, stopping at the first error.
    ///
    /// Values yielded by top-level `Return` statements are discarded.
    pub fn run(&mut self, program: &[Stmt]) -> Result<(), EvalError> {
        let mut env = std::mem::take(&mut self.env);
        let result = program
            .iter()
            .try_for_each(|stmt| self.exec_stmt(stmt, &mut env).map(drop));
        self.env = env;
        result
    }

    /// Write the localized form of `err` to the output channel.
    pub fn report(&self, err: &EvalError) {
        self.print_handler.println(&err.localized(self.lang));
    }

    pub fn interner(&self) -> &StringInterner {
        self.interner
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Current call depth; zero outside any call.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Get all captured print output (buffer handlers only).
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }
}
