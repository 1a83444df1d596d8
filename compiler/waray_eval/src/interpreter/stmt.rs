//! Statement execution.

use std::sync::Arc;

use waray_ir::{FunctionDecl, Stmt};

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{function_already_declared, EvalResult};
use crate::format::to_output;
use crate::value::{FunctionValue, Value};

impl Interpreter<'_> {
    /// Execute one statement.
    ///
    /// Returns `Some` when the statement yields a value to the enclosing
    /// function: a `Return`, or an `If` whose selected block ends in one.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn exec_stmt(&mut self, stmt: &Stmt, env: &mut Environment) -> EvalResult<Option<Value>> {
        match stmt {
            Stmt::Print(expr) => {
                let value = to_output(self.eval_value(expr, env)?);
                self.print_handler.println(&value.to_string());
                Ok(None)
            }
            Stmt::Expression(expr) => {
                self.eval_expr(expr, env)?;
                Ok(None)
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = self.eval_value(condition, env)?;
                let block = if matches!(condition, Value::Bool(true)) {
                    Some(then_branch.as_slice())
                } else {
                    else_branch.as_deref()
                };
                match block {
                    Some(block) => self.exec_block(block, env),
                    None => Ok(None),
                }
            }
            Stmt::Function(decl) => {
                self.declare_function(decl, env)?;
                Ok(None)
            }
            Stmt::Return(expr) => Ok(Some(to_output(self.eval_value(expr, env)?))),
        }
    }

    /// Run every statement of an `If` block.
    ///
    /// A `Return` does not stop the block. The block yields a value only
    /// when its last statement is a `Return`.
    fn exec_block(&mut self, block: &[Stmt], env: &mut Environment) -> EvalResult<Option<Value>> {
        let mut yielded = None;
        for stmt in block {
            let result = self.exec_stmt(stmt, env)?;
            yielded = if stmt.is_return() { result } else { None };
        }
        Ok(yielded)
    }

    fn declare_function(&self, decl: &Arc<FunctionDecl>, env: &mut Environment) -> EvalResult<()> {
        let name = self.interner.lookup(decl.name.name);
        let func = FunctionValue::new(Arc::clone(decl), name);
        if env.bind(decl.name.name, Value::Function(func)).is_err() {
            return Err(function_already_declared(name));
        }
        tracing::debug!(name, arity = decl.params.len(), "declared function");
        Ok(())
    }
}
