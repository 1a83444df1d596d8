//! The callable protocol.

use waray_ir::Expr;

use super::Interpreter;
use crate::call_stack::CallFrame;
use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::value::{FunctionValue, Value};

/// An argument handed to a function call.
///
/// Calls written in source pass their argument expressions; the callee
/// evaluates them against the caller's environment. Operators that invoke
/// callbacks (`|>`, `map`, `reduce`, `filter`) pass values they already hold.
#[derive(Clone, Debug)]
pub enum CallArg<'e> {
    Expr(&'e Expr),
    Value(Value),
}

impl Interpreter<'_> {
    /// Call `func` with `args`.
    ///
    /// Arguments bind to parameters by position: extra arguments are
    /// evaluated and dropped, missing ones leave their parameter unbound. The
    /// body runs in a copy of `env` overlaid with the parameters and stops at
    /// the first statement that yields a value; a body that yields nothing
    /// returns `Nil`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = func.name(), depth = self.call_stack.depth())
    )]
    pub fn call_function(
        &mut self,
        func: &FunctionValue,
        args: Vec<CallArg<'_>>,
        line: u32,
        env: &mut Environment,
    ) -> EvalResult {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(match arg {
                CallArg::Expr(expr) => self.eval_value(expr, env)?,
                CallArg::Value(value) => value,
            });
        }

        let decl = func.decl();
        let params = decl.params.iter().map(|param| param.name).zip(values);
        let mut call_env = env.with_overlay(params);

        self.call_stack.push(CallFrame {
            name: func.name(),
            line,
        })?;
        let result = self.exec_function_body(func, &mut call_env);
        self.call_stack.pop();
        result
    }

    fn exec_function_body(&mut self, func: &FunctionValue, env: &mut Environment) -> EvalResult {
        for stmt in &func.decl().body {
            if let Some(value) = self.exec_stmt(stmt, env)? {
                return Ok(value);
            }
        }
        Ok(Value::Nil)
    }
}
