//! Expression evaluation.

use waray_ir::{BinaryOp, Expr, Identifier, Token, UnaryOp};

use super::{CallArg, Interpreter, Operand};
use crate::environment::Environment;
use crate::errors::{
    already_bound, invalid_assignment_target, not_callable, undefined_callee,
    unsupported_binary_operator, unsupported_unary_operator, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;
use crate::value::{FunctionValue, Value};

impl Interpreter<'_> {
    /// Evaluate an expression against `env`.
    ///
    /// Variable reads come back unresolved; see [`Operand`].
    pub fn eval_expr(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult<Operand> {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    /// Evaluate an expression and resolve the result.
    pub fn eval_value(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult {
        let operand = self.eval_expr(expr, env)?;
        Ok(operand.resolve(env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult<Operand> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from_literal(literal).into()),
            Expr::Variable(ident) => Ok(Operand::Unresolved(*ident)),
            Expr::Group(inner) => self.eval_expr(inner, env),
            Expr::Binary { left, op, right } => self
                .eval_binary(left, *op, right, env)
                .map_err(|e| e.at_line(op.line)),
            Expr::Unary { op, operand } => self
                .eval_unary(*op, operand, env)
                .map_err(|e| e.at_line(op.line)),
            Expr::Call { callee, args } => self.eval_call(*callee, args, env),
            Expr::List(elements) => {
                let items = elements
                    .iter()
                    .map(|element| self.eval_value(element, env))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::list(items).into())
            }
        }
    }

    fn eval_binary(
        &mut self,
        left: &Expr,
        op: Token,
        right: &Expr,
        env: &mut Environment,
    ) -> EvalResult<Operand> {
        let lhs = self.eval_expr(left, env)?;
        let rhs = self.eval_expr(right, env)?;
        let bin =
            BinaryOp::from_token(op.kind).ok_or_else(|| unsupported_binary_operator(op.kind))?;

        if bin == BinaryOp::Assign {
            return self.assign(lhs, rhs, env);
        }

        let left = lhs.resolve(env);
        let right = rhs.resolve(env);
        let value = match bin {
            BinaryOp::Pipe => self.pipe(left, right, op.line, env)?,
            BinaryOp::Map => self.map(left, right, op.line, env)?,
            BinaryOp::Reduce => self.reduce(left, right, op.line, env)?,
            BinaryOp::Filter => self.filter(left, right, op.line, env)?,
            _ => evaluate_binary(left, right, bin)?,
        };
        Ok(value.into())
    }

    /// `name = value`: bind a new name. Yields the bound value.
    fn assign(
        &self,
        target: Operand,
        value: Operand,
        env: &mut Environment,
    ) -> EvalResult<Operand> {
        let Operand::Unresolved(ident) = target else {
            return Err(invalid_assignment_target());
        };
        let value = value.resolve(env);
        let name = self.interner.lookup(ident.name);
        if env.bind(ident.name, value.clone()).is_err() {
            return Err(already_bound(name));
        }
        tracing::debug!(name, value = %value, "bound");
        Ok(value.into())
    }

    fn eval_unary(
        &mut self,
        op: Token,
        operand: &Expr,
        env: &mut Environment,
    ) -> EvalResult<Operand> {
        let value = self.eval_value(operand, env)?;
        let op =
            UnaryOp::from_token(op.kind).ok_or_else(|| unsupported_unary_operator(op.kind))?;
        evaluate_unary(&value, op).map(Operand::from)
    }

    fn eval_call(
        &mut self,
        callee: Identifier,
        args: &[Expr],
        env: &mut Environment,
    ) -> EvalResult<Operand> {
        let func = self.lookup_function(callee, env)?;
        let args = args.iter().map(CallArg::Expr).collect();
        self.call_function(&func, args, callee.line, env)
            .map(Operand::from)
    }

    fn lookup_function(&self, callee: Identifier, env: &Environment) -> EvalResult<FunctionValue> {
        match env.lookup(callee.name) {
            Some(Value::Function(func)) => Ok(func.clone()),
            Some(_) => Err(not_callable(self.interner.lookup(callee.name))),
            None => Err(undefined_callee(self.interner.lookup(callee.name))),
        }
    }
}
