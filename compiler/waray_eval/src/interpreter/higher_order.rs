//! `|>`, `map`, `reduce` and `filter`.
//!
//! Callbacks receive values, not expressions, and run with the environment
//! of the expression that applied the operator.

use waray_ir::BinaryOp;

use super::{CallArg, Interpreter};
use crate::environment::Environment;
use crate::errors::{binary_operands, empty_reduce, EvalResult};
use crate::format::is_truthy_sentinel;
use crate::value::{FunctionValue, Heap, Value};

impl Interpreter<'_> {
    /// `value |> f` calls `f(value)`.
    pub(super) fn pipe(
        &mut self,
        value: Value,
        func: Value,
        line: u32,
        env: &mut Environment,
    ) -> EvalResult {
        match func {
            Value::Function(func) => {
                self.call_function(&func, vec![CallArg::Value(value)], line, env)
            }
            other => Err(binary_operands(
                BinaryOp::Pipe,
                value.type_name(),
                other.type_name(),
            )),
        }
    }

    /// `list map f`: a new list of `f(element, index, list)`.
    pub(super) fn map(
        &mut self,
        list: Value,
        func: Value,
        line: u32,
        env: &mut Environment,
    ) -> EvalResult {
        let (items, func) = list_and_callback(list, func, BinaryOp::Map)?;
        let mut mapped = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            mapped.push(self.call_function(&func, element_args(item, i, &items), line, env)?);
        }
        Ok(Value::list(mapped))
    }

    /// `list reduce f`: left fold seeded with the first element, each step
    /// calling `f(acc, element, index, list)`.
    pub(super) fn reduce(
        &mut self,
        list: Value,
        func: Value,
        line: u32,
        env: &mut Environment,
    ) -> EvalResult {
        let (items, func) = list_and_callback(list, func, BinaryOp::Reduce)?;
        let Some((first, rest)) = items.split_first() else {
            return Err(empty_reduce());
        };
        let mut acc = first.clone();
        for (offset, item) in rest.iter().enumerate() {
            let mut args = vec![CallArg::Value(acc)];
            args.extend(element_args(item, offset + 1, &items));
            acc = self.call_function(&func, args, line, env)?;
        }
        Ok(acc)
    }

    /// `list filter f`: the elements for which `f(element, index, list)`
    /// returns the truthy sentinel.
    pub(super) fn filter(
        &mut self,
        list: Value,
        func: Value,
        line: u32,
        env: &mut Environment,
    ) -> EvalResult {
        let (items, func) = list_and_callback(list, func, BinaryOp::Filter)?;
        let mut kept = Vec::new();
        for (i, item) in items.iter().enumerate() {
            let verdict = self.call_function(&func, element_args(item, i, &items), line, env)?;
            if is_truthy_sentinel(&verdict) {
                kept.push(item.clone());
            }
        }
        Ok(Value::list(kept))
    }
}

fn list_and_callback(
    list: Value,
    func: Value,
    op: BinaryOp,
) -> EvalResult<(Heap<Vec<Value>>, FunctionValue)> {
    match (list, func) {
        (Value::List(items), Value::Function(func)) => Ok((items, func)),
        (list, func) => Err(binary_operands(op, list.type_name(), func.type_name())),
    }
}

/// `(element, index, list)` for a list operator callback.
fn element_args<'e>(item: &Value, index: usize, list: &Heap<Vec<Value>>) -> Vec<CallArg<'e>> {
    vec![
        CallArg::Value(item.clone()),
        CallArg::Value(Value::index(index)),
        CallArg::Value(Value::List(list.clone())),
    ]
}
