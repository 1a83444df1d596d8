//! Runtime values for the Waray interpreter.
//!
//! Heap-backed variants (`Str`, `List`) are only constructed through the
//! factory methods on `Value`; `Heap::new` is private to this module.
//! Lists are immutable once built: `map` and `filter` produce new lists.

mod function;
mod heap;

use std::fmt;

use waray_ir::Literal;

use crate::format::{format_number, FALSE_SENTINEL, NIL_SENTINEL, TRUE_SENTINEL};

pub use function::FunctionValue;
pub use heap::Heap;

/// Runtime value in the Waray interpreter.
#[derive(Clone)]
pub enum Value {
    /// Numbers are IEEE doubles; there is no separate integer type.
    Number(f64),
    Str(Heap<str>),
    Bool(bool),
    /// The absent value (both "null" and "unbound" resolve here).
    Nil,
    List(Heap<Vec<Value>>),
    Function(FunctionValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Heap::new_str(s.as_ref()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// A list position as passed to `map`/`reduce`/`filter` callbacks.
    #[inline]
    pub fn index(i: usize) -> Self {
        Value::Number(i as f64)
    }

    pub fn from_literal(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::Str(s) => Value::string(s),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Nil => Value::Nil,
        }
    }

    /// Type name used in developer-facing diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
            Value::List(_) => "list",
            Value::Function(_) => "function",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Render a value nested inside a list: strings are quoted so element
    /// boundaries stay visible.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", &**s),
            other => fmt::Display::fmt(other, f),
        }
    }
}

/// Output rendering: numbers without a trailing `.0`, strings raw, booleans
/// and nil as their sentinel words, lists as `[a, b, c]`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Bool(true) => f.write_str(TRUE_SENTINEL),
            Value::Bool(false) => f.write_str(FALSE_SENTINEL),
            Value::Nil => f.write_str(NIL_SENTINEL),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Value::Function(func) => write!(f, "<hirimuon {}>", func.name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Nil => f.write_str("Nil"),
            Value::List(items) => f.debug_tuple("List").field(&**items).finish(),
            Value::Function(func) => func.fmt(f),
        }
    }
}

/// Structural equality, used by tests and host code.
///
/// The language's `==` operator is stricter (lists compare by identity);
/// see `operators::strict_equals`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::List(a), Value::List(b)) => **a == **b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
