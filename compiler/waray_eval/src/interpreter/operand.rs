//! The result of evaluating an expression.

use waray_ir::Identifier;

use crate::environment::Environment;
use crate::value::Value;

/// An evaluated expression.
///
/// A variable read does not look its name up right away: assignment needs
/// the identifier itself, and every other consumer resolves it just before
/// use.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Unresolved(Identifier),
    Resolved(Value),
}

impl Operand {
    /// Look up an unresolved identifier in `env`. An unbound name resolves to
    /// `Nil`.
    pub fn resolve(self, env: &Environment) -> Value {
        match self {
            Operand::Resolved(value) => value,
            Operand::Unresolved(ident) => env.lookup(ident.name).cloned().unwrap_or(Value::Nil),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Resolved(value)
    }
}
