//! Callable values bound by function declarations.

use std::fmt;
use std::sync::Arc;

use waray_ir::FunctionDecl;

/// A function declared by a `Function` statement.
///
/// Opaque to everything but the interpreter, whose `call_function` is the
/// only operation a callable exposes. The declaration is shared with the
/// syntax tree; no environment is captured (calls see the caller's bindings).
#[derive(Clone)]
pub struct FunctionValue {
    decl: Arc<FunctionDecl>,
    /// Resolved at declaration time so values can be displayed without an interner.
    name: &'static str,
}

impl FunctionValue {
    pub(crate) fn new(decl: Arc<FunctionDecl>, name: &'static str) -> Self {
        FunctionValue { decl, name }
    }

    /// Declared name of the function.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.decl.params.len()
    }

    pub(crate) fn decl(&self) -> &FunctionDecl {
        &self.decl
    }

    /// Identity comparison: two values are the same function iff they share
    /// a declaration node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.decl, &other.decl)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<hirimuon {}/{}>", self.name, self.arity())
    }
}
