//! Name bindings for a program run or a single call.
//!
//! Environments are flat and single-assignment: a name is bound at most once.
//! A call gets its own environment built by [`Environment::with_overlay`],
//! so nothing a callee binds is visible to its caller.

use rustc_hash::FxHashMap;

use waray_ir::Name;

use crate::value::Value;

/// Error returned by [`Environment::bind`].
///
/// The caller knows whether it was binding a variable or declaring a function
/// and picks the diagnostic accordingly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindError {
    /// The name already has a binding.
    AlreadyBound,
}

/// Mutable `Name -> Value` map.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Bind `name` to `value`. Existing bindings are never overwritten.
    pub fn bind(&mut self, name: Name, value: Value) -> Result<(), BindError> {
        if self.bindings.contains_key(&name) {
            return Err(BindError::AlreadyBound);
        }
        self.bindings.insert(name, value);
        Ok(())
    }

    /// A copy of this environment with `params` laid over it.
    ///
    /// Parameters shadow existing bindings of the same name; a later
    /// parameter with a repeated name wins.
    pub fn with_overlay(&self, params: impl IntoIterator<Item = (Name, Value)>) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.extend(params);
        Environment { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
