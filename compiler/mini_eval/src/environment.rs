//! Variable environment.
//!
//! MiniScript has no lexical scoping, functions, or shadowing, so the
//! environment is a single flat map. One is constructed per evaluation
//! run and dropped with the interpreter; nothing outside the evaluator
//! mutates it.

use rustc_hash::FxHashMap;

use crate::Value;

/// Flat name-to-value mapping for one evaluation run.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind or overwrite a variable.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a variable by name.
    ///
    /// A name is absent until its first assignment; the caller turns
    /// `None` into `UndefinedVariable`.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }
}
