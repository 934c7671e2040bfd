//! Lexical scopes.

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a scope. Closures keep their defining scope alive through it.
pub type Env = Rc<RefCell<Environment>>;

/// A single scope with an optional link to the enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Create an empty global scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scope nested inside `outer`.
    pub fn new_enclosed(outer: Env) -> Self {
        Self {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    pub fn into_env(self) -> Env {
        Rc::new(RefCell::new(self))
    }

    /// Looks `name` up in this scope, then in the enclosing scopes.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope. Shadows bindings of enclosing scopes.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
