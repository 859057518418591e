use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::object::Object;

/// A scope of named values.
///
/// Lookups that miss fall through to the enclosing scope, which may be
/// shared by several inner scopes.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope, shadowing any outer binding.
    pub fn set(&mut self, name: &str, value: Object) -> Object {
        self.store.insert(name.to_string(), value.clone());
        value
    }
}
