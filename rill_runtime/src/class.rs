//! Minimal class surface consumed by the binding layer.
//!
//! The full class/instance model lives in the interpreter; the binding
//! layer only needs enough of it to synthesize a placeholder receiver
//! when an instance method is called without one.

use std::cell::RefCell;
use std::rc::Rc;

/// A class that can own native method symbols.
#[derive(Debug, Clone)]
pub struct ClassEntity {
    name: String,
    /// Abstract classes cannot synthesize instances.
    instantiable: bool,
}

/// Placeholder instance synthesized for receiver-less instance calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInstance {
    pub class_name: String,
}

/// Shared handle to a receiver object.
pub type Receiver = Rc<RefCell<ObjectInstance>>;

impl ClassEntity {
    pub fn new(name: impl Into<String>) -> Self {
        ClassEntity {
            name: name.into(),
            instantiable: true,
        }
    }

    pub fn new_abstract(name: impl Into<String>) -> Self {
        ClassEntity {
            name: name.into(),
            instantiable: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_instantiable(&self) -> bool {
        self.instantiable
    }

    /// Synthesize a placeholder instance, or `None` when the class cannot
    /// be instantiated.
    pub fn new_mock(&self) -> Option<Receiver> {
        if self.instantiable {
            Some(Rc::new(RefCell::new(ObjectInstance {
                class_name: self.name.clone(),
            })))
        } else {
            None
        }
    }
}
