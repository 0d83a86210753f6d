//! Argument slots shared between the interpreter and native callees.

use std::cell::RefCell;
use std::rc::Rc;

use super::Value;

/// Shared, mutable slot holding one value (a variable binding cell).
pub type ValueSlot = Rc<RefCell<Value>>;

/// Create a new ValueSlot wrapping a value.
pub fn new_slot(value: Value) -> ValueSlot {
    Rc::new(RefCell::new(value))
}

/// One caller argument at the invocation boundary: either an evaluated
/// temporary, or a reference aliasing the caller's binding slot.
///
/// Which arguments are references is the call site's decision; the
/// binding layer releases every reference slot (resets it to `Null`)
/// after the call, on all exit paths.
#[derive(Debug, Clone)]
pub enum Argument {
    /// Evaluated temporary, owned by the call.
    Value(Value),
    /// Reference aliasing the caller's binding slot.
    Ref(ValueSlot),
}

impl Argument {
    /// An evaluated temporary.
    pub fn by_value(value: impl Into<Value>) -> Self {
        Argument::Value(value.into())
    }

    /// A reference argument aliasing `slot`.
    pub fn by_ref(slot: &ValueSlot) -> Self {
        Argument::Ref(Rc::clone(slot))
    }

    /// Read the current value (dereferences a reference argument).
    pub fn read(&self) -> Value {
        match self {
            Argument::Value(v) => v.clone(),
            Argument::Ref(slot) => slot.borrow().clone(),
        }
    }

    /// The aliased slot, when this argument was passed by reference.
    pub fn slot(&self) -> Option<&ValueSlot> {
        match self {
            Argument::Value(_) => None,
            Argument::Ref(slot) => Some(slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_shares_writes() {
        let slot = new_slot(Value::Int(1));
        let alias = Rc::clone(&slot);
        *alias.borrow_mut() = Value::Int(2);
        assert_eq!(*slot.borrow(), Value::Int(2));
    }

    #[test]
    fn test_argument_read() {
        assert_eq!(Argument::by_value(42i64).read(), Value::Int(42));
        let slot = new_slot(Value::Str("x".into()));
        let arg = Argument::by_ref(&slot);
        assert_eq!(arg.read(), Value::Str("x".into()));
        assert!(arg.slot().is_some());
        assert!(Argument::by_value(1i64).slot().is_none());
    }
}
