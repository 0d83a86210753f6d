//! Native callables and the argument package handed to them.

use std::fmt;
use std::sync::Arc;

use crate::class::Receiver;
use crate::convert::NativeValue;
use crate::env::Environment;
use crate::error::NativeFault;
use crate::trace::TraceInfo;
use crate::value::{Value, ValueSlot};

use super::contract::ParamSpec;

/// Symbol visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Modifier flags derived from a native callable at registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_deprecated: bool,
    pub returns_by_ref: bool,
}

/// One marshalled argument as seen by a native implementation.
#[derive(Debug, Clone)]
pub enum NativeArg {
    /// Aliases the caller's argument slot.
    Ref(ValueSlot),
    /// Owned copy of the argument.
    Owned(Value),
    /// Converted to a declared native type.
    Native(NativeValue),
    /// Injected environment handle.
    Env(Environment),
    /// Injected call-site trace.
    Trace(TraceInfo),
    /// Collected trailing arguments of a variadic parameter.
    Rest(Vec<NativeArg>),
}

impl NativeArg {
    /// Current value of this argument, when it carries one.
    pub fn value(&self) -> Option<Value> {
        match self {
            NativeArg::Ref(slot) => Some(slot.borrow().clone()),
            NativeArg::Owned(v) => Some(v.clone()),
            NativeArg::Native(n) => Some(Value::from(n.clone())),
            NativeArg::Env(_) | NativeArg::Trace(_) | NativeArg::Rest(_) => None,
        }
    }
}

/// Ordered marshalled arguments for one invocation.
#[derive(Debug, Default)]
pub struct CallArgs {
    args: Vec<NativeArg>,
}

impl CallArgs {
    pub fn new(args: Vec<NativeArg>) -> Self {
        CallArgs { args }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NativeArg> {
        self.args.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NativeArg> {
        self.args.iter()
    }

    /// Value at `index`, when the argument carries one.
    pub fn value(&self, index: usize) -> Option<Value> {
        self.args.get(index).and_then(NativeArg::value)
    }

    /// Shared slot at `index`, when the argument was marshalled by
    /// reference.
    pub fn slot(&self, index: usize) -> Option<&ValueSlot> {
        match self.args.get(index) {
            Some(NativeArg::Ref(slot)) => Some(slot),
            _ => None,
        }
    }

    /// Converted i64 at `index`.
    pub fn long(&self, index: usize) -> Option<i64> {
        match self.args.get(index) {
            Some(NativeArg::Native(n)) => n.as_long(),
            _ => None,
        }
    }

    /// Converted f64 at `index`.
    pub fn double(&self, index: usize) -> Option<f64> {
        match self.args.get(index) {
            Some(NativeArg::Native(n)) => n.as_double(),
            _ => None,
        }
    }

    /// Converted bool at `index`.
    pub fn boolean(&self, index: usize) -> Option<bool> {
        match self.args.get(index) {
            Some(NativeArg::Native(n)) => n.as_bool(),
            _ => None,
        }
    }

    /// Converted string at `index`.
    pub fn string(&self, index: usize) -> Option<&str> {
        match self.args.get(index) {
            Some(NativeArg::Native(n)) => n.as_str(),
            _ => None,
        }
    }

    /// Injected environment at `index`.
    pub fn env(&self, index: usize) -> Option<&Environment> {
        match self.args.get(index) {
            Some(NativeArg::Env(env)) => Some(env),
            _ => None,
        }
    }

    /// Injected trace at `index`.
    pub fn trace(&self, index: usize) -> Option<TraceInfo> {
        match self.args.get(index) {
            Some(NativeArg::Trace(trace)) => Some(*trace),
            _ => None,
        }
    }

    /// Collected variadic arguments at `index`.
    pub fn rest(&self, index: usize) -> Option<&[NativeArg]> {
        match self.args.get(index) {
            Some(NativeArg::Rest(rest)) => Some(rest),
            _ => None,
        }
    }
}

/// Result of a native implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeReturn {
    /// No produced value; the binding boxes it to `Null`.
    Void,
    Value(Value),
}

impl NativeReturn {
    /// Box a native value through the `Value` conversions.
    pub fn of(value: impl Into<Value>) -> Self {
        NativeReturn::Value(value.into())
    }
}

impl From<Value> for NativeReturn {
    fn from(value: Value) -> Self {
        NativeReturn::Value(value)
    }
}

/// Native function behind a symbol overload.
pub type NativeFn =
    Arc<dyn Fn(Option<Receiver>, CallArgs) -> Result<NativeReturn, NativeFault> + Send + Sync>;

/// Registration descriptor: one native overload of a symbol.
#[derive(Clone)]
pub struct NativeCallable {
    pub name: String,
    pub modifiers: Modifiers,
    pub params: Vec<ParamSpec>,
    pub func: NativeFn,
}

impl fmt::Debug for NativeCallable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native-fn {}/{}>", self.name, self.params.len())
    }
}

impl NativeCallable {
    pub fn new(
        name: impl Into<String>,
        params: Vec<ParamSpec>,
        func: impl Fn(Option<Receiver>, CallArgs) -> Result<NativeReturn, NativeFault>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        NativeCallable {
            name: name.into(),
            modifiers: Modifiers::default(),
            params,
            func: Arc::new(func),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::new_slot;

    #[test]
    fn test_call_args_accessors() {
        let slot = new_slot(Value::Int(9));
        let args = CallArgs::new(vec![
            NativeArg::Owned(Value::Int(1)),
            NativeArg::Ref(slot),
            NativeArg::Native(NativeValue::Double(2.5)),
            NativeArg::Trace(TraceInfo::new(1, 2)),
            NativeArg::Rest(vec![NativeArg::Owned(Value::Null)]),
        ]);
        assert_eq!(args.len(), 5);
        assert_eq!(args.value(0), Some(Value::Int(1)));
        assert_eq!(args.value(1), Some(Value::Int(9)));
        assert!(args.slot(1).is_some());
        assert_eq!(args.double(2), Some(2.5));
        assert_eq!(args.long(2), None);
        assert_eq!(args.trace(3), Some(TraceInfo::new(1, 2)));
        assert_eq!(args.rest(4).map(<[NativeArg]>::len), Some(1));
        assert_eq!(args.value(3), None);
    }

    #[test]
    fn test_native_return_boxing() {
        assert_eq!(NativeReturn::of(5i64), NativeReturn::Value(Value::Int(5)));
        assert_eq!(NativeReturn::of("x"), NativeReturn::Value(Value::Str("x".into())));
        assert_eq!(
            NativeReturn::from(Value::Bool(true)),
            NativeReturn::Value(Value::Bool(true))
        );
    }

    #[test]
    fn test_callable_debug() {
        use super::super::contract::ParamContract;
        let c = NativeCallable::new(
            "strlen",
            vec![ParamSpec::new(ParamContract::ByValue)],
            |_, _| Ok(NativeReturn::Void),
        );
        assert_eq!(format!("{:?}", c), "<native-fn strlen/1>");
    }
}
