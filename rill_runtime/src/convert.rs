//! Converters from dynamic values to declared native parameter types.
//!
//! An overload may declare a parameter as a plain native type instead of a
//! `Value`; marshalling then runs the registered converter on the caller's
//! argument. Converters are pure functions over the value coercions. A
//! native type outside the scalar set has no converter, which makes any
//! call through such a parameter fail as not-dynamically-callable.

use crate::value::Value;

/// Native parameter type a converter can target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeType {
    Long,
    Double,
    Bool,
    Str,
    /// A host type with no registered converter.
    Other(String),
}

/// A converted native argument.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Long(i64),
    Double(f64),
    Bool(bool),
    Str(String),
}

impl NativeValue {
    pub fn as_long(&self) -> Option<i64> {
        match self {
            NativeValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            NativeValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

// Boxing a converted native back into the value model.
impl From<NativeValue> for Value {
    fn from(n: NativeValue) -> Self {
        match n {
            NativeValue::Long(v) => Value::Int(v),
            NativeValue::Double(v) => Value::Float(v),
            NativeValue::Bool(v) => Value::Bool(v),
            NativeValue::Str(s) => Value::Str(s),
        }
    }
}

/// Converter function: dynamic value to native.
pub type Converter = fn(&Value) -> NativeValue;

/// Look up the converter for a native parameter type. Returns `None` for
/// types outside the scalar set.
pub fn converter(ty: &NativeType) -> Option<Converter> {
    match ty {
        NativeType::Long => Some(|v| NativeValue::Long(v.to_long())),
        NativeType::Double => Some(|v| NativeValue::Double(v.to_double())),
        NativeType::Bool => Some(|v| NativeValue::Bool(v.to_boolean())),
        NativeType::Str => Some(|v| NativeValue::Str(v.to_str())),
        NativeType::Other(_) => None,
    }
}
