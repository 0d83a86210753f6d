//! String concatenation.

use super::Value;

impl Value {
    /// Concatenate: a string operand is appended as-is, anything else is
    /// stringified first. The result is always a string value.
    pub fn concat(&self, other: &Value) -> Value {
        let mut out = self.to_str();
        match other {
            Value::Str(s) => out.push_str(s),
            _ => out.push_str(&other.to_str()),
        }
        Value::Str(out)
    }
}
