//! Dynamic comparison with epsilon-tolerant float equality.
//!
//! Any pairing that involves a float compares within `EPSILON` to absorb
//! rounding introduced by coercion. `greater`/`greater_eq` are defined by
//! operand swap from `smaller`/`smaller_eq`, so they inherit the same
//! tolerance rather than duplicating it.

use super::coerce::is_numeric_str;
use super::Value;

/// Tolerance for float equality.
pub(crate) const EPSILON: f64 = 1e-10;

/// Epsilon-tolerant float comparison.
pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

impl Value {
    /// Loose equality. Int/Int compares exactly; two non-numeric strings
    /// compare byte-wise; every other pairing compares as doubles within
    /// the epsilon tolerance.
    pub fn equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => almost_equal(*a, *b),
            (Value::Float(a), Value::Int(b)) => almost_equal(*a, *b as f64),
            (Value::Int(a), Value::Float(b)) => almost_equal(*a as f64, *b),
            (Value::Str(a), Value::Str(b)) => {
                if is_numeric_str(a) && is_numeric_str(b) {
                    almost_equal(self.to_double(), other.to_double())
                } else {
                    a == b
                }
            }
            _ => almost_equal(self.to_double(), other.to_double()),
        }
    }

    /// Logical negation of `equal`.
    pub fn not_equal(&self, other: &Value) -> bool {
        !self.equal(other)
    }

    /// Loose less-than. Int/Float pairings compare natively; everything
    /// else compares as doubles.
    pub fn smaller(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a < b,
            (Value::Float(a), Value::Float(b)) => a < b,
            (Value::Float(a), Value::Int(b)) => *a < *b as f64,
            (Value::Int(a), Value::Float(b)) => (*a as f64) < *b,
            _ => self.to_double() < other.to_double(),
        }
    }

    /// `smaller || equal`.
    pub fn smaller_eq(&self, other: &Value) -> bool {
        self.smaller(other) || self.equal(other)
    }

    /// Operand swap of `smaller`.
    pub fn greater(&self, other: &Value) -> bool {
        other.smaller(self)
    }

    /// Operand swap of `smaller_eq`.
    pub fn greater_eq(&self, other: &Value) -> bool {
        other.smaller_eq(self)
    }
}
