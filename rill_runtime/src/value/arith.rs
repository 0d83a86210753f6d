//! Dynamic arithmetic with runtime type dispatch.
//!
//! Each operation matches on the operand pair: Int/Float combinations are
//! combined directly in the receiver's native representation; any other
//! operand is first coerced via `to_numeric` and the operation retried.
//! `to_numeric` always yields a directly-combinable variant, so the retry
//! recurses at most twice. Arithmetic never fails: mixed types always
//! resolve through coercion.

use super::Value;

impl Value {
    /// Dynamic addition. Int + Int stays Int (wrapping); Float pairings
    /// produce Float.
    pub fn plus(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_add(*b)),
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 + b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a + *b as f64),
            (Value::Float(a), Value::Float(b)) => Value::Float(a + b),
            (Value::Int(_) | Value::Float(_), _) => self.plus(&other.to_numeric()),
            _ => self.to_numeric().plus(other),
        }
    }

    /// Dynamic subtraction.
    pub fn minus(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_sub(*b)),
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 - b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a - *b as f64),
            (Value::Float(a), Value::Float(b)) => Value::Float(a - b),
            (Value::Int(_) | Value::Float(_), _) => self.minus(&other.to_numeric()),
            _ => self.to_numeric().minus(other),
        }
    }

    /// Dynamic multiplication.
    pub fn mul(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_mul(*b)),
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 * b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a * *b as f64),
            (Value::Float(a), Value::Float(b)) => Value::Float(a * b),
            (Value::Int(_) | Value::Float(_), _) => self.mul(&other.to_numeric()),
            _ => self.to_numeric().mul(other),
        }
    }

    /// Dynamic division. Int / Int yields Int only when evenly divisible;
    /// everything else (including division by zero) goes through float
    /// division, so the result is `inf`/`nan` rather than an error.
    pub fn div(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => {
                if *b != 0 && a.wrapping_rem(*b) == 0 {
                    Value::Int(a.wrapping_div(*b))
                } else {
                    Value::Float(*a as f64 / *b as f64)
                }
            }
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 / b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a / *b as f64),
            (Value::Float(a), Value::Float(b)) => Value::Float(a / b),
            (Value::Int(_) | Value::Float(_), _) => self.div(&other.to_numeric()),
            _ => self.to_numeric().div(other),
        }
    }

    /// Dynamic remainder. An integer remainder by zero has no
    /// representation, so it yields `Null`; float remainders produce `NaN`
    /// naturally.
    pub fn rem(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => {
                if *b == 0 {
                    Value::Null
                } else {
                    Value::Int(a.wrapping_rem(*b))
                }
            }
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 % b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a % *b as f64),
            (Value::Float(a), Value::Float(b)) => Value::Float(a % b),
            (Value::Int(_) | Value::Float(_), _) => self.rem(&other.to_numeric()),
            _ => self.to_numeric().rem(other),
        }
    }

    /// Direct-literal fast path, equivalent to `plus(&Value::Int(rhs))`.
    pub fn plus_int(&self, rhs: i64) -> Value {
        match self {
            Value::Int(a) => Value::Int(a.wrapping_add(rhs)),
            Value::Float(a) => Value::Float(a + rhs as f64),
            _ => self.to_numeric().plus_int(rhs),
        }
    }

    /// Direct-literal fast path, equivalent to `minus(&Value::Int(rhs))`.
    pub fn minus_int(&self, rhs: i64) -> Value {
        match self {
            Value::Int(a) => Value::Int(a.wrapping_sub(rhs)),
            Value::Float(a) => Value::Float(a - rhs as f64),
            _ => self.to_numeric().minus_int(rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_direct_pairs() {
        assert_eq!(Value::Int(2).plus(&Value::Int(3)), Value::Int(5));
        assert_eq!(Value::Float(3.0).plus(&Value::Int(2)), Value::Float(5.0));
        assert_eq!(Value::Int(2).plus(&Value::Float(3.0)), Value::Float(5.0));
        assert_eq!(Value::Float(1.5).plus(&Value::Float(1.0)), Value::Float(2.5));
    }

    #[test]
    fn test_plus_coerces_operand() {
        assert_eq!(Value::Int(1).plus(&Value::Str("2".into())), Value::Int(3));
        assert_eq!(
            Value::Float(1.0).plus(&Value::Str("2.5x".into())),
            Value::Float(3.5)
        );
        assert_eq!(Value::Int(1).plus(&Value::Bool(true)), Value::Int(2));
        assert_eq!(Value::Int(1).plus(&Value::Null), Value::Int(1));
    }

    #[test]
    fn test_plus_coerces_receiver() {
        assert_eq!(Value::Str("2".into()).plus(&Value::Int(1)), Value::Int(3));
        assert_eq!(Value::Null.plus(&Value::Float(1.5)), Value::Float(1.5));
        assert_eq!(
            Value::Str("1.5".into()).plus(&Value::Str("2.5".into())),
            Value::Float(4.0)
        );
    }

    #[test]
    fn test_minus_and_mul() {
        assert_eq!(Value::Int(5).minus(&Value::Int(3)), Value::Int(2));
        assert_eq!(Value::Float(5.0).minus(&Value::Int(3)), Value::Float(2.0));
        assert_eq!(Value::Int(4).mul(&Value::Int(3)), Value::Int(12));
        assert_eq!(Value::Int(4).mul(&Value::Float(0.5)), Value::Float(2.0));
        assert_eq!(Value::Bool(true).mul(&Value::Int(7)), Value::Int(7));
    }

    #[test]
    fn test_int_overflow_wraps() {
        assert_eq!(
            Value::Int(i64::MAX).plus(&Value::Int(1)),
            Value::Int(i64::MIN)
        );
        assert_eq!(
            Value::Int(i64::MIN).minus(&Value::Int(1)),
            Value::Int(i64::MAX)
        );
    }

    #[test]
    fn test_div_evenness() {
        assert_eq!(Value::Int(6).div(&Value::Int(3)), Value::Int(2));
        assert_eq!(Value::Int(7).div(&Value::Int(2)), Value::Float(3.5));
        assert_eq!(Value::Float(6.0).div(&Value::Int(3)), Value::Float(2.0));
    }

    #[test]
    fn test_div_by_zero_never_errors() {
        assert!(matches!(
            Value::Int(5).div(&Value::Int(0)),
            Value::Float(v) if v.is_infinite()
        ));
        assert!(matches!(
            Value::Int(0).div(&Value::Int(0)),
            Value::Float(v) if v.is_nan()
        ));
        assert!(matches!(
            Value::Float(1.0).div(&Value::Float(0.0)),
            Value::Float(v) if v.is_infinite()
        ));
    }

    #[test]
    fn test_rem() {
        assert_eq!(Value::Int(7).rem(&Value::Int(3)), Value::Int(1));
        assert_eq!(Value::Int(7).rem(&Value::Int(0)), Value::Null);
        assert!(matches!(
            Value::Float(7.0).rem(&Value::Float(0.0)),
            Value::Float(v) if v.is_nan()
        ));
        assert_eq!(Value::Float(7.5).rem(&Value::Int(2)), Value::Float(1.5));
    }

    #[test]
    fn test_rem_int_min_by_minus_one() {
        // i64::MIN % -1 must not overflow-panic
        assert_eq!(Value::Int(i64::MIN).rem(&Value::Int(-1)), Value::Int(0));
        assert_eq!(
            Value::Int(i64::MIN).div(&Value::Int(-1)),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn test_literal_fast_paths_match_boxed() {
        assert_eq!(Value::Float(3.0).plus_int(2), Value::Float(3.0).plus(&Value::Int(2)));
        assert_eq!(Value::Int(3).minus_int(2), Value::Int(3).minus(&Value::Int(2)));
        assert_eq!(
            Value::Str("4".into()).plus_int(1),
            Value::Str("4".into()).plus(&Value::Int(1))
        );
    }
}
