//! Coercions from `Value` to native primitive forms.
//!
//! These implement Rill's loose typing rules: any value can be read as an
//! integer, float, boolean, or string. `to_numeric` is the workhorse of
//! the arithmetic fallback path and always yields `Int` or `Float`, which
//! is what guarantees that the coerce-and-retry dispatch in `arith.rs`
//! terminates.

use super::Value;

/// A scalar numeric literal scanned out of a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    pub(crate) fn into_value(self) -> Value {
        match self {
            Numeric::Int(v) => Value::Int(v),
            Numeric::Float(v) => Value::Float(v),
        }
    }

    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(v) => v as f64,
            Numeric::Float(v) => v,
        }
    }
}

/// Result of scanning a string for a leading numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NumericScan {
    pub(crate) value: Numeric,
    /// True when the whole (trimmed, non-empty) string was the literal.
    pub(crate) exact: bool,
}

/// Scan the longest leading numeric literal of `s`:
/// `[+-]? digits [. digits]? [eE [+-]? digits]?` or `[+-]? . digits ...`.
/// A string with no leading literal scans as integer zero.
pub(crate) fn scan_numeric(s: &str) -> NumericScan {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut is_float = false;
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // Accept "1.", "1.5" and ".5"; a bare "." is not a literal.
        if j > i + 1 || int_digits > 0 {
            is_float = true;
            i = j;
        }
    }
    let mantissa_digits = int_digits > 0 || is_float;

    if mantissa_digits && i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            is_float = true;
            i = j;
        }
    }

    if !mantissa_digits {
        return NumericScan {
            value: Numeric::Int(0),
            exact: false,
        };
    }

    let literal = &trimmed[..i];
    let exact = i == trimmed.len();
    if is_float {
        let parsed = literal.parse::<f64>().unwrap_or(0.0);
        NumericScan {
            value: Numeric::Float(parsed),
            exact,
        }
    } else {
        // An integer literal too wide for i64 falls back to f64.
        match literal.parse::<i64>() {
            Ok(v) => NumericScan {
                value: Numeric::Int(v),
                exact,
            },
            Err(_) => NumericScan {
                value: Numeric::Float(literal.parse::<f64>().unwrap_or(0.0)),
                exact,
            },
        }
    }
}

/// True when the whole string (modulo leading whitespace) is one numeric
/// literal. Used by `equal` to decide between numeric and byte-wise
/// string comparison.
pub(crate) fn is_numeric_str(s: &str) -> bool {
    scan_numeric(s).exact
}

impl Value {
    /// Coerce to a 64-bit integer.
    pub fn to_long(&self) -> i64 {
        match self {
            Value::Int(v) => *v,
            Value::Float(v) => *v as i64,
            Value::Str(s) => match scan_numeric(s).value {
                Numeric::Int(v) => v,
                Numeric::Float(v) => v as i64,
            },
            Value::Bool(b) => i64::from(*b),
            Value::Null => 0,
        }
    }

    /// Coerce to a 64-bit float.
    pub fn to_double(&self) -> f64 {
        match self {
            Value::Int(v) => *v as f64,
            Value::Float(v) => *v,
            Value::Str(s) => scan_numeric(s).value.as_f64(),
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Null => 0.0,
        }
    }

    /// Coerce to a boolean. `0`, `0.0`, `""`, `"0"`, `false`, and `null`
    /// are false; everything else is true.
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Bool(b) => *b,
            Value::Null => false,
        }
    }

    /// Coerce to a string. `true` prints as `"1"`, `false` and `null` as
    /// the empty string.
    pub fn to_str(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Str(s) => s.clone(),
            Value::Bool(b) => {
                if *b {
                    "1".to_string()
                } else {
                    String::new()
                }
            }
            Value::Null => String::new(),
        }
    }

    /// Coerce to whichever numeric variant best represents this value.
    ///
    /// Invariant: the result is always `Int` or `Float` and never requires
    /// further coercion, so the arithmetic retry path terminates.
    pub fn to_numeric(&self) -> Value {
        match self {
            Value::Int(_) | Value::Float(_) => self.clone(),
            Value::Str(s) => scan_numeric(s).value.into_value(),
            Value::Bool(b) => Value::Int(i64::from(*b)),
            Value::Null => Value::Int(0),
        }
    }
}
