//! Integration tests for the dynamic value operations: the algebraic
//! laws the arithmetic/comparison layer guarantees across mixed types.

use pretty_assertions::assert_eq;
use rill_runtime::prelude::*;

fn numeric_samples() -> Vec<Value> {
    vec![
        Value::Int(0),
        Value::Int(-3),
        Value::Int(7),
        Value::Float(0.0),
        Value::Float(2.5),
        Value::Float(-1.25),
    ]
}

fn scalar_samples() -> Vec<Value> {
    let mut samples = numeric_samples();
    samples.extend([
        Value::Str("2.5".into()),
        Value::Str("abc".into()),
        Value::Bool(true),
        Value::Bool(false),
        Value::Null,
    ]);
    samples
}

#[test]
fn plus_is_commutative_over_numeric_pairs() {
    for a in &numeric_samples() {
        for b in &numeric_samples() {
            assert_eq!(a.plus(b), b.plus(a), "{:?} + {:?}", a, b);
        }
    }
}

#[test]
fn equal_absorbs_float_rounding() {
    let a = Value::Float(1.0);
    let b = Value::Float(1.0 + 1e-13);
    assert_ne!(a, b, "bit-for-bit the values differ");
    assert!(a.equal(&b));
    assert!(b.equal(&a));
    assert!(Value::Float(1.0).equal(&Value::Float(1.0000000000001)));
}

#[test]
fn comparison_is_reflexive() {
    for v in &scalar_samples() {
        assert!(v.smaller_eq(v), "smaller_eq({:?})", v);
        assert!(v.greater_eq(v), "greater_eq({:?})", v);
        assert!(!v.greater(v), "greater({:?})", v);
        assert!(!v.smaller(v), "smaller({:?})", v);
    }
}

#[test]
fn greater_is_operand_swapped_smaller() {
    for a in &scalar_samples() {
        for b in &scalar_samples() {
            assert_eq!(a.greater(b), b.smaller(a), "{:?} > {:?}", a, b);
            assert_eq!(a.greater_eq(b), b.smaller_eq(a), "{:?} >= {:?}", a, b);
        }
    }
}

#[test]
fn concat_is_associative_and_string_typed() {
    let samples = scalar_samples();
    for a in &samples {
        for b in &samples {
            assert!(matches!(a.concat(b), Value::Str(_)));
            for c in &samples {
                assert_eq!(
                    a.concat(b).concat(c),
                    a.concat(&b.concat(c)),
                    "({:?} . {:?}) . {:?}",
                    a,
                    b,
                    c
                );
            }
        }
    }
}

#[test]
fn mixed_arithmetic_examples() {
    assert_eq!(Value::Float(3.0).plus(&Value::Int(2)), Value::Float(5.0));
    assert_eq!(
        Value::Float(2.5).concat(&Value::Str("x".into())),
        Value::Str("2.5x".into())
    );
    assert_eq!(Value::Str("4".into()).mul(&Value::Str("2.5".into())), Value::Float(10.0));
    assert_eq!(Value::Bool(true).plus(&Value::Null), Value::Int(1));
}

#[test]
fn boxing_round_trips_exact_values() {
    assert_eq!(Value::from(42i64).to_long(), 42);
    assert_eq!(Value::from(-2.5f64).to_double(), -2.5);
    assert_eq!(Value::from(true).to_boolean(), true);
    assert_eq!(Value::from("hi").to_str(), "hi");
    // integers survive a trip through float boxing when exactly representable
    assert_eq!(Value::from(1i64 << 52).to_double() as i64, 1i64 << 52);
}

#[test]
fn literal_fast_paths_match_boxed_operands() {
    for v in &scalar_samples() {
        for rhs in [-2i64, 0, 5] {
            assert_eq!(v.plus_int(rhs), v.plus(&Value::Int(rhs)), "{:?} + {}", v, rhs);
            assert_eq!(v.minus_int(rhs), v.minus(&Value::Int(rhs)), "{:?} - {}", v, rhs);
        }
    }
}
