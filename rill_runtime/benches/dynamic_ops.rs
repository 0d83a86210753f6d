//! Benchmarks for the dynamic dispatch hot paths: direct numeric
//! pairings, the coerce-and-retry fallback, and a full invocation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rill_runtime::prelude::*;

fn bench_value_ops(c: &mut Criterion) {
    let int = Value::Int(3);
    let float = Value::Float(2.5);
    let numeric_str = Value::Str("2.5".into());

    c.bench_function("plus_int_int", |b| {
        b.iter(|| black_box(&int).plus(black_box(&int)))
    });
    c.bench_function("plus_float_int", |b| {
        b.iter(|| black_box(&float).plus(black_box(&int)))
    });
    c.bench_function("plus_coerced_str", |b| {
        b.iter(|| black_box(&int).plus(black_box(&numeric_str)))
    });
    c.bench_function("concat_float_str", |b| {
        b.iter(|| black_box(&float).concat(black_box(&numeric_str)))
    });
    c.bench_function("equal_float_epsilon", |b| {
        b.iter(|| black_box(&float).equal(black_box(&float)))
    });
}

fn bench_invoke(c: &mut Criterion) {
    let mut entity = SymbolEntity::new("strlen");
    entity.add_overload(
        &NativeCallable::new(
            "strlen",
            vec![ParamSpec::new(ParamContract::ByValue)],
            |_, args| {
                let len = args.value(0).map(|v| v.to_str().len()).unwrap_or(0);
                Ok(NativeReturn::of(len as i64))
            },
        )
        .with_modifiers(Modifiers {
            is_static: true,
            ..Modifiers::default()
        }),
    );
    let env = Environment::new();

    c.bench_function("invoke_one_arg", |b| {
        b.iter(|| {
            entity.invoke(
                None,
                black_box(&env),
                TraceInfo::UNKNOWN,
                &[Argument::by_value("hello")],
            )
        })
    });
}

criterion_group!(benches, bench_value_ops, bench_invoke);
criterion_main!(benches);
