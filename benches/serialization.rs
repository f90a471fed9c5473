use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shapejson::{from_str, parse_text, to_string, Double, Matrix, RValue, Table, Vector};

const CARRIERS: [&str; 5] = ["UA", "AA", "B6", "DL", "EV"];

fn flights(size: usize) -> RValue {
    let carrier: Vec<&str> = (0..size).map(|i| CARRIERS[i % CARRIERS.len()]).collect();
    let flight: Vec<i32> = (0..size).map(|i| 1000 + i as i32).collect();
    let dep_delay: Vec<Option<f64>> = (0..size)
        .map(|i| if i % 7 == 0 { None } else { Some(i as f64 * 0.5 - 3.0) })
        .collect();
    let table = Table::new(vec![
        ("carrier".to_string(), Vector::from(carrier)),
        ("flight".to_string(), Vector::from(flight)),
        ("dep_delay".to_string(), Vector::from(dep_delay)),
    ])
    .unwrap();
    RValue::from(table)
}

fn benchmark_encode_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_table");

    for size in [10, 100, 1000].iter() {
        let value = flights(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| to_string(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_decode_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_table");

    for size in [10, 100, 1000].iter() {
        let json = to_string(&flights(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| from_str(black_box(json)))
        });
    }
    group.finish();
}

fn benchmark_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectors");

    let integers = RValue::from(Vector::from((0..1000).collect::<Vec<i32>>()));
    let doubles = RValue::from(Vector::Double(
        (0..1000)
            .map(|i| match i % 50 {
                0 => Double::NA,
                1 => Double::NaN,
                _ => Double::Finite(f64::from(i) * 1.5),
            })
            .collect(),
    ));

    group.bench_function("encode_integers", |b| {
        b.iter(|| to_string(black_box(&integers)))
    });
    group.bench_function("encode_doubles_with_specials", |b| {
        b.iter(|| to_string(black_box(&doubles)))
    });

    let doubles_json = to_string(&doubles).unwrap();
    group.bench_function("decode_doubles_with_specials", |b| {
        b.iter(|| from_str(black_box(&doubles_json)))
    });

    group.finish();
}

fn benchmark_matrix(c: &mut Criterion) {
    let m = Matrix::from_row_major(Vector::from((0..10_000).collect::<Vec<i32>>()), 100, 100)
        .unwrap();
    let value = RValue::from(m);
    let json = to_string(&value).unwrap();

    c.bench_function("encode_matrix_100x100", |b| {
        b.iter(|| to_string(black_box(&value)))
    });
    c.bench_function("decode_matrix_100x100", |b| {
        b.iter(|| from_str(black_box(&json)))
    });
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let json = to_string(&flights(500)).unwrap();
    let mut group = c.benchmark_group("comparison");

    group.bench_function("parse_text", |b| b.iter(|| parse_text(black_box(&json))));

    group.bench_function("serde_json_parse", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&json)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_table,
    benchmark_decode_table,
    benchmark_vectors,
    benchmark_matrix,
    benchmark_comparison_with_json
);
criterion_main!(benches);
