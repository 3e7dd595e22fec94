//! Microbenchmarks for the hot primitives.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strio_core::{MAX_UINT_DIGITS, format_uint, parse_uint, string_length};

fn bench_string_length(c: &mut Criterion) {
    let short = b"hello\0";
    let long = [b'a'; 4096];
    c.bench_function("string_length/short", |b| {
        b.iter(|| string_length(black_box(short)))
    });
    c.bench_function("string_length/4k_unterminated", |b| {
        b.iter(|| string_length(black_box(&long)))
    });
}

fn bench_parse_uint(c: &mut Criterion) {
    c.bench_function("parse_uint/u64_max", |b| {
        b.iter(|| parse_uint(black_box(b"18446744073709551615")))
    });
}

fn bench_format_uint(c: &mut Criterion) {
    c.bench_function("format_uint/u64_max", |b| {
        b.iter(|| {
            let mut buf = [0u8; MAX_UINT_DIGITS];
            format_uint(black_box(u64::MAX), &mut buf).len()
        })
    });
}

criterion_group!(
    benches,
    bench_string_length,
    bench_parse_uint,
    bench_format_uint
);
criterion_main!(benches);
