//! Benchmarks for digit-array operations

extern crate criterion;
extern crate digitint;
extern crate oorandom;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use digitint::num_bigint::BigUint;
use digitint::num_traits::Pow;
use digitint::DigitInt;


fn random_digit_int(rng: &mut oorandom::Rand64, digit_count: usize) -> DigitInt {
    let mut d = DigitInt::with_digit_count(digit_count);
    for i in 0..digit_count {
        d.set_digit(i, rng.rand_range(0..10) as u8).unwrap();
    }
    d
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = oorandom::Rand64::new(301);

    let big = BigUint::from(2u8).pow(1000u32);
    c.bench_function("from-biguint-2-pow-1000", |b| {
        b.iter(|| DigitInt::from(black_box(&big)));
    });

    let digits = DigitInt::from(&big);
    c.bench_function("to-biguint-302-digits", |b| {
        b.iter(|| black_box(&digits).to_biguint());
    });
    c.bench_function("sum-of-digits-302-digits", |b| {
        b.iter(|| black_box(&digits).sum_of_digits());
    });

    let value = random_digit_int(&mut rng, 250);
    c.bench_function("palindrome-250-digits", |b| {
        b.iter(|| black_box(&value).is_palindrome());
    });

    c.bench_function("enumerate-arrangements-8-digits", |b| {
        b.iter(|| {
            let mut d = DigitInt::from(12345678u32);
            let mut count = 1u32;
            while d.next_permutation() {
                count += 1;
            }
            count
        });
    });
}

criterion_group!(
    name = digit_ops;
    config = Criterion::default().sample_size(300);
    targets = criterion_benchmark,
);
criterion_main!(digit_ops);
