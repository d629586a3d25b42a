use criterion::{criterion_group, criterion_main, Criterion};
use sgan_stego::{CarrierShape, Key};

pub fn key_generation(c: &mut Criterion) {
    let shape = CarrierShape::new([3, 64, 64]).expect("valid shape");
    c.bench_function("Key Generation 3x64x64", |b| {
        b.iter(|| Key::generate(&shape, 1600, 42).expect("Cannot generate key"))
    });

    let huge = CarrierShape::new([3, 1 << 16, 1 << 16]).expect("valid shape");
    c.bench_function("Key Generation 3x65536x65536", |b| {
        b.iter(|| Key::generate(&huge, 1600, 42).expect("Cannot generate key"))
    });
}

criterion_group!(benches, key_generation);
criterion_main!(benches);
