use criterion::{black_box, criterion_group, criterion_main, Criterion};
use styrene_packet::{deserialize, serialize, Packet};
use test_support::fixtures::{demo_packet, demo_packet2};
use test_support::registry;

fn bench_serialize(c: &mut Criterion) {
    let packet = demo_packet();
    c.bench_function("styrene_packet/serialize", |b| {
        b.iter(|| {
            let wire = serialize(black_box(&packet));
            black_box(wire);
        });
    });
}

fn bench_deserialize(c: &mut Criterion) {
    let registry = registry().expect("demo registry must build");
    let wire = serialize(&demo_packet());
    c.bench_function("styrene_packet/deserialize", |b| {
        b.iter(|| {
            let decoded = deserialize(&registry, black_box(&wire)).expect("decode should succeed");
            black_box(decoded);
        });
    });
}

fn bench_deserialize_sequences(c: &mut Criterion) {
    let registry = registry().expect("demo registry must build");
    let mut packet = demo_packet2();
    packet.a_long = (0..4096).collect();
    packet.a_boolean = vec![true; 4096];
    let wire = serialize(&packet);
    c.bench_function("styrene_packet/deserialize_sequences", |b| {
        b.iter(|| {
            let decoded = deserialize(&registry, black_box(&wire)).expect("decode should succeed");
            black_box(decoded);
        });
    });
}

fn bench_to_text(c: &mut Criterion) {
    let packet = demo_packet();
    c.bench_function("styrene_packet/to_text", |b| {
        b.iter(|| black_box(black_box(&packet).to_text()));
    });
}

criterion_group!(
    benches,
    bench_serialize,
    bench_deserialize,
    bench_deserialize_sequences,
    bench_to_text
);
criterion_main!(benches);
