use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_bigint::BigUint;
use rlp_codec::rlp::{self, Item};

fn transaction_like(payload_len: usize) -> Item {
    Item::list(vec![
        Item::from(1u8),
        Item::from(875000001u32),
        Item::from(2665792u32),
        Item::empty_bytes(),
        Item::from(0u8),
        Item::bytes(vec![0x5a; payload_len]),
        Item::from(1337u16),
        Item::from(0u8),
        Item::from(0u8),
    ])
}

fn nested(depth: usize, fanout: usize) -> Item {
    if depth == 0 {
        return Item::from(BigUint::from(u128::MAX));
    }
    Item::list((0..fanout).map(|_| nested(depth - 1, fanout)))
}

/// Benchmark flat lists with growing byte-string payloads
fn bench_flat_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_list");
    
    for payload_len in &[32, 1024, 65536] {
        let item = transaction_like(*payload_len);
        
        group.throughput(Throughput::Bytes(rlp::length(&item) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(payload_len),
            &item,
            |b, item| {
                b.iter(|| rlp::encode(black_box(item)));
            },
        );
    }
    
    group.finish();
}

/// Benchmark deeply nested lists
fn bench_nested_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_list");
    
    for depth in &[2, 4, 6] {
        let item = nested(*depth, 4);
        
        group.throughput(Throughput::Bytes(rlp::length(&item) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &item, |b, item| {
            b.iter(|| rlp::encode(black_box(item)));
        });
    }
    
    group.finish();
}

/// Benchmark the length pass on its own
fn bench_length(c: &mut Criterion) {
    let item = nested(6, 4);
    c.bench_function("length_nested_6", |b| {
        b.iter(|| rlp::length(black_box(&item)));
    });
}

criterion_group!(benches, bench_flat_lists, bench_nested_lists, bench_length);
criterion_main!(benches);
