//! Benchmarks for encode, full decode and original-only reconstruction.

use bytes::Bytes;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs2d_codec::{Registry, Share};

const CHUNK: usize = 512;

fn bench_data(k: usize) -> Vec<Bytes> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..k)
        .map(|_| {
            let share: Vec<u8> = (0..CHUNK)
                .map(|_| {
                    state = state.wrapping_mul(1103515245).wrapping_add(12345);
                    (state >> 16) as u8
                })
                .collect();
            Bytes::from(share)
        })
        .collect()
}

fn bench_codecs(c: &mut Criterion) {
    let reg = Registry::with_builtin();
    let widths: &[usize] = &[16, 64, 128];

    let mut group = c.benchmark_group("codec");
    for name in reg.names() {
        let Some(codec) = reg.get(name) else { continue };
        for &k in widths {
            let data = bench_data(k);
            let parity = codec.encode(&data).unwrap();
            let label = format!("{name}_k{k}");
            group.throughput(Throughput::Bytes((k * CHUNK) as u64));

            group.bench_with_input(BenchmarkId::new("encode", &label), &data, |b, data| {
                b.iter(|| codec.encode(data).unwrap());
            });

            // first half of the originals lost
            let mut sparse: Vec<Option<Bytes>> = data.iter().cloned().map(Some).collect();
            sparse.extend(parity.iter().cloned().map(Some));
            for slot in sparse.iter_mut().take(k / 2) {
                *slot = None;
            }

            group.bench_with_input(BenchmarkId::new("decode", &label), &sparse, |b, sparse| {
                b.iter(|| codec.decode(sparse).unwrap());
            });

            let required = vec![true; k];
            group.bench_with_input(BenchmarkId::new("reconstruct_original", &label), &sparse, |b, sparse| {
                b.iter(|| {
                    let mut shares: Vec<Share> = sparse.iter().cloned().map(Share::from).collect();
                    codec.reconstruct_some(&mut shares, &required).unwrap();
                    shares
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
