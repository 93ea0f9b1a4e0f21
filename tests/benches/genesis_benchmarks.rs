//! # Genesis Pipeline Benchmarks
//!
//! | Stage | Measured |
//! |-------|----------|
//! | assemble | address resolution, typing, canonical ordering |
//! | encode | versioned marshal of an assembled genesis |
//! | build | full pipeline including hex transport |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use genesis_builder::{GenesisApi, GenesisService};
use genesis_tests::fixtures::{random_request, rng};
use shared_types::Encoding;

fn bench_genesis_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("genesis-pipeline");
    let service = match GenesisService::new() {
        Ok(service) => service,
        Err(e) => panic!("service construction failed: {e}"),
    };

    for assets in [1usize, 10, 100] {
        let args = random_request(&mut rng(assets as u64), assets, Encoding::Hex);
        group.throughput(Throughput::Elements(assets as u64));

        group.bench_with_input(BenchmarkId::new("assemble", assets), &args, |b, args| {
            b.iter(|| black_box(service.assemble_genesis(args).is_ok()))
        });

        if let Ok(genesis) = service.assemble_genesis(&args) {
            group.bench_with_input(BenchmarkId::new("encode", assets), &genesis, |b, genesis| {
                b.iter(|| black_box(service.encode_genesis(genesis).is_ok()))
            });
        }

        group.bench_with_input(BenchmarkId::new("build", assets), &args, |b, args| {
            b.iter(|| black_box(service.build_genesis(args).is_ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_genesis_pipeline);
criterion_main!(benches);
