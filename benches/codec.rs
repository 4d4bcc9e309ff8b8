#[macro_use]
extern crate criterion;

extern crate bankers;
extern crate rand;

use bankers::{next, Codec};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LENGTHS: [u32; 3] = [8, 32, 64];

fn make_ranks(rng: &mut impl Rng, n: u32, count: usize) -> Vec<u64> {
    let mask = if n == 64 { u64::MAX } else { (1 << n) - 1 };
    (0..count).map(|_| rng.gen::<u64>() & mask).collect()
}

pub fn bench_unrank(c: &mut Criterion) {
    let mut g = c.benchmark_group("unrank");
    for n in LENGTHS {
        let mut rng: StdRng = SeedableRng::from_seed([0; 32]);
        let codec = Codec::new(n).unwrap();
        let ranks = make_ranks(&mut rng, n, 1024);

        g.throughput(Throughput::Elements(ranks.len() as u64));
        g.bench_with_input(
            BenchmarkId::from_parameter(format!("N={}", n)),
            &(codec, ranks),
            |b, (codec, ranks)| {
                b.iter(|| {
                    for &rank in ranks.iter() {
                        black_box(codec.unrank(rank).unwrap());
                    }
                })
            },
        );
    }
}

pub fn bench_rank(c: &mut Criterion) {
    let mut g = c.benchmark_group("rank");
    for n in LENGTHS {
        let mut rng: StdRng = SeedableRng::from_seed([0; 32]);
        let codec = Codec::new(n).unwrap();
        let patterns: Vec<_> = make_ranks(&mut rng, n, 1024)
            .into_iter()
            .map(|rank| codec.unrank(rank).unwrap())
            .collect();

        g.throughput(Throughput::Elements(patterns.len() as u64));
        g.bench_with_input(
            BenchmarkId::from_parameter(format!("N={}", n)),
            &(codec, patterns),
            |b, (codec, patterns)| {
                b.iter(|| {
                    for p in patterns.iter() {
                        black_box(codec.rank(p).unwrap());
                    }
                })
            },
        );
    }
}

pub fn bench_next(c: &mut Criterion) {
    let mut g = c.benchmark_group("next");
    for n in LENGTHS {
        let mut rng: StdRng = SeedableRng::from_seed([0; 32]);
        let codec = Codec::new(n).unwrap();
        let patterns: Vec<_> = make_ranks(&mut rng, n, 1024)
            .into_iter()
            .map(|rank| codec.unrank(rank).unwrap())
            .collect();

        g.throughput(Throughput::Elements(patterns.len() as u64));
        g.bench_with_input(
            BenchmarkId::from_parameter(format!("N={}", n)),
            &patterns,
            |b, patterns| {
                b.iter(|| {
                    for p in patterns.iter() {
                        let _ = black_box(next(p));
                    }
                })
            },
        );
    }
}

pub fn bench_sequence(c: &mut Criterion) {
    let mut g = c.benchmark_group("sequence");
    for n in [12u32, 16] {
        let codec = Codec::new(n).unwrap();
        g.throughput(Throughput::Elements(1 << n));
        g.bench_with_input(BenchmarkId::from_parameter(format!("N={}", n)), &codec, |b, codec| {
            b.iter(|| codec.sequence().fold(0, |acc, p| acc ^ p.bits()))
        });
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(200);
    targets =
    bench_unrank,
    bench_rank,
    bench_next,
    bench_sequence
);
criterion_main!(benches);
