use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use delete_distance::{deletion_plan, min_deletions};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn bench_min_deletions(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_deletions");
    for &len in &[100usize, 500, 1_000, 2_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_dna(&mut rng, len);
        let b = random_dna(&mut rng, len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b), |bench, (a, b)| {
            bench.iter(|| min_deletions(black_box(a), black_box(b)))
        });
    }
    group.finish();
}

fn bench_deletion_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("deletion_plan");
    for &len in &[100usize, 1_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_dna(&mut rng, len);
        let b = random_dna(&mut rng, len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b), |bench, (a, b)| {
            bench.iter(|| deletion_plan(black_box(a), black_box(b)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_min_deletions, bench_deletion_plan);
criterion_main!(benches);
