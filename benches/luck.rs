use clogluck::{
    AliasTable, Binomial, CumulativeDistribution, PoissonBinomial, RefinedNormal, UniformSumMixture,
};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn gen_probabilities(n: usize) -> Vec<f64> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n).map(|_| rng.random::<f64>() * 0.05).collect()
}

fn bench_exact_vs_approximate(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson_binomial_cdf");
    for &n in &[50usize, 200, 1000, 5000] {
        let probabilities = gen_probabilities(n);
        let k = (probabilities.iter().sum::<f64>() as i64).max(1);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("exact_n={n}"), |b| {
            b.iter(|| black_box(PoissonBinomial::new(black_box(&probabilities)).cumulative_probability(k)));
        });
        group.bench_function(format!("refined_normal_n={n}"), |b| {
            b.iter(|| black_box(RefinedNormal::new(black_box(&probabilities)).cumulative_probability(k)));
        });
    }
    group.finish();
}

fn bench_compound(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_sum_cdf");
    for &chests in &[100u64, 1000, 5000] {
        let mixture = UniformSumMixture::new(Binomial::new(chests * 7, 1.0 / 8.096), 35, 40);
        let t = mixture.mean() as i64;
        group.bench_function(format!("bolt_racks_chests={chests}"), |b| {
            b.iter(|| black_box(mixture.cumulative_probability(black_box(t))));
        });
    }
    group.finish();
}

fn bench_outcome_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_sample");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[100u64, 1000] {
        let table = AliasTable::from_binomial(&Binomial::new(n, 0.01)).unwrap();
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));
        group.bench_function(format!("binomial_pmf_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(999),
                |rng| {
                    let mut s = 0u64;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= table.sample(rng);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact_vs_approximate, bench_compound, bench_outcome_sampling);
criterion_main!(benches);
