use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotdesk::{
    constraints::{FitnessEvaluator, PenaltyWeights},
    operators::{random_schedule, repair, Mutator},
    rng::RandomNumberGenerator,
};

mod common;

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    for size in [32, 128, 512].iter() {
        let problem = common::office(*size);
        let evaluator = FitnessEvaluator::standard(&problem, &PenaltyWeights::default());
        let mut rng = RandomNumberGenerator::from_seed(1);
        let schedule = random_schedule(&problem, &mut rng);

        group.bench_with_input(BenchmarkId::new("score", size), &schedule, |b, schedule| {
            b.iter(|| evaluator.score(black_box(schedule)))
        });
    }
    group.finish();
}

fn bench_variation(c: &mut Criterion) {
    let mut group = c.benchmark_group("variation");
    for size in [32, 128, 512].iter() {
        let problem = common::office(*size);
        let mutator = Mutator::new(0.05, Default::default(), 0.10);
        let mut rng = RandomNumberGenerator::from_seed(2);
        let schedule = random_schedule(&problem, &mut rng);

        group.bench_function(BenchmarkId::new("construct", size), |b| {
            b.iter(|| random_schedule(black_box(&problem), &mut rng))
        });
        group.bench_function(BenchmarkId::new("mutate_and_repair", size), |b| {
            b.iter(|| {
                let mut mutant = mutator.mutate(black_box(&schedule), &problem, &mut rng);
                repair(&mut mutant, &problem, &mut rng);
                mutant
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_variation);
criterion_main!(benches);
