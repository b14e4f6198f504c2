//! Criterion benchmarks for stopping-criteria evaluation and the GA driver.
//!
//! The criteria benchmarks measure per-generation decision overhead; the GA
//! benchmark puts it in context of a full run on the Sphere function.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_stopping::criteria::{CriteriaSet, MaxGenerations, RunState, StoppingConfig};
use u_stopping::ga::{GaConfig, GaProblem, GaRunner, Individual};

// ===========================================================================
// Sphere function: minimize sum(x_i^2)
// ===========================================================================

#[derive(Clone)]
struct SphereIndividual {
    genes: Vec<f64>,
    fitness: f64,
}

impl Individual for SphereIndividual {
    type Fitness = f64;
    fn fitness(&self) -> f64 {
        self.fitness
    }
    fn set_fitness(&mut self, f: f64) {
        self.fitness = f;
    }
}

struct SphereProblem {
    dim: usize,
}

impl GaProblem for SphereProblem {
    type Individual = SphereIndividual;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> SphereIndividual {
        SphereIndividual {
            genes: (0..self.dim).map(|_| rng.random_range(-5.0..5.0)).collect(),
            fitness: f64::INFINITY,
        }
    }

    fn evaluate(&self, ind: &SphereIndividual) -> f64 {
        ind.genes.iter().map(|x| x * x).sum()
    }

    fn crossover<R: Rng>(
        &self,
        p1: &SphereIndividual,
        p2: &SphereIndividual,
        rng: &mut R,
    ) -> Vec<SphereIndividual> {
        let point = rng.random_range(0..self.dim);
        let mut child = p1.clone();
        child.genes[point..].copy_from_slice(&p2.genes[point..]);
        vec![child]
    }

    fn mutate<R: Rng>(&self, ind: &mut SphereIndividual, rng: &mut R) {
        let i = rng.random_range(0..self.dim);
        ind.genes[i] += rng.random_range(-0.5..0.5);
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_criteria_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("criteria_set");

    let state = RunState::at_generation(250)
        .with_best_fitness(-3.0)
        .with_stagnant_generations(4);

    for n in [1usize, 4, 16] {
        let set: CriteriaSet = (0..n as u64).map(|i| MaxGenerations::new(1_000 + i)).collect();
        group.bench_with_input(BenchmarkId::new("should_stop", n), &set, |b, set| {
            b.iter(|| black_box(set.should_stop(black_box(&state))))
        });
        group.bench_with_input(BenchmarkId::new("triggered", n), &set, |b, set| {
            b.iter(|| black_box(set.triggered(black_box(&state)).map(|v| v.len())))
        });
    }

    let quality = StoppingConfig::quality()
        .with_target_fitness(-10.0)
        .build()
        .expect("preset is valid");
    group.bench_function("quality_preset", |b| {
        b.iter(|| black_box(quality.should_stop(black_box(&state))))
    });

    group.finish();
}

fn bench_ga_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_sphere");
    group.sample_size(10);

    for (dim, pop, gen) in [(10usize, 50usize, 50u64), (50, 100, 30), (100, 100, 20)] {
        let problem = SphereProblem { dim };
        let config = GaConfig::default().with_population_size(pop).with_seed(42);
        let criteria = CriteriaSet::new().with(MaxGenerations::new(gen));
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_g{}", dim, pop, gen), dim),
            &(problem, config, criteria),
            |b, (p, c, s)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c), black_box(s));
                    black_box(result.map(|r| r.best_fitness))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_criteria_set, bench_ga_sphere);
criterion_main!(benches);
