//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → (selection → crossover → mutation →
//! evaluation → replacement) × generations.

use super::config::GaConfig;
use super::selection::tournament_select;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::TimetableError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The fittest individual of the final population.
    ///
    /// Without elitism a better individual seen in an earlier generation
    /// may have been lost; see `fitness_history`.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped at the configured time limit.
    pub timed_out: bool,

    /// Best fitness of the population after initialization and after
    /// each completed generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, TimetableError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before starting the next generation and returns the best individual
    /// of the current population.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, TimetableError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let started = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        // 2. Evaluate initial population
        evaluate_population(problem, &mut population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(population[best_index(&population)].fitness().to_f64());

        let mut generations = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    log::warn!("GA cancelled after {gen} generations");
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = time_limit {
                if started.elapsed() >= limit {
                    log::warn!(
                        "GA time limit of {} ms reached after {gen} generations",
                        limit.as_millis()
                    );
                    timed_out = true;
                    break;
                }
            }

            let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);

            // Elite preservation (off by default)
            if config.elite_count > 0 {
                let mut ranked: Vec<usize> = (0..population.len()).collect();
                ranked.sort_by(|&a, &b| {
                    population[b]
                        .fitness()
                        .partial_cmp(&population[a].fitness())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                next_gen.extend(
                    ranked
                        .iter()
                        .take(config.elite_count)
                        .map(|&i| population[i].clone()),
                );
            }
            let elite_count = next_gen.len();

            // Generate offspring
            while next_gen.len() < config.population_size {
                let p1_idx = tournament_select(&population, config.tournament_size, &mut rng);
                let p2_idx = tournament_select(&population, config.tournament_size, &mut rng);

                let mut child = problem.crossover(&population[p1_idx], &population[p2_idx], &mut rng);
                problem.mutate(&mut child, &mut rng);
                next_gen.push(child);
            }

            // Evaluate new individuals (elites are already evaluated)
            evaluate_population(problem, &mut next_gen[elite_count..], config.parallel);

            population = next_gen;
            generations = gen + 1;

            let gen_best = population[best_index(&population)].fitness();
            fitness_history.push(gen_best.to_f64());
            log::debug!("generation {generations}: best fitness {:?}", gen_best);

            problem.on_generation(generations, gen_best);
        }

        let best = population[best_index(&population)].clone();
        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            cancelled,
            timed_out,
            fitness_history,
        })
    }
}

/// Evaluate all individuals in the slice.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Index of the fittest individual; the first one wins ties.
///
/// Returns 0 for an empty slice.
fn best_index<I: Individual>(population: &[I]) -> usize {
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // ---- OneMax problem: maximize count of true bits ----

    #[derive(Clone, Debug)]
    struct BitString {
        bits: Vec<bool>,
        fitness: f64,
    }

    impl Individual for BitString {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = f;
        }
    }

    struct OneMaxProblem {
        n: usize,
        stop_at: Option<(usize, Arc<AtomicBool>)>,
        slow_mutation: bool,
    }

    impl OneMaxProblem {
        fn new(n: usize) -> Self {
            Self {
                n,
                stop_at: None,
                slow_mutation: false,
            }
        }
    }

    impl GaProblem for OneMaxProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            let bits: Vec<bool> = (0..self.n).map(|_| rng.random_bool(0.5)).collect();
            BitString {
                bits,
                fitness: f64::NEG_INFINITY,
            }
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            ind.bits.iter().filter(|&&b| b).count() as f64
        }

        fn crossover<R: Rng>(&self, p1: &BitString, p2: &BitString, rng: &mut R) -> BitString {
            let point = rng.random_range(0..self.n);
            let mut bits = p1.bits[..point].to_vec();
            bits.extend_from_slice(&p2.bits[point..]);
            BitString {
                bits,
                fitness: f64::NEG_INFINITY,
            }
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            if self.slow_mutation {
                std::thread::sleep(Duration::from_millis(1));
            }
            for bit in ind.bits.iter_mut() {
                if rng.random_bool(0.02) {
                    *bit = !*bit;
                }
            }
        }

        fn on_generation(&self, generation: usize, _best: f64) {
            if let Some((at, ref flag)) = self.stop_at {
                if generation >= at {
                    flag.store(true, Ordering::Relaxed);
                }
            }
        }
    }

    fn sequential() -> GaConfig {
        GaConfig::default().with_seed(42).with_parallel(false)
    }

    #[test]
    fn test_onemax_improves() {
        let problem = OneMaxProblem::new(30);
        let config = sequential()
            .with_population_size(50)
            .with_max_generations(150);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_fitness >= 24.0,
            "expected fitness >= 24 for 30-bit OneMax, got {}",
            result.best_fitness
        );
        assert!(result.best_fitness >= result.fitness_history[0]);
    }

    #[test]
    fn test_runs_all_generations_without_early_stop() {
        let problem = OneMaxProblem::new(5);
        let config = sequential()
            .with_population_size(20)
            .with_max_generations(40);

        let result = GaRunner::run(&problem, &config).unwrap();

        // Even once the optimum (5) is found, the loop keeps going.
        assert_eq!(result.generations, 40);
        assert_eq!(result.fitness_history.len(), 41);
        assert!(!result.cancelled);
        assert!(!result.timed_out);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let problem = OneMaxProblem::new(16);
        let config = sequential()
            .with_population_size(20)
            .with_max_generations(25);

        let a = GaRunner::run(&problem, &config).unwrap();
        let b = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(a.best.bits, b.best.bits);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_cancel_before_start() {
        let problem = OneMaxProblem::new(10);
        let cancel = Arc::new(AtomicBool::new(true));

        let result = GaRunner::run_with_cancel(&problem, &sequential(), Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_cancel_mid_run() {
        let flag = Arc::new(AtomicBool::new(false));
        let problem = OneMaxProblem {
            stop_at: Some((3, flag.clone())),
            ..OneMaxProblem::new(10)
        };
        let config = sequential().with_population_size(10);

        let result = GaRunner::run_with_cancel(&problem, &config, Some(flag)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 3);
    }

    #[test]
    fn test_time_limit() {
        let problem = OneMaxProblem {
            slow_mutation: true,
            ..OneMaxProblem::new(10)
        };
        let config = sequential()
            .with_population_size(10)
            .with_max_generations(10_000)
            .with_time_limit_ms(5);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(result.timed_out);
        assert!(result.generations < 10_000);
    }

    #[test]
    fn test_elitism_is_monotonic() {
        let problem = OneMaxProblem::new(12);
        let config = sequential()
            .with_population_size(20)
            .with_max_generations(50)
            .with_elite_count(2);

        let result = GaRunner::run(&problem, &config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "fitness should never drop with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let problem = OneMaxProblem::new(8);
        let config = sequential().with_population_size(15).with_max_generations(0);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history, vec![result.best_fitness]);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let problem = OneMaxProblem::new(8);
        let config = sequential().with_population_size(0);
        assert!(matches!(
            GaRunner::run(&problem, &config),
            Err(TimetableError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_best_index_prefers_first_on_ties() {
        let pop: Vec<BitString> = [1.0, 3.0, 3.0, 2.0]
            .iter()
            .map(|&f| BitString {
                bits: vec![],
                fitness: f,
            })
            .collect();
        assert_eq!(best_index(&pop), 1);
    }

    // ---- Default crossover/mutate (clone, no-op) ----

    struct CloneProblem;

    impl GaProblem for CloneProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            BitString {
                bits: vec![rng.random_bool(0.5)],
                fitness: f64::NEG_INFINITY,
            }
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            if ind.bits[0] {
                1.0
            } else {
                0.0
            }
        }
    }

    #[test]
    fn test_default_operators() {
        let config = sequential().with_population_size(20).with_max_generations(10);
        let result = GaRunner::run(&CloneProblem, &config).unwrap();
        assert_eq!(result.generations, 10);
        assert!(result.best_fitness >= 0.0);
    }
}
