//! Elitist perturbation search over station assignments.
//!
//! A fixed-budget population search: each generation scores the whole
//! population, takes its best particle, and lets every particle jump to a
//! small random perturbation of that elitist with a fixed probability.
//! A simplified scheme in the spirit of Henry gas solubility optimization
//! (Hashim et al., 2019): no solubility model and no gas clusters, just a
//! best-of-generation guided random walk.
//!
//! The engine returns the elitist of the *final* generation, not the best
//! particle ever observed; an accepted perturbation can regress, and the
//! result may be worse than an earlier generation's elitist.
//!
//! # Reproducibility
//!
//! The engine owns its random source. With [`SearchConfig::with_seed`] set,
//! two runs over the same inputs produce identical assignments.

mod particle;
mod problem;

pub use particle::Assignment;
pub use problem::AssignmentProblem;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::{ConfigError, ScheduleError};

/// Search engine parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of particles in the population.
    pub population_size: usize,
    /// Number of generations to run.
    pub iterations: usize,
    /// Per-particle probability of jumping to a perturbed elitist.
    pub perturb_probability: f64,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            iterations: 100,
            perturb_probability: 0.1,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the population size (at least 1).
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size.max(1);
        self
    }

    /// Sets the generation count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the per-particle perturbation probability, clamped to `[0, 1]`.
    pub fn with_perturb_probability(mut self, probability: f64) -> Self {
        self.perturb_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Fixed-budget elitist perturbation search engine.
#[derive(Debug, Clone)]
pub struct ElitistSearch {
    config: SearchConfig,
}

impl ElitistSearch {
    /// Creates an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Runs the search to completion and returns the final elitist.
    pub fn run(&self, problem: &AssignmentProblem) -> Result<Assignment, ScheduleError> {
        self.run_until(problem, || false)
    }

    /// Runs the search, consulting `cancelled` once per generation.
    ///
    /// When the predicate turns true, iteration stops and the most recent
    /// elitist (or an initial particle, if no generation was scored yet)
    /// is returned.
    pub fn run_until(
        &self,
        problem: &AssignmentProblem,
        cancelled: impl Fn() -> bool,
    ) -> Result<Assignment, ScheduleError> {
        if problem.num_evs() == 0 {
            return Err(ConfigError::EmptyFleet.into());
        }
        if problem.num_stations() == 0 {
            return Err(ConfigError::NoStations.into());
        }

        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let perturb_probability = self.config.perturb_probability.clamp(0.0, 1.0);
        let population_size = self.config.population_size.max(1);
        let mut population: Vec<Assignment> = (0..population_size)
            .map(|_| problem.random_assignment(&mut rng))
            .collect();

        let mut elitist = population[0].clone();
        for generation in 0..self.config.iterations {
            if cancelled() {
                debug!(generation, "search cancelled");
                break;
            }

            let fitness: Vec<f64> = population.iter().map(|p| problem.evaluate(p)).collect();
            let best = argmin(&fitness);
            elitist = population[best].clone();
            debug!(generation, best_fitness = fitness[best], "generation scored");

            for particle in population.iter_mut() {
                if rng.random_bool(perturb_probability) {
                    *particle =
                        Assignment::perturb_from(&elitist, problem.num_stations(), &mut rng);
                }
            }
        }

        Ok(elitist)
    }
}

/// Index of the minimum value; the lowest index wins ties.
fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (index, &value) in values.iter().enumerate().skip(1) {
        if value < values[best] {
            best = index;
        }
    }
    best
}
