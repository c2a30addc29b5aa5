//! Fitness evaluation for station assignments.
//!
//! Bridges the immutable fleet inputs to the search engine: sampling random
//! particles and scoring a particle as the summed simulator cost of every
//! vehicle. Pure with respect to the fixed inputs: evaluating the same
//! particle twice yields the same cost.

use rand::Rng;

use super::Assignment;
use crate::models::{EvRecord, PriceSeries, RateSeries, TimeGrid};
use crate::simulator;

/// The search-facing view of one scheduling run's inputs.
///
/// All borrowed data is read-only for the duration of a run.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentProblem<'a> {
    evs: &'a [EvRecord],
    grid: &'a TimeGrid,
    rates: &'a RateSeries,
    prices: &'a PriceSeries,
    num_stations: usize,
}

impl<'a> AssignmentProblem<'a> {
    /// Creates a problem over the given inputs.
    pub fn new(
        evs: &'a [EvRecord],
        grid: &'a TimeGrid,
        rates: &'a RateSeries,
        prices: &'a PriceSeries,
        num_stations: usize,
    ) -> Self {
        Self {
            evs,
            grid,
            rates,
            prices,
            num_stations,
        }
    }

    /// Number of vehicles in the fleet.
    #[inline]
    pub fn num_evs(&self) -> usize {
        self.evs.len()
    }

    /// Number of stations in the search space.
    #[inline]
    pub fn num_stations(&self) -> usize {
        self.num_stations
    }

    /// Samples a uniformly random particle.
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> Assignment {
        Assignment::random(self.evs.len(), self.num_stations, rng)
    }

    /// Total fleet cost under an assignment (lower is better).
    ///
    /// The sum of each vehicle's fast-mode simulation cost.
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        debug_assert_eq!(assignment.len(), self.evs.len());
        self.evs
            .iter()
            .map(|ev| simulator::simulate_cost(ev, self.grid, self.rates, self.prices))
            .sum()
    }
}
