//! Scheduling orchestrator.
//!
//! Wires validation, the station assignment search, per-vehicle plan
//! reconstruction, and V2G slot enforcement into a single batch run.
//!
//! # Algorithm
//!
//! 1. Validate all inputs eagerly; no work happens on malformed input.
//! 2. Derive the station count from the distinct station ids in the records.
//! 3. Run the elitist search once to pick a station per vehicle.
//! 4. For each vehicle, in input order: rebuild the detailed plan under its
//!    assigned station, then apply the V2G table for that station.

mod kpi;

pub use kpi::FleetKpi;

use tracing::{debug, info};

use crate::models::{EvRecord, FleetSchedule, PriceSeries, RateSeries, TimeGrid};
use crate::search::{AssignmentProblem, ElitistSearch, SearchConfig};
use crate::simulator;
use crate::v2g::V2gPlan;
use crate::validation::{self, ScheduleError};

/// EV fleet scheduler.
///
/// Owns the immutable inputs for one scheduling run. `schedule` may be
/// called repeatedly; with a seeded [`SearchConfig`] repeated runs produce
/// identical output.
///
/// # Example
///
/// ```
/// use ev_schedule::models::{EvRecord, PriceSeries, RateSeries, TimeGrid};
/// use ev_schedule::scheduler::EvScheduler;
/// use ev_schedule::search::SearchConfig;
///
/// let evs = vec![
///     EvRecord::new("EV1").with_window(0, 4).with_soc(30.0, 80.0).with_station(1),
///     EvRecord::new("EV2").with_window(1, 4).with_soc(50.0, 90.0).with_station(2),
/// ];
/// let grid = TimeGrid::new(4);
/// let rates = RateSeries::uniform(10.0, 4);
/// let prices = PriceSeries::uniform(1.0, 4);
///
/// let scheduler = EvScheduler::new(evs, grid, rates, prices)
///     .with_search_config(SearchConfig::default().with_seed(42));
/// let fleet = scheduler.schedule().unwrap();
/// assert_eq!(fleet.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct EvScheduler {
    evs: Vec<EvRecord>,
    grid: TimeGrid,
    rates: RateSeries,
    prices: PriceSeries,
    search_config: SearchConfig,
    v2g_plan: V2gPlan,
}

impl EvScheduler {
    /// Creates a scheduler over the given inputs.
    pub fn new(
        evs: Vec<EvRecord>,
        grid: TimeGrid,
        rates: RateSeries,
        prices: PriceSeries,
    ) -> Self {
        Self {
            evs,
            grid,
            rates,
            prices,
            search_config: SearchConfig::default(),
            v2g_plan: V2gPlan::default(),
        }
    }

    /// Sets the search parameters.
    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.search_config = config;
        self
    }

    /// Sets the V2G enforcement table.
    pub fn with_v2g_plan(mut self, plan: V2gPlan) -> Self {
        self.v2g_plan = plan;
        self
    }

    /// The vehicle records this scheduler was built over.
    pub fn evs(&self) -> &[EvRecord] {
        &self.evs
    }

    /// Runs one scheduling pass: validate, search, rebuild, enforce.
    ///
    /// Returns one plan per input record, in input order, each with exactly
    /// one entry per grid slot. On malformed input the specific
    /// [`ScheduleError`] is returned and no plans are produced.
    pub fn schedule(&self) -> Result<FleetSchedule, ScheduleError> {
        validation::validate_inputs(&self.evs, &self.grid, &self.rates, &self.prices)?;

        let num_stations = validation::station_cardinality(&self.evs);
        info!(
            num_evs = self.evs.len(),
            num_stations,
            slots = self.grid.slots,
            "scheduling fleet"
        );

        let problem = AssignmentProblem::new(
            &self.evs,
            &self.grid,
            &self.rates,
            &self.prices,
            num_stations,
        );
        let assignment = ElitistSearch::new(self.search_config.clone()).run(&problem)?;

        let mut fleet = FleetSchedule::new();
        for (index, ev) in self.evs.iter().enumerate() {
            let station = assignment.station_for(index);
            let mut plan =
                simulator::simulate_schedule(ev, station, &self.grid, &self.rates, &self.prices);
            self.v2g_plan.apply(&mut plan, &self.grid);
            debug!(ev = %ev.id, station, "plan built");
            fleet.push(plan);
        }
        Ok(fleet)
    }
}
