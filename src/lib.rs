//! EV charging scheduling: station assignment and per-slot action planning.
//!
//! Assigns each electric vehicle in a fleet to a charging station and builds
//! a per-time-slot action plan (charge / discharge / idle) that minimizes
//! total energy cost, subject to each vehicle's arrival/departure window and
//! state-of-charge target. Selected stations can carry forced
//! vehicle-to-grid slots that override the cost-driven plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `EvRecord`, `TimeGrid`, `RateSeries`,
//!   `PriceSeries`, `Action`, `EvSchedule`, `FleetSchedule`
//! - **`validation`**: Eager input checks (series lengths, slot windows)
//! - **`simulator`**: Deterministic per-slot SOC walk (cost + plan modes)
//! - **`search`**: Elitist perturbation search over station assignments
//! - **`v2g`**: Station-keyed forced-discharge slot table
//! - **`scheduler`**: Orchestrator wiring search, simulation, and enforcement
//!
//! # Architecture
//!
//! Data flows one direction: the scheduler validates inputs, runs the search
//! once (each candidate assignment is scored by simulating every vehicle),
//! then rebuilds detailed plans for the winning assignment and applies the
//! V2G overrides. The whole run is a synchronous, single-threaded batch;
//! the only randomness is the search engine's own seedable generator.
//!
//! # References
//!
//! - Hashim et al. (2019), "Henry gas solubility optimization"
//! - García-Villalobos et al. (2014), "Plug-in electric vehicles in electric
//!   distribution networks: A review of smart charging approaches"

pub mod models;
pub mod scheduler;
pub mod search;
pub mod simulator;
pub mod v2g;
pub mod validation;
