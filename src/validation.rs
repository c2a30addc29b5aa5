//! Input validation for scheduling runs.
//!
//! All checks run eagerly at the scheduler boundary, before any search
//! work. Detects:
//! - Empty fleets, empty time grids
//! - Rate/price series whose length disagrees with the grid
//! - Vehicle windows that are empty or fall off the grid
//!
//! Fleet-level configuration problems short-circuit; per-vehicle window
//! problems are collected so a caller sees every offending record at once.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{EvRecord, PriceSeries, RateSeries, TimeGrid};

/// Fleet-level configuration problems, detected before per-record checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No EV records were supplied.
    #[error("EV record list is empty")]
    EmptyFleet,
    /// The time grid has no slots.
    #[error("time grid has zero slots")]
    EmptyTimeGrid,
    /// A per-slot series does not cover the grid.
    #[error("{series} series has {actual} entries, expected {expected}")]
    SeriesLength {
        /// Which series disagrees ("rate" or "price").
        series: &'static str,
        /// Slot count of the grid.
        expected: usize,
        /// Actual series length.
        actual: usize,
    },
    /// No distinct stations could be derived from the records.
    #[error("no charging stations could be derived from the EV records")]
    NoStations,
}

/// Per-vehicle input problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Departure does not lie after arrival.
    #[error("EV '{ev_id}': departure slot {departure} is not after arrival slot {arrival}")]
    EmptyWindow {
        /// Offending vehicle.
        ev_id: String,
        /// Arrival slot of the record.
        arrival: usize,
        /// Departure slot of the record.
        departure: usize,
    },
    /// The window extends past the end of the grid.
    #[error("EV '{ev_id}': window [{arrival}, {departure}) falls outside the {slots}-slot grid")]
    WindowOutOfRange {
        /// Offending vehicle.
        ev_id: String,
        /// Arrival slot of the record.
        arrival: usize,
        /// Departure slot of the record.
        departure: usize,
        /// Slot count of the grid.
        slots: usize,
    },
}

/// Any error a scheduling run can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Fleet-level configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// One or more EV records failed validation.
    #[error("{} EV record(s) failed validation", .0.len())]
    Validation(Vec<ValidationError>),
}

/// Counts distinct station identifiers across the input records.
///
/// This cardinality sizes the assignment search space; the per-record
/// station values themselves impose no constraint.
pub fn station_cardinality(evs: &[EvRecord]) -> usize {
    evs.iter()
        .map(|ev| ev.station_id)
        .collect::<HashSet<_>>()
        .len()
}

/// Validates a complete set of scheduling inputs.
///
/// Checks:
/// 1. The fleet is non-empty and the grid has at least one slot.
/// 2. Rate and price series both cover exactly the grid.
/// 3. At least one station can be derived from the records.
/// 4. Every vehicle window is non-empty and lies within `[0, T]`.
///
/// Configuration checks (1-3) short-circuit; window checks (4) are
/// collected across all records.
pub fn validate_inputs(
    evs: &[EvRecord],
    grid: &TimeGrid,
    rates: &RateSeries,
    prices: &PriceSeries,
) -> Result<(), ScheduleError> {
    if evs.is_empty() {
        return Err(ConfigError::EmptyFleet.into());
    }
    if grid.slots == 0 {
        return Err(ConfigError::EmptyTimeGrid.into());
    }
    if rates.len() != grid.slots {
        return Err(ConfigError::SeriesLength {
            series: "rate",
            expected: grid.slots,
            actual: rates.len(),
        }
        .into());
    }
    if prices.len() != grid.slots {
        return Err(ConfigError::SeriesLength {
            series: "price",
            expected: grid.slots,
            actual: prices.len(),
        }
        .into());
    }
    if station_cardinality(evs) == 0 {
        return Err(ConfigError::NoStations.into());
    }

    let mut errors = Vec::new();
    for ev in evs {
        let w = ev.window;
        if w.departure_slot <= w.arrival_slot {
            errors.push(ValidationError::EmptyWindow {
                ev_id: ev.id.clone(),
                arrival: w.arrival_slot,
                departure: w.departure_slot,
            });
        }
        if w.arrival_slot > grid.slots || w.departure_slot > grid.slots {
            errors.push(ValidationError::WindowOutOfRange {
                ev_id: ev.id.clone(),
                arrival: w.arrival_slot,
                departure: w.departure_slot,
                slots: grid.slots,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ScheduleError::Validation(errors))
    }
}
