//! EV record and slot window models.
//!
//! An `EvRecord` is one vehicle's immutable scheduling input: its presence
//! window on the time grid and its state-of-charge start and target.
//!
//! # Time Representation
//! All times are discrete slot indices on a uniform [`TimeGrid`](super::TimeGrid).
//! The consumer defines the slot width and what slot 0 means.

use serde::{Deserialize, Serialize};

/// Identifier of a charging station, in `[0, num_stations)`.
pub type StationId = usize;

/// A half-open slot interval `[arrival, departure)`.
///
/// Includes the arrival slot, excludes the departure slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotWindow {
    /// First slot the vehicle is plugged in (inclusive).
    pub arrival_slot: usize,
    /// First slot after the vehicle has left (exclusive).
    pub departure_slot: usize,
}

impl SlotWindow {
    /// Creates a new slot window.
    pub fn new(arrival_slot: usize, departure_slot: usize) -> Self {
        Self {
            arrival_slot,
            departure_slot,
        }
    }

    /// Number of slots the vehicle is present.
    #[inline]
    pub fn duration_slots(&self) -> usize {
        self.departure_slot.saturating_sub(self.arrival_slot)
    }

    /// Whether a slot falls within this window.
    #[inline]
    pub fn contains(&self, slot: usize) -> bool {
        slot >= self.arrival_slot && slot < self.departure_slot
    }
}

/// One vehicle's scheduling input.
///
/// Immutable for the lifetime of a run. The `station_id` field records the
/// station the vehicle reported in the input data; the scheduler consumes it
/// only to count distinct stations, never as an assignment constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvRecord {
    /// Unique vehicle identifier.
    pub id: String,
    /// Presence window on the time grid.
    pub window: SlotWindow,
    /// State of charge when the vehicle arrives.
    pub initial_soc: f64,
    /// State of charge the vehicle wants on departure.
    pub target_soc: f64,
    /// Station reported in the input data (cardinality only).
    pub station_id: StationId,
}

impl EvRecord {
    /// Creates a new record with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            window: SlotWindow::new(0, 0),
            initial_soc: 0.0,
            target_soc: 0.0,
            station_id: 0,
        }
    }

    /// Sets the presence window `[arrival, departure)`.
    pub fn with_window(mut self, arrival_slot: usize, departure_slot: usize) -> Self {
        self.window = SlotWindow::new(arrival_slot, departure_slot);
        self
    }

    /// Sets initial and target state of charge.
    pub fn with_soc(mut self, initial_soc: f64, target_soc: f64) -> Self {
        self.initial_soc = initial_soc;
        self.target_soc = target_soc;
        self
    }

    /// Sets the station reported in the input data.
    pub fn with_station(mut self, station_id: StationId) -> Self {
        self.station_id = station_id;
        self
    }

    /// SOC still to be delivered at arrival. Negative when the vehicle
    /// arrives above its target.
    #[inline]
    pub fn soc_deficit(&self) -> f64 {
        self.target_soc - self.initial_soc
    }
}
