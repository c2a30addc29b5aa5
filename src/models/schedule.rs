//! Per-slot action plans (solution model).
//!
//! An `EvSchedule` is one vehicle's complete plan: exactly one action per
//! grid slot. A `FleetSchedule` collects the plans for a whole run,
//! preserving the input order of the vehicles.

use serde::{Deserialize, Serialize};

use super::StationId;

/// Per-slot action for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Grid-to-vehicle: draw energy, SOC rises.
    Charge,
    /// Vehicle-to-grid: feed energy back, SOC falls.
    Discharge,
    /// No energy transfer.
    Idle,
}

/// One slot of a vehicle's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Slot index on the time grid.
    pub slot: usize,
    /// Action taken during the slot.
    pub action: Action,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(slot: usize, action: Action) -> Self {
        Self { slot, action }
    }
}

/// A vehicle's complete plan: one entry per grid slot, in slot order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvSchedule {
    /// Vehicle this plan belongs to.
    pub ev_id: String,
    /// Station the vehicle was assigned to.
    pub station: StationId,
    /// One entry per slot.
    pub entries: Vec<ScheduleEntry>,
}

impl EvSchedule {
    /// Creates a plan from its parts.
    pub fn new(ev_id: impl Into<String>, station: StationId, entries: Vec<ScheduleEntry>) -> Self {
        Self {
            ev_id: ev_id.into(),
            station,
            entries,
        }
    }

    /// Action at a slot, if the slot lies on the grid.
    pub fn action_at(&self, slot: usize) -> Option<Action> {
        self.entries.get(slot).map(|e| e.action)
    }

    /// Slots where the plan takes the given action.
    pub fn slots_with(&self, action: Action) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|e| e.action == action)
            .map(|e| e.slot)
            .collect()
    }

    /// Number of slots in the plan.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan has no slots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered plans for a whole fleet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetSchedule {
    /// One plan per vehicle, in input order.
    pub schedules: Vec<EvSchedule>,
}

impl FleetSchedule {
    /// Creates an empty fleet schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vehicle's plan.
    pub fn push(&mut self, schedule: EvSchedule) {
        self.schedules.push(schedule);
    }

    /// Number of vehicles covered.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether the fleet schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Iterates over the plans in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, EvSchedule> {
        self.schedules.iter()
    }

    /// Finds the plan for a given vehicle.
    pub fn schedule_for(&self, ev_id: &str) -> Option<&EvSchedule> {
        self.schedules.iter().find(|s| s.ev_id == ev_id)
    }
}
