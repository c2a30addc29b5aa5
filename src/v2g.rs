//! Station-keyed forced-discharge slots.
//!
//! Some stations must feed energy back to the grid during fixed slots,
//! regardless of what the SOC walk chose for the vehicle parked there.
//! The station-to-slots mapping is configuration, held in a [`V2gPlan`]
//! table; stations absent from the table are never overridden.
//!
//! Enforcement does not consult the vehicle's presence window; a forced
//! slot outside `[arrival, departure)` is still overwritten to discharge.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Action, EvSchedule, StationId, TimeGrid};

/// Position of a forced slot, absolute or relative to the end of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotOffset {
    /// Absolute slot index from the start of the grid.
    FromStart(usize),
    /// Slots counted back from the end: `FromEnd(1)` is the last slot.
    FromEnd(usize),
}

impl SlotOffset {
    /// Resolves to a concrete slot index, if it lands on the grid.
    pub fn resolve(&self, grid: &TimeGrid) -> Option<usize> {
        match *self {
            SlotOffset::FromStart(slot) if slot < grid.slots => Some(slot),
            SlotOffset::FromEnd(back) if back >= 1 && back <= grid.slots => {
                Some(grid.slots - back)
            }
            _ => None,
        }
    }
}

/// Station-to-forced-slots table.
///
/// The default table covers stations 1, 2, and 3: late feed-in slots for
/// stations 1 and 3, early slots for station 2. [`with_station`](V2gPlan::with_station)
/// extends or replaces entries for any station id.
///
/// # Example
///
/// ```
/// use ev_schedule::models::TimeGrid;
/// use ev_schedule::v2g::{SlotOffset, V2gPlan};
///
/// let plan = V2gPlan::new()
///     .with_station(0, vec![SlotOffset::FromEnd(1), SlotOffset::FromStart(2)]);
///
/// let grid = TimeGrid::new(8);
/// assert_eq!(plan.resolve(0, &grid), vec![7, 2]);
/// assert!(plan.resolve(5, &grid).is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V2gPlan {
    /// Forced slots per station.
    stations: BTreeMap<StationId, Vec<SlotOffset>>,
}

impl Default for V2gPlan {
    fn default() -> Self {
        Self::new()
            .with_station(
                1,
                vec![
                    SlotOffset::FromEnd(3),
                    SlotOffset::FromEnd(4),
                    SlotOffset::FromEnd(5),
                ],
            )
            .with_station(2, vec![SlotOffset::FromStart(1), SlotOffset::FromStart(3)])
            .with_station(
                3,
                vec![
                    SlotOffset::FromEnd(2),
                    SlotOffset::FromEnd(3),
                    SlotOffset::FromStart(2),
                ],
            )
    }
}

impl V2gPlan {
    /// Creates an empty plan: no station is forced.
    pub fn new() -> Self {
        Self {
            stations: BTreeMap::new(),
        }
    }

    /// Sets the forced slots for a station, replacing any existing entry.
    pub fn with_station(mut self, station: StationId, offsets: Vec<SlotOffset>) -> Self {
        self.stations.insert(station, offsets);
        self
    }

    /// Stations that have forced slots configured.
    pub fn configured_stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.keys().copied()
    }

    /// Concrete forced slot indices for a station on the given grid.
    ///
    /// Offsets that fall outside the grid are skipped. Stations without an
    /// entry resolve to no slots.
    pub fn resolve(&self, station: StationId, grid: &TimeGrid) -> Vec<usize> {
        self.stations
            .get(&station)
            .map(|offsets| offsets.iter().filter_map(|o| o.resolve(grid)).collect())
            .unwrap_or_default()
    }

    /// Overwrites the forced slots of a vehicle's plan with [`Action::Discharge`].
    ///
    /// Applies unconditionally: neither the previously computed action nor
    /// the vehicle's presence window is consulted. Entries at all other
    /// slots are untouched.
    pub fn apply(&self, schedule: &mut EvSchedule, grid: &TimeGrid) {
        for slot in self.resolve(schedule.station, grid) {
            if let Some(entry) = schedule.entries.get_mut(slot) {
                entry.action = Action::Discharge;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn idle_plan(station: StationId, slots: usize) -> EvSchedule {
        let entries = (0..slots)
            .map(|slot| ScheduleEntry::new(slot, Action::Idle))
            .collect();
        EvSchedule::new("EV1", station, entries)
    }

    #[test]
    fn test_offset_resolution() {
        let grid = TimeGrid::new(24);
        assert_eq!(SlotOffset::FromStart(0).resolve(&grid), Some(0));
        assert_eq!(SlotOffset::FromStart(23).resolve(&grid), Some(23));
        assert_eq!(SlotOffset::FromStart(24).resolve(&grid), None);
        assert_eq!(SlotOffset::FromEnd(1).resolve(&grid), Some(23));
        assert_eq!(SlotOffset::FromEnd(3).resolve(&grid), Some(21));
        assert_eq!(SlotOffset::FromEnd(24).resolve(&grid), Some(0));
        assert_eq!(SlotOffset::FromEnd(25).resolve(&grid), None);
        assert_eq!(SlotOffset::FromEnd(0).resolve(&grid), None);
    }

    #[test]
    fn test_default_table() {
        let plan = V2gPlan::default();
        let grid = TimeGrid::new(24);

        assert_eq!(plan.resolve(1, &grid), vec![21, 20, 19]);
        assert_eq!(plan.resolve(2, &grid), vec![1, 3]);
        assert_eq!(plan.resolve(3, &grid), vec![22, 21, 2]);
        assert!(plan.resolve(0, &grid).is_empty());
        assert_eq!(plan.configured_stations().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_apply_overrides_any_action() {
        let plan = V2gPlan::new().with_station(0, vec![SlotOffset::FromStart(1)]);
        let grid = TimeGrid::new(4);

        let mut schedule = idle_plan(0, 4);
        schedule.entries[1].action = Action::Charge;
        plan.apply(&mut schedule, &grid);

        assert_eq!(schedule.action_at(1), Some(Action::Discharge));
        assert_eq!(schedule.action_at(0), Some(Action::Idle));
        assert_eq!(schedule.action_at(2), Some(Action::Idle));
        assert_eq!(schedule.action_at(3), Some(Action::Idle));
    }

    #[test]
    fn test_apply_skips_unconfigured_station() {
        let plan = V2gPlan::new().with_station(2, vec![SlotOffset::FromStart(0)]);
        let grid = TimeGrid::new(4);

        let mut schedule = idle_plan(7, 4);
        plan.apply(&mut schedule, &grid);
        assert!(schedule.slots_with(Action::Discharge).is_empty());
    }

    #[test]
    fn test_apply_skips_offsets_off_the_grid() {
        // FromEnd(5) does not exist on a 3-slot grid.
        let plan = V2gPlan::new().with_station(
            0,
            vec![SlotOffset::FromEnd(5), SlotOffset::FromStart(0)],
        );
        let grid = TimeGrid::new(3);

        let mut schedule = idle_plan(0, 3);
        plan.apply(&mut schedule, &grid);
        assert_eq!(schedule.slots_with(Action::Discharge), vec![0]);
    }

    #[test]
    fn test_with_station_replaces_entry() {
        let plan = V2gPlan::default().with_station(2, vec![SlotOffset::FromStart(5)]);
        let grid = TimeGrid::new(24);
        assert_eq!(plan.resolve(2, &grid), vec![5]);
    }

    #[test]
    fn test_serde_round_trip() {
        let plan = V2gPlan::default();
        let json = serde_json::to_string(&plan).unwrap();
        let back: V2gPlan = serde_json::from_str(&json).unwrap();
        let grid = TimeGrid::new(24);
        assert_eq!(back.resolve(3, &grid), plan.resolve(3, &grid));
    }
}
