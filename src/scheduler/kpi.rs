//! Fleet plan summary metrics.
//!
//! Computes indicators from a completed fleet plan: net energy cost under
//! the rate and price series, per-action slot counts, and station loading.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Net Cost | Σ charge slots (price × rate) − Σ discharge slots (price × rate) |
//! | Charge / Discharge / Idle Slots | Per-action slot counts across the fleet |
//! | EVs per Station | How many vehicles each station was assigned |

use std::collections::BTreeMap;

use crate::models::{Action, FleetSchedule, PriceSeries, RateSeries, StationId};

/// Summary indicators for a completed fleet plan.
#[derive(Debug, Clone)]
pub struct FleetKpi {
    /// Net energy cost of the fleet as planned (after any V2G overrides).
    pub net_cost: f64,
    /// Slots spent charging across the fleet.
    pub charge_slots: usize,
    /// Slots spent discharging across the fleet.
    pub discharge_slots: usize,
    /// Idle slots across the fleet.
    pub idle_slots: usize,
    /// Vehicles per assigned station.
    pub evs_per_station: BTreeMap<StationId, usize>,
}

impl FleetKpi {
    /// Computes indicators from a fleet plan and its input series.
    pub fn calculate(fleet: &FleetSchedule, rates: &RateSeries, prices: &PriceSeries) -> Self {
        let mut net_cost = 0.0;
        let mut charge_slots = 0;
        let mut discharge_slots = 0;
        let mut idle_slots = 0;
        let mut evs_per_station: BTreeMap<StationId, usize> = BTreeMap::new();

        for plan in fleet.iter() {
            *evs_per_station.entry(plan.station).or_insert(0) += 1;
            for entry in &plan.entries {
                match entry.action {
                    Action::Charge => {
                        charge_slots += 1;
                        net_cost += prices.at(entry.slot) * rates.at(entry.slot);
                    }
                    Action::Discharge => {
                        discharge_slots += 1;
                        net_cost -= prices.at(entry.slot) * rates.at(entry.slot);
                    }
                    Action::Idle => idle_slots += 1,
                }
            }
        }

        Self {
            net_cost,
            charge_slots,
            discharge_slots,
            idle_slots,
            evs_per_station,
        }
    }

    /// Fraction of slots with active energy transfer (0.0..1.0).
    pub fn active_rate(&self) -> f64 {
        let total = self.charge_slots + self.discharge_slots + self.idle_slots;
        if total == 0 {
            return 0.0;
        }
        (self.charge_slots + self.discharge_slots) as f64 / total as f64
    }
}
