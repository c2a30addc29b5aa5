//! EV charging domain models.
//!
//! Core data types for representing a fleet scheduling problem and its
//! solution: vehicle records, the discrete time axis with its rate and
//! price series, and per-slot action plans.
//!
//! # Domain Mappings
//!
//! | Type | Meaning |
//! |------|---------|
//! | `EvRecord` | One vehicle's presence window and SOC targets |
//! | `TimeGrid` | Uniform discrete time axis of T slots |
//! | `RateSeries` / `PriceSeries` | Per-slot charge magnitude / energy price |
//! | `EvSchedule` | One action per slot for one vehicle |
//! | `FleetSchedule` | All plans of a run, in input order |

mod ev;
mod schedule;
mod series;

pub use ev::{EvRecord, SlotWindow, StationId};
pub use schedule::{Action, EvSchedule, FleetSchedule, ScheduleEntry};
pub use series::{PriceSeries, RateSeries, TimeGrid};
