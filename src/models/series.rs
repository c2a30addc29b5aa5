//! Time grid and per-slot input series.
//!
//! The time axis is a uniform grid of T discrete slots. Charge rates and
//! energy prices are supplied per slot; both series must be exactly T long,
//! which `validation` checks before any scheduling work.

use serde::{Deserialize, Serialize};

/// Discrete time axis of uniform-width slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeGrid {
    /// Total number of slots.
    pub slots: usize,
}

impl TimeGrid {
    /// Creates a grid with the given slot count.
    pub fn new(slots: usize) -> Self {
        Self { slots }
    }

    /// Iterator over slot indices `0..T`.
    pub fn slot_indices(&self) -> std::ops::Range<usize> {
        0..self.slots
    }

    /// Whether a slot index lies on the grid.
    #[inline]
    pub fn contains(&self, slot: usize) -> bool {
        slot < self.slots
    }
}

/// Per-slot charge/discharge magnitude: the amount of SOC moved during one
/// active slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateSeries {
    /// One rate per slot.
    pub values: Vec<f64>,
}

impl RateSeries {
    /// Creates a series from per-slot values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Creates a series with the same rate in every slot.
    pub fn uniform(value: f64, slots: usize) -> Self {
        Self {
            values: vec![value; slots],
        }
    }

    /// Number of slots covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rate for a slot.
    #[inline]
    pub fn at(&self, slot: usize) -> f64 {
        self.values[slot]
    }
}

impl From<Vec<f64>> for RateSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Per-slot energy price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSeries {
    /// One price per slot.
    pub values: Vec<f64>,
}

impl PriceSeries {
    /// Creates a series from per-slot values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Creates a series with the same price in every slot.
    pub fn uniform(value: f64, slots: usize) -> Self {
        Self {
            values: vec![value; slots],
        }
    }

    /// Number of slots covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Price for a slot.
    #[inline]
    pub fn at(&self, slot: usize) -> f64 {
        self.values[slot]
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
