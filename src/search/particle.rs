//! Station assignment particles.
//!
//! A particle assigns one station to every vehicle in the fleet, in input
//! order. Particles exist only inside a search run; the engine owns and
//! mutates the population.

use rand::Rng;

use crate::models::StationId;

/// One candidate solution: a station choice per vehicle.
///
/// Invariant: every gene lies in `[0, num_stations)`. Construction through
/// [`random`](Assignment::random) and [`perturb_from`](Assignment::perturb_from)
/// maintains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Station per vehicle, indexed by input position.
    pub stations: Vec<StationId>,
}

impl Assignment {
    /// Creates a particle with uniformly random stations.
    pub fn random<R: Rng>(num_evs: usize, num_stations: usize, rng: &mut R) -> Self {
        let stations = (0..num_evs)
            .map(|_| rng.random_range(0..num_stations))
            .collect();
        Self { stations }
    }

    /// Creates a particle by perturbing an elitist: each gene moves by
    /// -1, 0, or +1 station, then clamps into `[0, num_stations)`.
    pub fn perturb_from<R: Rng>(elitist: &Assignment, num_stations: usize, rng: &mut R) -> Self {
        let max = num_stations as i64 - 1;
        let stations = elitist
            .stations
            .iter()
            .map(|&station| {
                let offset = rng.random_range(-1..=1i64);
                (station as i64 + offset).clamp(0, max) as StationId
            })
            .collect();
        Self { stations }
    }

    /// Station assigned to the vehicle at `index`.
    #[inline]
    pub fn station_for(&self, index: usize) -> StationId {
        self.stations[index]
    }

    /// Number of vehicles covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the particle covers no vehicles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Whether every gene lies in `[0, num_stations)`.
    pub fn is_valid(&self, num_stations: usize) -> bool {
        self.stations.iter().all(|&s| s < num_stations)
    }
}
