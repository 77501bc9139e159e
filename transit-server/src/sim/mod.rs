//! Live vehicle position simulation.
//!
//! Vehicles are seeded once at process start and perturbed on a fixed
//! cadence. This is a cosmetic random walk, not a routed simulation:
//! positions and speed drift within bounds, while heading and next stop
//! stay as seeded.

mod live;

pub use live::{LiveFleet, SimulatorHandle, spawn_simulator};

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domain::{RouteId, StopId, VehicleId};

/// Tuning for the position simulator.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Seconds between ticks.
    pub tick_secs: u64,

    /// Half-width of the uniform per-tick coordinate drift, in degrees.
    pub coordinate_jitter: f64,

    /// Half-width of the uniform per-tick speed drift.
    pub speed_jitter: f64,

    /// Lower speed clamp, applied after every tick.
    pub min_speed: f64,

    /// Upper speed clamp, applied after every tick.
    pub max_speed: f64,
}

impl SimConfig {
    /// Returns the tick period as a Duration.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(self.tick_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_secs: 5,
            coordinate_jitter: 0.0005,
            speed_jitter: 5.0,
            min_speed: 5.0,
            max_speed: 35.0,
        }
    }
}

/// A simulated bus bound to one route.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub route: RouteId,
    pub latitude: f64,
    pub longitude: f64,

    /// Compass heading in degrees. Informational; ticks never change it.
    pub heading: u16,

    pub speed: f64,
    pub last_update: DateTime<Utc>,

    /// The stop the vehicle is notionally approaching. Informational.
    pub next_stop: StopId,
}

/// The owned simulation state: every vehicle in the session.
///
/// Built once from the seed list. Vehicles are mutated in place on each
/// tick and never added or removed while the session runs.
#[derive(Debug, Clone)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Apply one simulation tick to every vehicle, sequentially.
    ///
    /// Latitude and longitude each drift by an independent uniform draw
    /// within the configured jitter; speed drifts the same way and is
    /// clamped into the configured band; the update timestamp is set to
    /// `now`. Heading and next stop are left untouched.
    pub fn tick(&mut self, config: &SimConfig, rng: &mut impl Rng, now: DateTime<Utc>) {
        for vehicle in &mut self.vehicles {
            vehicle.latitude +=
                rng.random_range(-config.coordinate_jitter..=config.coordinate_jitter);
            vehicle.longitude +=
                rng.random_range(-config.coordinate_jitter..=config.coordinate_jitter);

            let drift = rng.random_range(-config.speed_jitter..=config.speed_jitter);
            vehicle.speed = (vehicle.speed + drift).clamp(config.min_speed, config.max_speed);

            vehicle.last_update = now;
        }
    }
}

/// The vehicles on the road at process start.
pub fn seed_fleet(now: DateTime<Utc>) -> Vec<Vehicle> {
    fn vehicle(
        id: &str,
        route: &str,
        latitude: f64,
        longitude: f64,
        heading: u16,
        speed: f64,
        next_stop: &str,
        now: DateTime<Utc>,
    ) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id),
            route: RouteId::new(route),
            latitude,
            longitude,
            heading,
            speed,
            last_update: now,
            next_stop: StopId::new(next_stop),
        }
    }

    vec![
        vehicle("bus-1", "route-1", 20.9367, 77.7786, 45, 25.0, "stop-2", now),
        vehicle("bus-2", "route-2", 20.9287, 77.7472, 180, 15.0, "stop-8", now),
        vehicle("bus-3", "route-3", 20.9528, 77.7483, 270, 30.0, "stop-11", now),
        vehicle("bus-4", "route-4", 20.8901, 77.7882, 90, 20.0, "stop-6", now),
    ]
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        /// Speed stays inside the band from any in-band start, any seed.
        #[test]
        fn speed_stays_clamped(initial in 5.0f64..=35.0, seed in any::<u64>(), ticks in 1usize..200) {
            let now = Utc::now();
            let config = SimConfig::default();
            let mut vehicles = seed_fleet(now);
            for v in &mut vehicles {
                v.speed = initial;
            }
            let mut fleet = Fleet::new(vehicles);
            let mut rng = StdRng::seed_from_u64(seed);

            for _ in 0..ticks {
                fleet.tick(&config, &mut rng, now);
            }

            for v in fleet.vehicles() {
                prop_assert!((config.min_speed..=config.max_speed).contains(&v.speed));
            }
        }

        /// A single tick never moves a coordinate further than the jitter.
        #[test]
        fn coordinate_drift_is_bounded(seed in any::<u64>()) {
            let now = Utc::now();
            let config = SimConfig::default();
            let mut fleet = Fleet::new(seed_fleet(now));
            let before: Vec<_> = fleet.vehicles().iter().map(|v| (v.latitude, v.longitude)).collect();
            let mut rng = StdRng::seed_from_u64(seed);

            fleet.tick(&config, &mut rng, now);

            for (v, (lat, lng)) in fleet.vehicles().iter().zip(before) {
                prop_assert!((v.latitude - lat).abs() <= config.coordinate_jitter);
                prop_assert!((v.longitude - lng).abs() <= config.coordinate_jitter);
            }
        }
    }
}
