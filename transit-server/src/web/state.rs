//! Application state for the web layer.

use std::sync::Arc;

use crate::sim::{LiveFleet, SimConfig};
use crate::timetable::Timetable;

/// Shared application state.
///
/// Contains everything the handlers need.
#[derive(Clone)]
pub struct AppState {
    /// Static timetable reference data
    pub timetable: Arc<Timetable>,

    /// Live simulated vehicle state
    pub fleet: LiveFleet,

    /// Simulator tuning, surfaced by the stats endpoint
    pub sim_config: Arc<SimConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: Timetable, fleet: LiveFleet, sim_config: SimConfig) -> Self {
        Self {
            timetable: Arc::new(timetable),
            fleet,
            sim_config: Arc::new(sim_config),
        }
    }
}
