//! Shared live state and the timer task that drives it.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::{Fleet, SimConfig, Vehicle};

/// Thread-safe handle to the live vehicle state.
///
/// Cloning shares the same underlying fleet. Readers take snapshots;
/// the simulator task is the only writer, so a snapshot always reflects
/// whole ticks applied in time order.
#[derive(Clone)]
pub struct LiveFleet {
    inner: Arc<RwLock<Fleet>>,
}

impl LiveFleet {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            inner: Arc::new(RwLock::new(fleet)),
        }
    }

    /// Clone the current state of every vehicle.
    pub async fn snapshot(&self) -> Vec<Vehicle> {
        let guard = self.inner.read().await;
        guard.vehicles().to_vec()
    }

    /// Apply one tick stamped with the current wall-clock time.
    pub async fn tick(&self, config: &SimConfig) {
        let now = Utc::now();
        let mut guard = self.inner.write().await;
        guard.tick(config, &mut rand::rng(), now);
    }
}

/// Handle owning the running simulator task.
///
/// Dropping the handle aborts the task, so the timer is released on
/// every exit path of the owner, error exits included.
pub struct SimulatorHandle {
    task: JoinHandle<()>,
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the timer task that ticks `fleet` on the configured period.
///
/// The first interval tick fires immediately and is skipped; ticks then
/// run to completion before the next one is scheduled, so updates never
/// overlap.
pub fn spawn_simulator(fleet: LiveFleet, config: SimConfig) -> SimulatorHandle {
    let period = config.tick_period();
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            fleet.tick(&config).await;
            trace!("applied simulation tick");
        }
    });

    debug!(period_secs = period.as_secs(), "simulator started");
    SimulatorHandle { task }
}
