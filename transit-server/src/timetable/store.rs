//! Read-only timetable store with normalized-name lookup.

use std::collections::HashMap;

use crate::domain::{RouteId, StopId};

use super::model::{Route, Stop};

/// The static reference data consumed by every other component.
///
/// Stop-name lookup is case-insensitive via a normalized-key table built
/// once at construction; the records themselves keep their canonical
/// casing for display. Stops and routes are kept in feed definition
/// order, which downstream scans depend on.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    stops: Vec<Stop>,
    routes: Vec<Route>,
    /// Normalized stop names, aligned with `stops`.
    stop_keys: Vec<String>,
    stops_by_name: HashMap<String, usize>,
    stops_by_id: HashMap<StopId, usize>,
    routes_by_id: HashMap<RouteId, usize>,
}

impl Timetable {
    /// Build a timetable from stop and route records.
    ///
    /// Stop names are expected to be unique; if the feed violates that,
    /// the later record wins the name-lookup slot and the earlier one is
    /// only reachable by id.
    pub fn new(stops: Vec<Stop>, routes: Vec<Route>) -> Self {
        let stop_keys: Vec<String> = stops.iter().map(|s| normalize(&s.name)).collect();
        let stops_by_name = stop_keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), i))
            .collect();
        let stops_by_id = stops
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let routes_by_id = routes
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();

        Self {
            stops,
            routes,
            stop_keys,
            stops_by_name,
            stops_by_id,
            routes_by_id,
        }
    }

    /// All stops, in feed definition order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All routes, in feed definition order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Stops paired with their normalized lookup keys, in feed order.
    ///
    /// The keys are built once at construction; scans that need every
    /// stop's folded name use this instead of lowering per call.
    pub fn stops_with_keys(&self) -> impl Iterator<Item = (&Stop, &str)> {
        self.stops
            .iter()
            .zip(self.stop_keys.iter().map(String::as_str))
    }

    /// Look up a stop by display name, case-insensitively.
    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stops_by_name
            .get(&normalize(name))
            .map(|&i| &self.stops[i])
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stops_by_id.get(id).map(|&i| &self.stops[i])
    }

    /// Look up a route by id.
    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes_by_id.get(id).map(|&i| &self.routes[i])
    }
}

/// Normalized lookup key for a stop name.
fn normalize(name: &str) -> String {
    name.to_lowercase()
}
