//! Timetable records.

use crate::domain::{ClockTime, RouteId, StopId};

/// A geographic coordinate pair (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named physical boarding/alighting point.
#[derive(Debug, Clone)]
pub struct Stop {
    pub id: StopId,

    /// Human-facing name; the matching key, unique within the store.
    pub name: String,

    pub position: Coordinates,

    /// Routes serving this stop.
    pub routes: Vec<RouteId>,
}

/// One scheduled departure/arrival pair for a route, in one direction.
#[derive(Debug, Clone)]
pub struct Timing {
    /// Origin label as printed on the timetable.
    pub from: String,

    /// Destination label as printed on the timetable.
    pub to: String,

    pub departure: ClockTime,
    pub arrival: ClockTime,
}

/// An ordered, directional sequence of stops with a timetable.
///
/// The stop sequence is start point, intermediate stops, end point, in
/// that order. The sequence defines the route's direction of travel:
/// a route is traversable start to end only.
#[derive(Debug, Clone)]
pub struct Route {
    pub id: RouteId,
    pub name: String,

    /// Display color (hex, e.g. "#3b82f6").
    pub color: String,

    pub start_point: String,
    pub end_point: String,
    pub intermediate_stops: Vec<String>,

    /// Free-text operating hours, e.g. "06:50 AM - 06:25 PM".
    pub operating_hours: String,

    /// Free-text frequency description.
    pub frequency: String,

    /// Scheduled timings; both directions typically share this list,
    /// distinguished by each timing's own origin/destination labels.
    pub timings: Vec<Timing>,
}

impl Route {
    /// The full ordered stop-name sequence: start, intermediates, end.
    pub fn stop_sequence(&self) -> Vec<&str> {
        let mut seq = Vec::with_capacity(self.intermediate_stops.len() + 2);
        seq.push(self.start_point.as_str());
        seq.extend(self.intermediate_stops.iter().map(String::as_str));
        seq.push(self.end_point.as_str());
        seq
    }

    /// Position of a stop name within the sequence, case-insensitive.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.stop_sequence()
            .iter()
            .position(|s| s.eq_ignore_ascii_case(name))
    }

    /// Whether the route serves `from` strictly before `to`.
    ///
    /// Both names must appear in the stop sequence, with `from` first.
    /// The reverse traversal never qualifies.
    pub fn serves_in_order(&self, from: &str, to: &str) -> bool {
        match (self.position_of(from), self.position_of(to)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }
}
