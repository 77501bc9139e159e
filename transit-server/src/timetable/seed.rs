//! Static Amravati city bus network.
//!
//! The bundled reference dataset: thirteen stops and four routes with
//! their scheduled timings. Malformed timing entries are dropped at
//! build time rather than failing the whole network; a missing timing
//! is a data-quality issue, not a startup error.

use crate::domain::{ClockTime, RouteId, StopId};

use super::model::{Coordinates, Route, Stop, Timing};
use super::store::Timetable;

/// Build the Amravati network timetable.
pub fn amravati_network() -> Timetable {
    Timetable::new(stops(), routes())
}

fn stop(id: &str, name: &str, latitude: f64, longitude: f64, routes: &[&str]) -> Stop {
    Stop {
        id: StopId::new(id),
        name: name.to_string(),
        position: Coordinates {
            latitude,
            longitude,
        },
        routes: routes.iter().map(|r| RouteId::new(*r)).collect(),
    }
}

fn timing(from: &str, to: &str, departure: &str, arrival: &str) -> Option<Timing> {
    Some(Timing {
        from: from.to_string(),
        to: to.to_string(),
        departure: ClockTime::parse(departure).ok()?,
        arrival: ClockTime::parse(arrival).ok()?,
    })
}

fn stops() -> Vec<Stop> {
    vec![
        stop("stop-1", "Amravati Bus Stand", 20.9367, 77.7786, &["route-1", "route-2"]),
        stop("stop-2", "Rajkamal", 20.9321, 77.7523, &["route-1", "route-2", "route-3"]),
        stop("stop-3", "Rajapeth", 20.9242, 77.7596, &["route-1"]),
        stop("stop-4", "Nawathe", 20.9125, 77.7684, &["route-1"]),
        stop("stop-5", "Sai Nagar", 20.9023, 77.7781, &["route-1", "route-2", "route-3"]),
        stop("stop-6", "Old Town, Badnera Rly.", 20.8845, 77.7984, &["route-1", "route-2", "route-3", "route-4"]),
        stop("stop-7", "Amravati University", 20.9287, 77.7472, &["route-2"]),
        stop("stop-8", "Biyani Sqr", 20.9315, 77.7501, &["route-2"]),
        stop("stop-9", "Amt Bus Stand", 20.9358, 77.7769, &["route-2"]),
        stop("stop-10", "Navsari", 20.9528, 77.7483, &["route-3"]),
        stop("stop-11", "Panchawati", 20.9451, 77.7512, &["route-3"]),
        stop("stop-12", "Irwin Sq.", 20.9389, 77.7547, &["route-3"]),
        stop("stop-13", "PRMIT&R, Badnera", 20.8901, 77.7882, &["route-4"]),
    ]
}

fn routes() -> Vec<Route> {
    vec![
        Route {
            id: RouteId::new("route-1"),
            name: "Amravati Bus Stand - Old Town, Badnera".to_string(),
            color: "#3b82f6".to_string(),
            start_point: "Amravati Bus Stand".to_string(),
            end_point: "Old Town, Badnera Rly.".to_string(),
            intermediate_stops: vec![
                "Rajkamal".to_string(),
                "Rajapeth".to_string(),
                "Nawathe".to_string(),
                "Sai Nagar".to_string(),
            ],
            operating_hours: "06:50 AM - 06:25 PM".to_string(),
            frequency: "Varies".to_string(),
            timings: [
                timing("Amravati Bus Stand", "Old Town, Badnera", "06:50 AM", "07:15 AM"),
                timing("Amravati Bus Stand", "Old Town, Badnera", "06:55 AM", "07:20 AM"),
                timing("Amravati Bus Stand", "Old Town, Badnera", "07:00 AM", "07:25 AM"),
                timing("Amravati Bus Stand", "Old Town, Badnera", "10:00 AM", "10:30 AM"),
                timing("Amravati Bus Stand", "Old Town, Badnera", "10:15 AM", "10:45 AM"),
                timing("Old Town, Badnera", "Amravati Bus Stand", "02:15 PM", "02:40 PM"),
                timing("Old Town, Badnera", "Amravati Bus Stand", "02:25 PM", "02:50 PM"),
                timing("Old Town, Badnera", "Amravati Bus Stand", "02:45 PM", "03:10 PM"),
                timing("Old Town, Badnera", "Amravati Bus Stand", "05:35 PM", "06:05 PM"),
                timing("Old Town, Badnera", "Amravati Bus Stand", "05:55 PM", "06:25 PM"),
            ]
            .into_iter()
            .flatten()
            .collect(),
        },
        Route {
            id: RouteId::new("route-2"),
            name: "Amravati University - Old Town, Badnera".to_string(),
            color: "#22c55e".to_string(),
            start_point: "Amravati University".to_string(),
            end_point: "Old Town, Badnera".to_string(),
            intermediate_stops: vec![
                "Biyani Sqr".to_string(),
                "Amt Bus Stand".to_string(),
                "Rajkamal".to_string(),
                "Sai Nagar".to_string(),
            ],
            operating_hours: "06:35 AM - 06:05 PM".to_string(),
            frequency: "Varies".to_string(),
            timings: [
                timing("Amravati University", "Old Town, Badnera", "06:35 AM", "07:20 AM"),
                timing("Amravati University", "Old Town, Badnera", "09:30 AM", "10:15 AM"),
                timing("Amravati University", "Old Town, Badnera", "09:45 AM", "10:30 AM"),
                timing("Old Town, Badnera", "Amravati University", "02:05 PM", "02:50 PM"),
                timing("Old Town, Badnera", "Amravati University", "02:35 PM", "03:20 PM"),
                timing("Old Town, Badnera", "Amravati University", "05:20 PM", "06:05 PM"),
            ]
            .into_iter()
            .flatten()
            .collect(),
        },
        Route {
            id: RouteId::new("route-3"),
            name: "Navsari - Old Town Badnera".to_string(),
            color: "#f59e0b".to_string(),
            start_point: "Navsari".to_string(),
            end_point: "Old Town Badnera".to_string(),
            intermediate_stops: vec![
                "Panchawati".to_string(),
                "Irwin Sq.".to_string(),
                "Rajkamal".to_string(),
                "Sai Nagar".to_string(),
            ],
            operating_hours: "06:30 AM - 06:25 PM".to_string(),
            frequency: "Varies".to_string(),
            timings: [
                timing("Navsari", "Old Town, Badnera", "06:30 AM", "07:05 AM"),
                timing("Navsari", "Old Town, Badnera", "06:55 AM", "07:30 AM"),
                timing("Navsari", "Old Town, Badnera", "09:45 AM", "10:20 AM"),
                timing("Navsari", "Old Town, Badnera", "10:00 AM", "10:35 AM"),
                timing("Old Town, Badnera", "Navsari", "02:05 PM", "02:40 PM"),
                timing("Old Town, Badnera", "Navsari", "02:15 PM", "02:50 PM"),
                timing("Old Town, Badnera", "Navsari", "05:35 PM", "06:10 PM"),
                timing("Old Town, Badnera", "Navsari", "05:50 PM", "06:25 PM"),
            ]
            .into_iter()
            .flatten()
            .collect(),
        },
        Route {
            id: RouteId::new("route-4"),
            name: "College Bus Service".to_string(),
            color: "#ef4444".to_string(),
            start_point: "PRMIT&R, Badnera".to_string(),
            end_point: "Old Town Badnera".to_string(),
            intermediate_stops: vec![],
            operating_hours: "07:00 AM - 03:00 PM".to_string(),
            frequency: "Varies (Free of Cost)".to_string(),
            timings: [
                timing("PRMIT&R, Badnera", "Old Town Badnera", "07:00 AM", "07:30 AM"),
                timing("PRMIT&R, Badnera", "Old Town Badnera", "10:30 AM", "11:00 AM"),
                timing("Old Town Badnera", "PRMIT&R, Badnera", "02:30 PM", "03:00 PM"),
            ]
            .into_iter()
            .flatten()
            .collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_shape() {
        let tt = amravati_network();
        assert_eq!(tt.stops().len(), 13);
        assert_eq!(tt.routes().len(), 4);
    }

    #[test]
    fn all_timings_survived_parsing() {
        let tt = amravati_network();
        let counts: Vec<_> = tt.routes().iter().map(|r| r.timings.len()).collect();
        assert_eq!(counts, vec![10, 6, 8, 3]);
    }

    #[test]
    fn stop_names_are_unique() {
        let tt = amravati_network();
        let mut names: Vec<_> = tt
            .stops()
            .iter()
            .map(|s| s.name.to_lowercase())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), tt.stops().len());
    }

    #[test]
    fn route_3_sequence() {
        let tt = amravati_network();
        let route = tt.route(&RouteId::new("route-3")).unwrap();
        assert_eq!(
            route.stop_sequence(),
            vec![
                "Navsari",
                "Panchawati",
                "Irwin Sq.",
                "Rajkamal",
                "Sai Nagar",
                "Old Town Badnera"
            ]
        );
    }

    #[test]
    fn stops_reference_their_routes() {
        let tt = amravati_network();
        let rajkamal = tt.stop_by_name("Rajkamal").unwrap();
        assert!(rajkamal.routes.contains(&RouteId::new("route-1")));
        assert!(rajkamal.routes.contains(&RouteId::new("route-3")));
        assert!(!rajkamal.routes.contains(&RouteId::new("route-4")));
    }
}
