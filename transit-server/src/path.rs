//! Route path projection for map display.

use crate::timetable::{Coordinates, Route, Timetable};

/// Project a route onto the ordered coordinates of its stops.
///
/// When `origin` names a stop on the route (case-insensitive), the path
/// starts there and everything before it is trimmed; an absent or
/// unknown origin keeps the full sequence. Names that don't resolve to
/// a stop in the timetable are dropped, so a route referencing an
/// unknown stop yields a shorter path rather than an error.
pub fn project(timetable: &Timetable, route: &Route, origin: Option<&str>) -> Vec<Coordinates> {
    let sequence = route.stop_sequence();
    let from = origin
        .and_then(|name| {
            sequence
                .iter()
                .position(|stop| stop.eq_ignore_ascii_case(name))
        })
        .unwrap_or(0);

    sequence[from..]
        .iter()
        .filter_map(|name| timetable.stop_by_name(name))
        .map(|stop| stop.position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteId;
    use crate::timetable::amravati_network;

    fn route<'t>(tt: &'t Timetable, id: &str) -> &'t Route {
        tt.route(&RouteId::new(id)).unwrap()
    }

    #[test]
    fn full_path_resolves_every_stop() {
        let tt = amravati_network();
        let path = project(&tt, route(&tt, "route-1"), None);

        assert_eq!(path.len(), 6);
        assert_eq!(path[0].latitude, 20.9367);
        assert_eq!(path[0].longitude, 77.7786);
    }

    #[test]
    fn unresolvable_end_point_shortens_the_path() {
        let tt = amravati_network();
        // route-2 terminates at "Old Town, Badnera", which is not a stop
        // name in the feed ("Old Town, Badnera Rly." is); the terminus
        // is dropped from the projection.
        let path = project(&tt, route(&tt, "route-2"), None);
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn origin_trims_the_leading_stops() {
        let tt = amravati_network();
        let path = project(&tt, route(&tt, "route-1"), Some("sai nagar"));

        // Sai Nagar and the terminus remain.
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].latitude, 20.9023);
    }

    #[test]
    fn origin_at_the_terminus_leaves_one_point() {
        let tt = amravati_network();
        let path = project(&tt, route(&tt, "route-1"), Some("Old Town, Badnera Rly."));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn unresolved_terminus_origin_leaves_nothing() {
        let tt = amravati_network();
        // route-3's terminus name doesn't resolve to any stop, so
        // starting there projects to an empty path.
        let path = project(&tt, route(&tt, "route-3"), Some("Old Town Badnera"));
        assert!(path.is_empty());
    }

    #[test]
    fn unknown_origin_keeps_the_full_sequence() {
        let tt = amravati_network();
        let full = project(&tt, route(&tt, "route-1"), None);
        let with_unknown = project(&tt, route(&tt, "route-1"), Some("Nowhere"));
        assert_eq!(full.len(), with_unknown.len());
    }
}
