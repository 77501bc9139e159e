//! Incremental stop/route search for type-ahead suggestion lists.

use std::collections::HashSet;

use tracing::trace;

use crate::timetable::Timetable;

/// One search suggestion: an id the UI can navigate with, and a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

/// Search routes and stops whose names contain `query`, case-folded.
///
/// An empty query yields nothing rather than the whole network, so a
/// just-focused search box doesn't flood its list.
///
/// Route-level hits come first: a route whose name, start point or end
/// point contains the query emits one suggestion keyed by its route id,
/// labelled with the route name. Intermediate-stop hits follow, keyed
/// `"<routeId>-<stop>"` and labelled `"<stop> - <route end>"`: board
/// there and ride to the terminus. Duplicate keys keep their first
/// occurrence; result order is insertion order, no further ranking.
pub fn suggestions(timetable: &Timetable, query: &str) -> Vec<Suggestion> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<Suggestion> = Vec::new();

    for route in timetable.routes() {
        let hit = route.name.to_lowercase().contains(&needle)
            || route.start_point.to_lowercase().contains(&needle)
            || route.end_point.to_lowercase().contains(&needle);
        if hit {
            push_unique(
                &mut results,
                &mut seen,
                route.id.to_string(),
                route.name.clone(),
            );
        }
    }

    for route in timetable.routes() {
        for stop in &route.intermediate_stops {
            if stop.to_lowercase().contains(&needle) {
                push_unique(
                    &mut results,
                    &mut seen,
                    format!("{}-{}", route.id, stop),
                    format!("{} - {}", stop, route.end_point),
                );
            }
        }
    }

    trace!(query = %query, results = results.len(), "suggestion search");
    results
}

fn push_unique(results: &mut Vec<Suggestion>, seen: &mut HashSet<String>, id: String, label: String) {
    if seen.insert(id.clone()) {
        results.push(Suggestion { id, label });
    }
}
