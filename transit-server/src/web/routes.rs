//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::domain::RouteId;
use crate::timetable::Route;
use crate::{assistant, path, search};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops", get(list_stops))
        .route("/api/suggest", get(suggest))
        .route("/api/routes", get(list_routes))
        .route("/api/routes/find", get(find_routes))
        .route("/api/map", get(map_data))
        .route("/api/vehicles", get(vehicles))
        .route("/api/stats", get(stats))
        .route("/api/assistant", post(assistant_reply))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The full stop directory.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    let stops = state
        .timetable
        .stops()
        .iter()
        .map(StopDto::from_stop)
        .collect();
    Json(StopsResponse { stops })
}

/// Type-ahead search over route and stop names.
async fn suggest(
    State(state): State<AppState>,
    Query(req): Query<SuggestQuery>,
) -> Json<SuggestResponse> {
    let suggestions = search::suggestions(&state.timetable, &req.q)
        .into_iter()
        .map(SuggestionDto::from)
        .collect();
    Json(SuggestResponse { suggestions })
}

/// The full route directory.
async fn list_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    let routes = state
        .timetable
        .routes()
        .iter()
        .map(RouteDto::from_route)
        .collect();
    Json(RoutesResponse { routes })
}

/// Routes serving `from` strictly before `to`.
async fn find_routes(
    State(state): State<AppState>,
    Query(req): Query<FindRoutesQuery>,
) -> Json<RoutesResponse> {
    let routes = state
        .timetable
        .routes()
        .iter()
        .filter(|route| route.serves_in_order(&req.from, &req.to))
        .map(RouteDto::from_route)
        .collect();
    Json(RoutesResponse { routes })
}

/// Everything a map view draws: stops, paths and live vehicles,
/// optionally narrowed to one route.
async fn map_data(
    State(state): State<AppState>,
    Query(req): Query<MapQuery>,
) -> Result<Json<MapResponse>, AppError> {
    let timetable = &state.timetable;
    let origin = req.from.as_deref();

    let selected: Option<&Route> = match &req.route {
        Some(id) => Some(timetable.route(&RouteId::new(id.clone())).ok_or_else(|| {
            AppError::NotFound {
                message: format!("unknown route: {id}"),
            }
        })?),
        None => None,
    };

    let shown: Vec<&Route> = match selected {
        Some(route) => vec![route],
        None => timetable.routes().iter().collect(),
    };

    let stops = match selected {
        Some(route) => timetable
            .stops()
            .iter()
            .filter(|stop| route.position_of(&stop.name).is_some())
            .map(StopDto::from_stop)
            .collect(),
        None => timetable.stops().iter().map(StopDto::from_stop).collect(),
    };

    let paths = shown
        .iter()
        .map(|route| RoutePathDto {
            route_id: route.id.to_string(),
            color: route.color.clone(),
            points: path::project(timetable, route, origin)
                .into_iter()
                .map(CoordinatesDto::from)
                .collect(),
        })
        .collect();

    let snapshot = state.fleet.snapshot().await;
    let vehicles = snapshot
        .iter()
        .filter(|v| selected.is_none_or(|route| v.route == route.id))
        .map(|v| VehicleDto::from_vehicle(v, timetable))
        .collect();

    Ok(Json(MapResponse {
        route: selected.map(RouteDto::from_route),
        stops,
        paths,
        vehicles,
    }))
}

/// Live vehicle snapshots, optionally narrowed to one route.
async fn vehicles(
    State(state): State<AppState>,
    Query(req): Query<VehiclesQuery>,
) -> Json<VehiclesResponse> {
    let snapshot = state.fleet.snapshot().await;
    let vehicles = snapshot
        .iter()
        .filter(|v| {
            req.route
                .as_deref()
                .is_none_or(|id| v.route.as_str() == id)
        })
        .map(|v| VehicleDto::from_vehicle(v, &state.timetable))
        .collect();
    Json(VehiclesResponse { vehicles })
}

/// Network stats for the landing page.
async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let live_vehicles = state.fleet.snapshot().await.len();
    Json(StatsResponse {
        live_vehicles,
        routes: state.timetable.routes().len(),
        update_secs: state.sim_config.tick_secs,
    })
}

/// Interpret a rider's free-text query.
async fn assistant_reply(
    State(state): State<AppState>,
    Json(req): Json<AssistantRequest>,
) -> Json<AssistantResponse> {
    let reply = assistant::interpret(&state.timetable, &req.text);
    Json(AssistantResponse::from_reply(&reply))
}
