//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::assistant::Reply;
use crate::search::Suggestion;
use crate::sim::Vehicle;
use crate::timetable::{Coordinates, Route, Stop, Timetable};

/// Query for the type-ahead suggestion search.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// Search text as typed so far
    #[serde(default)]
    pub q: String,
}

/// Query naming an origin/destination stop pair.
#[derive(Debug, Deserialize)]
pub struct FindRoutesQuery {
    pub from: String,
    pub to: String,
}

/// Query narrowing map data.
#[derive(Debug, Deserialize)]
pub struct MapQuery {
    /// Restrict to one route id
    pub route: Option<String>,

    /// Origin stop name; paths are trimmed before it
    pub from: Option<String>,
}

/// Query narrowing the vehicle list.
#[derive(Debug, Deserialize)]
pub struct VehiclesQuery {
    pub route: Option<String>,
}

/// Free-text assistant request.
#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub text: String,
}

/// One suggestion in search results.
#[derive(Debug, Serialize)]
pub struct SuggestionDto {
    pub id: String,
    pub label: String,
}

impl From<Suggestion> for SuggestionDto {
    fn from(s: Suggestion) -> Self {
        Self {
            id: s.id,
            label: s.label,
        }
    }
}

/// Response for suggestion search.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<SuggestionDto>,
}

/// A stop in the directory.
#[derive(Debug, Serialize)]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Ids of the routes serving this stop
    pub routes: Vec<String>,
}

impl StopDto {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.clone(),
            latitude: stop.position.latitude,
            longitude: stop.position.longitude,
            routes: stop.routes.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Response for the stop directory.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<StopDto>,
}

/// One scheduled timing row.
#[derive(Debug, Serialize)]
pub struct TimingDto {
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
}

/// A route in the directory.
#[derive(Debug, Serialize)]
pub struct RouteDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub start_point: String,
    pub end_point: String,
    pub intermediate_stops: Vec<String>,
    pub operating_hours: String,
    pub frequency: String,
    pub timings: Vec<TimingDto>,
}

impl RouteDto {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id.to_string(),
            name: route.name.clone(),
            color: route.color.clone(),
            start_point: route.start_point.clone(),
            end_point: route.end_point.clone(),
            intermediate_stops: route.intermediate_stops.clone(),
            operating_hours: route.operating_hours.clone(),
            frequency: route.frequency.clone(),
            timings: route
                .timings
                .iter()
                .map(|t| TimingDto {
                    from: t.from.clone(),
                    to: t.to.clone(),
                    departure: t.departure.to_string(),
                    arrival: t.arrival.to_string(),
                })
                .collect(),
        }
    }
}

/// Response for the route directory and the route finder.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteDto>,
}

/// A coordinate pair on a projected path.
#[derive(Debug, Serialize)]
pub struct CoordinatesDto {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for CoordinatesDto {
    fn from(c: Coordinates) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

/// A route's projected path, ready to draw.
#[derive(Debug, Serialize)]
pub struct RoutePathDto {
    pub route_id: String,
    pub color: String,
    pub points: Vec<CoordinatesDto>,
}

/// A live vehicle snapshot, enriched for display.
#[derive(Debug, Serialize)]
pub struct VehicleDto {
    pub id: String,
    pub route_id: String,

    /// Resolved route name, when the route exists
    pub route_name: Option<String>,

    pub latitude: f64,
    pub longitude: f64,
    pub heading: u16,
    pub speed: f64,

    /// RFC 3339 timestamp of the last simulation tick
    pub last_update: String,

    pub next_stop_id: String,

    /// Resolved next-stop name, when the stop exists
    pub next_stop_name: Option<String>,
}

impl VehicleDto {
    /// Build the display form, joining route and stop names on.
    pub fn from_vehicle(vehicle: &Vehicle, timetable: &Timetable) -> Self {
        let route_name = timetable.route(&vehicle.route).map(|r| r.name.clone());
        let next_stop_name = timetable.stop(&vehicle.next_stop).map(|s| s.name.clone());

        Self {
            id: vehicle.id.to_string(),
            route_id: vehicle.route.to_string(),
            route_name,
            latitude: vehicle.latitude,
            longitude: vehicle.longitude,
            heading: vehicle.heading,
            speed: vehicle.speed,
            last_update: vehicle.last_update.to_rfc3339(),
            next_stop_id: vehicle.next_stop.to_string(),
            next_stop_name,
        }
    }
}

/// Response for the live vehicle list.
#[derive(Debug, Serialize)]
pub struct VehiclesResponse {
    pub vehicles: Vec<VehicleDto>,
}

/// Response for map data: everything a map view draws.
#[derive(Debug, Serialize)]
pub struct MapResponse {
    /// The selected route, when the map is filtered to one
    pub route: Option<RouteDto>,

    pub stops: Vec<StopDto>,
    pub paths: Vec<RoutePathDto>,
    pub vehicles: Vec<VehicleDto>,
}

/// Response for network stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub live_vehicles: usize,
    pub routes: usize,

    /// Seconds between vehicle position updates
    pub update_secs: u64,
}

/// One matching departure from the assistant.
#[derive(Debug, Serialize)]
pub struct DepartureDto {
    pub route: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
}

/// Assistant reply: the display message plus the structured matches.
#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub message: String,
    pub found: bool,
    pub departures: Vec<DepartureDto>,
}

impl AssistantResponse {
    pub fn from_reply(reply: &Reply) -> Self {
        let message = reply.message();
        let departures = match reply {
            Reply::Departures { items, .. } => items
                .iter()
                .map(|item| DepartureDto {
                    route: item.route_name.clone(),
                    from: item.from_label.clone(),
                    to: item.to_label.clone(),
                    departure: item.departure.to_string(),
                    arrival: item.arrival.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            message,
            found: !departures.is_empty(),
            departures,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
