//! Web layer for the transit engine.
//!
//! A thin JSON surface over the engine: suggestion search, the
//! free-text assistant, route and map data, and live vehicle snapshots.
//! Rendering belongs to the consuming front end; every endpoint emits
//! plain data.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
