//! Timetable store: static stops, routes and scheduled timings.
//!
//! The read-only reference data every other component consults. Loading
//! and packaging of the feed is out of scope; the network ships as a
//! static seed, the way a bundled dataset would.

mod model;
mod seed;
mod store;

pub use model::{Coordinates, Route, Stop, Timing};
pub use seed::amravati_network;
pub use store::Timetable;
