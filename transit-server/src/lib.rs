//! Transit query and live position engine.
//!
//! A bus-information server: riders search stops and routes, ask
//! free-text questions about departures, and watch a simulated live map
//! of vehicle positions.

pub mod assistant;
pub mod domain;
pub mod path;
pub mod search;
pub mod sim;
pub mod timetable;
pub mod web;
