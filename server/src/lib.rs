//! Trailhead server library
//!
//! A park discovery API: clients describe a multi-dimensional filter over a
//! catalog of parks and get back matching records, ordered by name or by
//! distance from a reference point.

pub mod api;
mod app;
pub mod core;
pub mod data;
