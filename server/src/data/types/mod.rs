//! Shared data types

mod park;

pub use park::ParkRow;
