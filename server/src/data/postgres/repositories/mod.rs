//! PostgreSQL repositories

pub mod park;
