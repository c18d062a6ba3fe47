//! Data storage layer
//!
//! Provides database access for the application:
//! - `filters` - Park filter compiler (structured filters to SQL)
//! - `postgres` - PostgreSQL service, schema, and repositories
//! - `types` - Shared row types

pub mod filters;
pub mod postgres;
pub mod types;

pub use postgres::{PostgresError, PostgresService};
pub use types::ParkRow;
