//! Park filter compiler
//!
//! Turns structured filter input into a single parameterized SQL statement
//! over the parks catalog.
//!
//! ## Usage
//!
//! ```no_run
//! use trailhead_server::data::filters::{ParkFilters, build_parks_query};
//!
//! let filters = ParkFilters {
//!     states: vec!["CO".to_string()],
//!     rating_min: Some(4.0),
//!     ..Default::default()
//! };
//! let query = build_parks_query(&filters);
//! assert!(query.text.contains("p.park_state = ANY($1)"));
//! ```

mod builder;
mod parser;
mod types;

pub use builder::{METERS_PER_MILE, build_parks_query};
pub use parser::{clean_bound, parse_tristate, split_and_clean};
pub use types::{BindValue, CompiledQuery, ParkFilters, PermitFilters, SqlParams};
