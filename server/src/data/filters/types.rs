//! Filter type definitions
//!
//! Defines the structured filter model accepted by the park query builder
//! and the compiled statement it produces.

/// Multi-dimensional park filter
///
/// Every dimension is optional: an empty label set or a `None` field imposes
/// no constraint. Active constraints are combined with logical AND, and no
/// combination of dimensions is mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParkFilters {
    pub states: Vec<String>,
    pub regions: Vec<String>,
    pub trails: Vec<String>,
    pub camps: Vec<String>,
    pub activities: Vec<String>,
    pub facilities: Vec<String>,
    pub features: Vec<String>,
    pub accessibility: Vec<String>,
    /// Inclusive lower bound on the average rating
    pub rating_min: Option<f64>,
    /// Inclusive lower bound on the entry fee
    pub entry_fee_min: Option<f64>,
    /// Inclusive upper bound on the entry fee
    pub entry_fee_max: Option<f64>,
    pub permits: PermitFilters,
    /// Reference point as a "latitude,longitude" string
    pub distance_address: Option<String>,
    /// Search radius in miles, only meaningful together with `distance_address`
    pub distance_miles: Option<f64>,
}

/// Tri-state permit flags
///
/// `Some(true)` requires the permit to be allowed, `Some(false)` requires it
/// to be disallowed, and `None` leaves the dimension unconstrained. `None`
/// must never collapse into `Some(false)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermitFilters {
    pub drone: Option<bool>,
    pub fishing: Option<bool>,
    pub hunting: Option<bool>,
    pub backcountry: Option<bool>,
}

/// A positional bind value for the compiled statement
///
/// The bind channel carries permit strings, label arrays, and numeric
/// thresholds/coordinates; values are never interpolated into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    TextArray(Vec<String>),
    Float(f64),
}

/// Collects bind values during query building (maintains insertion order)
///
/// Placeholders are handed out strictly next-free-slot: the placeholder for a
/// value is `$N` where N is the value count after the push. A predicate that
/// is never appended never advances the counter, so dropped dimensions cannot
/// corrupt the numbering of the rest.
#[derive(Debug, Default)]
pub struct SqlParams {
    values: Vec<BindValue>,
}

impl SqlParams {
    /// Append a bind value and return its `$N` placeholder
    pub fn push(&mut self, value: BindValue) -> String {
        self.values.push(value);
        format!("${}", self.values.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<BindValue> {
        self.values
    }
}

/// A parameterized SQL statement plus its ordered bind values
///
/// Invariant: the Nth `$N` placeholder in `text` corresponds exactly to the
/// Nth element of `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub text: String,
    pub values: Vec<BindValue>,
}
