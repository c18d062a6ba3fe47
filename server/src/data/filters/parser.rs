//! Query parameter parsing helpers
//!
//! Converts raw query-string fragments into the structured filter model.

use super::types::ParkFilters;

/// Split a comma-separated list into trimmed, non-empty, deduplicated labels
///
/// First occurrence wins, so input order is preserved.
pub fn split_and_clean(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let label = part.trim();
        if label.is_empty() {
            continue;
        }
        if !labels.iter().any(|existing| existing == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

/// Parse a tri-state boolean flag
///
/// Accepts "true"/"false" case-insensitively; anything else (including an
/// absent value) means unconstrained.
pub fn parse_tristate(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Drop numeric bounds that cannot constrain anything
///
/// Non-finite values come from upstream parsing and are treated as absent.
pub fn clean_bound(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl ParkFilters {
    /// True when no dimension is constrained
    pub fn is_unconstrained(&self) -> bool {
        *self == ParkFilters::default()
    }
}
