//! Park query builder
//!
//! Compiles a [`ParkFilters`] value into a single parameterized SELECT over
//! the parks catalog. Active dimensions are appended in a fixed order so the
//! output is deterministic, and every user value travels through the bind
//! channel rather than the SQL text.

use super::types::{BindValue, CompiledQuery, ParkFilters, SqlParams};

/// Conversion factor for the radius bind (statute miles to meters)
pub const METERS_PER_MILE: f64 = 1609.34;

/// Join topology for one label dimension
///
/// Each many-to-many dimension follows the same shape: an association table
/// linking `park_id` to a label id, and a label table carrying the display
/// name we match against.
struct AssociationPath {
    assoc_table: &'static str,
    assoc_alias: &'static str,
    label_table: &'static str,
    label_alias: &'static str,
    id_column: &'static str,
    name_column: &'static str,
}

const ACTIVITIES: AssociationPath = AssociationPath {
    assoc_table: "park_activities",
    assoc_alias: "pa",
    label_table: "activities",
    label_alias: "a",
    id_column: "activity_id",
    name_column: "activity_name",
};

const FACILITIES: AssociationPath = AssociationPath {
    assoc_table: "park_facilities",
    assoc_alias: "pf",
    label_table: "facilities",
    label_alias: "f",
    id_column: "facility_id",
    name_column: "facility_name",
};

const FEATURES: AssociationPath = AssociationPath {
    assoc_table: "park_features",
    assoc_alias: "pf",
    label_table: "features",
    label_alias: "f",
    id_column: "feature_id",
    name_column: "feature_name",
};

const TRAIL_TYPES: AssociationPath = AssociationPath {
    assoc_table: "park_trail_types",
    assoc_alias: "pt",
    label_table: "trail_types",
    label_alias: "t",
    id_column: "trail_type_id",
    name_column: "trail_type_name",
};

const CAMP_TYPES: AssociationPath = AssociationPath {
    assoc_table: "park_camp_types",
    assoc_alias: "pc",
    label_table: "camp_types",
    label_alias: "c",
    id_column: "camp_type_id",
    name_column: "camp_type_name",
};

const ACCESSIBILITY: AssociationPath = AssociationPath {
    assoc_table: "park_accessibility",
    assoc_alias: "pa",
    label_table: "accessibility",
    label_alias: "a",
    id_column: "accessibility_id",
    name_column: "accessibility_name",
};

/// Resolved proximity constraint (reference point + radius)
struct ProximityTarget {
    latitude: f64,
    longitude: f64,
    radius_meters: f64,
}

/// Compile filters into a parameterized parks query
///
/// The statement always projects the base columns plus extracted latitude and
/// longitude. When a valid proximity constraint is present it additionally
/// projects `distance_meters` (reusing the same coordinate placeholders, so
/// no extra bind slots are consumed) and orders by it ascending; otherwise
/// rows are ordered by park name.
pub fn build_parks_query(filters: &ParkFilters) -> CompiledQuery {
    let mut params = SqlParams::default();
    let mut conditions: Vec<String> = Vec::new();

    if !filters.states.is_empty() {
        let ph = params.push(BindValue::TextArray(filters.states.clone()));
        conditions.push(format!("p.park_state = ANY({})", ph));
    }

    if !filters.regions.is_empty() {
        let ph = params.push(BindValue::TextArray(filters.regions.clone()));
        conditions.push(format!("p.park_region = ANY({})", ph));
    }

    if let Some(rating_min) = filters.rating_min {
        let ph = params.push(BindValue::Float(rating_min));
        conditions.push(format!("p.park_average_rating >= {}", ph));
    }

    if let Some(fee_min) = filters.entry_fee_min {
        let ph = params.push(BindValue::Float(fee_min));
        conditions.push(format!("p.park_entry_fee >= {}", ph));
    }

    if let Some(fee_max) = filters.entry_fee_max {
        let ph = params.push(BindValue::Float(fee_max));
        conditions.push(format!("p.park_entry_fee <= {}", ph));
    }

    for (labels, path) in [
        (&filters.activities, &ACTIVITIES),
        (&filters.facilities, &FACILITIES),
        (&filters.features, &FEATURES),
        (&filters.trails, &TRAIL_TYPES),
        (&filters.camps, &CAMP_TYPES),
        (&filters.accessibility, &ACCESSIBILITY),
    ] {
        if !labels.is_empty() {
            conditions.push(membership_predicate(path, labels.clone(), &mut params));
        }
    }

    for (flag, column) in [
        (filters.permits.drone, "park_drone_permit"),
        (filters.permits.fishing, "park_fishing_permit"),
        (filters.permits.hunting, "park_hunting_permit"),
        (filters.permits.backcountry, "park_backcountry_permit"),
    ] {
        if let Some(required) = flag {
            let value = if required { "Yes" } else { "No" };
            let ph = params.push(BindValue::Text(value.to_string()));
            conditions.push(format!("LOWER(p.{}) = LOWER({})", column, ph));
        }
    }

    // Resolved exactly once; the projection and ORDER BY below must agree
    // with the predicate on whether proximity is active.
    let proximity = proximity_target(filters);

    let mut distance_projection = String::new();
    if let Some(target) = &proximity {
        let lon_ph = params.push(BindValue::Float(target.longitude));
        let lat_ph = params.push(BindValue::Float(target.latitude));
        let radius_ph = params.push(BindValue::Float(target.radius_meters));

        conditions.push(format!(
            "ST_DWithin(p.park_location, ST_SetSRID(ST_MakePoint({lon}, {lat}), 4326)::geography, {radius})",
            lon = lon_ph,
            lat = lat_ph,
            radius = radius_ph,
        ));

        // Same point as the radius predicate, so the coordinate placeholders
        // are referenced again instead of binding new slots.
        distance_projection = format!(
            ", ST_Distance(p.park_location, ST_SetSRID(ST_MakePoint({lon}, {lat}), 4326)::geography) AS distance_meters",
            lon = lon_ph,
            lat = lat_ph,
        );
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    let order_clause = if proximity.is_some() {
        "ORDER BY distance_meters ASC"
    } else {
        "ORDER BY p.park_name ASC"
    };

    let text = format!(
        "SELECT p.*, ST_Y(p.park_location::geometry) AS latitude, \
         ST_X(p.park_location::geometry) AS longitude{projection} \
         FROM parks p{where_clause} {order}",
        projection = distance_projection,
        where_clause = where_clause,
        order = order_clause,
    );

    CompiledQuery {
        text,
        values: params.into_values(),
    }
}

fn membership_predicate(
    path: &AssociationPath,
    labels: Vec<String>,
    params: &mut SqlParams,
) -> String {
    let ph = params.push(BindValue::TextArray(labels));
    format!(
        "p.park_id IN (SELECT {aa}.park_id FROM {assoc} {aa} \
         JOIN {label} {la} ON {la}.{id} = {aa}.{id} \
         WHERE {la}.{name} = ANY({ph}))",
        assoc = path.assoc_table,
        aa = path.assoc_alias,
        label = path.label_table,
        la = path.label_alias,
        id = path.id_column,
        name = path.name_column,
        ph = ph,
    )
}

/// Resolve the proximity constraint, if any
///
/// Requires both a reference address and a strictly positive radius. The
/// address must parse as exactly two comma-separated numeric components
/// (latitude first); anything else drops the whole constraint silently.
fn proximity_target(filters: &ParkFilters) -> Option<ProximityTarget> {
    let address = filters.distance_address.as_deref()?;
    let miles = filters.distance_miles.filter(|m| *m > 0.0)?;

    let (latitude, longitude) = parse_reference_point(address)?;

    Some(ProximityTarget {
        latitude,
        longitude,
        radius_meters: miles * METERS_PER_MILE,
    })
}

fn parse_reference_point(address: &str) -> Option<(f64, f64)> {
    let mut components = address.split(',');
    let latitude: f64 = components.next()?.trim().parse().ok()?;
    let longitude: f64 = components.next()?.trim().parse().ok()?;
    // f64 parsing accepts "NaN"/"inf"; neither names a point on the globe
    if components.next().is_some() || !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::types::PermitFilters;

    fn float_values(query: &CompiledQuery) -> Vec<f64> {
        query
            .values
            .iter()
            .filter_map(|v| match v {
                BindValue::Float(f) => Some(*f),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_filters_produce_unfiltered_query() {
        let query = build_parks_query(&ParkFilters::default());

        assert!(!query.text.contains("WHERE"));
        assert!(query.text.ends_with("ORDER BY p.park_name ASC"));
        assert!(query.text.starts_with(
            "SELECT p.*, ST_Y(p.park_location::geometry) AS latitude, \
             ST_X(p.park_location::geometry) AS longitude FROM parks p"
        ));
        assert!(query.values.is_empty());
    }

    #[test]
    fn state_filter_uses_array_bind() {
        let filters = ParkFilters {
            states: vec!["CO".to_string(), "UT".to_string()],
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query.text.contains("WHERE p.park_state = ANY($1)"));
        assert_eq!(
            query.values,
            vec![BindValue::TextArray(vec![
                "CO".to_string(),
                "UT".to_string()
            ])]
        );
    }

    #[test]
    fn numeric_bounds_bind_in_order() {
        let filters = ParkFilters {
            rating_min: Some(4.0),
            entry_fee_min: Some(5.0),
            entry_fee_max: Some(30.0),
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query.text.contains("p.park_average_rating >= $1"));
        assert!(query.text.contains("p.park_entry_fee >= $2"));
        assert!(query.text.contains("p.park_entry_fee <= $3"));
        assert_eq!(float_values(&query), vec![4.0, 5.0, 30.0]);
    }

    #[test]
    fn skipped_dimensions_leave_no_placeholder_gaps() {
        // states absent, regions present: regions must still get $1
        let filters = ParkFilters {
            regions: vec!["Mountain".to_string()],
            entry_fee_max: Some(20.0),
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query.text.contains("p.park_region = ANY($1)"));
        assert!(query.text.contains("p.park_entry_fee <= $2"));
        assert!(!query.text.contains("$3"));
        assert_eq!(query.values.len(), 2);
    }

    #[test]
    fn activity_filter_expands_to_membership_subquery() {
        let filters = ParkFilters {
            activities: vec!["Hiking".to_string(), "Fishing".to_string()],
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query.text.contains(
            "p.park_id IN (SELECT pa.park_id FROM park_activities pa \
             JOIN activities a ON a.activity_id = pa.activity_id \
             WHERE a.activity_name = ANY($1))"
        ));
        assert_eq!(
            query.values,
            vec![BindValue::TextArray(vec![
                "Hiking".to_string(),
                "Fishing".to_string()
            ])]
        );
    }

    #[test]
    fn association_dimensions_compile_in_fixed_order() {
        let filters = ParkFilters {
            trails: vec!["Loop".to_string()],
            camps: vec!["RV".to_string()],
            facilities: vec!["Restrooms".to_string()],
            accessibility: vec!["Wheelchair Accessible".to_string()],
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        // facilities, trails, camps, accessibility is the canonical order
        let facilities_at = query.text.find("park_facilities").unwrap();
        let trails_at = query.text.find("park_trail_types").unwrap();
        let camps_at = query.text.find("park_camp_types").unwrap();
        let accessibility_at = query.text.find("park_accessibility").unwrap();

        assert!(facilities_at < trails_at);
        assert!(trails_at < camps_at);
        assert!(camps_at < accessibility_at);

        assert!(query.text.contains("f.facility_name = ANY($1)"));
        assert!(query.text.contains("t.trail_type_name = ANY($2)"));
        assert!(query.text.contains("c.camp_type_name = ANY($3)"));
        assert!(query.text.contains("a.accessibility_name = ANY($4)"));
    }

    #[test]
    fn feature_filter_targets_feature_tables() {
        let filters = ParkFilters {
            features: vec!["Waterfall".to_string()],
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query.text.contains("FROM park_features pf"));
        assert!(query.text.contains("JOIN features f ON f.feature_id = pf.feature_id"));
        assert!(query.text.contains("f.feature_name = ANY($1)"));
    }

    #[test]
    fn permit_true_binds_yes() {
        let filters = ParkFilters {
            permits: PermitFilters {
                drone: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query
            .text
            .contains("LOWER(p.park_drone_permit) = LOWER($1)"));
        assert_eq!(query.values, vec![BindValue::Text("Yes".to_string())]);
    }

    #[test]
    fn permit_false_binds_no() {
        let filters = ParkFilters {
            permits: PermitFilters {
                fishing: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query
            .text
            .contains("LOWER(p.park_fishing_permit) = LOWER($1)"));
        assert_eq!(query.values, vec![BindValue::Text("No".to_string())]);
    }

    #[test]
    fn permit_none_adds_nothing() {
        let filters = ParkFilters {
            permits: PermitFilters::default(),
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(!query.text.contains("permit"));
        assert!(query.values.is_empty());
    }

    #[test]
    fn permits_compile_in_fixed_order() {
        let filters = ParkFilters {
            permits: PermitFilters {
                drone: Some(true),
                fishing: Some(false),
                hunting: Some(true),
                backcountry: Some(false),
            },
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query.text.contains("LOWER(p.park_drone_permit) = LOWER($1)"));
        assert!(query.text.contains("LOWER(p.park_fishing_permit) = LOWER($2)"));
        assert!(query.text.contains("LOWER(p.park_hunting_permit) = LOWER($3)"));
        assert!(query
            .text
            .contains("LOWER(p.park_backcountry_permit) = LOWER($4)"));
        assert_eq!(
            query.values,
            vec![
                BindValue::Text("Yes".to_string()),
                BindValue::Text("No".to_string()),
                BindValue::Text("Yes".to_string()),
                BindValue::Text("No".to_string()),
            ]
        );
    }

    #[test]
    fn proximity_binds_lon_lat_radius_and_orders_by_distance() {
        let filters = ParkFilters {
            distance_address: Some("39.7392,-104.9903".to_string()),
            distance_miles: Some(10.0),
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query.text.contains(
            "ST_DWithin(p.park_location, \
             ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3)"
        ));
        assert!(query.text.contains(
            "ST_Distance(p.park_location, \
             ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography) AS distance_meters"
        ));
        assert!(query.text.ends_with("ORDER BY distance_meters ASC"));

        // longitude first, then latitude, then radius in meters
        let floats = float_values(&query);
        assert_eq!(floats.len(), 3);
        assert!((floats[0] - (-104.9903)).abs() < 1e-9);
        assert!((floats[1] - 39.7392).abs() < 1e-9);
        assert!((floats[2] - 10.0 * METERS_PER_MILE).abs() < 1e-9);
        assert_eq!(query.values.len(), 3);
    }

    #[test]
    fn proximity_projection_reuses_coordinate_placeholders() {
        let filters = ParkFilters {
            states: vec!["CA".to_string()],
            distance_address: Some("36.7783,-119.4179".to_string()),
            distance_miles: Some(25.0),
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        // states consumes $1, so the point is ($2, $3) and the radius $4 in
        // both the predicate and the distance projection
        assert!(query.text.contains("ST_MakePoint($2, $3), 4326)::geography, $4)"));
        assert!(query
            .text
            .contains("ST_MakePoint($2, $3), 4326)::geography) AS distance_meters"));
        assert_eq!(query.values.len(), 4);
    }

    #[test]
    fn proximity_requires_radius() {
        let filters = ParkFilters {
            distance_address: Some("39.7392,-104.9903".to_string()),
            distance_miles: None,
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(!query.text.contains("ST_DWithin"));
        assert!(!query.text.contains("distance_meters"));
        assert!(query.text.ends_with("ORDER BY p.park_name ASC"));
        assert!(query.values.is_empty());
    }

    #[test]
    fn proximity_requires_positive_radius() {
        for miles in [0.0, -5.0] {
            let filters = ParkFilters {
                distance_address: Some("39.7392,-104.9903".to_string()),
                distance_miles: Some(miles),
                ..Default::default()
            };
            let query = build_parks_query(&filters);

            assert!(!query.text.contains("ST_DWithin"));
            assert!(query.values.is_empty());
        }
    }

    #[test]
    fn malformed_address_drops_proximity_entirely() {
        for address in [
            "Denver, CO",
            "39.7392",
            "39.7,-104.9,5280",
            "",
            "a,b",
            "NaN,-104.9903",
            "39.7392,nan",
            "inf,-104.9903",
        ] {
            let filters = ParkFilters {
                distance_address: Some(address.to_string()),
                distance_miles: Some(10.0),
                ..Default::default()
            };
            let query = build_parks_query(&filters);

            // No partial output: predicate, projection, and ordering all
            // fall back together
            assert!(!query.text.contains("ST_DWithin"), "address: {}", address);
            assert!(
                !query.text.contains("distance_meters"),
                "address: {}",
                address
            );
            assert!(
                query.text.ends_with("ORDER BY p.park_name ASC"),
                "address: {}",
                address
            );
            assert!(query.values.is_empty(), "address: {}", address);
        }
    }

    #[test]
    fn address_components_tolerate_whitespace() {
        let filters = ParkFilters {
            distance_address: Some(" 39.7392 , -104.9903 ".to_string()),
            distance_miles: Some(1.0),
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query.text.contains("ST_DWithin"));
        let floats = float_values(&query);
        assert!((floats[0] - (-104.9903)).abs() < 1e-9);
        assert!((floats[1] - 39.7392).abs() < 1e-9);
    }

    #[test]
    fn conditions_are_joined_with_and() {
        let filters = ParkFilters {
            states: vec!["WA".to_string()],
            rating_min: Some(3.5),
            ..Default::default()
        };
        let query = build_parks_query(&filters);

        assert!(query
            .text
            .contains("WHERE p.park_state = ANY($1) AND p.park_average_rating >= $2"));
    }

    #[test]
    fn full_filter_set_compiles_with_contiguous_placeholders() {
        let filters = ParkFilters {
            states: vec!["CO".to_string()],
            regions: vec!["Mountain".to_string()],
            trails: vec!["Loop".to_string()],
            camps: vec!["Tent".to_string()],
            activities: vec!["Hiking".to_string()],
            facilities: vec!["Visitor Center".to_string()],
            features: vec!["Lake".to_string()],
            accessibility: vec!["Paved Trails".to_string()],
            rating_min: Some(4.0),
            entry_fee_min: Some(0.0),
            entry_fee_max: Some(50.0),
            permits: PermitFilters {
                drone: Some(false),
                fishing: Some(true),
                hunting: Some(false),
                backcountry: Some(true),
            },
            distance_address: Some("40.0,-105.0".to_string()),
            distance_miles: Some(50.0),
        };
        let query = build_parks_query(&filters);

        // 8 arrays/bounds + 4 permits + 3 proximity values
        assert_eq!(query.values.len(), 18);
        // 16 predicates (8 dimensions + 3 bounds + 4 permits + proximity)
        assert_eq!(query.text.matches(" AND ").count(), 15);
        for n in 1..=18 {
            assert!(
                query.text.contains(&format!("${}", n)),
                "missing placeholder ${}",
                n
            );
        }
        assert!(!query.text.contains("$19"));
        assert!(query.text.ends_with("ORDER BY distance_meters ASC"));
    }
}
