//! Park row types

use serde::Serialize;
use utoipa::ToSchema;

/// A park row as returned by the catalog query
///
/// Latitude and longitude are extracted from the geography column at query
/// time; `distance_meters` is only projected when a proximity constraint is
/// active, so it decodes to `None` otherwise.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct ParkRow {
    pub park_id: i32,
    pub park_name: String,
    pub park_state: String,
    pub park_region: String,
    pub park_description: Option<String>,
    pub park_average_rating: Option<f64>,
    pub park_entry_fee: Option<f64>,
    pub park_drone_permit: Option<String>,
    pub park_fishing_permit: Option<String>,
    pub park_hunting_permit: Option<String>,
    pub park_backcountry_permit: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ParkRow {
        ParkRow {
            park_id: 1,
            park_name: "Roxborough State Park".to_string(),
            park_state: "CO".to_string(),
            park_region: "Mountain".to_string(),
            park_description: None,
            park_average_rating: Some(4.6),
            park_entry_fee: Some(10.0),
            park_drone_permit: Some("No".to_string()),
            park_fishing_permit: Some("No".to_string()),
            park_hunting_permit: Some("No".to_string()),
            park_backcountry_permit: Some("Yes".to_string()),
            latitude: Some(39.4293),
            longitude: Some(-105.0706),
            distance_meters: None,
        }
    }

    #[test]
    fn distance_is_omitted_when_absent() {
        let json = serde_json::to_value(sample_row()).unwrap();
        assert!(json.get("distance_meters").is_none());
        assert_eq!(json["park_name"], "Roxborough State Park");
    }

    #[test]
    fn distance_is_serialized_when_present() {
        let row = ParkRow {
            distance_meters: Some(1234.5),
            ..sample_row()
        };
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["distance_meters"], 1234.5);
    }
}
