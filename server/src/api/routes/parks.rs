//! Parks API endpoints

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::ValidatedQuery;
use crate::api::types::ApiError;
use crate::data::filters::{
    ParkFilters, PermitFilters, clean_bound, parse_tristate, split_and_clean,
};
use crate::data::postgres::repositories::park;
use crate::data::types::ParkRow;
use crate::data::PostgresService;

#[derive(Clone)]
pub struct ParksApiState {
    pub database: Arc<PostgresService>,
}

/// Raw query parameters for the parks listing
///
/// Every parameter is optional. List parameters are comma-separated label
/// strings; permits use bracketed keys (`permits[drone]=true`). Numeric
/// parameters must parse as numbers (empty values count as absent); anything
/// else is rejected with 400.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListParksQuery {
    #[serde(rename = "parkState")]
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub park_state: Option<String>,
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub region: Option<String>,
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub trails: Option<String>,
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub camps: Option<String>,
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub activities: Option<String>,
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub facilities: Option<String>,
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub features: Option<String>,
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub accessibility: Option<String>,
    #[serde(rename = "ratingMin", default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 0.0, max = 5.0, message = "ratingMin must be between 0 and 5"))]
    pub rating_min: Option<f64>,
    #[serde(rename = "entryFeeMin", default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 0.0, message = "entryFeeMin must be >= 0"))]
    pub entry_fee_min: Option<f64>,
    #[serde(rename = "entryFeeMax", default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 0.0, message = "entryFeeMax must be >= 0"))]
    pub entry_fee_max: Option<f64>,
    #[serde(rename = "permits[drone]")]
    pub permit_drone: Option<String>,
    #[serde(rename = "permits[fishing]")]
    pub permit_fishing: Option<String>,
    #[serde(rename = "permits[hunting]")]
    pub permit_hunting: Option<String>,
    #[serde(rename = "permits[backcountry]")]
    pub permit_backcountry: Option<String>,
    #[serde(rename = "distanceAddress")]
    #[validate(length(max = 2048, message = "Query parameter too long (max 2048 chars)"))]
    pub distance_address: Option<String>,
    #[serde(rename = "distanceMiles", default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 0.0, message = "distanceMiles must be >= 0"))]
    pub distance_miles: Option<f64>,
}

/// Treat an empty query value (`?ratingMin=`) as absent; anything non-empty
/// must parse as a number.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {}", s))),
    }
}

impl ListParksQuery {
    /// Normalize raw query parameters into the structured filter model
    pub fn into_filters(self) -> ParkFilters {
        ParkFilters {
            states: split_list(self.park_state.as_deref()),
            regions: split_list(self.region.as_deref()),
            trails: split_list(self.trails.as_deref()),
            camps: split_list(self.camps.as_deref()),
            activities: split_list(self.activities.as_deref()),
            facilities: split_list(self.facilities.as_deref()),
            features: split_list(self.features.as_deref()),
            accessibility: split_list(self.accessibility.as_deref()),
            rating_min: clean_bound(self.rating_min),
            entry_fee_min: clean_bound(self.entry_fee_min),
            entry_fee_max: clean_bound(self.entry_fee_max),
            permits: PermitFilters {
                drone: parse_tristate(self.permit_drone.as_deref()),
                fishing: parse_tristate(self.permit_fishing.as_deref()),
                hunting: parse_tristate(self.permit_hunting.as_deref()),
                backcountry: parse_tristate(self.permit_backcountry.as_deref()),
            },
            distance_address: self
                .distance_address
                .filter(|address| !address.trim().is_empty()),
            distance_miles: clean_bound(self.distance_miles),
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(split_and_clean).unwrap_or_default()
}

/// List parks matching the given filters
#[utoipa::path(
    get,
    path = "/api/v1/parks",
    tag = "parks",
    params(
        ("parkState" = Option<String>, Query, description = "Comma-separated state codes"),
        ("region" = Option<String>, Query, description = "Comma-separated region names"),
        ("trails" = Option<String>, Query, description = "Comma-separated trail type names"),
        ("camps" = Option<String>, Query, description = "Comma-separated camp type names"),
        ("activities" = Option<String>, Query, description = "Comma-separated activity names"),
        ("facilities" = Option<String>, Query, description = "Comma-separated facility names"),
        ("features" = Option<String>, Query, description = "Comma-separated feature names"),
        ("accessibility" = Option<String>, Query, description = "Comma-separated accessibility names"),
        ("ratingMin" = Option<f64>, Query, description = "Minimum average rating (inclusive)"),
        ("entryFeeMin" = Option<f64>, Query, description = "Minimum entry fee (inclusive)"),
        ("entryFeeMax" = Option<f64>, Query, description = "Maximum entry fee (inclusive)"),
        ("permits[drone]" = Option<bool>, Query, description = "Require drone permit allowed/disallowed"),
        ("permits[fishing]" = Option<bool>, Query, description = "Require fishing permit allowed/disallowed"),
        ("permits[hunting]" = Option<bool>, Query, description = "Require hunting permit allowed/disallowed"),
        ("permits[backcountry]" = Option<bool>, Query, description = "Require backcountry permit allowed/disallowed"),
        ("distanceAddress" = Option<String>, Query, description = "Reference point as \"latitude,longitude\""),
        ("distanceMiles" = Option<f64>, Query, description = "Search radius in miles")
    ),
    responses(
        (status = 200, description = "Parks matching all active filters", body = Vec<ParkRow>)
    )
)]
pub async fn list_parks(
    State(state): State<ParksApiState>,
    ValidatedQuery(query): ValidatedQuery<ListParksQuery>,
) -> Result<Json<Vec<ParkRow>>, ApiError> {
    let filters = query.into_filters();
    tracing::trace!(filters = ?filters, "Listing parks");

    let rows = park::list_parks(state.database.pool(), &filters)
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(rows))
}

/// Build parks API routes
pub fn routes(database: Arc<PostgresService>) -> Router<()> {
    let state = ParksApiState { database };

    Router::new().route("/", get(list_parks)).with_state(state)
}
