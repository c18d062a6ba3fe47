//! PostgreSQL schema definitions
//!
//! Initial schema for the parks catalog. Requires the PostGIS extension for
//! the geography column and distance operators.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema SQL for PostgreSQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: PostGIS + schema version tracking
-- =============================================================================
CREATE EXTENSION IF NOT EXISTS postgis;

CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at BIGINT NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at BIGINT NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success BOOLEAN NOT NULL DEFAULT TRUE
);

-- =============================================================================
-- 1. Parks
-- =============================================================================
CREATE TABLE IF NOT EXISTS parks (
    park_id SERIAL PRIMARY KEY,
    park_name TEXT NOT NULL CHECK(length(park_name) >= 1),
    park_state TEXT NOT NULL,
    park_region TEXT NOT NULL,
    park_description TEXT,
    park_average_rating DOUBLE PRECISION CHECK(
        park_average_rating IS NULL
        OR (park_average_rating >= 0 AND park_average_rating <= 5)
    ),
    park_entry_fee DOUBLE PRECISION CHECK(park_entry_fee IS NULL OR park_entry_fee >= 0),
    park_drone_permit TEXT CHECK(park_drone_permit IN ('Yes', 'No')),
    park_fishing_permit TEXT CHECK(park_fishing_permit IN ('Yes', 'No')),
    park_hunting_permit TEXT CHECK(park_hunting_permit IN ('Yes', 'No')),
    park_backcountry_permit TEXT CHECK(park_backcountry_permit IN ('Yes', 'No')),
    park_location GEOGRAPHY(POINT, 4326)
);

CREATE INDEX IF NOT EXISTS idx_parks_state ON parks(park_state);
CREATE INDEX IF NOT EXISTS idx_parks_region ON parks(park_region);
CREATE INDEX IF NOT EXISTS idx_parks_name ON parks(park_name);
CREATE INDEX IF NOT EXISTS idx_parks_location ON parks USING GIST(park_location);

-- =============================================================================
-- 2. Label tables (one per dimension)
-- =============================================================================
CREATE TABLE IF NOT EXISTS activities (
    activity_id SERIAL PRIMARY KEY,
    activity_name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS facilities (
    facility_id SERIAL PRIMARY KEY,
    facility_name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS features (
    feature_id SERIAL PRIMARY KEY,
    feature_name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS trail_types (
    trail_type_id SERIAL PRIMARY KEY,
    trail_type_name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS camp_types (
    camp_type_id SERIAL PRIMARY KEY,
    camp_type_name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS accessibility (
    accessibility_id SERIAL PRIMARY KEY,
    accessibility_name TEXT NOT NULL UNIQUE
);

-- =============================================================================
-- 3. Association tables (park <-> label, many-to-many)
-- =============================================================================
CREATE TABLE IF NOT EXISTS park_activities (
    park_id INTEGER NOT NULL REFERENCES parks(park_id) ON DELETE CASCADE,
    activity_id INTEGER NOT NULL REFERENCES activities(activity_id) ON DELETE CASCADE,
    PRIMARY KEY (park_id, activity_id)
);

CREATE TABLE IF NOT EXISTS park_facilities (
    park_id INTEGER NOT NULL REFERENCES parks(park_id) ON DELETE CASCADE,
    facility_id INTEGER NOT NULL REFERENCES facilities(facility_id) ON DELETE CASCADE,
    PRIMARY KEY (park_id, facility_id)
);

CREATE TABLE IF NOT EXISTS park_features (
    park_id INTEGER NOT NULL REFERENCES parks(park_id) ON DELETE CASCADE,
    feature_id INTEGER NOT NULL REFERENCES features(feature_id) ON DELETE CASCADE,
    PRIMARY KEY (park_id, feature_id)
);

CREATE TABLE IF NOT EXISTS park_trail_types (
    park_id INTEGER NOT NULL REFERENCES parks(park_id) ON DELETE CASCADE,
    trail_type_id INTEGER NOT NULL REFERENCES trail_types(trail_type_id) ON DELETE CASCADE,
    PRIMARY KEY (park_id, trail_type_id)
);

CREATE TABLE IF NOT EXISTS park_camp_types (
    park_id INTEGER NOT NULL REFERENCES parks(park_id) ON DELETE CASCADE,
    camp_type_id INTEGER NOT NULL REFERENCES camp_types(camp_type_id) ON DELETE CASCADE,
    PRIMARY KEY (park_id, camp_type_id)
);

CREATE TABLE IF NOT EXISTS park_accessibility (
    park_id INTEGER NOT NULL REFERENCES parks(park_id) ON DELETE CASCADE,
    accessibility_id INTEGER NOT NULL REFERENCES accessibility(accessibility_id) ON DELETE CASCADE,
    PRIMARY KEY (park_id, accessibility_id)
);

CREATE INDEX IF NOT EXISTS idx_park_activities_activity ON park_activities(activity_id);
CREATE INDEX IF NOT EXISTS idx_park_facilities_facility ON park_facilities(facility_id);
CREATE INDEX IF NOT EXISTS idx_park_features_feature ON park_features(feature_id);
CREATE INDEX IF NOT EXISTS idx_park_trail_types_trail_type ON park_trail_types(trail_type_id);
CREATE INDEX IF NOT EXISTS idx_park_camp_types_camp_type ON park_camp_types(camp_type_id);
CREATE INDEX IF NOT EXISTS idx_park_accessibility_accessibility ON park_accessibility(accessibility_id);
"#;

/// Default label vocabulary
///
/// Seeds the common labels so a fresh database can answer filtered queries
/// immediately. Parks themselves are loaded separately.
pub const DEFAULT_DATA: &str = r#"
INSERT INTO activities (activity_name) VALUES
    ('Hiking'), ('Fishing'), ('Biking'), ('Kayaking'), ('Climbing'),
    ('Horseback Riding'), ('Wildlife Viewing'), ('Stargazing')
ON CONFLICT (activity_name) DO NOTHING;

INSERT INTO facilities (facility_name) VALUES
    ('Restrooms'), ('Visitor Center'), ('Picnic Areas'), ('Parking'),
    ('Showers'), ('Boat Ramp')
ON CONFLICT (facility_name) DO NOTHING;

INSERT INTO features (feature_name) VALUES
    ('Waterfall'), ('Lake'), ('River'), ('Canyon'), ('Hot Springs'),
    ('Old Growth Forest'), ('Sand Dunes')
ON CONFLICT (feature_name) DO NOTHING;

INSERT INTO trail_types (trail_type_name) VALUES
    ('Loop'), ('Out and Back'), ('Point to Point')
ON CONFLICT (trail_type_name) DO NOTHING;

INSERT INTO camp_types (camp_type_name) VALUES
    ('Tent'), ('RV'), ('Cabin'), ('Backcountry'), ('Group')
ON CONFLICT (camp_type_name) DO NOTHING;

INSERT INTO accessibility (accessibility_name) VALUES
    ('Wheelchair Accessible'), ('Paved Trails'), ('Accessible Restrooms'),
    ('Accessible Campsites'), ('Service Animals Allowed')
ON CONFLICT (accessibility_name) DO NOTHING;
"#;
