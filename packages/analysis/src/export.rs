//! GeoJSON handoff for the presentation collaborator.
//!
//! The map and chart layers downstream consume plain GeoJSON feature
//! collections: zone polygons with magnitude/title attribution, and
//! impacted places as point features. No rendering or file I/O happens
//! here.

use geo::Point;
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use quake_map_models::{ImpactedPlace, RiskZone};

/// Converts risk zones into a polygon feature collection.
#[must_use]
pub fn risk_zones_to_geojson(zones: &[RiskZone]) -> FeatureCollection {
    let features = zones
        .iter()
        .map(|zone| {
            let mut properties = JsonObject::new();
            properties.insert("eventId".to_string(), JsonValue::from(zone.event_id.clone()));
            properties.insert("magnitude".to_string(), JsonValue::from(zone.magnitude));
            properties.insert("title".to_string(), JsonValue::from(zone.title.clone()));
            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(&zone.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Converts impacted place records into a point feature collection.
#[must_use]
pub fn impacted_places_to_geojson(records: &[ImpactedPlace]) -> FeatureCollection {
    let features = records
        .iter()
        .map(|record| {
            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), JsonValue::from(record.name.clone()));
            properties.insert(
                "country".to_string(),
                JsonValue::from(record.country.clone()),
            );
            if let Some(population) = record.population {
                properties.insert("population".to_string(), JsonValue::from(population));
            }
            properties.insert(
                "quakeMagnitude".to_string(),
                JsonValue::from(record.quake_magnitude),
            );
            properties.insert(
                "quakeTitle".to_string(),
                JsonValue::from(record.quake_title.clone()),
            );

            let point = Point::new(record.longitude, record.latitude);
            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(&point))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
