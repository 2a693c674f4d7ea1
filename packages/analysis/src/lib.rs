#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Seismic risk analysis: risk zone construction and spatial join.
//!
//! [`analyze`] filters events by magnitude, turns each qualifying
//! epicenter into an impact disc in Web Mercator, corrects discs that
//! overflow the ±180° antimeridian, reprojects the result to geographic
//! coordinates, and joins populated places against the zones with an
//! R-tree pre-filtered point-in-polygon test.
//!
//! Per-event failures (bad coordinates, oversized radius, degenerate
//! boolean ops) skip that event with a diagnostic; they never abort the
//! rest of the analysis. Empty inputs are a normal "no risk today"
//! outcome, not an error.

pub mod export;
pub mod join;

use geo::{Centroid, Point};
use quake_map_geometry::{GeometryError, antimeridian, buffer};
use quake_map_models::{AnalysisConfig, Event, ImpactedPlace, Place, RiskZone};
use quake_map_projection::ProjectionError;
use thiserror::Error;

/// Errors from the per-event risk zone pipeline.
///
/// Recoverable at the call site: [`analyze`] logs the offending event
/// and continues with the rest.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Coordinate projection failed.
    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    /// Disc buffering or antimeridian correction failed.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Output of a risk analysis run. Value-like and owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalysis {
    /// One record per (place, zone) pair where the place lies inside
    /// the zone.
    pub impacted: Vec<ImpactedPlace>,
    /// One zone per qualifying event that survived the pipeline.
    pub zones: Vec<RiskZone>,
}

/// Runs the full analysis over immutable inputs.
///
/// Output ordering is deterministic for a given input order: zones
/// follow event order, impacted records follow place order with ties
/// broken by zone order.
#[must_use]
pub fn analyze(events: &[Event], places: &[Place], config: &AnalysisConfig) -> RiskAnalysis {
    if events.is_empty() || places.is_empty() {
        log::info!("Event or place records unavailable, skipping analysis");
        return RiskAnalysis::default();
    }

    let significant: Vec<&Event> = events
        .iter()
        .filter(|event| event.magnitude >= config.min_magnitude)
        .collect();
    if significant.is_empty() {
        log::info!(
            "No events at or above magnitude {}, nothing to analyze",
            config.min_magnitude
        );
        return RiskAnalysis::default();
    }

    log::info!(
        "Analyzing impact of {} events (magnitude >= {}, radius {} km)",
        significant.len(),
        config.min_magnitude,
        config.risk_radius_km
    );

    let mut zones = Vec::with_capacity(significant.len());
    for event in significant {
        match build_risk_zone(event, config) {
            Ok(zone) => zones.push(zone),
            Err(e) => log::warn!("Skipping event {}: {e}", event.id),
        }
    }

    let impacted = join::impacted_places(places, &zones);
    log::info!("Identified {} potentially impacted places", impacted.len());

    RiskAnalysis { impacted, zones }
}

/// Builds one risk zone: project, buffer, correct, reproject.
fn build_risk_zone(event: &Event, config: &AnalysisConfig) -> Result<RiskZone, AnalysisError> {
    let center = quake_map_projection::project(event.longitude, event.latitude)?;
    let disc = buffer::disc(center, config.risk_radius_km * 1000.0)?;
    let corrected = antimeridian::correct(disc)?;
    let geometry = quake_map_projection::unproject_multi_polygon(&corrected);

    Ok(RiskZone {
        event_id: event.id.clone(),
        magnitude: event.magnitude,
        title: event.title.clone(),
        geometry,
    })
}

/// Geographic centroid of a zone, computed in projected space and
/// reprojected back, matching the metric-space centroid the
/// presentation layer expects for intensity weighting.
///
/// Returns `None` for a zone with empty geometry.
#[must_use]
pub fn zone_centroid(zone: &RiskZone) -> Option<Point<f64>> {
    let projected = quake_map_projection::project_multi_polygon(&zone.geometry);
    let centroid = projected.centroid()?;
    let (lon, lat) = quake_map_projection::unproject(centroid.0);
    Some(Point::new(lon, lat))
}

#[cfg(test)]
mod tests {
    use geo::BoundingRect;

    use super::*;

    fn event(id: &str, magnitude: f64, lon: f64, lat: f64) -> Event {
        Event {
            id: id.to_string(),
            magnitude,
            title: format!("M {magnitude} - test event {id}"),
            longitude: lon,
            latitude: lat,
        }
    }

    fn place(name: &str, lon: f64, lat: f64) -> Place {
        Place {
            name: name.to_string(),
            country: "Testland".to_string(),
            population: Some(10_000),
            longitude: lon,
            latitude: lat,
        }
    }

    #[test]
    fn empty_inputs_yield_empty_outputs() {
        let config = AnalysisConfig::default();
        let result = analyze(&[], &[place("Suva", 178.44, -18.13)], &config);
        assert!(result.zones.is_empty());
        assert!(result.impacted.is_empty());

        let result = analyze(&[event("q1", 5.0, 0.0, 0.0)], &[], &config);
        assert!(result.zones.is_empty());
        assert!(result.impacted.is_empty());
    }

    #[test]
    fn events_below_threshold_produce_no_zones() {
        let config = AnalysisConfig::default();
        let events = [event("weak", 3.9, 0.0, 0.0), event("strong", 4.0, 10.0, 10.0)];
        let result = analyze(&events, &[place("Nowhere", 50.0, 50.0)], &config);
        assert_eq!(result.zones.len(), 1);
        assert_eq!(result.zones[0].event_id, "strong");

        let strict = AnalysisConfig {
            min_magnitude: 9.9,
            ..AnalysisConfig::default()
        };
        let result = analyze(&events, &[place("Nowhere", 50.0, 50.0)], &strict);
        assert!(result.zones.is_empty());
        assert!(result.impacted.is_empty());
    }

    #[test]
    fn place_at_the_epicenter_is_always_impacted() {
        let config = AnalysisConfig::default();
        let events = [event("q1", 5.0, 33.3, -12.4)];
        let places = [place("Epicenter City", 33.3, -12.4)];
        let result = analyze(&events, &places, &config);
        assert_eq!(result.impacted.len(), 1);
        assert_eq!(result.impacted[0].name, "Epicenter City");
        assert!((result.impacted[0].quake_magnitude - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn place_ten_degrees_away_is_never_impacted() {
        let config = AnalysisConfig::default();
        let events = [event("q1", 6.5, 20.0, 0.0)];
        let places = [place("Far City", 30.0, 0.0)];
        let result = analyze(&events, &places, &config);
        assert_eq!(result.zones.len(), 1);
        assert!(result.impacted.is_empty());
    }

    #[test]
    fn overlapping_zones_emit_one_record_per_zone() {
        let config = AnalysisConfig::default();
        // Two epicenters ~22 km apart; their 50 km discs overlap around
        // the midpoint.
        let events = [event("q1", 5.0, 0.0, 0.0), event("q2", 5.5, 0.2, 0.0)];
        let places = [place("Between", 0.1, 0.0)];
        let result = analyze(&events, &places, &config);
        assert_eq!(result.zones.len(), 2);
        assert_eq!(result.impacted.len(), 2);
        // Records follow zone input order.
        assert!((result.impacted[0].quake_magnitude - 5.0).abs() < f64::EPSILON);
        assert!((result.impacted[1].quake_magnitude - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn antimeridian_zone_spans_both_map_edges() {
        let config = AnalysisConfig::default();
        let zone = build_risk_zone(&event("dateline", 5.0, 179.9, 0.0), &config).unwrap();
        assert_eq!(zone.geometry.0.len(), 2);

        let mut bounds: Vec<_> = zone
            .geometry
            .0
            .iter()
            .map(|part| part.bounding_rect().unwrap())
            .collect();
        bounds.sort_by(|a, b| a.min().x.total_cmp(&b.min().x));

        // Western part starts at -180, eastern part ends at 180, and
        // neither spans the whole longitude domain.
        assert!((bounds[0].min().x - -180.0).abs() < 1e-6);
        assert!((bounds[1].max().x - 180.0).abs() < 1e-6);
        for part in &bounds {
            assert!(part.max().x - part.min().x < 180.0);
        }
    }

    #[test]
    fn places_on_both_sides_of_the_dateline_are_impacted() {
        let config = AnalysisConfig::default();
        let events = [event("dateline", 5.0, 179.9, 0.0)];
        let places = [
            place("East Side", 179.8, 0.0),
            place("West Side", -179.9, 0.0),
            place("Far Away", 170.0, 0.0),
        ];
        let result = analyze(&events, &places, &config);
        let names: Vec<&str> = result.impacted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["East Side", "West Side"]);
    }

    #[test]
    fn oversized_radius_skips_the_event_without_aborting() {
        // Half the world circumference in km, comfortably oversized.
        let config = AnalysisConfig {
            min_magnitude: 4.0,
            risk_radius_km: 25_000.0,
        };
        let events = [event("q1", 5.0, 179.9, 0.0)];
        let places = [place("Suva", 178.44, -18.13)];
        let result = analyze(&events, &places, &config);
        assert!(result.zones.is_empty());
        assert!(result.impacted.is_empty());
    }

    #[test]
    fn bad_event_does_not_abort_the_rest() {
        let config = AnalysisConfig::default();
        let events = [
            event("bad", 5.0, f64::NAN, 0.0),
            event("good", 5.0, 10.0, 10.0),
        ];
        let places = [place("Near Good", 10.0, 10.0)];
        let result = analyze(&events, &places, &config);
        assert_eq!(result.zones.len(), 1);
        assert_eq!(result.zones[0].event_id, "good");
        assert_eq!(result.impacted.len(), 1);
    }

    #[test]
    fn centroid_of_an_ordinary_zone_sits_at_the_epicenter() {
        let config = AnalysisConfig::default();
        let zone = build_risk_zone(&event("q1", 5.0, 33.3, -12.4), &config).unwrap();
        let centroid = zone_centroid(&zone).unwrap();
        assert!((centroid.x() - 33.3).abs() < 1e-3);
        assert!((centroid.y() - -12.4).abs() < 1e-3);
    }
}
