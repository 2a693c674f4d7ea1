#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record and output types for the seismic risk analysis pipeline.
//!
//! Input records ([`Event`], [`Place`]) arrive already decoded from the
//! upstream feeds and are immutable once constructed. Output records
//! ([`RiskZone`], [`ImpactedPlace`]) are value-like: the analysis produces
//! them once and never mutates them afterwards.

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

/// A seismic event record from the upstream quake feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Feed-assigned event identifier (e.g. "us7000abcd").
    pub id: String,
    /// Moment magnitude.
    pub magnitude: f64,
    /// Human-readable event label (e.g. "M 5.2 - 104 km E of Ndoi Island, Fiji").
    pub title: String,
    /// Epicenter longitude (WGS84 degrees).
    pub longitude: f64,
    /// Epicenter latitude (WGS84 degrees).
    pub latitude: f64,
}

/// A populated place record from the upstream places feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Place name (e.g. "Suva").
    pub name: String,
    /// Country label.
    pub country: String,
    /// Maximum population estimate, if the feed provides one.
    pub population: Option<u64>,
    /// Longitude (WGS84 degrees).
    pub longitude: f64,
    /// Latitude (WGS84 degrees).
    pub latitude: f64,
}

/// A qualifying event's impact disc in geographic coordinates.
///
/// The geometry is multi-part because a disc buffered near the ±180°
/// antimeridian is split into parts on opposite edges of the map. Zones
/// carry the source event's magnitude and title for downstream
/// attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskZone {
    /// Identifier of the source event.
    pub event_id: String,
    /// Magnitude of the source event.
    pub magnitude: f64,
    /// Title of the source event.
    pub title: String,
    /// Impact geometry in WGS84 degrees (one or two parts).
    pub geometry: MultiPolygon<f64>,
}

/// A place that lies inside a risk zone.
///
/// One record is emitted per intersecting (place, zone) pair: a place
/// under two overlapping zones appears twice, once per zone. No
/// closest-zone tie-break is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactedPlace {
    /// Place name.
    pub name: String,
    /// Country label.
    pub country: String,
    /// Maximum population estimate, if known.
    pub population: Option<u64>,
    /// Place longitude (WGS84 degrees).
    pub longitude: f64,
    /// Place latitude (WGS84 degrees).
    pub latitude: f64,
    /// Magnitude of the zone's source event.
    pub quake_magnitude: f64,
    /// Title of the zone's source event.
    pub quake_title: String,
}

impl ImpactedPlace {
    /// Pairs a place with the zone it falls inside.
    #[must_use]
    pub fn new(place: &Place, zone: &RiskZone) -> Self {
        Self {
            name: place.name.clone(),
            country: place.country.clone(),
            population: place.population,
            longitude: place.longitude,
            latitude: place.latitude,
            quake_magnitude: zone.magnitude,
            quake_title: zone.title.clone(),
        }
    }
}

/// Configuration for a risk analysis run.
///
/// Passed explicitly into the analysis rather than read from ambient
/// state, so repeated runs (e.g. a scheduled re-analysis) stay
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisConfig {
    /// Minimum magnitude for an event to produce a risk zone.
    pub min_magnitude: f64,
    /// Impact disc radius in kilometers.
    pub risk_radius_km: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_magnitude: 4.0,
            risk_radius_km: 50.0,
        }
    }
}
