#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spherical Web Mercator (EPSG:3857) projection.
//!
//! Converts between WGS84 longitude/latitude degrees and planar meters on
//! a sphere of radius 6 378 137 m, so that buffering can happen in an
//! approximately Euclidean metric space:
//!
//! ```text
//! x = R * lon_rad
//! y = R * ln(tan(pi/4 + lat_rad / 2))
//! ```
//!
//! The forward transform diverges at the poles; [`project`] clamps input
//! latitude to ±[`MAX_LATITUDE_DEG`] first, which is a documented
//! precision boundary of this projection, not an error. Use
//! [`project_strict`] when out-of-domain latitude should be rejected
//! instead of clamped.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use geo::{Coord, MapCoords, MultiPolygon, coord};
use thiserror::Error;

/// Spherical Earth radius used by Web Mercator, in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Projected x of the ±180° meridian: half the world width, ≈20 037 508.34 m.
pub const MAX_X_M: f64 = PI * EARTH_RADIUS_M;

/// Full horizontal span of the projection, ≈40 075 016.69 m.
pub const WORLD_WIDTH_M: f64 = 2.0 * MAX_X_M;

/// Latitude at which projected y reaches ±[`MAX_X_M`]; y diverges beyond it.
pub const MAX_LATITUDE_DEG: f64 = 85.051_128_779_806_59;

/// Errors from coordinate projection.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    /// Input longitude or latitude is NaN or infinite.
    #[error("non-finite coordinate (lon={lon}, lat={lat})")]
    NonFiniteCoordinate {
        /// Offending longitude.
        lon: f64,
        /// Offending latitude.
        lat: f64,
    },

    /// Latitude is outside the ±85.0511° Web Mercator domain and clamping
    /// was not requested.
    #[error("latitude {lat} is outside the ±85.0511° Web Mercator domain")]
    LatitudeOutOfDomain {
        /// Offending latitude.
        lat: f64,
    },
}

/// Projects WGS84 degrees to Web Mercator meters, clamping latitude to
/// ±[`MAX_LATITUDE_DEG`].
///
/// The clamp trades precision near the poles for totality: a pole input
/// produces the projection's extreme finite y rather than ±inf.
///
/// # Errors
///
/// Returns [`ProjectionError::NonFiniteCoordinate`] if either input is
/// NaN or infinite.
pub fn project(lon: f64, lat: f64) -> Result<Coord<f64>, ProjectionError> {
    if !lon.is_finite() || !lat.is_finite() {
        return Err(ProjectionError::NonFiniteCoordinate { lon, lat });
    }
    Ok(project_clamped(lon, lat))
}

/// Forward transform with the latitude clamp applied; callers have
/// already checked for finite input.
fn project_clamped(lon: f64, lat: f64) -> Coord<f64> {
    let lat = lat.clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG);
    coord! {
        x: EARTH_RADIUS_M * lon.to_radians(),
        y: EARTH_RADIUS_M * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln(),
    }
}

/// Projects WGS84 degrees to Web Mercator meters with clamping disabled.
///
/// # Errors
///
/// Returns [`ProjectionError::LatitudeOutOfDomain`] for latitude beyond
/// ±[`MAX_LATITUDE_DEG`] (including the exact poles), and
/// [`ProjectionError::NonFiniteCoordinate`] for NaN/infinite input.
pub fn project_strict(lon: f64, lat: f64) -> Result<Coord<f64>, ProjectionError> {
    if !lon.is_finite() || !lat.is_finite() {
        return Err(ProjectionError::NonFiniteCoordinate { lon, lat });
    }
    if lat.abs() > MAX_LATITUDE_DEG {
        return Err(ProjectionError::LatitudeOutOfDomain { lat });
    }
    project(lon, lat)
}

/// Inverse transform: Web Mercator meters back to WGS84 `(lon, lat)`
/// degrees.
///
/// Analytic inverse of [`project`]; total on finite input. Round-trips
/// within 1e-6 degrees everywhere inside the valid domain.
#[must_use]
pub fn unproject(coord: Coord<f64>) -> (f64, f64) {
    let lon = (coord.x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (coord.y / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2).to_degrees();
    (lon, lat)
}

/// Projects an entire geographic multi-polygon to Web Mercator meters,
/// clamping each vertex latitude like [`project`].
#[must_use]
pub fn project_multi_polygon(geometry: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    geometry.map_coords(|c| project_clamped(c.x, c.y))
}

/// Reprojects an entire projected multi-polygon back to geographic
/// coordinates.
#[must_use]
pub fn unproject_multi_polygon(geometry: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    geometry.map_coords(|c| {
        let (lon, lat) = unproject(c);
        coord! { x: lon, y: lat }
    })
}
