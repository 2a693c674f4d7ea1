//! Metric disc buffering around a projected point.

use std::f64::consts::TAU;

use geo::{Coord, LineString, Polygon, coord};

use crate::GeometryError;

/// Number of segments in the disc tessellation. Chord error at 50 km
/// radius is about 6 m, well below the join tolerance.
pub const DISC_SEGMENTS: usize = 64;

/// Builds a closed regular polygon approximating a disc of `radius_m`
/// meters around `center`.
///
/// The result may legitimately extend past the projection's ±half-world
/// x bound when the center is near the ±180° edge; that overflow is what
/// [`crate::antimeridian::correct`] resolves.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidRadius`] if `radius_m` is zero,
/// negative, or non-finite. The check runs before any geometry is built.
#[allow(clippy::cast_precision_loss)]
pub fn disc(center: Coord<f64>, radius_m: f64) -> Result<Polygon<f64>, GeometryError> {
    if !radius_m.is_finite() || radius_m <= 0.0 {
        return Err(GeometryError::InvalidRadius { radius_m });
    }

    let ring: Vec<Coord<f64>> = (0..DISC_SEGMENTS)
        .map(|segment| {
            let theta = TAU * segment as f64 / DISC_SEGMENTS as f64;
            coord! {
                x: center.x + radius_m * theta.cos(),
                y: center.y + radius_m * theta.sin(),
            }
        })
        .collect();

    // Polygon::new closes the exterior ring (first point == last point).
    Ok(Polygon::new(LineString::from(ring), vec![]))
}
