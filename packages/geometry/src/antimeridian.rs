//! Antimeridian overflow correction for buffered discs.
//!
//! A disc buffered near the ±180° meridian spills past the projection's
//! horizontal span. Drawn as-is, that overflow renders off the edge of
//! the map instead of wrapping to the opposite side. The fix is a pure
//! clip / translate / reunite over immutable polygon values: keep the
//! part inside the world window, clip the overflow, shift it one world
//! width to the opposite edge, and union the two parts.

use geo::{BoundingRect, MultiPolygon, Polygon};
use quake_map_projection::{MAX_X_M, WORLD_WIDTH_M};

use crate::{GeometryError, ops};

/// Margin added past the overflowing bound when clipping the overflow
/// part, so the window strictly contains the geometry's extreme vertex.
const OVERFLOW_MARGIN_M: f64 = 1.0;

/// Splits a projected polygon that overflows the ±180° edge into a
/// two-part geometry on opposite sides of the map.
///
/// A polygon inside the world window is returned unchanged as a
/// single-part multi-polygon.
///
/// # Errors
///
/// Returns [`GeometryError::OversizedBuffer`] when the polygon overflows
/// both edges at once (only possible when the buffer radius approaches
/// half the world width), and [`GeometryError::Degenerate`] when the
/// input is empty or the recombined parts fail validation.
pub fn correct(polygon: Polygon<f64>) -> Result<MultiPolygon<f64>, GeometryError> {
    let bounds = polygon
        .bounding_rect()
        .ok_or_else(|| GeometryError::Degenerate {
            message: "cannot correct an empty polygon".to_string(),
        })?;
    let min_x = bounds.min().x;
    let max_x = bounds.max().x;

    let overflows_east = max_x > MAX_X_M;
    let overflows_west = min_x < -MAX_X_M;

    // Overflowing both edges, or being wider than the world outright,
    // means the buffer radius exceeds half the world circumference and
    // a unilateral split would silently self-overlap.
    if (overflows_east && overflows_west) || max_x - min_x > WORLD_WIDTH_M {
        return Err(GeometryError::OversizedBuffer {
            width_m: max_x - min_x,
        });
    }
    if !overflows_east && !overflows_west {
        return Ok(MultiPolygon::new(vec![polygon]));
    }

    let main = ops::clip(&polygon, ops::horizontal_window(-MAX_X_M, MAX_X_M));
    let shifted = if overflows_east {
        let overflow = ops::clip(
            &polygon,
            ops::horizontal_window(MAX_X_M, max_x + OVERFLOW_MARGIN_M),
        );
        ops::translate_x(&overflow, -WORLD_WIDTH_M)
    } else {
        let overflow = ops::clip(
            &polygon,
            ops::horizontal_window(min_x - OVERFLOW_MARGIN_M, -MAX_X_M),
        );
        ops::translate_x(&overflow, WORLD_WIDTH_M)
    };

    let corrected = ops::union(&[main, shifted]);
    ops::validate(&corrected)?;
    Ok(corrected)
}
