//! Polygon primitives used by the antimeridian corrector.
//!
//! Thin wrappers over the `geo` crate's boolean and affine algorithms,
//! plus a validation gate so a failed boolean op surfaces as a
//! [`GeometryError`] instead of flowing downstream as an empty or open
//! geometry.

use geo::{BooleanOps, CoordsIter, MultiPolygon, Polygon, Rect, Translate, coord};

use crate::GeometryError;

/// Vertical half-extent of clip windows, in meters. Exceeds any
/// projected latitude (|y| tops out near 2e7 at the latitude clamp),
/// while staying small enough that the boolean-op backend's
/// bounding-box-relative fixed-point snapping keeps sub-meter precision
/// (an over-large extent coarsens the grid and drops narrow clips).
pub const CLIP_VERTICAL_EXTENT_M: f64 = 1.0e8;

/// A full-height clip window covering `[min_x, max_x]` horizontally.
#[must_use]
pub fn horizontal_window(min_x: f64, max_x: f64) -> Rect<f64> {
    Rect::new(
        coord! { x: min_x, y: -CLIP_VERTICAL_EXTENT_M },
        coord! { x: max_x, y: CLIP_VERTICAL_EXTENT_M },
    )
}

/// Intersects a polygon with an axis-aligned rectangle.
///
/// Disjoint inputs produce an empty multi-polygon, which callers treat
/// as "nothing on this side" rather than an error.
#[must_use]
pub fn clip(polygon: &Polygon<f64>, window: Rect<f64>) -> MultiPolygon<f64> {
    polygon.intersection(&window.to_polygon())
}

/// Merges parts into a single multi-part geometry with no interior
/// gaps or overlaps along shared boundaries.
#[must_use]
pub fn union(parts: &[MultiPolygon<f64>]) -> MultiPolygon<f64> {
    parts
        .iter()
        .fold(MultiPolygon::new(Vec::new()), |merged, part| {
            merged.union(part)
        })
}

/// Rigid horizontal shift by `dx` meters.
#[must_use]
pub fn translate_x(geometry: &MultiPolygon<f64>, dx: f64) -> MultiPolygon<f64> {
    geometry.translate(dx, 0.0)
}

/// Checks that a boolean-op result is usable downstream.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the geometry is empty, any
/// ring is open or has fewer than four coordinates, or any coordinate is
/// non-finite.
pub fn validate(geometry: &MultiPolygon<f64>) -> Result<(), GeometryError> {
    if geometry.0.is_empty() {
        return Err(GeometryError::Degenerate {
            message: "empty geometry".to_string(),
        });
    }

    for polygon in &geometry.0 {
        for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
            if ring.0.len() < 4 {
                return Err(GeometryError::Degenerate {
                    message: format!("ring with {} coordinates", ring.0.len()),
                });
            }
            if ring.0.first() != ring.0.last() {
                return Err(GeometryError::Degenerate {
                    message: "open ring".to_string(),
                });
            }
        }
        if polygon
            .coords_iter()
            .any(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(GeometryError::Degenerate {
                message: "non-finite coordinate".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use geo::{BoundingRect, LineString};

    use super::*;

    fn unit_square(min_x: f64, min_y: f64, size: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                coord! { x: min_x, y: min_y },
                coord! { x: min_x + size, y: min_y },
                coord! { x: min_x + size, y: min_y + size },
                coord! { x: min_x, y: min_y + size },
            ]),
            vec![],
        )
    }

    #[test]
    fn clip_keeps_the_covered_half() {
        let square = unit_square(0.0, 0.0, 10.0);
        let clipped = clip(&square, horizontal_window(5.0, 20.0));
        let bounds = clipped.bounding_rect().unwrap();
        assert!((bounds.min().x - 5.0).abs() < 1e-9);
        assert!((bounds.max().x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn clip_of_disjoint_window_is_empty() {
        let square = unit_square(0.0, 0.0, 10.0);
        let clipped = clip(&square, horizontal_window(50.0, 60.0));
        assert!(clipped.0.is_empty());
    }

    #[test]
    fn union_of_disjoint_parts_keeps_both() {
        let left = MultiPolygon::new(vec![unit_square(0.0, 0.0, 1.0)]);
        let right = MultiPolygon::new(vec![unit_square(10.0, 0.0, 1.0)]);
        let merged = union(&[left, right]);
        assert_eq!(merged.0.len(), 2);
    }

    #[test]
    fn union_welds_parts_sharing_an_edge() {
        let left = MultiPolygon::new(vec![unit_square(0.0, 0.0, 1.0)]);
        let right = MultiPolygon::new(vec![unit_square(1.0, 0.0, 1.0)]);
        let merged = union(&[left, right]);
        assert_eq!(merged.0.len(), 1, "shared edge must not leave a seam");
        let bounds = merged.bounding_rect().unwrap();
        assert!((bounds.max().x - 2.0).abs() < 1e-9);
    }

    #[test]
    fn translate_shifts_only_x() {
        let square = MultiPolygon::new(vec![unit_square(0.0, 3.0, 1.0)]);
        let shifted = translate_x(&square, -100.0);
        let bounds = shifted.bounding_rect().unwrap();
        assert!((bounds.min().x - -100.0).abs() < 1e-9);
        assert!((bounds.min().y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_empty_geometry() {
        let empty = MultiPolygon::<f64>::new(vec![]);
        assert!(matches!(
            validate(&empty),
            Err(GeometryError::Degenerate { .. })
        ));
        assert!(validate(&MultiPolygon::new(vec![unit_square(0.0, 0.0, 1.0)])).is_ok());
    }
}
