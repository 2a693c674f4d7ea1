//! Spatial join of place points against risk zone polygons.
//!
//! Zone bounding boxes go into an R-tree; each place point is tested
//! against the envelope candidates with an exact point-in-polygon
//! predicate. The pre-filter only prunes, it never decides: every
//! emitted record passed the exact test, and no zone whose envelope
//! contains the point is skipped.

use geo::{BoundingRect, Intersects, Point};
use quake_map_models::{ImpactedPlace, Place, RiskZone};
use rstar::{AABB, RTree, RTreeObject};

/// A zone's bounding box stored in the R-tree with its input index.
struct ZoneEntry {
    index: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for ZoneEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Pairs every place with every zone whose geometry contains it.
///
/// Containment is boundary-inclusive (`Intersects`): a place exactly on
/// a zone's edge is impacted. A place under several zones yields one
/// record per zone, in zone input order.
#[must_use]
pub fn impacted_places(places: &[Place], zones: &[RiskZone]) -> Vec<ImpactedPlace> {
    if zones.is_empty() {
        return Vec::new();
    }

    let entries: Vec<ZoneEntry> = zones
        .iter()
        .enumerate()
        .filter_map(|(index, zone)| {
            // A zone with empty geometry contains nothing; dropping it
            // from the index cannot lose a true containment.
            let rect = zone.geometry.bounding_rect()?;
            Some(ZoneEntry {
                index,
                envelope: AABB::from_corners(
                    [rect.min().x, rect.min().y],
                    [rect.max().x, rect.max().y],
                ),
            })
        })
        .collect();
    let tree = RTree::bulk_load(entries);

    let mut impacted = Vec::new();
    for place in places {
        let point = Point::new(place.longitude, place.latitude);
        let query_env = AABB::from_point([place.longitude, place.latitude]);

        let mut hits: Vec<usize> = tree
            .locate_in_envelope_intersecting(&query_env)
            .filter(|entry| zones[entry.index].geometry.intersects(&point))
            .map(|entry| entry.index)
            .collect();
        // R-tree visit order is arbitrary; report zones in input order.
        hits.sort_unstable();

        for index in hits {
            impacted.push(ImpactedPlace::new(place, &zones[index]));
        }
    }

    impacted
}
