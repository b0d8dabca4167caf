//! Exact point-in-polygon testing for candidate regions.
//!
//! The envelope stage only tells us a point *might* be inside a region. This
//! module runs the real test against the region's rings using
//! `geo::CoordinatePosition`, with a closed rule: a coordinate on any ring
//! (exterior or hole) counts as inside.
//!
//! Multi-part geometries are tested part by part. `geo` classifies a
//! `MultiPolygon` by boundary parity, which would put a coordinate on an edge
//! shared by two parts *outside*; testing each polygon independently keeps
//! such coordinates inside.

use crate::error::GeometryFault;
use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Area, Coord, LineString, MultiPolygon, Polygon};
use rustc_hash::FxHashSet;

/// Where a coordinate falls relative to a region's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Containment {
    /// Strictly inside at least one part
    Interior,
    /// On an edge or vertex, not strictly inside any part
    Boundary,
    /// Outside every part, or strictly inside a hole
    Exterior,
}

impl Containment {
    /// Closed containment: interior and boundary both count.
    pub fn is_inside(self) -> bool {
        !matches!(self, Containment::Exterior)
    }
}

/// Classify `coord` against `geometry`.
///
/// Callers must run [`check_geometry`] first; the result for a geometry with
/// degenerate rings is whatever `geo` happens to compute.
pub fn locate(geometry: &MultiPolygon<f64>, coord: Coord<f64>) -> Containment {
    let mut on_boundary = false;

    for polygon in geometry.0.iter() {
        match polygon.coordinate_position(&coord) {
            CoordPos::Inside => return Containment::Interior,
            CoordPos::OnBoundary => on_boundary = true,
            CoordPos::Outside => {}
        }
    }

    if on_boundary {
        Containment::Boundary
    } else {
        Containment::Exterior
    }
}

/// Check that the containment test is defined for every ring of `geometry`.
///
/// Each ring needs at least three distinct vertices, a non-zero area and only
/// finite coordinates. Self-intersections and hole placement are not checked.
pub fn check_geometry(geometry: &MultiPolygon<f64>) -> Result<(), GeometryFault> {
    for (polygon_idx, polygon) in geometry.0.iter().enumerate() {
        let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
        for (ring_idx, ring) in rings.enumerate() {
            check_ring(ring, polygon_idx, ring_idx)?;
        }
    }
    Ok(())
}

fn check_ring(ring: &LineString<f64>, polygon: usize, ring_idx: usize) -> Result<(), GeometryFault> {
    if ring.0.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(GeometryFault::NonFiniteCoordinate {
            polygon,
            ring: ring_idx,
        });
    }

    let vertices = distinct_vertices(ring);
    if vertices < 3 {
        return Err(GeometryFault::DegenerateRing {
            polygon,
            ring: ring_idx,
            vertices,
        });
    }

    if Polygon::new(ring.clone(), vec![]).unsigned_area() == 0.0 {
        return Err(GeometryFault::ZeroAreaRing {
            polygon,
            ring: ring_idx,
        });
    }

    Ok(())
}

/// Number of unique coordinates in the ring, closing coordinate included.
fn distinct_vertices(ring: &LineString<f64>) -> usize {
    // `+ 0.0` folds -0.0 into 0.0 so both hash alike
    ring.0
        .iter()
        .map(|c| ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits()))
        .collect::<FxHashSet<_>>()
        .len()
}
