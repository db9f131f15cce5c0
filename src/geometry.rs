//! Planar polygon predicates used by the drawing workflow and region hit-testing.
//!
//! Vertex lists are treated as cyclic: the closing edge from the last vertex
//! back to the first is implicit and must never be stored explicitly.

use serde::{Deserialize, Serialize};

/// A geographical coordinate: latitude first (index 0), longitude second
/// (index 1), both in decimal degrees.
///
/// # Examples
///
/// ```
/// use meteomap::LatLon;
///
/// let berlin_center = LatLon(52.5200, 13.4050);
/// assert_eq!(berlin_center.0, 52.5200); // Latitude
/// assert_eq!(berlin_center.1, 13.4050); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Both coordinates are finite numbers (no NaN or infinities).
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

/// Ray-casting parity test: is `point` strictly inside the polygon described
/// by `polygon`'s cyclic vertex list?
///
/// Walks every edge `(polygon[j], polygon[i])` with `j` the predecessor index
/// (wrapping) and toggles the parity each time the point's vertical ray
/// crosses the edge.
///
/// Points exactly on an edge or vertex get an implementation-defined answer:
/// the endpoint comparisons are strict, so boundary-exact inputs may land on
/// either side. Callers must not rely on boundary classification.
///
/// Polygons with fewer than 3 vertices contain nothing.
///
/// # Examples
///
/// ```
/// use meteomap::{point_in_polygon, LatLon};
///
/// let triangle = [LatLon(0.0, 0.0), LatLon(4.0, 0.0), LatLon(0.0, 4.0)];
/// assert!(point_in_polygon(LatLon(1.0, 1.0), &triangle));
/// assert!(!point_in_polygon(LatLon(3.0, 3.0), &triangle));
/// ```
pub fn point_in_polygon(point: LatLon, polygon: &[LatLon]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let LatLon(px, py) = point;
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let LatLon(xi, yi) = polygon[i];
        let LatLon(xj, yj) = polygon[j];

        let crosses =
            (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Vertex-containment overlap heuristic: true iff any vertex of `a` lies
/// inside `b`, or any vertex of `b` lies inside `a`.
///
/// This is deliberately NOT a full polygon-intersection test. Two polygons
/// whose edges cross but whose vertices all stay mutually outside (a narrow
/// sliver cutting through the middle) are not reported as overlapping. The
/// incomplete semantics are part of the drawing workflow's contract and must
/// not be "fixed" here.
pub fn polygons_overlap(a: &[LatLon], b: &[LatLon]) -> bool {
    a.iter().any(|&v| point_in_polygon(v, b)) || b.iter().any(|&v| point_in_polygon(v, a))
}
