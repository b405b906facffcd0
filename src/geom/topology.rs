use geo::{MultiPolygon, Relate};

/// Topological class of a (possibly empty) union of polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Topology {
    Empty,
    Connected,
    Disconnected,
}

impl Topology {
    /// Classify a unioned geometry by its number of disjoint regions.
    pub(crate) fn of(geometry: &MultiPolygon<f64>) -> Self {
        match geometry.0.len() {
            0 => Self::Empty,
            1 => Self::Connected,
            _ => Self::Disconnected,
        }
    }
}

/// Returns `true` if `a` and `b` share a boundary segment of positive length
/// without overlapping interiors (rook adjacency).
///
/// DE-9IM: interiors disjoint (`F` at index 0) and boundary/boundary
/// dimension 1 (index 4). A shared corner point has dimension 0 and fails.
pub(crate) fn shares_edge(a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
    a.relate(b).matches("F***1****").unwrap_or(false)
}
