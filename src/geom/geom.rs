use geo::{BooleanOps, BoundingRect, MultiPolygon};
use rstar::RTree;

use crate::error::{Result, SearchError};
use crate::geom::{BoundingBox, bbox::envelope_of};

/// Block geometries with a bounding-box index for neighborhood queries.
#[derive(Debug, Clone)]
pub(crate) struct Geometries {
    shapes: Vec<MultiPolygon<f64>>,
    rtree: RTree<BoundingBox>,
}

impl Geometries {
    /// Build the store; every shape must be non-empty.
    pub(crate) fn new(shapes: Vec<MultiPolygon<f64>>) -> Result<Self> {
        let boxes = shapes.iter().enumerate()
            .map(|(i, shape)| shape.bounding_rect()
                .map(|rect| BoundingBox::new(i, rect))
                .ok_or_else(|| SearchError::invalid_input(format!("geometry #{i} is empty"))))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rtree: RTree::bulk_load(boxes), shapes })
    }

    #[inline] pub(crate) fn shape(&self, idx: usize) -> &MultiPolygon<f64> { &self.shapes[idx] }

    /// Indices of shapes whose bounding box intersects the bounding box of `geometry`,
    /// in ascending order.
    pub(crate) fn candidates_near(&self, geometry: &MultiPolygon<f64>) -> Vec<usize> {
        let Some(rect) = geometry.bounding_rect() else { return vec![] };
        let mut found = self.rtree.locate_in_envelope_intersecting(&envelope_of(&rect))
            .map(|bbox| bbox.idx())
            .collect::<Vec<_>>();
        found.sort_unstable();
        found
    }

    /// Union of the shapes at `indices`.
    pub(crate) fn union_of(&self, indices: impl IntoIterator<Item = usize>) -> Result<MultiPolygon<f64>> {
        let mut shapes = indices.into_iter().map(|i| &self.shapes[i]);
        let Some(first) = shapes.next() else { return Ok(MultiPolygon(vec![])) };
        let union = shapes.fold(first.clone(), |acc, shape| acc.union(shape));

        let finite = union.0.iter()
            .flat_map(|polygon| polygon.exterior().coords())
            .all(|c| c.x.is_finite() && c.y.is_finite());
        if !finite || union.0.is_empty() {
            return Err(SearchError::degenerate("union of non-empty block set has no finite area"));
        }
        Ok(union)
    }
}
