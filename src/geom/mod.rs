mod bbox;
mod geom;
mod topology;

use bbox::BoundingBox;
pub(crate) use geom::Geometries;
pub(crate) use topology::{Topology, shares_edge};
