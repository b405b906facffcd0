//! Small square-grid maps for unit tests.

use std::sync::Arc;

use geo::{MultiPolygon, Rect};

use crate::map::{Block, BlockId, DistanceTable, Map, SchoolId};

/// A unit square at grid cell `(x, y)` assigned to school `school`.
#[derive(Clone, Debug)]
pub(crate) struct GridBlock {
    x: i32,
    y: i32,
    school: u32,
    majority: u32,
    minority: u32,
    students: u32,
    contains_school: bool,
    distances: Vec<(u32, f64)>,
}

impl GridBlock {
    pub(crate) fn new(x: i32, y: i32, school: u32) -> Self {
        Self { x, y, school, majority: 10, minority: 10, students: 1, contains_school: false, distances: vec![] }
    }

    pub(crate) fn population(mut self, majority: u32, minority: u32) -> Self {
        self.majority = majority;
        self.minority = minority;
        self
    }

    pub(crate) fn students(mut self, students: u32) -> Self {
        self.students = students;
        self
    }

    pub(crate) fn school_building(mut self) -> Self {
        self.contains_school = true;
        self
    }

    pub(crate) fn distance(mut self, school: u32, distance: f64) -> Self {
        self.distances.push((school, distance));
        self
    }
}

/// Build a map where block `i` of `cells` gets `BlockId(i)`.
pub(crate) fn grid_map(cells: &[GridBlock]) -> Arc<Map> {
    let blocks = cells.iter().enumerate()
        .map(|(i, cell)| Block {
            id: BlockId(i as u64),
            school: SchoolId(cell.school),
            majority: cell.majority,
            minority: cell.minority,
            students: cell.students,
            contains_school: cell.contains_school,
            geometry: MultiPolygon(vec![Rect::new(
                (cell.x as f64, cell.y as f64),
                (cell.x as f64 + 1.0, cell.y as f64 + 1.0),
            ).to_polygon()]),
        })
        .collect();

    let distances = cells.iter().enumerate()
        .flat_map(|(i, cell)| cell.distances.iter()
            .map(move |&(school, distance)| (SchoolId(school), BlockId(i as u64), distance)))
        .collect::<DistanceTable>();

    Arc::new(Map::new(blocks, &distances).expect("valid grid map"))
}
