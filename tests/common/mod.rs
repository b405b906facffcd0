// Shared fixtures for integration tests: unit-square blocks on a grid.
#![allow(dead_code)]

use std::sync::Arc;

use catchment::{Block, BlockId, DistanceTable, Map, SchoolId};
use geo::{MultiPolygon, Rect};

pub fn square(x: i32, y: i32) -> MultiPolygon<f64> {
    MultiPolygon(vec![Rect::new((x as f64, y as f64), (x as f64 + 1.0, y as f64 + 1.0)).to_polygon()])
}

pub fn block(id: u64, x: i32, y: i32, school: u32, majority: u32, minority: u32, students: u32, contains_school: bool) -> Block {
    Block {
        id: BlockId(id),
        school: SchoolId(school),
        majority,
        minority,
        students,
        contains_school,
        geometry: square(x, y),
    }
}

/// District A (school 1) = block 10 with share 0.10; district B (school 2) =
/// blocks 20, 30 with share 0.50. Block 20 borders A.
pub fn worked_example() -> Arc<Map> {
    let blocks = vec![
        block(10, 0, 0, 1, 90, 10, 10, true),
        block(20, 1, 0, 2, 10, 30, 1, false),
        block(30, 2, 0, 2, 40, 20, 1, true),
    ];
    let distances = DistanceTable::from_iter([
        (SchoolId(1), BlockId(10), 1.0),
        (SchoolId(1), BlockId(20), 1.1),
        (SchoolId(2), BlockId(20), 1.0),
        (SchoolId(2), BlockId(30), 1.0),
    ]);
    Arc::new(Map::new(blocks, &distances).unwrap())
}

/// A `size` x `size` grid split into four quadrant districts (schools 1..=4),
/// each with its school in the quadrant's lower-left cell. `minority[i]` and
/// `students[i]` describe the cell `(i % size, i / size)`.
///
/// Every block has a Manhattan walking distance to every school.
pub fn quadrants(size: i32, minority: &[u32], students: &[u32]) -> Arc<Map> {
    let half = size / 2;
    let school_of = |x: i32, y: i32| (x / half + 2 * (y / half)) as u32 + 1;
    let anchor = |school: u32| {
        let q = school as i32 - 1;
        ((q % 2) * half, (q / 2) * half)
    };

    let mut blocks = Vec::new();
    let mut distances = DistanceTable::new();
    for y in 0..size {
        for x in 0..size {
            let i = (y * size + x) as usize;
            let school = school_of(x, y);
            let minority = minority[i % minority.len()];
            let contains_school = anchor(school) == (x, y);
            blocks.push(block(i as u64, x, y, school, 50u32.saturating_sub(minority / 2), minority, students[i % students.len()], contains_school));

            for s in 1..=4 {
                let (ax, ay) = anchor(s);
                let d = ((x - ax).abs() + (y - ay).abs()) as f64 * 100.0 + 50.0;
                distances.insert(SchoolId(s), BlockId(i as u64), d);
            }
        }
    }
    Arc::new(Map::new(blocks, &distances).unwrap())
}

/// A 6x6 quadrant map with a steep minority gradient.
pub fn gradient() -> Arc<Map> {
    let minority = (0..36).map(|i| ((i % 6) * 7 + (i / 6) * 3) as u32).collect::<Vec<_>>();
    quadrants(6, &minority, &[2, 3, 4])
}
