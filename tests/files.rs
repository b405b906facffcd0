use std::fs;

use catchment::{BlockId, Map, Plan, SchoolId, SearchConfig};
use serde_json::{Value, json};

fn feature(id: u64, x: i32, school: u32, majority: u32, minority: u32, students: u32, contains_school: bool) -> Value {
    let (x0, x1) = (x as f64, x as f64 + 1.0);
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[x0, 0.0], [x1, 0.0], [x1, 1.0], [x0, 1.0], [x0, 0.0]]],
        },
        "properties": {
            "block_id": id,
            "school_id": school,
            "lang_majority": majority,
            "lang_other": minority,
            "student_base": students,
            "contains_school": contains_school,
        },
    })
}

fn write_inputs(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let blocks = json!({
        "type": "FeatureCollection",
        "features": [
            feature(10, 0, 1, 90, 10, 10, true),
            feature(20, 1, 2, 10, 30, 1, false),
            feature(30, 2, 2, 40, 20, 1, true),
        ],
    });
    let blocks_path = dir.join("blocks.geojson");
    fs::write(&blocks_path, blocks.to_string()).unwrap();

    let distances_path = dir.join("distances.csv");
    fs::write(&distances_path, "school_id,block_id,walk_d\n1,10,1.0\n1,20,1.1\n2,20,1.0\n2,30,1.0\n").unwrap();

    (blocks_path, distances_path)
}

#[test]
fn loads_the_worked_example_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let (blocks, distances) = write_inputs(dir.path());
    let map = Map::read_from_files(&blocks, &distances).unwrap();

    assert_eq!(map.num_blocks(), 3);
    assert_eq!(map.schools(), &[SchoolId(1), SchoolId(2)]);
    assert_eq!(map.distance(SchoolId(1), BlockId(20)), Some(1.1));
    assert_eq!(map.block(BlockId(30)).map(|block| block.contains_school), Some(true));
}

#[test]
fn writes_every_output() {
    let dir = tempfile::tempdir().unwrap();
    let (blocks, distances) = write_inputs(dir.path());
    let map = Map::read_from_files(&blocks, &distances).unwrap();

    let config = SearchConfig::default().with_trials(4).with_seed(11);
    let outcome = Plan::from_config(map, &config).unwrap().optimize(&config).unwrap();

    let assignment = dir.path().join("assignment.csv");
    let districts = dir.path().join("districts.geojson");
    let curves = dir.path().join("curves.json");
    outcome.best.write_to_csv(&assignment).unwrap();
    outcome.best.write_geojson(&districts).unwrap();
    outcome.write_curves_json(&curves).unwrap();

    assert_eq!(fs::read_to_string(&assignment).unwrap(), "block_id,school_id\n10,1\n20,1\n30,2\n");

    let districts: Value = serde_json::from_str(&fs::read_to_string(&districts).unwrap()).unwrap();
    let features = districts["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["properties"]["school_id"], 1);
    assert_eq!(features[0]["properties"]["student_count"], 11);

    let curves: Value = serde_json::from_str(&fs::read_to_string(&curves).unwrap()).unwrap();
    assert_eq!(curves["trials"].as_array().unwrap().len(), 4);
    assert_eq!(curves["best_trial"], outcome.best_trial);
    assert_eq!(curves["best_curve"][0].as_f64(), Some(outcome.best_curve[0]));
}

#[test]
fn rejects_a_distance_file_without_the_expected_columns() {
    let dir = tempfile::tempdir().unwrap();
    let (blocks, distances) = write_inputs(dir.path());
    fs::write(&distances, "school,block,distance\n1,10,1.0\n").unwrap();
    assert!(Map::read_from_files(&blocks, &distances).is_err());
}
