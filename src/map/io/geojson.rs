use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use crate::{
    io::geojson::geometry_from_geojson,
    map::{Block, BlockId, SchoolId},
};

impl Block {
    /// Parse blocks from a GeoJSON FeatureCollection.
    ///
    /// Each feature needs a Polygon/MultiPolygon geometry and the properties
    /// `block_id`, `school_id`, `lang_majority`, `lang_other`, `student_base`
    /// and `contains_school`.
    pub fn read_from_geojson_bytes(bytes: &[u8]) -> Result<Vec<Block>> {
        let value: Value = serde_json::from_slice(bytes).context("[map::io] Failed to parse GeoJSON bytes")?;
        let features = value["features"].as_array()
            .ok_or_else(|| anyhow!("[map::io] GeoJSON has no 'features' array"))?;

        features.iter().enumerate()
            .map(|(i, feature)| {
                block_from_feature(feature).with_context(|| format!("[map::io] Invalid block feature #{i}"))
            })
            .collect()
    }
}

fn block_from_feature(feature: &Value) -> Result<Block> {
    let properties = &feature["properties"];

    let count = |name: &str| -> Result<u32> {
        let value = properties[name].as_u64()
            .ok_or_else(|| anyhow!("property '{name}' must be a non-negative integer"))?;
        u32::try_from(value).with_context(|| format!("property '{name}' is out of range"))
    };

    let block_id = properties["block_id"].as_u64()
        .ok_or_else(|| anyhow!("property 'block_id' must be a non-negative integer"))?;
    let contains_school = properties["contains_school"].as_bool()
        .ok_or_else(|| anyhow!("property 'contains_school' must be a boolean"))?;

    Ok(Block {
        id: BlockId(block_id),
        school: SchoolId(count("school_id")?),
        majority: count("lang_majority")?,
        minority: count("lang_other")?,
        students: count("student_base")?,
        contains_school,
        geometry: geometry_from_geojson(&feature["geometry"])?,
    })
}
