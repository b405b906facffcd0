use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::{io::geojson::multipolygon_to_geojson, plan::Plan};

impl Plan {
    /// Build a GeoJSON FeatureCollection with one feature per district.
    pub fn to_geojson(&self) -> Value {
        let features = self.districts().iter()
            .map(|district| json!({
                "type": "Feature",
                "geometry": multipolygon_to_geojson(&district.geometry),
                "properties": {
                    "school_id": district.school.0,
                    "optimization_value": district.optimization_value,
                    "student_count": district.student_count,
                    "student_limit": district.caps.student_limit,
                    "max_distance": district.caps.max_distance,
                    "block_count": district.blocks.len(),
                },
            }))
            .collect::<Vec<_>>();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }

    /// Write the district geometries and statistics as GeoJSON.
    pub fn write_geojson(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[plan::write_geojson] Failed to create {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &self.to_geojson())
            .with_context(|| format!("[plan::write_geojson] Failed to write {}", path.display()))
    }
}
