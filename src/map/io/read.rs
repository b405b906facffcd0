use std::path::Path;

use anyhow::{Context, Result};

use crate::map::{Block, DistanceTable, Map};

impl DistanceTable {
    /// Read a `school_id,block_id,walk_d` CSV file.
    pub fn read_from_csv(path: &Path) -> Result<Self> {
        crate::io::csv::read_distance_table(crate::io::csv::read_csv(path)?)
    }

    /// Parse a `school_id,block_id,walk_d` CSV string.
    pub fn from_csv_str(csv: &str) -> Result<Self> {
        crate::io::csv::read_distance_table(crate::io::csv::read_csv_string(csv)?)
    }
}

impl Map {
    /// Load a map from a blocks GeoJSON file and a distance CSV file.
    pub fn read_from_files(blocks_path: &Path, distances_path: &Path) -> Result<Self> {
        let bytes = std::fs::read(blocks_path)
            .with_context(|| format!("[map::io] Failed to read {}", blocks_path.display()))?;
        let blocks = Block::read_from_geojson_bytes(&bytes)?;
        let distances = DistanceTable::read_from_csv(distances_path)?;

        log::info!("[map::io] loaded {} blocks and {} distance entries", blocks.len(), distances.len());
        Ok(Map::new(blocks, &distances)?)
    }
}
