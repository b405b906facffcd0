//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result, anyhow, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};

use crate::map::{BlockId, DistanceTable, SchoolId};

/// Reads a CSV file from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .finish()
        .with_context(|| "[io::csv::read] Failed to read CSV from string")
}

/// Read a walking-distance table from a DataFrame.
///
/// The DataFrame must have columns `school_id`, `block_id` and `walk_d`.
pub(crate) fn read_distance_table(df: DataFrame) -> Result<DistanceTable> {
    for name in ["school_id", "block_id", "walk_d"] {
        ensure!(df.column(name).is_ok(), "[io::csv::read] CSV is missing column '{name}'");
    }

    let schools = df.column("school_id")?.cast(&DataType::UInt32)?;
    let blocks = df.column("block_id")?.cast(&DataType::UInt64)?;
    let distances = df.column("walk_d")?.cast(&DataType::Float64)?;

    schools.u32()?.into_iter()
        .zip(blocks.u64()?.into_iter())
        .zip(distances.f64()?.into_iter())
        .enumerate()
        .map(|(row, ((school, block), distance))| {
            match (school, block, distance) {
                (Some(school), Some(block), Some(distance)) => Ok((SchoolId(school), BlockId(block), distance)),
                _ => Err(anyhow!("[io::csv::read] Row {row} has an empty or non-numeric field")),
            }
        })
        .collect()
}
