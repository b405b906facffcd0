//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::map::{BlockId, SchoolId};

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Write a DataFrame to a CSV string.
pub(crate) fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(df)
        .with_context(|| "[io::csv::write] Failed to write CSV to string")?;
    String::from_utf8(buffer)
        .with_context(|| "[io::csv::write] CSV output is not valid UTF-8")
}

/// Build the `block_id,school_id` assignment table.
pub(crate) fn assignment_frame(assignments: &[(BlockId, SchoolId)]) -> Result<DataFrame> {
    let (blocks, schools) = assignments.iter()
        .map(|&(block, school)| (block.0, school.0))
        .unzip::<_, _, Vec<_>, Vec<_>>();

    Ok(DataFrame::new(vec![
        Series::new("block_id".into(), blocks).into(),
        Series::new("school_id".into(), schools).into(),
    ])?)
}
