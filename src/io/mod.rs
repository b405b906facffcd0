//! IO module for format-specific reading and writing operations.
//!
//! Organized by format rather than domain; the domain-facing entry points are
//! methods on `Map` (map/io) and `Plan`/`SearchOutcome` (plan/io).
//!
//! - `csv` - CSV tables (distance tables, block assignments) through polars
//! - `geojson` - GeoJSON geometry conversion through serde_json

pub(crate) mod csv;
pub(crate) mod geojson;
