mod csv;
mod geojson;
mod json;
