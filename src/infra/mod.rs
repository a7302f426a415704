pub mod geojson;
pub mod source;
