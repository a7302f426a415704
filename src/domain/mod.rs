pub mod entities;
pub mod geo;
