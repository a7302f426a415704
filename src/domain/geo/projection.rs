use std::f64::consts::PI;

use crate::domain::entities::feature::Coordinate;

pub const EARTH_RADIUS: f64 = 6_378_137.0;
pub const HALF_WORLD: f64 = PI * EARTH_RADIUS;
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Coordinate reference systems the data layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crs {
    Wgs84,
    WebMercator,
}

impl Crs {
    pub fn from_name(name: &str) -> Option<Crs> {
        match name.trim().to_ascii_uppercase().as_str() {
            "EPSG:4326" | "URN:OGC:DEF:CRS:OGC:1.3:CRS84" | "URN:OGC:DEF:CRS:EPSG::4326"
            | "CRS84" | "WGS84" => Some(Crs::Wgs84),
            "EPSG:3857" | "EPSG:900913" | "EPSG:102100" | "URN:OGC:DEF:CRS:EPSG::3857" => {
                Some(Crs::WebMercator)
            }
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "EPSG:4326",
            Crs::WebMercator => "EPSG:3857",
        }
    }
}

pub fn from_lon_lat(position: LonLat) -> Coordinate {
    let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = EARTH_RADIUS * position.lon.to_radians();
    let y = EARTH_RADIUS * (PI / 4.0 + lat / 2.0).tan().ln();
    Coordinate::new(x, y)
}

pub fn to_lon_lat(coordinate: Coordinate) -> LonLat {
    let lon = (coordinate.x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (coordinate.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    LonLat::new(lon, lat)
}

/// Brings a raw `[x, y]` position in `source` into the display projection.
pub fn to_display(x: f64, y: f64, source: Crs) -> Coordinate {
    match source {
        Crs::Wgs84 => from_lon_lat(LonLat::new(x, y)),
        Crs::WebMercator => Coordinate::new(x, y),
    }
}
