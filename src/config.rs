use std::path::Path;

use anyhow::{Context, Result};
use dioxus::logger::tracing::{debug, warn};
use serde::Deserialize;

use crate::domain::entities::pagination::ITEMS_PER_PAGE;
use crate::domain::geo::projection::{from_lon_lat, Crs, LonLat};
use crate::domain::geo::viewport::{Viewport, MAX_TILE_ZOOM};

pub const DEFAULT_DATA_LOCATION: &str = "./data/smkjatim.json";
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub highlight_fill: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 6.0,
            fill: "red".to_string(),
            stroke: "white".to_string(),
            stroke_width: 2.0,
            highlight_fill: "#3399cc".to_string(),
        }
    }
}

impl MarkerStyle {
    /// Pointer distance, in pixels, at which a marker counts as hit.
    pub fn hit_tolerance(&self) -> f64 {
        self.radius + self.stroke_width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_location: String,
    pub data_projection: String,
    /// Initial view center as `[lon, lat]`.
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub map_width: f64,
    pub map_height: f64,
    pub items_per_page: usize,
    pub marker: MarkerStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_location: DEFAULT_DATA_LOCATION.to_string(),
            data_projection: Crs::Wgs84.code().to_string(),
            center: [112.2381, -7.5361],
            zoom: 8,
            min_zoom: 2,
            max_zoom: 19,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            map_width: 960.0,
            map_height: 520.0,
            items_per_page: ITEMS_PER_PAGE,
            marker: MarkerStyle::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(text).context("failed to parse configuration JSON")?;
        Ok(config.repaired())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("invalid config: {}", path.display()))
    }

    /// Missing file means defaults; an unreadable or invalid one is logged
    /// and also falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                debug!(path = %path.display(), "config loaded");
                config
            }
            Err(err) => {
                warn!("{err:#}; using default configuration");
                Self::default()
            }
        }
    }

    fn repaired(mut self) -> Self {
        if self.items_per_page == 0 {
            warn!("items_per_page must be at least 1, using {ITEMS_PER_PAGE}");
            self.items_per_page = ITEMS_PER_PAGE;
        }
        if self.min_zoom > self.max_zoom {
            warn!(
                min_zoom = self.min_zoom,
                max_zoom = self.max_zoom,
                "zoom bounds reversed, swapping"
            );
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        if self.max_zoom > MAX_TILE_ZOOM {
            warn!(max_zoom = self.max_zoom, "max_zoom above {MAX_TILE_ZOOM}, clamping");
            self.max_zoom = MAX_TILE_ZOOM;
            self.min_zoom = self.min_zoom.min(MAX_TILE_ZOOM);
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.zoom) {
            warn!(zoom = self.zoom, "zoom outside configured bounds, clamping");
            self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        }
        if !(self.map_width.is_finite() && self.map_width > 0.0)
            || !(self.map_height.is_finite() && self.map_height > 0.0)
        {
            let defaults = Self::default();
            warn!("map size must be positive, using defaults");
            self.map_width = defaults.map_width;
            self.map_height = defaults.map_height;
        }
        self
    }

    pub fn data_crs(&self) -> Crs {
        Crs::from_name(&self.data_projection).unwrap_or_else(|| {
            warn!(
                projection = %self.data_projection,
                "unrecognised data projection, assuming EPSG:4326"
            );
            Crs::Wgs84
        })
    }

    pub fn initial_viewport(&self) -> Viewport {
        let [lon, lat] = self.center;
        Viewport::new(
            from_lon_lat(LonLat::new(lon, lat)),
            self.zoom,
            self.map_width,
            self.map_height,
        )
        .with_zoom_bounds(self.min_zoom, self.max_zoom)
    }

    pub fn tile_url_for(&self, z: u8, x: u32, y: u32) -> String {
        self.tile_url
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}
