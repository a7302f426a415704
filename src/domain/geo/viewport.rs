use crate::domain::entities::feature::Coordinate;
use crate::domain::geo::projection::HALF_WORLD;

pub const TILE_SIZE: f64 = 256.0;
/// Deepest zoom level a slippy tile scheme serves.
pub const MAX_TILE_ZOOM: u8 = 22;

/// Screen position relative to the map's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Pixel) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    pub z: u8,
    pub x: u32,
    pub y: u32,
    pub left: i64,
    pub top: i64,
}

/// The map view: center in display coordinates, integer zoom, pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

pub fn resolution(zoom: u8) -> f64 {
    2.0 * HALF_WORLD / (TILE_SIZE * 2f64.powi(i32::from(zoom)))
}

impl Viewport {
    pub fn new(center: Coordinate, zoom: u8, width: f64, height: f64) -> Self {
        Self {
            center: clamp_to_world(center),
            zoom: zoom.min(MAX_TILE_ZOOM),
            width,
            height,
            min_zoom: 0,
            max_zoom: 19,
        }
    }

    pub fn with_zoom_bounds(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        let (min_zoom, max_zoom) = (min_zoom.min(MAX_TILE_ZOOM), max_zoom.min(MAX_TILE_ZOOM));
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom.max(min_zoom);
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self
    }

    pub fn resolution(&self) -> f64 {
        resolution(self.zoom)
    }

    pub fn to_pixel(&self, coordinate: Coordinate) -> Pixel {
        let res = self.resolution();
        Pixel::new(
            (coordinate.x - self.center.x) / res + self.width / 2.0,
            (self.center.y - coordinate.y) / res + self.height / 2.0,
        )
    }

    pub fn to_coordinate(&self, pixel: Pixel) -> Coordinate {
        let res = self.resolution();
        Coordinate::new(
            self.center.x + (pixel.x - self.width / 2.0) * res,
            self.center.y - (pixel.y - self.height / 2.0) * res,
        )
    }

    pub fn contains(&self, pixel: Pixel) -> bool {
        (0.0..=self.width).contains(&pixel.x) && (0.0..=self.height).contains(&pixel.y)
    }

    /// Moves the map content by a pointer drag of (`dx`, `dy`) pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        let res = self.resolution();
        self.center = clamp_to_world(Coordinate::new(
            self.center.x - dx * res,
            self.center.y + dy * res,
        ));
    }

    pub fn center_on(&mut self, coordinate: Coordinate) {
        self.center = clamp_to_world(coordinate);
    }

    /// Changes zoom by `steps` levels around the view center. Returns whether
    /// the zoom changed.
    pub fn zoom_by(&mut self, steps: i32) -> bool {
        let next = (i32::from(self.zoom) + steps)
            .clamp(i32::from(self.min_zoom), i32::from(self.max_zoom));
        let next = u8::try_from(next).unwrap_or(self.zoom);
        if next == self.zoom {
            return false;
        }
        self.zoom = next;
        true
    }

    /// Zooms keeping the coordinate under `pixel` fixed on screen.
    pub fn zoom_around(&mut self, steps: i32, pixel: Pixel) -> bool {
        let pinned = self.to_coordinate(pixel);
        if !self.zoom_by(steps) {
            return false;
        }
        let res = self.resolution();
        self.center = clamp_to_world(Coordinate::new(
            pinned.x - (pixel.x - self.width / 2.0) * res,
            pinned.y + (pixel.y - self.height / 2.0) * res,
        ));
        true
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.max_zoom
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.min_zoom
    }

    /// Tiles covering the viewport at the current zoom, row by row. Columns
    /// wrap around the antimeridian; rows outside the world are skipped.
    pub fn visible_tiles(&self) -> Vec<TilePlacement> {
        let res = self.resolution();
        let tiles_per_axis = 1_i64 << self.zoom;
        let origin_x = (self.center.x + HALF_WORLD) / res - self.width / 2.0;
        let origin_y = (HALF_WORLD - self.center.y) / res - self.height / 2.0;

        let first_col = (origin_x / TILE_SIZE).floor() as i64;
        let last_col = ((origin_x + self.width) / TILE_SIZE).ceil() as i64 - 1;
        let first_row = ((origin_y / TILE_SIZE).floor() as i64).max(0);
        let last_row = (((origin_y + self.height) / TILE_SIZE).ceil() as i64 - 1)
            .min(tiles_per_axis - 1);

        let mut tiles = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                tiles.push(TilePlacement {
                    z: self.zoom,
                    x: col.rem_euclid(tiles_per_axis) as u32,
                    y: row as u32,
                    left: (col as f64 * TILE_SIZE - origin_x).round() as i64,
                    top: (row as f64 * TILE_SIZE - origin_y).round() as i64,
                });
            }
        }
        tiles
    }
}

fn clamp_to_world(coordinate: Coordinate) -> Coordinate {
    Coordinate::new(
        coordinate.x.clamp(-HALF_WORLD, HALF_WORLD),
        coordinate.y.clamp(-HALF_WORLD, HALF_WORLD),
    )
}
