use std::sync::Arc;

pub const UNNAMED_LABEL: &str = "(tanpa nama)";

/// Position of a feature in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(pub usize);

impl From<usize> for FeatureId {
    fn from(value: usize) -> Self {
        FeatureId(value)
    }
}

impl From<FeatureId> for usize {
    fn from(value: FeatureId) -> Self {
        value.0
    }
}

/// A point in the display projection (Web Mercator metres).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One school record. `location` is `None` when the source geometry was
/// missing or not a point; such a feature is listed but never drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    pub location: Option<Coordinate>,
}

impl Feature {
    pub fn new(
        id: impl Into<FeatureId>,
        name: impl Into<String>,
        location: Option<Coordinate>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn display_name(&self) -> &str {
        if self.has_name() {
            &self.name
        } else {
            UNNAMED_LABEL
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub total: usize,
    pub unnamed: usize,
    pub unlocated: usize,
}

/// The loaded collection in source order. Written once, shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    pub features: Arc<[Feature]>,
    pub report: LoadReport,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        let report = LoadReport {
            total: features.len(),
            unnamed: features.iter().filter(|f| !f.has_name()).count(),
            unlocated: features.iter().filter(|f| f.location.is_none()).count(),
        };
        Self {
            features: features.into(),
            report,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
