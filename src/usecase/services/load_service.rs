use dioxus::logger::tracing::{error, info, warn};

use crate::domain::entities::feature::FeatureCollection;
use crate::domain::geo::projection::Crs;
use crate::infra::geojson::parse::parse_feature_collection;
use crate::usecase::ports::source::{FeatureSource, SourceError};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(usize),
    Failed(String),
}

pub struct LoadService<S> {
    source: S,
    data_crs: Crs,
}

impl<S: FeatureSource> LoadService<S> {
    pub fn new(source: S, data_crs: Crs) -> Self {
        Self { source, data_crs }
    }

    pub fn decode(&self, text: &str) -> Result<FeatureCollection, SourceError> {
        parse_feature_collection(text, self.data_crs)
            .map_err(|err| SourceError::Parse(format!("{err:#}")))
    }

    pub async fn load(&self) -> Result<FeatureCollection, SourceError> {
        let location = self.source.location();
        info!(%location, "loading features");

        let result = match self.source.fetch_text().await {
            Ok(text) => self.decode(&text),
            Err(err) => Err(err),
        };

        match &result {
            Ok(collection) => {
                let report = collection.report;
                info!(%location, total = report.total, "features loaded");
                if report.unnamed > 0 {
                    warn!(count = report.unnamed, "features without a name");
                }
                if report.unlocated > 0 {
                    warn!(count = report.unlocated, "features without a point geometry");
                }
            }
            Err(err) => error!(%location, "error loading GeoJSON: {err}"),
        }
        result
    }
}
