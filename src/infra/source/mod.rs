pub mod file;
pub mod http;

use crate::infra::source::file::FileSource;
use crate::infra::source::http::HttpSource;
use crate::usecase::ports::source::{FeatureSource, SourceError};

pub fn is_http_location(location: &str) -> bool {
    let lower = location.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// The concrete source picked for a configured data location.
#[derive(Debug, Clone)]
pub enum DataSource {
    File(FileSource),
    Http(HttpSource),
}

impl DataSource {
    /// Desktop: HTTP(S) URLs are fetched, anything else is a file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn for_location(location: &str) -> anyhow::Result<Self> {
        if is_http_location(location) {
            Ok(DataSource::Http(HttpSource::new(location.trim())))
        } else {
            Ok(DataSource::File(FileSource::new(location.trim())))
        }
    }

    /// Web: everything is fetched; relative locations follow the page URL.
    #[cfg(target_arch = "wasm32")]
    pub fn for_location(location: &str) -> anyhow::Result<Self> {
        let url = if is_http_location(location) {
            location.trim().to_string()
        } else {
            http::resolve_against_page(location.trim())?
        };
        Ok(DataSource::Http(HttpSource::new(url)))
    }
}

impl FeatureSource for DataSource {
    fn location(&self) -> String {
        match self {
            DataSource::File(source) => source.location(),
            DataSource::Http(source) => source.location(),
        }
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        match self {
            DataSource::File(source) => source.fetch_text().await,
            DataSource::Http(source) => source.fetch_text().await,
        }
    }
}
