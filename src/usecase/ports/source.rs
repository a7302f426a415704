use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Fetch(String),
    Parse(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Fetch(message) => write!(f, "gagal mengambil data: {message}"),
            SourceError::Parse(message) => write!(f, "format data tidak valid: {message}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Where the GeoJSON document comes from.
pub trait FeatureSource {
    /// Human-readable location, used in logs and messages.
    fn location(&self) -> String;

    fn fetch_text(&self) -> impl Future<Output = Result<String, SourceError>>;
}
