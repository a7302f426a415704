use std::path::PathBuf;

use anyhow::Context;

use crate::usecase::ports::source::{FeatureSource, SourceError};

/// Reads the document from the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read_text(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))
    }
}

impl FeatureSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        self.read_text()
            .map_err(|err| SourceError::Fetch(format!("{err:#}")))
    }
}
