use anyhow::{anyhow, Context};

use crate::usecase::ports::source::{FeatureSource, SourceError};

/// Fetches the document over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_text(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.url))?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} responded with {status}", self.url));
        }
        response
            .text()
            .await
            .with_context(|| format!("failed to read body from {}", self.url))
    }
}

impl FeatureSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        self.get_text()
            .await
            .map_err(|err| SourceError::Fetch(format!("{err:#}")))
    }
}

/// Resolves a page-relative location such as `./data/x.json` against the
/// current page URL.
#[cfg(target_arch = "wasm32")]
pub fn resolve_against_page(location: &str) -> anyhow::Result<String> {
    let href = web_sys::window()
        .ok_or_else(|| anyhow!("no browser window"))?
        .location()
        .href()
        .map_err(|_| anyhow!("unable to read page location"))?;
    let base = reqwest::Url::parse(&href).with_context(|| format!("invalid page url: {href}"))?;
    let url = base
        .join(location)
        .with_context(|| format!("invalid data location: {location}"))?;
    Ok(url.to_string())
}
