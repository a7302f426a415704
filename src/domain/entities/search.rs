use crate::domain::entities::feature::Feature;

/// A normalized search term: trimmed and lowercased once, matched many times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            term: raw.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Unnamed features only match the empty query.
    pub fn matches(&self, feature: &Feature) -> bool {
        if self.term.is_empty() {
            return true;
        }
        feature.has_name() && feature.name.to_lowercase().contains(&self.term)
    }
}

pub fn filter_features(features: &[Feature], query: &SearchQuery) -> Vec<Feature> {
    if query.is_empty() {
        return features.to_vec();
    }
    features
        .iter()
        .filter(|feature| query.matches(feature))
        .cloned()
        .collect()
}
