use crate::domain::entities::feature::{Coordinate, Feature, FeatureId};

#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub feature_id: FeatureId,
    pub name: String,
    pub anchor: Coordinate,
}

/// Info panel over the map: either hidden or shown at a feature's point.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    #[default]
    Hidden,
    Shown(PopupContent),
}

impl PopupState {
    pub fn content(&self) -> Option<&PopupContent> {
        match self {
            PopupState::Hidden => None,
            PopupState::Shown(content) => Some(content),
        }
    }

    /// Pointer moved over the map; `first_hit` is the first feature returned
    /// by hit-testing at the pointer pixel.
    pub fn pointer_moved(&mut self, first_hit: Option<&Feature>) {
        *self = match first_hit.and_then(shown) {
            Some(next) => next,
            None => PopupState::Hidden,
        };
    }

    /// "Show location" from a table row. Returns false and leaves the state
    /// untouched when the feature has no location.
    pub fn show_location(&mut self, feature: &Feature) -> bool {
        match shown(feature) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        *self = PopupState::Hidden;
    }
}

fn shown(feature: &Feature) -> Option<PopupState> {
    let anchor = feature.location?;
    Some(PopupState::Shown(PopupContent {
        feature_id: feature.id,
        name: feature.display_name().to_string(),
        anchor,
    }))
}
