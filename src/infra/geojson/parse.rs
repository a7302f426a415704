use anyhow::{bail, Context, Result};
use dioxus::logger::tracing::warn;
use geojson::{GeoJson, JsonObject, Value};
use serde_json::Value as JsonValue;

use crate::domain::entities::feature::{Coordinate, Feature, FeatureCollection};
use crate::domain::geo::projection::{to_display, Crs};

/// Decodes a GeoJSON document into features in the display projection.
/// `fallback_crs` applies when the document declares no recognised `crs`.
pub fn parse_feature_collection(text: &str, fallback_crs: Crs) -> Result<FeatureCollection> {
    let document: GeoJson = text.parse().context("failed to parse GeoJSON document")?;
    let (features, foreign_members) = match document {
        GeoJson::FeatureCollection(collection) => {
            (collection.features, collection.foreign_members)
        }
        GeoJson::Feature(feature) => (vec![feature], None),
        GeoJson::Geometry(_) => bail!("expected a FeatureCollection, found a bare geometry"),
    };

    let crs = resolve_crs(foreign_members.as_ref(), fallback_crs);
    let features = features
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            Feature::new(idx, feature_name(feature), feature_location(feature, crs))
        })
        .collect();
    Ok(FeatureCollection::new(features))
}

pub fn declared_crs_name(members: Option<&JsonObject>) -> Option<&str> {
    members?.get("crs")?.get("properties")?.get("name")?.as_str()
}

fn resolve_crs(members: Option<&JsonObject>, fallback: Crs) -> Crs {
    let Some(name) = declared_crs_name(members) else {
        return fallback;
    };
    match Crs::from_name(name) {
        Some(crs) => crs,
        None => {
            warn!(crs = name, fallback = fallback.code(), "unrecognised crs, using fallback");
            fallback
        }
    }
}

fn feature_name(feature: &geojson::Feature) -> String {
    match feature.property("name") {
        Some(JsonValue::String(name)) => name.clone(),
        Some(JsonValue::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn feature_location(feature: &geojson::Feature, crs: Crs) -> Option<Coordinate> {
    let geometry = feature.geometry.as_ref()?;
    match &geometry.value {
        Value::Point(position) if position.len() >= 2 => {
            let (x, y) = (position[0], position[1]);
            if x.is_finite() && y.is_finite() {
                Some(to_display(x, y, crs))
            } else {
                None
            }
        }
        _ => None,
    }
}
