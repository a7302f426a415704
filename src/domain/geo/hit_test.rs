use crate::domain::entities::feature::Feature;
use crate::domain::geo::viewport::{Pixel, Viewport};

/// Features whose marker lies within `tolerance` pixels of `pixel`, topmost
/// first. Markers are drawn in source order, so later features sit on top.
pub fn features_at_pixel<'a>(
    features: &'a [Feature],
    viewport: &Viewport,
    pixel: Pixel,
    tolerance: f64,
) -> Vec<&'a Feature> {
    features
        .iter()
        .rev()
        .filter(|feature| {
            feature
                .location
                .map(|location| viewport.to_pixel(location).distance_to(pixel) <= tolerance)
                .unwrap_or(false)
        })
        .collect()
}

pub fn first_feature_at_pixel<'a>(
    features: &'a [Feature],
    viewport: &Viewport,
    pixel: Pixel,
    tolerance: f64,
) -> Option<&'a Feature> {
    features_at_pixel(features, viewport, pixel, tolerance)
        .into_iter()
        .next()
}
