use std::sync::Arc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::feature::{Feature, FeatureId};
use crate::domain::entities::pagination::PageNav;
use crate::domain::entities::popup::PopupState;
use crate::domain::geo::hit_test::first_feature_at_pixel;
use crate::domain::geo::viewport::{Pixel, Viewport};
use crate::ui::state::table_state::TableState;
use crate::usecase::services::load_service::LoadState;

/// All mutable UI state, one signal per concern.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub features: Signal<Arc<[Feature]>>,
    pub load_state: Signal<LoadState>,
    pub table: Signal<TableState>,
    pub popup: Signal<PopupState>,
    pub hovered: Signal<Option<FeatureId>>,
    pub viewport: Signal<Viewport>,
    pub drag_origin: Signal<Option<Pixel>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let initial_viewport = config.initial_viewport();
        Self {
            features: use_signal(|| Arc::<[Feature]>::from(Vec::new())),
            load_state: use_signal(LoadState::default),
            table: use_signal(TableState::default),
            popup: use_signal(PopupState::default),
            hovered: use_signal(|| None::<FeatureId>),
            viewport: use_signal(move || initial_viewport),
            drag_origin: use_signal(|| None::<Pixel>),
        }
    }
}

impl AppState {
    pub fn apply_search(self, raw: String) {
        let mut table = self.table;
        table.write().search(raw);
    }

    pub fn navigate(self, nav: PageNav, sequence_len: usize, items_per_page: usize) {
        let mut table = self.table;
        if table.write().navigate(nav, sequence_len, items_per_page) {
            debug!(page = table.read().page, "page changed");
        }
    }

    /// "Show location" from the table: opens the popup on the feature and
    /// re-centers the map when the feature is out of view.
    pub fn show_location(self, feature: &Feature) {
        let mut popup = self.popup;
        let mut viewport = self.viewport;
        if !popup.write().show_location(feature) {
            return;
        }
        if let Some(location) = feature.location {
            let current = viewport();
            if !current.contains(current.to_pixel(location)) {
                viewport.write().center_on(location);
                debug!(feature = feature.id.0, "recentered map on feature");
            }
        }
    }

    pub fn close_popup(self) {
        let mut popup = self.popup;
        popup.write().close();
    }

    pub fn begin_drag(self, pixel: Pixel) {
        let mut drag_origin = self.drag_origin;
        drag_origin.set(Some(pixel));
    }

    pub fn end_drag(self) {
        let mut drag_origin = self.drag_origin;
        drag_origin.set(None);
    }

    /// Pointer moved over the map: pans while dragging, otherwise hit-tests
    /// and drives the hover popup.
    pub fn pointer_moved(self, pixel: Pixel, tolerance: f64) {
        let mut drag_origin = self.drag_origin;
        let mut viewport = self.viewport;
        if let Some(origin) = drag_origin() {
            viewport
                .write()
                .pan_by_pixels(pixel.x - origin.x, pixel.y - origin.y);
            drag_origin.set(Some(pixel));
            return;
        }

        let mut hovered = self.hovered;
        let mut popup = self.popup;
        let current = viewport();
        let features = self.features.read();
        let hit = first_feature_at_pixel(&features, &current, pixel, tolerance);
        hovered.set(hit.map(|feature| feature.id));
        popup.write().pointer_moved(hit);
    }

    pub fn zoom_at(self, steps: i32, pixel: Pixel) {
        let mut viewport = self.viewport;
        let mut view = viewport.write();
        if view.zoom_around(steps, pixel) {
            debug!(zoom = view.zoom, x = pixel.x, y = pixel.y, "zoom changed at pointer");
        }
    }

    pub fn zoom(self, steps: i32) {
        let mut viewport = self.viewport;
        let mut view = viewport.write();
        if view.zoom_by(steps) {
            debug!(zoom = view.zoom, "zoom changed");
        }
    }
}
