use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::feature::FeatureCollection;
use crate::infra::source::DataSource;
use crate::ui::components::feature_table::FeatureTable;
use crate::ui::components::map_view::MapView;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{root_container_style, status_style};
use crate::usecase::ports::source::SourceError;
use crate::usecase::services::load_service::{LoadService, LoadState};
use crate::usecase::services::query_service::QueryService;

pub fn load_app_config() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = match crate::platform::desktop::paths::default_config_path() {
            Ok(path) => Some(path),
            Err(err) => {
                warn!("{err:#}; using default configuration");
                None
            }
        };
        AppConfig::load_or_default(path.as_deref())
    }
    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::default()
    }
}

pub async fn load_features(config: &AppConfig) -> Result<FeatureCollection, SourceError> {
    let source = DataSource::for_location(&config.data_location)
        .map_err(|err| SourceError::Fetch(format!("{err:#}")))?;
    LoadService::new(source, config.data_crs()).load().await
}

fn notify_load_failure(message: &str) {
    #[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
    crate::platform::desktop::dialog::show_load_failure(message);
    #[cfg(not(all(feature = "desktop", not(target_arch = "wasm32"))))]
    let _ = message;
}

pub fn status_message(load_state: &LoadState) -> String {
    match load_state {
        LoadState::Loading => "Memuat data sekolah...".to_string(),
        LoadState::Ready(count) => format!("{count} lokasi SMK dimuat"),
        LoadState::Failed(message) => format!("Gagal memuat data: {message}"),
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_app_config);
    let state = AppState::new(&config);
    let AppState {
        mut features,
        mut load_state,
        table,
        ..
    } = state;

    let config_for_load = config.clone();
    use_future(move || {
        let config = config_for_load.clone();
        async move {
            load_state.set(LoadState::Loading);
            match load_features(&config).await {
                Ok(collection) => {
                    if collection.is_empty() {
                        warn!(location = %config.data_location, "data source has no features");
                    }
                    let count = collection.len();
                    features.set(collection.features);
                    load_state.set(LoadState::Ready(count));
                }
                Err(err) => {
                    let message = err.to_string();
                    notify_load_failure(&message);
                    load_state.set(LoadState::Failed(message));
                }
            }
        }
    });

    let items_per_page = config.items_per_page;
    let filtered = use_memo(move || {
        QueryService::new(features(), items_per_page).filter(&table.read().query)
    });

    let current_load_state = load_state();
    let is_error = matches!(current_load_state, LoadState::Failed(_));
    let status = status_message(&current_load_state);

    rsx! {
        div {
            style: root_container_style(),
            h2 { style: "margin: 0;", "Peta Sebaran SMK Jawa Timur" }
            p { style: status_style(is_error), "{status}" }
            MapView { state, config: config.clone() }
            FeatureTable { state, filtered, items_per_page }
        }
    }
}
