use dioxus::prelude::*;

use crate::domain::entities::feature::Feature;
use crate::domain::entities::pagination::PageNav;
use crate::ui::components::pager::Pager;
use crate::ui::state::app_state::AppState;
use crate::ui::state::table_state::TableState;
use crate::ui::styles::{table_cell_style, table_container_style, table_header_cell_style};
use crate::usecase::services::load_service::LoadState;
use crate::usecase::services::query_service::QueryService;

pub fn result_summary(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{total} sekolah")
    } else {
        format!("{shown} dari {total} sekolah")
    }
}

pub fn page_label(current_page: usize, total_pages: usize) -> String {
    if total_pages == 0 {
        String::new()
    } else {
        format!("Halaman {current_page} dari {total_pages}")
    }
}

#[component]
pub fn FeatureTable(
    state: AppState,
    filtered: Memo<Vec<Feature>>,
    items_per_page: usize,
) -> Element {
    let TableState { query, page } = (state.table)();
    let load_state = (state.load_state)();
    let service = QueryService::new((state.features)(), items_per_page);
    let view = service.table_view(&filtered.read(), page);
    let summary = if service.is_empty() {
        String::new()
    } else {
        result_summary(view.total_items, service.len())
    };
    let page_label = page_label(view.pagination.current_page, view.pagination.total_pages);
    let empty_message = match &load_state {
        LoadState::Loading => Some("Memuat data...".to_string()),
        LoadState::Failed(_) => Some("Data tidak tersedia.".to_string()),
        LoadState::Ready(_) if view.rows.is_empty() => {
            Some("Tidak ada sekolah yang cocok.".to_string())
        }
        LoadState::Ready(_) => None,
    };

    rsx! {
        div {
            id: "table-container",
            style: "display: flex; flex-direction: column; min-height: 0;",
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",
                input {
                    id: "search-input",
                    r#type: "search",
                    placeholder: "Cari nama SMK...",
                    style: "padding: 6px 10px; border: 1px solid #bbb; border-radius: 6px; min-width: 260px;",
                    value: "{query}",
                    oninput: move |event| state.apply_search(event.value()),
                }
                span { style: "color: #555;", "{summary}" }
                span { style: "color: #555; margin-left: auto;", "{page_label}" }
            }

            div {
                style: table_container_style(),
                table {
                    id: "smk-table",
                    style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            th { style: table_header_cell_style(), "No" }
                            th { style: table_header_cell_style(), "Nama Sekolah" }
                            th { style: table_header_cell_style(), "Lokasi" }
                        }
                    }
                    tbody {
                        if let Some(message) = empty_message {
                            tr {
                                td {
                                    style: table_cell_style(),
                                    colspan: "3",
                                    "{message}"
                                }
                            }
                        }
                        {view.rows.iter().map(|row| {
                            let feature = row.feature.clone();
                            let key = usize::from(feature.id);
                            let label = feature.display_name().to_string();
                            let has_location = feature.location.is_some();
                            rsx!(
                                tr {
                                    key: "{key}",
                                    td { style: table_cell_style(), "{row.number}" }
                                    td { style: table_cell_style(), "{label}" }
                                    td {
                                        style: table_cell_style(),
                                        button {
                                            disabled: !has_location,
                                            onclick: move |_| state.show_location(&feature),
                                            "Lihat Lokasi"
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
            }

            Pager {
                items: view.pager.clone(),
                on_navigate: move |nav: PageNav| {
                    state.navigate(nav, filtered.read().len(), items_per_page)
                },
            }
        }
    }
}
