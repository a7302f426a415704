use dioxus::prelude::*;

use crate::domain::entities::pagination::PageNav;
use crate::ui::styles::pager_button_style;
use crate::usecase::services::query_service::PagerItem;

#[component]
pub fn Pager(items: Vec<PagerItem>, on_navigate: EventHandler<PageNav>) -> Element {
    rsx! {
        div {
            id: "pagination-container",
            style: "display: flex; align-items: center; flex-wrap: wrap; gap: 2px; margin-top: 8px;",
            {items.iter().enumerate().map(|(idx, item)| {
                match *item {
                    PagerItem::Nav { nav, enabled } => rsx!(
                        button {
                            key: "{idx}",
                            style: pager_button_style(false, enabled),
                            disabled: !enabled,
                            onclick: move |_| on_navigate.call(nav),
                            "{nav.label()}"
                        }
                    ),
                    PagerItem::Page { page, current } => rsx!(
                        button {
                            key: "{idx}",
                            class: if current { "current-page" } else { "" },
                            style: pager_button_style(current, true),
                            onclick: move |_| on_navigate.call(PageNav::Page(page)),
                            "{page}"
                        }
                    ),
                    PagerItem::Ellipsis => rsx!(
                        span { key: "{idx}", style: "padding: 0 4px;", "..." }
                    ),
                }
            })}
        }
    }
}
