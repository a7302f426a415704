use dioxus::html::geometry::ElementPoint;
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::geo::projection::to_lon_lat;
use crate::domain::geo::viewport::Pixel;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{
    attribution_style, event_surface_style, map_container_style, marker_layer_style,
    popup_closer_style, popup_style, tile_style, zoom_button_style, zoom_controls_style,
};

fn pointer_pixel(point: ElementPoint) -> Pixel {
    Pixel::new(point.x, point.y)
}

/// Wheel up zooms in one level, wheel down zooms out.
pub fn wheel_zoom_steps(delta_y: f64) -> i32 {
    if delta_y < 0.0 {
        1
    } else if delta_y > 0.0 {
        -1
    } else {
        0
    }
}

#[component]
pub fn MapView(state: AppState, config: AppConfig) -> Element {
    let view = (state.viewport)();
    let features = (state.features)();
    let hovered = (state.hovered)();
    let popup = (state.popup)();
    let dragging = (state.drag_origin)().is_some();

    let marker = config.marker.clone();
    let tolerance = marker.hit_tolerance();
    let margin = marker.radius + marker.stroke_width;
    let tiles = view.visible_tiles();
    let markers = features
        .iter()
        .filter_map(|feature| {
            let pixel = view.to_pixel(feature.location?);
            let visible = (-margin..=view.width + margin).contains(&pixel.x)
                && (-margin..=view.height + margin).contains(&pixel.y);
            visible.then_some((feature.id, pixel))
        })
        .collect::<Vec<_>>();
    let popup_feature = popup.content().map(|content| content.feature_id);
    let popup_anchor = popup.content().map(|content| {
        let position = to_lon_lat(content.anchor);
        (
            content.name.clone(),
            format!("{:.4}, {:.4}", position.lat, position.lon),
            view.to_pixel(content.anchor),
        )
    });

    rsx! {
        div {
            id: "map-container",
            style: map_container_style(view.width, view.height),

            {tiles.iter().map(|tile| {
                let src = config.tile_url_for(tile.z, tile.x, tile.y);
                rsx!(
                    img {
                        key: "{tile.z}-{tile.x}-{tile.y}-{tile.left}",
                        src: "{src}",
                        alt: "",
                        draggable: "false",
                        style: tile_style(tile.left, tile.top),
                    }
                )
            })}

            svg {
                width: "{view.width}",
                height: "{view.height}",
                style: marker_layer_style(),
                {markers.iter().map(|(id, pixel)| {
                    let highlighted = hovered == Some(*id) || popup_feature == Some(*id);
                    let radius = if highlighted { marker.radius + 2.0 } else { marker.radius };
                    let fill = if highlighted { marker.highlight_fill.clone() } else { marker.fill.clone() };
                    rsx!(
                        circle {
                            key: "{id.0}",
                            cx: "{pixel.x}",
                            cy: "{pixel.y}",
                            r: "{radius}",
                            fill: "{fill}",
                            stroke: "{marker.stroke}",
                            stroke_width: "{marker.stroke_width}",
                        }
                    )
                })}
            }

            div {
                style: event_surface_style(dragging),
                onmousedown: move |event| {
                    state.begin_drag(pointer_pixel(event.element_coordinates()))
                },
                onmouseup: move |_| state.end_drag(),
                onmouseleave: move |_| state.end_drag(),
                onmousemove: move |event| {
                    state.pointer_moved(pointer_pixel(event.element_coordinates()), tolerance)
                },
                ondoubleclick: move |event| {
                    state.zoom_at(1, pointer_pixel(event.element_coordinates()))
                },
                onwheel: move |event| {
                    event.prevent_default();
                    let steps = wheel_zoom_steps(event.delta().strip_units().y);
                    if steps != 0 {
                        state.zoom_at(steps, pointer_pixel(event.element_coordinates()));
                    }
                },
            }

            if let Some((name, position, anchor)) = popup_anchor {
                div {
                    id: "popup",
                    style: popup_style(anchor.x, anchor.y),
                    button {
                        id: "popup-closer",
                        style: popup_closer_style(),
                        title: "Tutup",
                        onclick: move |_| state.close_popup(),
                        "×"
                    }
                    div {
                        id: "popup-content",
                        strong { "{name}" }
                        br {}
                        span { style: "font-size: 11px; color: #666;", "{position}" }
                    }
                }
            }

            div {
                style: zoom_controls_style(),
                button {
                    style: zoom_button_style(),
                    title: "Perbesar",
                    disabled: !view.can_zoom_in(),
                    onclick: move |_| state.zoom(1),
                    "+"
                }
                button {
                    style: zoom_button_style(),
                    title: "Perkecil",
                    disabled: !view.can_zoom_out(),
                    onclick: move |_| state.zoom(-1),
                    "−"
                }
            }

            div { style: attribution_style(), "{config.attribution}" }
        }
    }
}
