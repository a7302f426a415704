pub fn root_container_style() -> &'static str {
    "font-family: sans-serif; display: flex; flex-direction: column; gap: 12px; padding: 12px; box-sizing: border-box;"
}

pub fn map_container_style(width: f64, height: f64) -> String {
    format!(
        "position: relative; width: {width}px; height: {height}px; overflow: hidden; background: #dfe8ef; border: 1px solid #bbb; border-radius: 6px; user-select: none;"
    )
}

pub fn tile_style(left: i64, top: i64) -> String {
    format!(
        "position: absolute; left: {left}px; top: {top}px; width: 256px; height: 256px; pointer-events: none;"
    )
}

pub fn marker_layer_style() -> &'static str {
    "position: absolute; left: 0; top: 0; pointer-events: none;"
}

pub fn event_surface_style(dragging: bool) -> String {
    let cursor = if dragging { "grabbing" } else { "grab" };
    format!("position: absolute; inset: 0; cursor: {cursor};")
}

pub fn popup_style(x: f64, y: f64) -> String {
    format!(
        "position: absolute; left: {x}px; top: {y}px; transform: translate(-50%, calc(-100% - 12px)); background: #fff; border: 1px solid #ccc; border-radius: 8px; padding: 8px 28px 8px 12px; box-shadow: 0 2px 8px rgba(0,0,0,0.25); white-space: nowrap; z-index: 20;"
    )
}

pub fn popup_closer_style() -> &'static str {
    "position: absolute; top: 2px; right: 6px; border: none; background: transparent; cursor: pointer; font-size: 16px; line-height: 1;"
}

pub fn zoom_controls_style() -> &'static str {
    "position: absolute; top: 8px; left: 8px; display: flex; flex-direction: column; gap: 2px; z-index: 10;"
}

pub fn zoom_button_style() -> &'static str {
    "width: 28px; height: 28px; border: 1px solid #999; background: rgba(255,255,255,0.9); border-radius: 4px; cursor: pointer; font-size: 16px;"
}

pub fn attribution_style() -> &'static str {
    "position: absolute; right: 0; bottom: 0; padding: 2px 6px; font-size: 11px; background: rgba(255,255,255,0.8); z-index: 10;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f3f3f3; border: 1px solid #bbb; padding: 6px; text-align: left;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 6px;"
}

pub fn pager_button_style(current: bool, enabled: bool) -> String {
    let background = if current { "#2f6fdf" } else { "#fff" };
    let color = if current { "#fff" } else { "#222" };
    let cursor = if enabled { "pointer" } else { "default" };
    let opacity = if enabled || current { "1" } else { "0.5" };
    format!(
        "border: 1px solid #bbb; background: {background}; color: {color}; padding: 4px 10px; margin: 0 2px; border-radius: 4px; cursor: {cursor}; opacity: {opacity};"
    )
}

pub fn status_style(is_error: bool) -> &'static str {
    if is_error {
        "color: #b00020;"
    } else {
        "color: #555;"
    }
}
