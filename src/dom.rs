use crate::core::{BackgroundConfig, ScrollSample};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Match the canvas backing store to the viewport (CSS pixels, so pointer
/// client coordinates map 1:1). Returns the new size.
pub fn fit_canvas_to_viewport(canvas: &web::HtmlCanvasElement, window: &web::Window) -> Vec2 {
    let size = viewport_size(window);
    canvas.set_width(size.x.max(1.0) as u32);
    canvas.set_height(size.y.max(1.0) as u32);
    size
}

pub fn scroll_sample(window: &web::Window, document: &web::Document) -> ScrollSample {
    let offset = window.scroll_y().unwrap_or(0.0) as f32;
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0);
    ScrollSample {
        offset,
        document_height,
        viewport_height: viewport_size(window).y,
    }
}

/// Pages opt into the dark scheme with a `dark` class on `<html>`.
#[inline]
pub fn is_dark(document: &web::Document) -> bool {
    document
        .document_element()
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

/// Written as the inline `opacity` style so the layer fades without any
/// page stylesheet cooperating; page CSS can still override it.
pub fn set_canvas_opacity(canvas: &web::HtmlCanvasElement, config: &BackgroundConfig) {
    _ = canvas
        .style()
        .set_property("opacity", &config.css_opacity());
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

// ---------------- Options ----------------

fn get(options: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn read_bool(options: &JsValue, key: &str, default: bool) -> bool {
    get(options, key).and_then(|v| v.as_bool()).unwrap_or(default)
}

fn read_f32(options: &JsValue, key: &str, default: f32) -> f32 {
    get(options, key)
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .unwrap_or(default)
}

/// Read a plain `{ enabled, opacity, mouseEffects, ... }` object. Absent or
/// mistyped keys keep their defaults.
pub fn config_from_js(options: &JsValue) -> BackgroundConfig {
    let d = BackgroundConfig::default();
    if !options.is_object() {
        return d;
    }
    BackgroundConfig {
        enabled: read_bool(options, "enabled", d.enabled),
        opacity: read_f32(options, "opacity", d.opacity),
        mouse_effects: read_bool(options, "mouseEffects", d.mouse_effects),
        scroll_effects: read_bool(options, "scrollEffects", d.scroll_effects),
        click_effects: read_bool(options, "clickEffects", d.click_effects),
        show_connections: read_bool(options, "showConnections", d.show_connections),
        max_shapes: get(options, "maxShapes")
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v as usize)
            .unwrap_or(d.max_shapes),
        attraction_radius: read_f32(options, "attractionRadius", d.attraction_radius),
        repulsion_radius: read_f32(options, "repulsionRadius", d.repulsion_radius),
        trail_spawn_rate: read_f32(options, "trailSpawnRate", d.trail_spawn_rate),
    }
    .sanitized()
}
