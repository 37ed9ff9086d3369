//! Turns engine state into drawing primitives on a [`Surface`].

use super::config::BackgroundConfig;
use super::constants::*;
use super::geometry::{shape_ops, PathCmd, ShapeOp};
use super::input::{PointerState, ScrollState};
use super::palette::{background_stops, connection_color, glow_stops, GradientStop, Rgba, Theme};
use super::pools::{EntityPools, GeometricShape};
use glam::Vec2;

/// Drawing backend. Colors carry their own alpha; implementations must not
/// leave state (alpha, line width) behind between calls.
pub trait Surface {
    /// Fill the whole `size` rect with a gradient running from the top-left
    /// to the bottom-right corner.
    fn fill_linear_gradient(&mut self, size: Vec2, stops: &[GradientStop]);
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32);
    fn fill_path(&mut self, path: &[PathCmd], color: Rgba);
    fn stroke_path(&mut self, path: &[PathCmd], color: Rgba, width: f32);
}

/// Borrowed view of everything a frame needs to draw.
pub struct FrameView<'a> {
    pub config: &'a BackgroundConfig,
    pub pools: &'a EntityPools,
    pub pointer: PointerState,
    pub scroll: ScrollState,
    pub theme: Theme,
    pub surface: Vec2,
}

impl FrameView<'_> {
    #[inline]
    fn field_pointer(&self) -> Option<Vec2> {
        (self.config.mouse_effects && self.pointer.active).then_some(self.pointer.pos)
    }
}

/// Background, glow, connections, ripples, shapes, in that order.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, view: &FrameView<'_>) {
    let progress = view.scroll.progress;

    surface.fill_linear_gradient(view.surface, &background_stops(view.theme, progress));

    if view.pointer.active {
        surface.fill_radial_gradient(view.pointer.pos, GLOW_RADIUS, &glow_stops(view.theme));
    }

    if view.config.show_connections {
        draw_connections(surface, view.pools.shapes(), view.theme, progress);
    }

    for r in view.pools.ripples() {
        if r.opacity > 0.0 {
            surface.stroke_circle(
                r.pos,
                r.radius,
                r.color.with_alpha(r.opacity),
                RIPPLE_LINE_WIDTH,
            );
        }
    }

    let pointer = view.field_pointer();
    for shape in view.pools.shapes() {
        let opacity = shape_opacity(shape, pointer, view.config.attraction_radius);
        draw_shape(surface, shape, opacity);
    }
}

/// Link every pair of shapes closer than the scroll-dependent threshold.
pub fn draw_connections<S: Surface + ?Sized>(
    surface: &mut S,
    shapes: &[GeometricShape],
    theme: Theme,
    progress: f32,
) {
    let max_dist = connection_distance(progress);
    let base = connection_color(theme, progress);
    let width = 1.0 + progress;
    let strength = CONNECTION_ALPHA_BASE + progress * CONNECTION_ALPHA_SCROLL;
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            let dist = a.pos.distance(b.pos);
            if dist < max_dist {
                let alpha = (1.0 - dist / max_dist) * strength;
                surface.stroke_line(a.pos, b.pos, base.fade(alpha), width);
            }
        }
    }
}

#[inline]
pub fn connection_distance(progress: f32) -> f32 {
    CONNECTION_DISTANCE_BASE + progress * CONNECTION_DISTANCE_SCROLL
}

/// Ambient shapes sit at a fixed 0.4; transients fade out over their life.
/// Either brightens near an active pointer.
pub fn shape_opacity(shape: &GeometricShape, pointer: Option<Vec2>, attraction_radius: f32) -> f32 {
    let mut opacity = if shape.is_ambient() {
        AMBIENT_OPACITY
    } else {
        shape.life_fraction() * TRANSIENT_OPACITY
    };
    if let Some(p) = pointer {
        let dist = p.distance(shape.pos);
        if dist < attraction_radius {
            opacity = (opacity + (1.0 - dist / attraction_radius) * PROXIMITY_BOOST).min(1.0);
        }
    }
    opacity
}

pub fn draw_shape<S: Surface + ?Sized>(surface: &mut S, shape: &GeometricShape, opacity: f32) {
    for op in shape_ops(shape.pattern, shape.pos, shape.size, shape.rotation) {
        match op {
            ShapeOp::Fill { path, alpha } => {
                surface.fill_path(&path, shape.color.with_alpha(opacity * alpha));
            }
            ShapeOp::Stroke { path, alpha, width } => {
                surface.stroke_path(&path, shape.color.with_alpha(opacity * alpha), width);
            }
        }
    }
}
