use crate::core::geometry::PathCmd;
use crate::core::palette::GradientStop;
use crate::core::{Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] backed by a `CanvasRenderingContext2d`.
pub struct Canvas2dSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn trace(&self, path: &[PathCmd]) {
        let ctx = &self.ctx;
        ctx.begin_path();
        for cmd in path {
            match *cmd {
                PathCmd::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
                PathCmd::QuadTo { ctrl, to } => ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCmd::Circle { center, radius } => {
                    // start on the rim so no stray segment joins the circle
                    ctx.move_to((center.x + radius) as f64, center.y as f64);
                    _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
                }
                PathCmd::Close => ctx.close_path(),
            }
        }
    }

    fn apply_stops(gradient: &web::CanvasGradient, stops: &[GradientStop]) {
        for s in stops {
            _ = gradient.add_color_stop(s.offset, &s.color.css());
        }
    }
}

impl Surface for Canvas2dSurface {
    fn fill_linear_gradient(&mut self, size: Vec2, stops: &[GradientStop]) {
        let (w, h) = (size.x as f64, size.y as f64);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        Self::apply_stops(&gradient, stops);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        Self::apply_stops(&gradient, stops);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x - r, y - r, r * 2.0, r * 2.0);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(&color.css());
        ctx.set_line_width(width as f64);
        ctx.stroke();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        ctx.set_stroke_style_str(&color.css());
        ctx.set_line_width(width as f64);
        ctx.stroke();
    }

    fn fill_path(&mut self, path: &[PathCmd], color: Rgba) {
        self.trace(path);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_path(&mut self, path: &[PathCmd], color: Rgba, width: f32) {
        self.trace(path);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
