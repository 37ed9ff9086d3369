use super::constants::*;
use super::input::ScrollDirection;
use super::palette::{resolve_color, resolve_pattern, scroll_color, Theme};
use super::pools::{GeometricShape, Lifetime, Ripple};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Everything the spawners need to resolve colors and patterns.
#[derive(Clone, Copy, Debug)]
pub struct SpawnContext {
    pub theme: Theme,
    pub progress: f32,
    pub surface: Vec2,
}

#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_width: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * half_width
}

#[inline]
fn lifetime<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (u32, u32)) -> Lifetime {
    Lifetime::Frames {
        age: 0,
        max_age: rng.gen_range(lo..=hi),
    }
}

pub fn ambient_population(surface: Vec2) -> usize {
    let area = surface.x.max(0.0) * surface.y.max(0.0);
    (area / AMBIENT_AREA_PER_SHAPE).floor() as usize
}

pub fn ambient_shapes<R: Rng + ?Sized>(rng: &mut R, ctx: &SpawnContext) -> Vec<GeometricShape> {
    let n = ambient_population(ctx.surface);
    (0..n)
        .map(|_| {
            let pos = Vec2::new(
                rng.gen::<f32>() * ctx.surface.x,
                rng.gen::<f32>() * ctx.surface.y,
            );
            let size = rng.gen_range(AMBIENT_SIZE_MIN..=AMBIENT_SIZE_MAX);
            GeometricShape {
                pos,
                base_pos: pos,
                size,
                base_size: size,
                rotation: rng.gen::<f32>() * TAU,
                rotation_speed: symmetric(rng, AMBIENT_ROTATION_SPEED),
                color: resolve_color(rng, ctx.theme, ctx.progress),
                lifetime: Lifetime::Unbounded,
                velocity: Vec2::new(
                    symmetric(rng, AMBIENT_DRIFT_SPEED),
                    symmetric(rng, AMBIENT_DRIFT_SPEED),
                ),
                pattern: resolve_pattern(rng, ctx.progress),
                pulse_phase: rng.gen::<f32>() * TAU,
            }
        })
        .collect()
}

pub fn trail_shape<R: Rng + ?Sized>(rng: &mut R, ctx: &SpawnContext, at: Vec2) -> GeometricShape {
    let size = rng.gen_range(TRAIL_SIZE_MIN..=TRAIL_SIZE_MAX);
    GeometricShape {
        pos: at + Vec2::new(symmetric(rng, TRAIL_JITTER), symmetric(rng, TRAIL_JITTER)),
        base_pos: at,
        size,
        base_size: size,
        rotation: rng.gen::<f32>() * TAU,
        rotation_speed: symmetric(rng, TRAIL_ROTATION_SPEED),
        color: resolve_color(rng, ctx.theme, ctx.progress),
        lifetime: lifetime(rng, TRAIL_LIFETIME),
        velocity: Vec2::new(symmetric(rng, TRAIL_SPEED), symmetric(rng, TRAIL_SPEED)),
        pattern: resolve_pattern(rng, ctx.progress),
        pulse_phase: 0.0,
    }
}

/// One ripple plus a ring of 8..=12 shapes flying outwards.
pub fn click_burst<R: Rng + ?Sized>(
    rng: &mut R,
    ctx: &SpawnContext,
    at: Vec2,
) -> (Ripple, Vec<GeometricShape>) {
    let ripple = Ripple {
        pos: at,
        radius: 0.0,
        max_radius: rng.gen_range(RIPPLE_MAX_RADIUS_MIN..=RIPPLE_MAX_RADIUS_MAX),
        opacity: RIPPLE_START_OPACITY,
        color: resolve_color(rng, ctx.theme, ctx.progress),
    };
    let n = rng.gen_range(BURST_COUNT.0..=BURST_COUNT.1);
    let shapes = (0..n)
        .map(|i| {
            let angle = TAU * i as f32 / n as f32 + rng.gen::<f32>() * BURST_ANGLE_JITTER;
            let speed = rng.gen_range(BURST_SPEED_MIN..=BURST_SPEED_MAX);
            let size = rng.gen_range(BURST_SIZE_MIN..=BURST_SIZE_MAX);
            GeometricShape {
                pos: at,
                base_pos: at,
                size,
                base_size: size,
                rotation: angle,
                rotation_speed: symmetric(rng, BURST_ROTATION_SPEED),
                color: resolve_color(rng, ctx.theme, ctx.progress),
                lifetime: lifetime(rng, BURST_LIFETIME),
                velocity: Vec2::from_angle(angle) * speed,
                pattern: resolve_pattern(rng, ctx.progress),
                pulse_phase: 0.0,
            }
        })
        .collect();
    (ripple, shapes)
}

/// Shapes entering from the edge opposite the scroll direction: scrolling
/// down brings them up from below, scrolling up drops them from above.
pub fn scroll_entries<R: Rng + ?Sized>(
    rng: &mut R,
    ctx: &SpawnContext,
    count: usize,
    speed: f32,
    direction: ScrollDirection,
) -> Vec<GeometricShape> {
    let (y, vy) = match direction {
        ScrollDirection::Down => (ctx.surface.y + SCROLL_ENTRY_OFFSET, -speed),
        ScrollDirection::Up => (-SCROLL_ENTRY_OFFSET, speed),
    };
    (0..count)
        .map(|_| {
            let pos = Vec2::new(rng.gen::<f32>() * ctx.surface.x, y);
            let size = rng.gen_range(SCROLL_SIZE_MIN..=SCROLL_SIZE_MAX);
            GeometricShape {
                pos,
                base_pos: pos,
                size,
                base_size: size,
                rotation: rng.gen::<f32>() * TAU,
                rotation_speed: symmetric(rng, SCROLL_ROTATION_SPEED),
                color: scroll_color(rng, ctx.theme, ctx.progress),
                lifetime: lifetime(rng, SCROLL_LIFETIME),
                velocity: Vec2::new(symmetric(rng, SCROLL_SIDEWAYS_SPEED), vy),
                pattern: resolve_pattern(rng, ctx.progress),
                pulse_phase: 0.0,
            }
        })
        .collect()
}
