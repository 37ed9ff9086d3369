use super::config::BackgroundConfig;
use super::constants::*;
use super::input::{PointerState, ScrollState};
use super::pools::{EntityPools, GeometricShape};
use glam::Vec2;
use rand::Rng;

/// Read-only inputs for one update pass.
#[derive(Clone, Copy, Debug)]
pub struct StepInputs<'a> {
    pub config: &'a BackgroundConfig,
    pub pointer: PointerState,
    pub scroll: ScrollState,
    pub surface: Vec2,
}

impl StepInputs<'_> {
    /// Pointer position if the force field is live this frame.
    #[inline]
    pub fn field_pointer(&self) -> Option<Vec2> {
        (self.config.mouse_effects && self.pointer.active).then_some(self.pointer.pos)
    }
}

/// One frame of simulation: ripples, then shapes, then capacity.
pub fn step<R: Rng + ?Sized>(pools: &mut EntityPools, rng: &mut R, inputs: &StepInputs<'_>) {
    pools.advance_ripples();
    let pointer = inputs.field_pointer();
    pools.update_shapes(|shape| {
        if !shape.tick_age() {
            return false;
        }
        apply_pointer_field(
            shape,
            pointer,
            inputs.config.attraction_radius,
            inputs.config.repulsion_radius,
            &mut *rng,
        );
        integrate(shape);
        if shape.is_ambient() {
            ambient_motion(shape, &inputs.scroll, inputs.surface, &mut *rng);
        }
        true
    });
    let evicted = pools.enforce_capacity(inputs.config.max_shapes);
    if evicted > 0 {
        log::debug!("[pools] evicted {} transient shapes", evicted);
    }
}

/// Push shapes away inside the repulsion radius and pull them in between the
/// repulsion and attraction radii. Size swells with proximity and relaxes
/// back to its base size elsewhere.
pub fn apply_pointer_field<R: Rng + ?Sized>(
    shape: &mut GeometricShape,
    pointer: Option<Vec2>,
    attraction_radius: f32,
    repulsion_radius: f32,
    rng: &mut R,
) {
    if let Some(p) = pointer {
        let to_pointer = p - shape.pos;
        let dist = to_pointer.length();
        if dist > 0.0 && dist < attraction_radius {
            let force = (attraction_radius - dist) / attraction_radius;
            let dir = to_pointer / dist;
            if dist < repulsion_radius {
                let repel = (repulsion_radius - dist) / repulsion_radius * REPULSION_GAIN;
                shape.velocity -= dir * repel;
                shape.size = shape.base_size * (1.0 + force * REPULSION_INFLATE);
                shape.rotation_speed = (rng.gen::<f32>() - 0.5) * 2.0 * REPULSION_SPIN;
            } else {
                shape.velocity += dir * force * ATTRACTION_GAIN;
                shape.size = shape.base_size * (1.0 + force * ATTRACTION_INFLATE);
            }
            return;
        }
    }
    shape.size += (shape.base_size - shape.size) * SIZE_RELAX_RATE;
}

#[inline]
pub fn integrate(shape: &mut GeometricShape) {
    shape.pos += shape.velocity;
    shape.velocity *= VELOCITY_DAMPING;
    shape.rotation += shape.rotation_speed;
}

/// Pulse, scroll nudge, screen wrap, spring back to base, spin drift.
fn ambient_motion<R: Rng + ?Sized>(
    shape: &mut GeometricShape,
    scroll: &ScrollState,
    surface: Vec2,
    rng: &mut R,
) {
    let progress = scroll.progress;

    shape.pulse_phase += PULSE_RATE_BASE + progress * PULSE_RATE_SCROLL;
    let pulse = shape.pulse_phase.sin() * (PULSE_DEPTH_BASE + progress * PULSE_DEPTH_SCROLL);
    shape.size = shape.base_size * (1.0 + pulse);

    shape.velocity.y -= scroll.velocity * SCROLL_NUDGE;

    shape.pos = wrap(shape.pos, surface);

    let spring = if scroll.velocity.abs() > SPRING_FAST_SCROLL {
        SPRING_SCROLLING
    } else {
        SPRING_CALM
    };
    shape.velocity += (shape.base_pos - shape.pos) * spring;

    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    shape.rotation_speed = shape.rotation_speed * SPIN_RETENTION + progress * SPIN_BIAS * sign;
}

/// Teleport to the opposite side once a shape drifts past the margin.
#[inline]
pub fn wrap(pos: Vec2, surface: Vec2) -> Vec2 {
    let mut p = pos;
    if p.x < -WRAP_MARGIN {
        p.x = surface.x + WRAP_MARGIN;
    }
    if p.x > surface.x + WRAP_MARGIN {
        p.x = -WRAP_MARGIN;
    }
    if p.y < -WRAP_MARGIN {
        p.y = surface.y + WRAP_MARGIN;
    }
    if p.y > surface.y + WRAP_MARGIN {
        p.y = -WRAP_MARGIN;
    }
    p
}
