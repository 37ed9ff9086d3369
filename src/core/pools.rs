//! Entity storage: shapes (ambient + transient) and click ripples.
//!
//! Removal is order-preserving compaction so the arena order always matches
//! creation order among transients. Ambient shapes sit at the front.

use super::constants::{CAPACITY_SLACK, RIPPLE_FADE_PER_FRAME, RIPPLE_GROWTH_PER_FRAME};
use super::palette::{Pattern, Rgb};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifetime {
    /// Ambient shapes: never aged, never evicted.
    Unbounded,
    /// Transient shapes: frames elapsed and the frame count at which they expire.
    Frames { age: u32, max_age: u32 },
}

#[derive(Clone, Debug)]
pub struct GeometricShape {
    pub pos: Vec2,
    pub base_pos: Vec2,
    pub size: f32,
    pub base_size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub color: Rgb,
    pub lifetime: Lifetime,
    pub velocity: Vec2,
    pub pattern: Pattern,
    pub pulse_phase: f32,
}

impl GeometricShape {
    #[inline]
    pub fn is_ambient(&self) -> bool {
        matches!(self.lifetime, Lifetime::Unbounded)
    }

    #[inline]
    pub fn age(&self) -> u32 {
        match self.lifetime {
            Lifetime::Unbounded => 0,
            Lifetime::Frames { age, .. } => age,
        }
    }

    /// Advance one frame. Returns `false` once a transient shape has expired.
    #[inline]
    pub fn tick_age(&mut self) -> bool {
        match &mut self.lifetime {
            Lifetime::Unbounded => true,
            Lifetime::Frames { age, max_age } => {
                *age = age.saturating_add(1);
                *age < *max_age
            }
        }
    }

    /// Remaining life in 0..=1; ambient shapes are always at 1.
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        match self.lifetime {
            Lifetime::Unbounded => 1.0,
            Lifetime::Frames { age, max_age } => {
                if max_age == 0 {
                    0.0
                } else {
                    (1.0 - age as f32 / max_age as f32).max(0.0)
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ripple {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub opacity: f32,
    pub color: Rgb,
}

impl Ripple {
    /// Grow and fade by one frame. Returns `false` once fully faded.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.radius = (self.radius + RIPPLE_GROWTH_PER_FRAME).min(self.max_radius);
        self.opacity -= RIPPLE_FADE_PER_FRAME;
        self.opacity > 0.0
    }
}

#[derive(Default)]
pub struct EntityPools {
    shapes: Vec<GeometricShape>,
    ripples: Vec<Ripple>,
}

impl EntityPools {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn shapes(&self) -> &[GeometricShape] {
        &self.shapes
    }

    #[inline]
    pub fn shapes_mut(&mut self) -> &mut [GeometricShape] {
        &mut self.shapes
    }

    #[inline]
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn ambient_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_ambient()).count()
    }

    pub fn transient_count(&self) -> usize {
        self.shapes.len() - self.ambient_count()
    }

    /// Swap in a fresh ambient population, keeping transients in flight.
    pub fn replace_ambient(&mut self, ambient: Vec<GeometricShape>) {
        let mut next = ambient;
        next.retain(GeometricShape::is_ambient);
        next.extend(self.shapes.drain(..).filter(|s| !s.is_ambient()));
        self.shapes = next;
    }

    pub fn push_transient(&mut self, shape: GeometricShape) {
        debug_assert!(!shape.is_ambient());
        if !shape.is_ambient() {
            self.shapes.push(shape);
        }
    }

    pub fn push_ripple(&mut self, ripple: Ripple) {
        self.ripples.push(ripple);
    }

    pub fn advance_ripples(&mut self) {
        self.ripples.retain_mut(Ripple::advance);
    }

    /// Run `update` over every shape, dropping those for which it returns `false`.
    pub fn update_shapes(&mut self, mut update: impl FnMut(&mut GeometricShape) -> bool) {
        self.shapes.retain_mut(|s| update(s));
    }

    /// Once the arena exceeds `max_shapes` + slack, drop transients from the
    /// front of the arena until the count is back at `max_shapes` (or no
    /// transients remain). Returns the number removed.
    pub fn enforce_capacity(&mut self, max_shapes: usize) -> usize {
        let len = self.shapes.len();
        if len <= max_shapes + CAPACITY_SLACK {
            return 0;
        }
        let mut overage = len - max_shapes;
        self.shapes.retain(|s| {
            if overage > 0 && !s.is_ambient() {
                overage -= 1;
                false
            } else {
                true
            }
        });
        len - self.shapes.len()
    }

    pub fn recolor_ambient(&mut self, mut pick: impl FnMut() -> Rgb) {
        for s in self.shapes.iter_mut().filter(|s| s.is_ambient()) {
            s.color = pick();
        }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.ripples.clear();
    }
}
