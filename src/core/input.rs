use super::constants::{SCROLL_SPAWN_DIVISOR, SCROLL_SPAWN_MAX, SCROLL_SPAWN_THRESHOLD};
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        // Far off-screen until the first move event arrives
        Self {
            pos: Vec2::new(-1000.0, -1000.0),
            active: false,
        }
    }
}

impl PointerState {
    pub fn moved(&mut self, pos: Vec2) {
        self.pos = pos;
        self.active = true;
    }

    pub fn left(&mut self) {
        self.active = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
    pub velocity: f32,
    pub progress: f32,
}

/// One scroll reading from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub offset: f32,
    pub document_height: f32,
    pub viewport_height: f32,
}

impl ScrollState {
    /// Fold a new sample in. Velocity is the offset delta since the previous
    /// sample, progress the clamped fraction of scrollable distance.
    pub fn sample(&mut self, s: ScrollSample) {
        self.velocity = s.offset - self.offset;
        self.offset = s.offset;
        self.progress = scroll_progress(s.offset, s.document_height, s.viewport_height);
    }
}

#[inline]
pub fn scroll_progress(offset: f32, document_height: f32, viewport_height: f32) -> f32 {
    let max_scroll = document_height - viewport_height;
    if max_scroll > 0.0 && offset.is_finite() {
        (offset / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Number of shapes a scroll of `velocity` px/sample brings in.
#[inline]
pub fn scroll_spawn_count(velocity: f32) -> usize {
    let speed = velocity.abs();
    if speed.is_nan() || speed <= SCROLL_SPAWN_THRESHOLD {
        return 0;
    }
    ((speed / SCROLL_SPAWN_DIVISOR).floor() as usize).min(SCROLL_SPAWN_MAX)
}

/// Direction the page content moved, which decides the entry edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// Work queued by event handlers and consumed at the start of the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnRequest {
    Trail { at: Vec2 },
    Burst { at: Vec2 },
    ScrollEntry { count: usize, speed: f32, direction: ScrollDirection },
}
