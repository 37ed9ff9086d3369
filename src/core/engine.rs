use super::config::BackgroundConfig;
use super::constants::SCROLL_SPEED_FACTOR;
use super::input::{
    scroll_spawn_count, PointerState, ScrollDirection, ScrollSample, ScrollState, SpawnRequest,
};
use super::palette::{resolve_color, Theme};
use super::physics::{self, StepInputs};
use super::pools::EntityPools;
use super::render::{draw_frame, FrameView, Surface};
use super::spawn::{self, SpawnContext};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The whole animated background: configuration, input trackers, entity
/// pools and the RNG that feeds them. Event handlers and the frame callback
/// both go through `&mut self`, so there is exactly one owner of the state.
pub struct BackgroundEngine {
    config: BackgroundConfig,
    pools: EntityPools,
    pointer: PointerState,
    scroll: ScrollState,
    theme: Theme,
    surface: Vec2,
    pending: Vec<SpawnRequest>,
    rng: StdRng,
}

impl BackgroundEngine {
    pub fn new(config: BackgroundConfig, surface: Vec2, theme: Theme, seed: u64) -> Self {
        Self::with_rng(config, surface, theme, StdRng::seed_from_u64(seed))
    }

    /// Seeded from OS / browser entropy.
    pub fn from_entropy(config: BackgroundConfig, surface: Vec2, theme: Theme) -> Self {
        Self::with_rng(config, surface, theme, StdRng::from_entropy())
    }

    fn with_rng(config: BackgroundConfig, surface: Vec2, theme: Theme, rng: StdRng) -> Self {
        let mut engine = Self {
            config: config.sanitized(),
            pools: EntityPools::new(),
            pointer: PointerState::default(),
            scroll: ScrollState::default(),
            theme,
            surface: Vec2::ZERO,
            pending: Vec::new(),
            rng,
        };
        engine.resize(surface);
        engine
    }

    // ---------------- accessors ----------------

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn pools(&self) -> &EntityPools {
        &self.pools
    }

    pub fn pools_mut(&mut self) -> &mut EntityPools {
        &mut self.pools
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn pending_spawns(&self) -> &[SpawnRequest] {
        &self.pending
    }

    fn spawn_context(&self) -> SpawnContext {
        SpawnContext {
            theme: self.theme,
            progress: self.scroll.progress,
            surface: self.surface,
        }
    }

    // ---------------- host events ----------------

    /// New surface size: regenerate the ambient population for it.
    pub fn resize(&mut self, surface: Vec2) {
        self.surface = surface.max(Vec2::ZERO);
        let ctx = self.spawn_context();
        let ambient = spawn::ambient_shapes(&mut self.rng, &ctx);
        log::debug!(
            "[engine] resize {}x{} -> {} ambient shapes",
            self.surface.x,
            self.surface.y,
            ambient.len()
        );
        self.pools.replace_ambient(ambient);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        if !self.config.mouse_effects || !pos.is_finite() {
            return;
        }
        self.pointer.moved(pos);
        if self.rng.gen::<f32>() < self.config.trail_spawn_rate {
            self.pending.push(SpawnRequest::Trail { at: pos });
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.left();
    }

    pub fn click(&mut self, pos: Vec2) {
        if !self.config.click_effects || !pos.is_finite() {
            return;
        }
        self.pending.push(SpawnRequest::Burst { at: pos });
    }

    pub fn scroll_to(&mut self, sample: ScrollSample) {
        if !self.config.scroll_effects || !sample.offset.is_finite() {
            return;
        }
        self.scroll.sample(sample);
        let velocity = self.scroll.velocity;
        let count = scroll_spawn_count(velocity);
        if count > 0 {
            let direction = if velocity > 0.0 {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
            self.pending.push(SpawnRequest::ScrollEntry {
                count,
                speed: velocity.abs() * SCROLL_SPEED_FACTOR,
                direction,
            });
        }
    }

    /// Theme flipped: ambient shapes pick new colors from the new palette.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        let progress = self.scroll.progress;
        let rng = &mut self.rng;
        self.pools
            .recolor_ambient(|| resolve_color(&mut *rng, theme, progress));
        log::debug!("[engine] theme -> {:?}", theme);
    }

    // ---------------- frame ----------------

    /// Materialise everything the handlers queued since the last frame.
    pub fn flush_spawns(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let ctx = self.spawn_context();
        for req in std::mem::take(&mut self.pending) {
            match req {
                SpawnRequest::Trail { at } => {
                    let shape = spawn::trail_shape(&mut self.rng, &ctx, at);
                    self.pools.push_transient(shape);
                }
                SpawnRequest::Burst { at } => {
                    let (ripple, shapes) = spawn::click_burst(&mut self.rng, &ctx, at);
                    log::debug!("[engine] burst of {} at ({:.0},{:.0})", shapes.len(), at.x, at.y);
                    self.pools.push_ripple(ripple);
                    for s in shapes {
                        self.pools.push_transient(s);
                    }
                }
                SpawnRequest::ScrollEntry {
                    count,
                    speed,
                    direction,
                } => {
                    for s in spawn::scroll_entries(&mut self.rng, &ctx, count, speed, direction) {
                        self.pools.push_transient(s);
                    }
                }
            }
        }
    }

    /// Spawns, then ripples, then shapes, then capacity.
    pub fn update(&mut self) {
        self.flush_spawns();
        let inputs = StepInputs {
            config: &self.config,
            pointer: self.pointer,
            scroll: self.scroll,
            surface: self.surface,
        };
        physics::step(&mut self.pools, &mut self.rng, &inputs);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw_frame(
            surface,
            &FrameView {
                config: &self.config,
                pools: &self.pools,
                pointer: self.pointer,
                scroll: self.scroll,
                theme: self.theme,
                surface: self.surface,
            },
        );
    }

    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.update();
        self.render(surface);
    }
}
