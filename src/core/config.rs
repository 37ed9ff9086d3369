use super::constants::MIN_VIEWPORT_WIDTH;
use thiserror::Error;

/// User-facing options for the background layer.
///
/// Every field is optional on the JS side; missing keys take the values from
/// [`BackgroundConfig::default`].
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub enabled: bool,
    /// Blend opacity of the whole canvas, 0..=1.
    pub opacity: f32,
    pub mouse_effects: bool,
    pub scroll_effects: bool,
    pub click_effects: bool,
    pub show_connections: bool,
    pub max_shapes: usize,
    pub attraction_radius: f32,
    pub repulsion_radius: f32,
    /// Probability of a trail shape per pointer-move event, 0..=1.
    pub trail_spawn_rate: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            opacity: 0.5,
            mouse_effects: true,
            scroll_effects: true,
            click_effects: true,
            show_connections: true,
            max_shapes: 60,
            attraction_radius: 200.0,
            repulsion_radius: 80.0,
            trail_spawn_rate: 0.25,
        }
    }
}

impl BackgroundConfig {
    /// Clamp values into the ranges the engine relies on.
    pub fn sanitized(mut self) -> Self {
        self.opacity = clamp_unit(self.opacity, 0.5);
        self.trail_spawn_rate = clamp_unit(self.trail_spawn_rate, 0.25);
        self.attraction_radius = non_negative(self.attraction_radius);
        self.repulsion_radius = non_negative(self.repulsion_radius).min(self.attraction_radius);
        self
    }

    /// Value for the canvas's inline CSS `opacity`. Out-of-range input is
    /// clamped the same way as [`sanitized`](Self::sanitized).
    pub fn css_opacity(&self) -> String {
        format!("{:.3}", clamp_unit(self.opacity, 0.5))
    }
}

#[inline]
fn clamp_unit(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Reasons the background declines to mount. None of these are surfaced to
/// the page; they only end up in the console log.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("background disabled by configuration")]
    Disabled,
    #[error("viewport {0}px is narrower than {}px", MIN_VIEWPORT_WIDTH)]
    ViewportTooNarrow(f32),
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing canvas #{0}")]
    MissingCanvas(String),
    #[error("2d context unavailable")]
    NoContext,
}

/// Decide whether setup should run at all for this viewport.
pub fn check_mount(config: &BackgroundConfig, viewport_width: f32) -> Result<(), SetupError> {
    if !config.enabled {
        return Err(SetupError::Disabled);
    }
    if viewport_width.is_nan() || viewport_width < MIN_VIEWPORT_WIDTH {
        return Err(SetupError::ViewportTooNarrow(viewport_width));
    }
    Ok(())
}
