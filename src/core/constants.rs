// Tuning constants for the background engine.
//
// Distances are CSS pixels, rates are per rendered frame.

// Mounting
pub const MIN_VIEWPORT_WIDTH: f32 = 768.0; // engine stays inert below this width

// Ambient population
pub const AMBIENT_AREA_PER_SHAPE: f32 = 80_000.0; // one ambient shape per this many px²
pub const AMBIENT_SIZE_MIN: f32 = 15.0;
pub const AMBIENT_SIZE_MAX: f32 = 40.0;
pub const AMBIENT_ROTATION_SPEED: f32 = 0.01; // half-width of the initial spin range
pub const AMBIENT_DRIFT_SPEED: f32 = 0.15; // half-width of the initial velocity range

// Pointer trail
pub const TRAIL_JITTER: f32 = 15.0;
pub const TRAIL_SIZE_MIN: f32 = 15.0;
pub const TRAIL_SIZE_MAX: f32 = 50.0;
pub const TRAIL_LIFETIME: (u32, u32) = (100, 160);
pub const TRAIL_SPEED: f32 = 1.0;
pub const TRAIL_ROTATION_SPEED: f32 = 0.02;

// Click burst
pub const BURST_COUNT: (usize, usize) = (8, 12);
pub const BURST_ANGLE_JITTER: f32 = 0.3;
pub const BURST_SPEED_MIN: f32 = 3.0;
pub const BURST_SPEED_MAX: f32 = 7.0;
pub const BURST_SIZE_MIN: f32 = 25.0;
pub const BURST_SIZE_MAX: f32 = 65.0;
pub const BURST_LIFETIME: (u32, u32) = (80, 120);
pub const BURST_ROTATION_SPEED: f32 = 0.04;

// Ripples
pub const RIPPLE_START_OPACITY: f32 = 0.6;
pub const RIPPLE_FADE_PER_FRAME: f32 = 0.015;
pub const RIPPLE_GROWTH_PER_FRAME: f32 = 8.0;
pub const RIPPLE_MAX_RADIUS_MIN: f32 = 200.0;
pub const RIPPLE_MAX_RADIUS_MAX: f32 = 300.0;
pub const RIPPLE_LINE_WIDTH: f32 = 3.0;

// Scroll spawn
pub const SCROLL_SPAWN_THRESHOLD: f32 = 15.0; // |velocity| must exceed this (px per sample)
pub const SCROLL_SPAWN_DIVISOR: f32 = 20.0;
pub const SCROLL_SPAWN_MAX: usize = 3;
pub const SCROLL_ENTRY_OFFSET: f32 = 20.0; // how far past the edge new shapes start
pub const SCROLL_SPEED_FACTOR: f32 = 0.1;
pub const SCROLL_SIZE_MIN: f32 = 20.0;
pub const SCROLL_SIZE_MAX: f32 = 50.0;
pub const SCROLL_LIFETIME: (u32, u32) = (120, 180);
pub const SCROLL_ROTATION_SPEED: f32 = 0.03;
pub const SCROLL_SIDEWAYS_SPEED: f32 = 1.0;

// Force field
pub const REPULSION_GAIN: f32 = 2.0;
pub const ATTRACTION_GAIN: f32 = 0.3;
pub const REPULSION_INFLATE: f32 = 0.5;
pub const ATTRACTION_INFLATE: f32 = 0.3;
pub const REPULSION_SPIN: f32 = 0.05;
pub const SIZE_RELAX_RATE: f32 = 0.05;

// Integration
pub const VELOCITY_DAMPING: f32 = 0.98;

// Ambient behavior
pub const PULSE_RATE_BASE: f32 = 0.02;
pub const PULSE_RATE_SCROLL: f32 = 0.03;
pub const PULSE_DEPTH_BASE: f32 = 0.1;
pub const PULSE_DEPTH_SCROLL: f32 = 0.15;
pub const SCROLL_NUDGE: f32 = 0.01;
pub const WRAP_MARGIN: f32 = 50.0;
pub const SPRING_CALM: f32 = 0.0003;
pub const SPRING_SCROLLING: f32 = 0.0001; // weaker spring while scrolling fast
pub const SPRING_FAST_SCROLL: f32 = 5.0;
pub const SPIN_RETENTION: f32 = 0.99;
pub const SPIN_BIAS: f32 = 0.01;

// Capacity
pub const CAPACITY_SLACK: usize = 20;

// Rendering
pub const AMBIENT_OPACITY: f32 = 0.4;
pub const TRANSIENT_OPACITY: f32 = 0.7;
pub const PROXIMITY_BOOST: f32 = 0.3;
pub const GLOW_RADIUS: f32 = 150.0;
pub const CONNECTION_DISTANCE_BASE: f32 = 120.0;
pub const CONNECTION_DISTANCE_SCROLL: f32 = 60.0;
pub const CONNECTION_ALPHA_BASE: f32 = 0.3;
pub const CONNECTION_ALPHA_SCROLL: f32 = 0.2;
pub const ZELLIGE_LINE_WIDTH: f32 = 2.0;
