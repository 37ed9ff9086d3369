//! Platform-independent engine. Nothing in here touches the DOM, so the whole
//! module builds and is tested on the host.

pub mod config;
pub mod constants;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod palette;
pub mod physics;
pub mod pools;
pub mod render;
pub mod spawn;
pub mod theme;

pub use config::{check_mount, BackgroundConfig, SetupError};
pub use engine::BackgroundEngine;
pub use input::{PointerState, ScrollSample, ScrollState, SpawnRequest};
pub use lifecycle::{FrameLoop, Teardown};
pub use palette::{Pattern, Rgb, Rgba, Theme};
pub use pools::{EntityPools, GeometricShape, Lifetime, Ripple};
pub use render::Surface;
pub use theme::{SubscriptionId, ThemeSignal};
