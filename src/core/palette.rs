//! Color and pattern resolution driven by theme and scroll progress.
//!
//! Everything here is a pure function of `(theme, progress)` plus an RNG, so
//! the escalation thresholds can be checked directly from tests.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    #[inline]
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba { rgb: self, a }
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Color with its own alpha; the renderer never relies on ambient global alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub fn fade(self, factor: f32) -> Rgba {
        Rgba {
            rgb: self.rgb,
            a: self.a * factor,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.4})",
            self.rgb.r,
            self.rgb.g,
            self.rgb.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

// ---------------- Color families ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFamily {
    Blue,
    Teal,
    Green,
    Gold,
    Terracotta,
    Purple,
}

impl ColorFamily {
    pub const ALL: [ColorFamily; 6] = [
        ColorFamily::Blue,
        ColorFamily::Teal,
        ColorFamily::Green,
        ColorFamily::Gold,
        ColorFamily::Terracotta,
        ColorFamily::Purple,
    ];

    /// Scroll-linked family: blue → teal → green → gold → terracotta → purple.
    pub fn for_progress(progress: f32) -> Self {
        match progress {
            p if p < 0.17 => ColorFamily::Blue,
            p if p < 0.33 => ColorFamily::Teal,
            p if p < 0.5 => ColorFamily::Green,
            p if p < 0.67 => ColorFamily::Gold,
            p if p < 0.83 => ColorFamily::Terracotta,
            _ => ColorFamily::Purple,
        }
    }

    pub fn colors(self, theme: Theme) -> &'static [Rgb; 4] {
        let table = match theme {
            Theme::Dark => &DARK_FAMILIES,
            Theme::Light => &LIGHT_FAMILIES,
        };
        &table[self as usize]
    }
}

const DARK_FAMILIES: [[Rgb; 4]; 6] = [
    [Rgb::hex(0x2563EB), Rgb::hex(0x3B82F6), Rgb::hex(0x1D4ED8), Rgb::hex(0x60A5FA)],
    [Rgb::hex(0x0D9488), Rgb::hex(0x14B8A6), Rgb::hex(0x2DD4BF), Rgb::hex(0x0F766E)],
    [Rgb::hex(0x059669), Rgb::hex(0x10B981), Rgb::hex(0x34D399), Rgb::hex(0x047857)],
    [Rgb::hex(0xD97706), Rgb::hex(0xF59E0B), Rgb::hex(0xFBBF24), Rgb::hex(0xB45309)],
    [Rgb::hex(0xEA580C), Rgb::hex(0xF97316), Rgb::hex(0xC2410C), Rgb::hex(0xDC2626)],
    [Rgb::hex(0x7C3AED), Rgb::hex(0x8B5CF6), Rgb::hex(0xA78BFA), Rgb::hex(0x6D28D9)],
];

const LIGHT_FAMILIES: [[Rgb; 4]; 6] = [
    [Rgb::hex(0x2563EB), Rgb::hex(0x3B82F6), Rgb::hex(0x60A5FA), Rgb::hex(0x1D4ED8)],
    [Rgb::hex(0x0D9488), Rgb::hex(0x14B8A6), Rgb::hex(0x0F766E), Rgb::hex(0x115E59)],
    [Rgb::hex(0x059669), Rgb::hex(0x10B981), Rgb::hex(0x34D399), Rgb::hex(0x047857)],
    [Rgb::hex(0xD97706), Rgb::hex(0xF59E0B), Rgb::hex(0xB45309), Rgb::hex(0xFBBF24)],
    [Rgb::hex(0xEA580C), Rgb::hex(0xF97316), Rgb::hex(0xC2410C), Rgb::hex(0xDC2626)],
    [Rgb::hex(0x7C3AED), Rgb::hex(0x8B5CF6), Rgb::hex(0x6D28D9), Rgb::hex(0x5B21B6)],
];

/// Pick a color from the family linked to the current scroll depth.
pub fn scroll_color<R: Rng + ?Sized>(rng: &mut R, theme: Theme, progress: f32) -> Rgb {
    let colors = ColorFamily::for_progress(progress).colors(theme);
    colors[rng.gen_range(0..colors.len())]
}

/// Half the time the scroll-linked family, otherwise anything in the palette.
pub fn resolve_color<R: Rng + ?Sized>(rng: &mut R, theme: Theme, progress: f32) -> Rgb {
    if rng.gen_bool(0.5) {
        return scroll_color(rng, theme, progress);
    }
    let family = ColorFamily::ALL[rng.gen_range(0..ColorFamily::ALL.len())];
    let colors = family.colors(theme);
    colors[rng.gen_range(0..colors.len())]
}

/// True when `color` belongs to any family of `theme`.
pub fn in_palette(theme: Theme, color: Rgb) -> bool {
    ColorFamily::ALL
        .iter()
        .any(|f| f.colors(theme).contains(&color))
}

// ---------------- Patterns ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Star,
    Hexagon,
    Diamond,
    Zellige,
    Arabesque,
}

const PATTERNS_CALM: &[Pattern] = &[Pattern::Diamond, Pattern::Hexagon];
const PATTERNS_STARS: &[Pattern] = &[Pattern::Diamond, Pattern::Hexagon, Pattern::Star];
const PATTERNS_TILES: &[Pattern] = &[Pattern::Star, Pattern::Hexagon, Pattern::Zellige];
const PATTERNS_ALL: &[Pattern] = &[
    Pattern::Star,
    Pattern::Hexagon,
    Pattern::Diamond,
    Pattern::Zellige,
    Pattern::Arabesque,
];

/// Pattern vocabulary grows with scroll depth.
pub fn pattern_set(progress: f32) -> &'static [Pattern] {
    match progress {
        p if p < 0.25 => PATTERNS_CALM,
        p if p < 0.5 => PATTERNS_STARS,
        p if p < 0.75 => PATTERNS_TILES,
        _ => PATTERNS_ALL,
    }
}

pub fn resolve_pattern<R: Rng + ?Sized>(rng: &mut R, progress: f32) -> Pattern {
    *pattern_set(progress)
        .choose(rng)
        .unwrap_or(&Pattern::Diamond)
}

// ---------------- Presentation colors ----------------

/// Three-way progress split shared by the background and connection lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Early,
    Middle,
    Late,
}

impl Band {
    pub fn for_progress(progress: f32) -> Self {
        match progress {
            p if p < 0.33 => Band::Early,
            p if p < 0.66 => Band::Middle,
            _ => Band::Late,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

const DARK_BACKGROUND: [[Rgb; 3]; 3] = [
    [Rgb::hex(0x0F172A), Rgb::hex(0x172033), Rgb::hex(0x1E293B)],
    [Rgb::hex(0x0F172A), Rgb::hex(0x134E4A), Rgb::hex(0x1E293B)],
    [Rgb::hex(0x1E293B), Rgb::hex(0x451A03), Rgb::hex(0x0F172A)],
];

const LIGHT_BACKGROUND: [[Rgb; 3]; 3] = [
    [Rgb::hex(0xF8FAFC), Rgb::hex(0xEDF1F6), Rgb::hex(0xE2E8F0)],
    [Rgb::hex(0xF0FDF4), Rgb::hex(0xECFDF5), Rgb::hex(0xF8FAFC)],
    [Rgb::hex(0xFFFBEB), Rgb::hex(0xFEF3C7), Rgb::hex(0xF8FAFC)],
];

// Progress at which each band's colors apply unblended.
const BAND_CENTERS: [f32; 3] = [0.165, 0.495, 0.83];

/// Gradient stops for the full-surface background. Colors blend between
/// neighbouring bands so the shift is continuous while scrolling.
pub fn background_stops(theme: Theme, progress: f32) -> [GradientStop; 3] {
    let table = match theme {
        Theme::Dark => &DARK_BACKGROUND,
        Theme::Light => &LIGHT_BACKGROUND,
    };
    let p = progress.clamp(0.0, 1.0);
    let (lo, hi, t) = if p <= BAND_CENTERS[0] {
        (0, 0, 0.0)
    } else if p <= BAND_CENTERS[1] {
        (0, 1, (p - BAND_CENTERS[0]) / (BAND_CENTERS[1] - BAND_CENTERS[0]))
    } else if p <= BAND_CENTERS[2] {
        (1, 2, (p - BAND_CENTERS[1]) / (BAND_CENTERS[2] - BAND_CENTERS[1]))
    } else {
        (2, 2, 0.0)
    };
    let stop = |i: usize, offset: f32| GradientStop {
        offset,
        color: table[lo][i].lerp(table[hi][i], t).with_alpha(1.0),
    };
    [stop(0, 0.0), stop(1, 0.5), stop(2, 1.0)]
}

pub fn connection_color(theme: Theme, progress: f32) -> Rgba {
    match (theme, Band::for_progress(progress)) {
        (Theme::Dark, Band::Early) => Rgb::hex(0x3B82F6).with_alpha(0.12),
        (Theme::Dark, Band::Middle) => Rgb::hex(0x10B981).with_alpha(0.12),
        (Theme::Dark, Band::Late) => Rgb::hex(0xFBBF24).with_alpha(0.12),
        (Theme::Light, Band::Early) => Rgb::hex(0x1E3A8A).with_alpha(0.08),
        (Theme::Light, Band::Middle) => Rgb::hex(0x047857).with_alpha(0.08),
        (Theme::Light, Band::Late) => Rgb::hex(0xD97706).with_alpha(0.08),
    }
}

/// Cursor halo: amber on dark pages, blue on light ones.
pub fn glow_stops(theme: Theme) -> [GradientStop; 3] {
    let base = match theme {
        Theme::Dark => Rgb::hex(0xFBBF24),
        Theme::Light => Rgb::hex(0x3B82F6),
    };
    [
        GradientStop {
            offset: 0.0,
            color: base.with_alpha(0.15),
        },
        GradientStop {
            offset: 0.5,
            color: base.with_alpha(0.05),
        },
        GradientStop {
            offset: 1.0,
            color: base.with_alpha(0.0),
        },
    ]
}
