//! Core types for the starfolio portfolio.
//!
//! Shared by the background renderer, the configuration loader and the
//! application binary.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Number of stars in a generated starfield.
pub const STAR_COUNT: usize = 50;

/// A single randomly placed pulsing point of light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position as a percentage of the viewport width, `[0, 100)`.
    pub x: f64,
    /// Vertical position as a percentage of the viewport height, `[0, 100)`.
    pub y: f64,
    /// Diameter in pixels, `[1, 4)`.
    pub size: f64,
    /// Seconds before the pulse starts, `[0, 5)`.
    pub delay: f64,
}

/// A fixed decorative drifting-and-rotating glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidDescriptor {
    /// Glyph size in pixels.
    pub size: u32,
    /// Starting horizontal offset in pixels.
    pub start_x: i32,
    /// Starting vertical offset in pixels.
    pub start_y: i32,
    /// Seconds per drift cycle.
    pub duration: f64,
    /// Seconds before the drift starts.
    pub delay: f64,
}

/// Easing curve applied between two keyframes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate.
    #[default]
    Linear,
    /// Smooth acceleration and deceleration, `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto eased progress in `[0, 1]`.
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, p),
        }
    }
}

/// Solve a CSS-style cubic Bézier timing function for `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve_x = |t: f64| ((ax * t + bx) * t + cx) * t;
    let curve_y = |t: f64| ((ay * t + by) * t + cy) * t;
    let slope_x = |t: f64| (3.0 * ax * t + 2.0 * bx) * t + cx;

    // Newton-Raphson first, bisection when the slope flattens out
    let mut t = x;
    for _ in 0..8 {
        let err = curve_x(t) - x;
        if err.abs() < 1e-7 {
            return curve_y(t);
        }
        let d = slope_x(t);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    while hi - lo > 1e-7 {
        if curve_x(t) < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    curve_y(t)
}

/// How many times an animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Play once, then repeat this many extra times and hold the final value.
    Count(u32),
    /// Loop forever.
    Infinite,
}

/// Global animation speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to the animation clock.
    pub fn time_scale(self) -> f64 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Short label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Accent colour theme for foreground text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Indigo,
    Purple,
    Cyan,
    Pink,
    White,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Indigo => ColorTheme::Purple,
            ColorTheme::Purple => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Pink,
            ColorTheme::Pink => ColorTheme::White,
            ColorTheme::White => ColorTheme::Indigo,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Indigo => Color::Rgb(165, 180, 252),
            ColorTheme::Purple => Color::Rgb(216, 180, 254),
            ColorTheme::Cyan => Color::Rgb(103, 232, 249),
            ColorTheme::Pink => Color::Rgb(249, 168, 212),
            ColorTheme::White => Color::Rgb(241, 245, 249),
        }
    }
}
