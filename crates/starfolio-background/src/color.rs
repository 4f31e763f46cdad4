//! Color utility functions for background animations.

use ratatui::style::Color;

/// Backdrop colour at the centre of the radial gradient (`#1a1f35`).
pub const BACKDROP_CENTER: (u8, u8, u8) = (0x1a, 0x1f, 0x35);

/// Backdrop colour at the farthest corner (`#000000`).
pub const BACKDROP_EDGE: (u8, u8, u8) = (0x00, 0x00, 0x00);

/// Star colour at full opacity.
pub const STAR_WHITE: (u8, u8, u8) = (255, 255, 255);

/// Asteroid body colour (slate-600).
pub const ASTEROID_SLATE: (u8, u8, u8) = (0x47, 0x55, 0x69);

/// Orbit ring colours (indigo-500, purple-500).
pub const ORBIT_INDIGO: (u8, u8, u8) = (0x63, 0x66, 0xf1);
pub const ORBIT_PURPLE: (u8, u8, u8) = (0xa8, 0x55, 0xf7);

/// Linearly interpolate between two RGB colours, `t` in `[0, 1]`.
pub fn lerp_rgb(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Composite `fg` at `alpha` opacity over `bg`.
pub fn blend(fg: (u8, u8, u8), bg: (u8, u8, u8), alpha: f64) -> Color {
    let (r, g, b) = lerp_rgb(bg, fg, alpha);
    Color::Rgb(r, g, b)
}

/// Extract RGB components from a cell colour, treating anything else as black.
pub(crate) fn rgb_of(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => BACKDROP_EDGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(BACKDROP_CENTER, BACKDROP_EDGE, 0.0), BACKDROP_CENTER);
        assert_eq!(lerp_rgb(BACKDROP_CENTER, BACKDROP_EDGE, 1.0), BACKDROP_EDGE);
        assert_eq!(lerp_rgb((0, 0, 0), (200, 100, 50), 0.5), (100, 50, 25));
    }

    #[test]
    fn test_blend_alpha() {
        assert_eq!(blend(STAR_WHITE, (0, 0, 0), 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(blend(STAR_WHITE, (0, 0, 0), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(blend(STAR_WHITE, (0, 0, 0), 0.2), Color::Rgb(51, 51, 51));
    }

    #[test]
    fn test_rgb_of_non_rgb() {
        assert_eq!(rgb_of(Color::Reset), BACKDROP_EDGE);
        assert_eq!(rgb_of(Color::Rgb(1, 2, 3)), (1, 2, 3));
    }
}
