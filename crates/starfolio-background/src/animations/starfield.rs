//! Starfield generation and pulsing.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use starfolio_core::{Easing, Repeat, STAR_COUNT, Star};

use crate::chars::STAR_CHARS;
use crate::color::{STAR_WHITE, blend, rgb_of};
use crate::motion::{Transition, Tween};

/// Seconds per pulse cycle.
const PULSE_PERIOD: f64 = 3.0;

/// Opacity keyframes of a pulse cycle.
const PULSE_KEYFRAMES: [f64; 3] = [0.2, 1.0, 0.2];

/// Generate a fresh starfield from `rng`.
///
/// Each star consumes four uniform draws in order: horizontal position,
/// vertical position, diameter, pulse delay.
pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| {
            let x = rng.random::<f64>() * 100.0;
            let y = rng.random::<f64>() * 100.0;
            let size = rng.random::<f64>() * 3.0 + 1.0;
            let delay = rng.random::<f64>() * 5.0;
            Star { x, y, size, delay }
        })
        .collect()
}

/// Opacity animation for a star, offset by its own delay.
pub fn pulse_tween(star: &Star) -> Tween {
    Tween::keyframes(
        PULSE_KEYFRAMES,
        Transition::new(PULSE_PERIOD)
            .repeat(Repeat::Infinite)
            .easing(Easing::EaseInOut)
            .delay(star.delay),
    )
}

/// Cell occupied by a star within `area`.
pub fn star_cell(star: &Star, area: Rect) -> (u16, u16) {
    let col = ((star.x / 100.0) * area.width as f64).floor() as u16;
    let row = ((star.y / 100.0) * area.height as f64).floor() as u16;
    (
        area.x + col.min(area.width.saturating_sub(1)),
        area.y + row.min(area.height.saturating_sub(1)),
    )
}

/// Glyph for a star of the given diameter.
pub fn star_glyph(size: f64) -> char {
    let idx = ((size - 1.0).max(0.0) as usize).min(STAR_CHARS.len() - 1);
    STAR_CHARS[idx]
}

/// Paint a star over whatever backdrop is already in `buf`.
pub fn render_star(buf: &mut Buffer, area: Rect, star: &Star, opacity: f64) {
    if area.is_empty() {
        return;
    }
    let (x, y) = star_cell(star, area);
    if let Some(cell) = buf.cell_mut((x, y)) {
        let backdrop = rgb_of(cell.bg);
        cell.set_char(star_glyph(star.size));
        cell.set_style(Style::new().fg(blend(STAR_WHITE, backdrop, opacity)));
    }
}
